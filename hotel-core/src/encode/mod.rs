//! Injective numbering schemes from guest addresses to room numbers.
//!
//! Every scheme returns a [`BigUint`](num_bigint::BigUint) except interleaving,
//! whose result is a digit string.

use crate::error::EncodeError;

pub mod binary_group;
pub mod factorization;
pub mod higher_infinity;
pub mod interleave;
pub mod prime_power;
pub mod triangular;

pub use binary_group::{MAX_GROUP, binary_encoding, binary_string, parse_address};
pub use factorization::factorization_room;
pub use higher_infinity::higher_infinity_room;
pub use interleave::interleave_digits;
pub use prime_power::{bus_prime, original_guest_room, passenger_room, PRIMES};
pub use triangular::{passenger_triangular_room, triangular};

/// Largest seat, bus or ferry number accepted where it becomes an exponent.
/// `5^10000` already has about 7000 decimal digits.
pub const MAX_EXPONENT: u32 = 10_000;

/// Passes `value` through when it is small enough to raise a prime to.
pub fn check_exponent(value: u32) -> Result<u32, EncodeError> {
    if value > MAX_EXPONENT {
        return Err(EncodeError::ExponentTooLarge {
            value,
            max: MAX_EXPONENT,
        });
    }
    Ok(value)
}
