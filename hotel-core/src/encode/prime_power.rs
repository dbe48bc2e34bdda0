use super::check_exponent;
use crate::error::EncodeError;
use num_bigint::BigUint;
use tracing::warn;

/// Bases handed out to buses, bus 1 first. Buses past the end share the last
/// entry, so passengers of bus 7 and bus 8 with the same seat collide.
pub const PRIMES: [u32; 7] = [3, 5, 7, 11, 13, 17, 19];

/// Original guest `i` moves to room `2^i`.
pub fn original_guest_room(i: u32) -> BigUint {
    BigUint::from(2u32).pow(i)
}

/// Prime assigned to a 1-based bus number, clamped to the last table entry.
pub fn bus_prime(bus: u32) -> Result<u32, EncodeError> {
    if bus == 0 {
        return Err(EncodeError::BusOutOfRange { bus });
    }
    let idx = bus as usize - 1;
    if idx >= PRIMES.len() {
        warn!(bus, "bus number past the prime table, reusing the last prime");
        return Ok(PRIMES[PRIMES.len() - 1]);
    }
    Ok(PRIMES[idx])
}

/// Seat `seat` on bus `bus` gets room `prime(bus)^seat`.
pub fn passenger_room(bus: u32, seat: u32) -> Result<BigUint, EncodeError> {
    let prime = bus_prime(bus)?;
    let seat = check_exponent(seat)?;
    Ok(BigUint::from(prime).pow(seat))
}
