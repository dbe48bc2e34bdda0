use num_bigint::BigUint;
use num_traits::Zero;

/// `T(n) = n(n+1)/2`.
pub fn triangular(n: u64) -> BigUint {
    let n = BigUint::from(n);
    (&n * (&n + 1u32)) / 2u32
}

/// Seat `s` on bus `b` gets room `T(b+s-1) + s`.
///
/// Walks the (bus, seat) grid along its anti-diagonals. With both inputs zero
/// the formula gives room 0.
pub fn passenger_triangular_room(bus: u32, seat: u32) -> BigUint {
    let diagonal = u64::from(bus) + u64::from(seat);
    let base = if diagonal == 0 {
        BigUint::zero()
    } else {
        triangular(diagonal - 1)
    };
    base + seat
}
