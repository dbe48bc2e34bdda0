use num_bigint::BigUint;

/// Seat `s` on bus `b` of ferry `f` gets room `2^s * 3^b * 5^f`.
pub fn higher_infinity_room(ferry: u32, bus: u32, seat: u32) -> BigUint {
    BigUint::from(2u32).pow(seat)
        * BigUint::from(3u32).pow(bus)
        * BigUint::from(5u32).pow(ferry)
}
