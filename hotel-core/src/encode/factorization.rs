use num_bigint::BigUint;

/// Seat `n` on bus `c` gets room `2^n * 3^c`.
pub fn factorization_room(bus: u32, seat: u32) -> BigUint {
    BigUint::from(2u32).pow(seat) * BigUint::from(3u32).pow(bus)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values() {
        assert_eq!(factorization_room(0, 0), BigUint::from(1u32));
        assert_eq!(factorization_room(1, 0), BigUint::from(3u32));
        assert_eq!(factorization_room(0, 1), BigUint::from(2u32));
        assert_eq!(factorization_room(2, 3), BigUint::from(72u32));
    }

    #[test]
    fn seat_past_sixty_three_keeps_growing() {
        let room = factorization_room(0, 64);
        assert_eq!(room, BigUint::from(u64::MAX) + 1u32);
    }
}
