use hotel_core::encode::{
    binary_string, factorization_room, higher_infinity_room, original_guest_room,
    passenger_room, passenger_triangular_room, triangular,
};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use std::collections::HashMap;

/// Exponent of `p` in `n`, with the cofactor left over.
fn strip(mut n: BigUint, p: u32) -> (u32, BigUint) {
    let p = BigUint::from(p);
    let mut k = 0;
    while !n.is_zero() && (&n % &p).is_zero() {
        n /= &p;
        k += 1;
    }
    (k, n)
}

#[test]
fn factorization_is_injective_on_a_grid() {
    let mut seen: HashMap<BigUint, (u32, u32)> = HashMap::new();
    for bus in 0..30 {
        for seat in 0..30 {
            let room = factorization_room(bus, seat);
            if let Some(prev) = seen.insert(room.clone(), (bus, seat)) {
                panic!("room {room} shared by {prev:?} and {:?}", (bus, seat));
            }
        }
    }
}

#[test]
fn factorization_exponents_recover_the_address() {
    for bus in 0..20 {
        for seat in 0..20 {
            let (twos, rest) = strip(factorization_room(bus, seat), 2);
            let (threes, rest) = strip(rest, 3);
            assert_eq!((threes, twos), (bus, seat));
            assert!(rest.is_one());
        }
    }
}

#[test]
fn higher_infinity_exponents_recover_the_address() {
    for ferry in 0..8 {
        for bus in 0..8 {
            for seat in 0..8 {
                let room = higher_infinity_room(ferry, bus, seat);
                let (s, rest) = strip(room, 2);
                let (b, rest) = strip(rest, 3);
                let (f, rest) = strip(rest, 5);
                assert_eq!((f, b, s), (ferry, bus, seat));
                assert!(rest.is_one());
            }
        }
    }
}

#[test]
fn prime_power_passengers_never_land_on_guest_rooms() {
    // Every passenger room is odd, every reassigned guest room is even.
    for bus in 1..=7 {
        for seat in 0..12 {
            let room = passenger_room(bus, seat).expect("bus in range");
            assert!(!(&room % 2u32).is_zero());
        }
    }
    for i in 1..64 {
        assert!((original_guest_room(i) % 2u32).is_zero());
    }
}

#[test]
fn triangular_passengers_fill_the_gaps_between_guests() {
    let mut rooms: Vec<BigUint> = (1..=11u64).map(triangular).collect();
    for diagonal in 2..12u32 {
        for seat in 1..diagonal {
            rooms.push(passenger_triangular_room(diagonal - seat, seat));
        }
    }
    rooms.sort();
    let expected: Vec<BigUint> = (1..=66u32).map(BigUint::from).collect();
    assert_eq!(rooms, expected);
}

#[test]
fn binary_bit_strings_are_prefix_distinct_by_arity() {
    let a = binary_string(&[2, 1]);
    let b = binary_string(&[2]);
    assert_ne!(a, b);
    assert_eq!(a, "01");
    assert_eq!(b, "0");
}
