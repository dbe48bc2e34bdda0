use crate::error::ParseError;
use num_bigint::BigUint;

/// Separator between address components as typed by the user.
pub const DELIMITER: char = '-';

/// Largest address component; each one costs that many bits of room number.
pub const MAX_GROUP: u32 = 10_000;

/// Parses an address such as `2-5-4-3-1`.
pub fn parse_address(input: &str) -> Result<Vec<u32>, ParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseError::EmptyAddress);
    }
    input
        .split(DELIMITER)
        .enumerate()
        .map(|(i, token)| {
            let malformed = || ParseError::MalformedAddress {
                token: token.to_string(),
                position: i + 1,
            };
            let too_large = || ParseError::GroupTooLarge {
                token: token.to_string(),
                position: i + 1,
                max: MAX_GROUP,
            };
            if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
                return Err(malformed());
            }
            match token.parse::<u32>() {
                Ok(v) if v > MAX_GROUP => Err(too_large()),
                Ok(0) => Err(malformed()),
                Ok(v) => Ok(v),
                // all digits, so the only failure left is overflow
                Err(_) => Err(too_large()),
            }
        })
        .collect()
}

/// Binary digits for an address: each component `a` contributes `a - 1`
/// zeros, and components are separated by a single `1`.
pub fn binary_string(address: &[u32]) -> String {
    let mut bits = String::new();
    for (i, &a) in address.iter().enumerate() {
        for _ in 1..a {
            bits.push('0');
        }
        if i + 1 < address.len() {
            bits.push('1');
        }
    }
    bits
}

/// Room number of an address: [`binary_string`] read as a big-endian binary
/// number, 0 when the string is empty.
///
/// The zeros of the first group are leading zeros, so the value alone does not
/// tell `[1, 1]` from `[3, 1]`; the bit string does.
pub fn binary_encoding(address: &[u32]) -> BigUint {
    BigUint::parse_bytes(binary_string(address).as_bytes(), 2).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn worked_example() {
        let address = [2, 5, 4, 3, 1];
        assert_eq!(binary_string(&address), "01000010001001");
        assert_eq!(binary_encoding(&address), BigUint::from(4233u32));
    }

    #[test]
    fn single_component() {
        assert_eq!(binary_string(&[1]), "");
        assert_eq!(binary_encoding(&[1]), BigUint::from(0u32));
        assert_eq!(binary_string(&[4]), "000");
        assert_eq!(binary_encoding(&[]), BigUint::from(0u32));
    }

    #[test]
    fn leading_group_is_invisible_in_the_value() {
        assert_ne!(binary_string(&[1, 1]), binary_string(&[3, 1]));
        assert_eq!(binary_encoding(&[1, 1]), binary_encoding(&[3, 1]));
    }

    #[test]
    fn same_arity_addresses_have_distinct_bit_strings() {
        let mut strings = HashSet::new();
        let mut values = HashSet::new();
        for a in 1..7 {
            for b in 1..7 {
                for c in 1..7 {
                    assert!(strings.insert(binary_string(&[a, b, c])));
                    if a == 1 {
                        assert!(values.insert(binary_encoding(&[a, b, c])));
                    }
                }
            }
        }
    }

    #[test]
    fn parses_hyphenated_addresses() {
        assert_eq!(parse_address("2-5-4-3-1"), Ok(vec![2, 5, 4, 3, 1]));
        assert_eq!(parse_address(" 7 "), Ok(vec![7]));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert_eq!(parse_address(""), Err(ParseError::EmptyAddress));
        assert_eq!(
            parse_address("2--3"),
            Err(ParseError::MalformedAddress {
                token: String::new(),
                position: 2
            })
        );
        assert_eq!(
            parse_address("2-0-3"),
            Err(ParseError::MalformedAddress {
                token: "0".to_string(),
                position: 2
            })
        );
        assert_eq!(
            parse_address("1-x"),
            Err(ParseError::MalformedAddress {
                token: "x".to_string(),
                position: 2
            })
        );
        assert!(parse_address("+4").is_err());
        assert!(parse_address("3-").is_err());
    }

    #[test]
    fn rejects_oversized_groups() {
        assert_eq!(
            parse_address("1-4294967295"),
            Err(ParseError::GroupTooLarge {
                token: "4294967295".to_string(),
                position: 2,
                max: MAX_GROUP
            })
        );
        assert!(matches!(
            parse_address("99999999999"),
            Err(ParseError::GroupTooLarge { position: 1, .. })
        ));
        let edge = format!("2-{MAX_GROUP}");
        assert_eq!(parse_address(&edge), Ok(vec![2, MAX_GROUP]));
        assert!(parse_address(&format!("{}", MAX_GROUP + 1)).is_err());
    }
}
