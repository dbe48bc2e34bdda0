use crate::error::ParseError;

/// Digits are grouped in threes, so both numbers are padded to a multiple of 3.
const GROUP: usize = 3;

fn check_digits(input: &str) -> Result<(), ParseError> {
    if input.is_empty() {
        return Err(ParseError::EmptyNumber);
    }
    if !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidDigits {
            input: input.to_string(),
        });
    }
    Ok(())
}

/// Room number built from the digits of `bus` and `seat`.
///
/// Both are left-padded with zeros to the smallest multiple of three that
/// fits the longer one; position `i` of the result is taken from `bus` when
/// `i` is even and from `seat` when it is odd. The result stays a string since
/// it can be arbitrarily long.
pub fn interleave_digits(bus: &str, seat: &str) -> Result<String, ParseError> {
    check_digits(bus)?;
    check_digits(seat)?;

    let width = bus.len().max(seat.len()).div_ceil(GROUP) * GROUP;
    let bus = format!("{bus:0>width$}");
    let seat = format!("{seat:0>width$}");

    Ok(bus
        .bytes()
        .zip(seat.bytes())
        .enumerate()
        .map(|(i, (b, s))| if i % 2 == 0 { b as char } else { s as char })
        .collect())
}
