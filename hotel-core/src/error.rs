/// Failure to read a number or an address supplied as text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("a number is required")]
    EmptyNumber,
    #[error("'{input}' is not made of decimal digits")]
    InvalidDigits { input: String },
    #[error("the address is empty")]
    EmptyAddress,
    #[error("address component #{position} '{token}' is not a positive integer")]
    MalformedAddress { token: String, position: usize },
    #[error("address component #{position} '{token}' is larger than {max}")]
    GroupTooLarge {
        token: String,
        position: usize,
        max: u32,
    },
}

/// Input that parses but has no room under the chosen scheme.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("bus numbers start at 1 (got {bus})")]
    BusOutOfRange { bus: u32 },
    #[error("{value} is too large to use as an exponent (at most {max})")]
    ExponentTooLarge { value: u32, max: u32 },
}
