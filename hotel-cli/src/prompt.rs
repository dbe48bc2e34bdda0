use hotel_core::encode::MAX_EXPONENT;
use hotel_core::{EncodeError, ParseError};
use std::io::{self, BufRead, Write};

/// Counts above this would only flood the terminal.
pub const MAX_COUNT: u32 = 10_000;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Invalid choice '{0}'. Please try again.")]
    InvalidMenuSelection(String),
    #[error("'{input}' is not a non-negative whole number")]
    InvalidNumber { input: String },
    #[error("{value} is out of range (at most {max})")]
    OutOfRange { value: u32, max: u32 },
    #[error("the answer is not valid UTF-8 text")]
    NotText,
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error("standard input was closed")]
    EndOfInput,
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

impl InputError {
    /// Whether the menu can report this and carry on.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, InputError::EndOfInput | InputError::Io(_))
    }
}

/// Line-oriented question/answer over any reader and writer.
pub struct Prompter<'a> {
    input: &'a mut dyn BufRead,
    pub out: &'a mut dyn Write,
}

impl<'a> Prompter<'a> {
    pub fn new(input: &'a mut dyn BufRead, out: &'a mut dyn Write) -> Self {
        Self { input, out }
    }

    /// Next line as raw bytes, terminator included; `None` once input is
    /// exhausted.
    fn read_raw(&mut self) -> io::Result<Option<Vec<u8>>> {
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Next line, trimmed. The whole line is consumed even when it is not
    /// UTF-8, so the following question starts on a fresh line.
    pub fn read_line(&mut self) -> Result<Option<String>, InputError> {
        match self.read_raw()? {
            None => Ok(None),
            Some(bytes) => String::from_utf8(bytes)
                .map(|line| Some(line.trim().to_string()))
                .map_err(|_| InputError::NotText),
        }
    }

    fn show(&mut self, question: &str) -> io::Result<()> {
        write!(self.out, "{question}")?;
        self.out.flush()
    }

    pub fn ask(&mut self, question: &str) -> Result<String, InputError> {
        self.show(question)?;
        self.read_line()?.ok_or(InputError::EndOfInput)
    }

    pub fn ask_u32(&mut self, question: &str) -> Result<u32, InputError> {
        let answer = self.ask(question)?;
        answer
            .parse::<u32>()
            .map_err(|_| InputError::InvalidNumber { input: answer })
    }

    pub fn ask_count(&mut self, question: &str) -> Result<u32, InputError> {
        let value = self.ask_u32(question)?;
        if value > MAX_COUNT {
            return Err(InputError::OutOfRange {
                value,
                max: MAX_COUNT,
            });
        }
        Ok(value)
    }

    /// Seat, bus or ferry number that ends up as an exponent.
    pub fn ask_exponent(&mut self, question: &str) -> Result<u32, InputError> {
        let value = self.ask_u32(question)?;
        if value > MAX_EXPONENT {
            return Err(InputError::OutOfRange {
                value,
                max: MAX_EXPONENT,
            });
        }
        Ok(value)
    }

    /// Any line will do, whatever bytes it holds.
    pub fn wait_for_enter(&mut self) -> Result<(), InputError> {
        self.show("\nPress Enter to return to the main menu...")?;
        self.read_raw()?.map(|_| ()).ok_or(InputError::EndOfInput)
    }
}
