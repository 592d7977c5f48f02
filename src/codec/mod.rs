mod carry;
pub mod decode;
pub mod encode;

use crate::alphabet::{self, Alphabet};
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    Alphabet(alphabet::Error),
    InvalidCharacter { base: usize },
    NonZeroCarry,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Alphabet(error) => write!(f, "{}", error),
            Error::InvalidCharacter { base } => write!(f, "Non-base{} character", base),
            Error::NonZeroCarry => write!(f, "Non-zero carry"),
        }
    }
}

impl From<alphabet::Error> for Error {
    fn from(error: alphabet::Error) -> Self {
        Error::Alphabet(error)
    }
}

#[derive(Clone, Debug)]
pub struct BaseCodec {
    alphabet: Alphabet,
    digits_per_byte: f64,
    bytes_per_digit: f64,
}

impl BaseCodec {
    pub fn new(alphabet: &str) -> Result<Self, Error> {
        Ok(Self::from_alphabet(Alphabet::new(alphabet.as_bytes())?))
    }

    pub fn from_alphabet(alphabet: Alphabet) -> Self {
        let base = alphabet.len() as f64;
        Self {
            digits_per_byte: 256f64.ln() / base.ln(),
            bytes_per_digit: base.ln() / 256f64.ln(),
            alphabet,
        }
    }

    pub fn base(&self) -> usize {
        self.alphabet.len()
    }

    pub fn leader(&self) -> char {
        self.alphabet.leader() as char
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }
}

#[cfg(test)]
mod tests {
    use super::{BaseCodec, Error};
    use crate::alphabet;

    #[test]
    fn new() {
        let codec = BaseCodec::new("0123456789").unwrap();
        assert_eq!(codec.base(), 10);
        assert_eq!(codec.leader(), '0');
        assert_eq!(codec.alphabet().as_str(), "0123456789");
    }

    #[test]
    fn ambiguous_alphabet() {
        assert_eq!(
            BaseCodec::new("0120").unwrap_err(),
            Error::Alphabet(alphabet::Error::DuplicateCharacter {
                character: '0',
                first: 0,
                second: 3
            })
        );
    }

    #[test]
    fn alphabet_too_long() {
        let characters: String = (0..255).map(|_| 'x').collect();
        assert_eq!(
            BaseCodec::new(&characters).unwrap_err(),
            Error::Alphabet(alphabet::Error::TooLong { length: 255 })
        );
    }

    #[test]
    fn invalid_character_message() {
        assert_eq!(Error::InvalidCharacter { base: 58 }.to_string(), "Non-base58 character");
    }
}
