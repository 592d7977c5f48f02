use std::{error, fmt};

pub const MAX_LEN: usize = 254;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    TooLong { length: usize },
    TooShort { length: usize },
    DuplicateCharacter { character: char, first: usize, second: usize },
    NonAsciiCharacter { character: u8, index: usize },
    InvalidCharacter { character: char, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLong { length } => write!(f, "Alphabet too long ({} characters, at most {} allowed)", length, MAX_LEN),
            Self::TooShort { length } => write!(f, "Alphabet too short ({} characters, at least 2 required)", length),
            Self::DuplicateCharacter { character, first, second } => {
                write!(f, "Ambiguous character '{}' at indexes {} and {}", character, first, second)
            }
            Self::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#04x} at index {}", character, index),
            Self::InvalidCharacter { character, index } => write!(f, "Invalid character {:?} at index {}", character, index),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Alphabet {
    encode: [u8; MAX_LEN],
    decode: [Option<u8>; 256],
    len: usize,
}

impl Alphabet {
    pub const fn new(characters: &[u8]) -> Result<Self, Error> {
        let len = characters.len();
        if len > MAX_LEN {
            return Err(Error::TooLong { length: len });
        }
        if len < 2 {
            return Err(Error::TooShort { length: len });
        }

        let mut encode = [0u8; MAX_LEN];
        let mut decode: [Option<u8>; 256] = [None; 256];

        let mut index = 0;
        while index < len {
            let character = characters[index];
            if character >= 128 {
                return Err(Error::NonAsciiCharacter { character, index });
            }
            if character == b' ' {
                return Err(Error::InvalidCharacter {
                    character: ' ',
                    index,
                });
            }
            if let Some(first) = decode[character as usize] {
                return Err(Error::DuplicateCharacter {
                    character: character as char,
                    first: first as usize,
                    second: index,
                });
            }
            encode[index] = character;
            decode[character as usize] = Some(index as u8);
            index += 1;
        }

        Ok(Self { encode, decode, len })
    }

    pub fn encode(&self, value: u8) -> u8 {
        self.encode[value as usize]
    }

    pub fn decode(&self, character: u8) -> Option<u8> {
        self.decode[character as usize]
    }

    pub const fn leader(&self) -> u8 {
        self.encode[0]
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.encode[..self.len]
    }

    pub fn as_str(&self) -> &str {
        // Every symbol was checked to be ascii on construction.
        std::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }
}
