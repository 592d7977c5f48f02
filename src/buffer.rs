use crate::hex;
use num_bigint::{BigInt, BigUint, Sign};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{borrow::Cow, error, fmt, str::FromStr};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    SizeExceeded { length: usize, size: usize },
    NegativeValue,
    InvalidEncoding(hex::Error),
    InvalidInteger,
    RangeError { index: usize, size: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::SizeExceeded { length, size } => write!(f, "Byte string of length {} exceeds maximum size {}", length, size),
            Error::NegativeValue => write!(f, "Negative integers not supported"),
            Error::InvalidEncoding(error) => write!(f, "Invalid hex string: {}", error),
            Error::InvalidInteger => write!(f, "Invalid decimal integer"),
            Error::RangeError { index, size } => write!(f, "Index {} exceeds buffer length {}", index, size),
        }
    }
}

impl From<hex::Error> for Error {
    fn from(error: hex::Error) -> Self {
        Error::InvalidEncoding(error)
    }
}

#[derive(Clone, Debug, Default)]
pub struct ByteBuffer {
    bytes: Vec<u8>,
    size: Option<usize>,
}

impl ByteBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_raw(bytes: impl Into<Vec<u8>>, size: Option<usize>) -> Result<Self, Error> {
        let bytes = bytes.into();
        if let Some(size) = size {
            if bytes.len() > size {
                return Err(Error::SizeExceeded { length: bytes.len(), size });
            }
        }
        Ok(Self { bytes, size })
    }

    pub fn from_hex(hex: impl AsRef<[u8]>, size: Option<usize>) -> Result<Self, Error> {
        Self::from_raw(hex::decode(hex)?, size)
    }

    pub fn from_unsigned(value: &BigUint, size: Option<usize>) -> Result<Self, Error> {
        Self::from_raw(value.to_bytes_be(), size)
    }

    pub fn from_integer(value: &BigInt, size: Option<usize>) -> Result<Self, Error> {
        if value.sign() == Sign::Minus {
            return Err(Error::NegativeValue);
        }
        Self::from_unsigned(value.magnitude(), size)
    }

    pub fn from_decimal(text: &str, size: Option<usize>) -> Result<Self, Error> {
        let value: BigInt = text.parse().map_err(|_| Error::InvalidInteger)?;
        Self::from_integer(&value, size)
    }

    pub fn size(&self) -> usize {
        self.size.unwrap_or(self.bytes.len())
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    pub fn internal_length(&self) -> usize {
        self.bytes.len()
    }

    /// Stored content left-padded with zero bytes up to the declared size, or cut down to it.
    pub fn raw_bytes(&self) -> Cow<'_, [u8]> {
        match self.size {
            Some(size) if size > self.bytes.len() => {
                let mut bytes = vec![0u8; size - self.bytes.len()];
                bytes.extend_from_slice(&self.bytes);
                Cow::Owned(bytes)
            }
            Some(size) => Cow::Borrowed(&self.bytes[..size]),
            None => Cow::Borrowed(&self.bytes),
        }
    }

    pub fn to_unsigned(&self) -> BigUint {
        BigUint::from_bytes_be(&self.raw_bytes())
    }

    pub fn to_decimal(&self) -> String {
        self.to_unsigned().to_str_radix(10)
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.raw_bytes())
    }

    pub fn to_decimal_array(&self) -> Vec<u8> {
        self.raw_bytes().into_owned()
    }

    pub fn slice(&self, start: usize, end: Option<usize>) -> Result<Self, Error> {
        let size = self.size();
        if start > size {
            return Err(Error::RangeError { index: start, size });
        }
        let end = end.unwrap_or(size);
        if end > size {
            return Err(Error::RangeError { index: end, size });
        }
        if start > end {
            return Err(Error::RangeError { index: start, size: end });
        }
        let bytes = self.raw_bytes()[start..end].to_vec();
        Ok(Self {
            size: Some(bytes.len()),
            bytes,
        })
    }

    pub fn equals(&self, other: &ByteBuffer) -> bool {
        self.size() == other.size() && self.raw_bytes() == other.raw_bytes()
    }

    pub fn prepend(&mut self, hex: impl AsRef<[u8]>) -> Result<(), Error> {
        self.prepend_bytes(&hex::decode(hex)?);
        Ok(())
    }

    pub fn append(&mut self, hex: impl AsRef<[u8]>) -> Result<(), Error> {
        self.append_bytes(&hex::decode(hex)?);
        Ok(())
    }

    pub fn prepend_bytes(&mut self, data: &[u8]) {
        self.bytes.splice(..0, data.iter().copied());
        self.reset_size();
    }

    pub fn append_bytes(&mut self, data: &[u8]) {
        self.bytes.extend_from_slice(data);
        self.reset_size();
    }

    // Joins onto the stored content, so earlier padding is dropped along with the fixed width.
    fn reset_size(&mut self) {
        self.size = Some(self.bytes.len());
    }
}

impl PartialEq for ByteBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for ByteBuffer {}

impl From<Vec<u8>> for ByteBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self { bytes, size: None }
    }
}

impl FromStr for ByteBuffer {
    type Err = Error;

    fn from_str(hex: &str) -> Result<Self, Self::Err> {
        Self::from_hex(hex, None)
    }
}

impl fmt::Display for ByteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for ByteBuffer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for ByteBuffer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex, None).map_err(de::Error::custom)
    }
}
