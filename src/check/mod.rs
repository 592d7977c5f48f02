mod checksum;

use crate::{
    buffer::ByteBuffer,
    codec::{self, BaseCodec},
};
use checksum::compute_checksum;
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    Codec(codec::Error),
    InvalidChecksum {
        checksum: [u8; checksum::LEN],
        expected_checksum: [u8; checksum::LEN],
    },
    NoChecksum,
}

impl From<codec::Error> for Error {
    fn from(error: codec::Error) -> Self {
        Error::Codec(error)
    }
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Codec(error) => write!(f, "{}", error),
            Error::InvalidChecksum {
                checksum,
                expected_checksum,
            } => write!(
                f,
                "Invalid checksum '{}' ({} expected)",
                crate::hex::encode(checksum),
                crate::hex::encode(expected_checksum)
            ),
            Error::NoChecksum => write!(f, "Missing checksum"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct CheckedCodec {
    codec: BaseCodec,
}

impl CheckedCodec {
    pub fn new(codec: BaseCodec) -> Self {
        Self { codec }
    }

    pub fn codec(&self) -> &BaseCodec {
        &self.codec
    }

    pub fn encode(&self, buffer: &ByteBuffer) -> String {
        let mut buffer = ByteBuffer::from(buffer.to_decimal_array());
        let checksum = compute_checksum(buffer.raw_bytes());
        buffer.append_bytes(&checksum);
        self.codec.encode(&buffer)
    }

    pub fn decode(&self, source: &str) -> Result<ByteBuffer, Error> {
        let buffer = self.codec.decode(source)?;
        let len = buffer.size().checked_sub(checksum::LEN).ok_or(Error::NoChecksum)?;
        let payload = buffer.slice(0, Some(len)).map_err(|_| Error::NoChecksum)?;
        let trailer = buffer.slice(len, None).map_err(|_| Error::NoChecksum)?;
        let expected_checksum = compute_checksum(payload.raw_bytes());
        if trailer.raw_bytes().as_ref() != &expected_checksum[..] {
            let mut checksum = [0u8; checksum::LEN];
            checksum.copy_from_slice(&trailer.raw_bytes());
            return Err(Error::InvalidChecksum {
                checksum,
                expected_checksum,
            });
        }
        Ok(payload)
    }
}
