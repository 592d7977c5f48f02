use super::{carry, BaseCodec, Error};
use crate::buffer::ByteBuffer;

impl BaseCodec {
    /// Decodes `source`, or returns `None` when it holds a character outside
    /// the alphabet or any space.
    pub fn decode_unsafe(&self, source: &str) -> Option<ByteBuffer> {
        match self.decode_digits(source.as_bytes()) {
            Ok(output) => output.map(ByteBuffer::from),
            Err(error) => panic!("{}", error),
        }
    }

    pub fn decode(&self, source: &str) -> Result<ByteBuffer, Error> {
        self.decode_unsafe(source)
            .ok_or(Error::InvalidCharacter { base: self.base() })
    }

    pub fn decode_bytes(&self, source: &str) -> Result<Vec<u8>, Error> {
        Ok(self.decode(source)?.to_decimal_array())
    }

    fn decode_digits(&self, source: &[u8]) -> Result<Option<Vec<u8>>, Error> {
        if source.is_empty() {
            return Ok(Some(Vec::new()));
        }
        if source[0] == b' ' {
            return Ok(None);
        }

        let leader = self.alphabet.leader();
        let zeroes = source.iter().take_while(|&&character| character == leader).count();
        let size = carry::capacity(source.len() - zeroes, self.bytes_per_digit);
        let mut bytes = vec![0u8; size];
        let mut length = 0;

        let mut index = zeroes;
        while index < source.len() && source[index] != b' ' {
            let value = match self.alphabet.decode(source[index]) {
                Some(value) => value,
                None => return Ok(None),
            };
            length = carry::propagate(&mut bytes, length, value as usize, self.base(), 256)?;
            index += 1;
        }
        if index < source.len() {
            return Ok(None);
        }

        let start = carry::first_significant(&bytes, length);
        let mut output = vec![0u8; zeroes];
        output.extend_from_slice(&bytes[start..]);
        Ok(Some(output))
    }
}
