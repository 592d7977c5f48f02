use super::{carry, BaseCodec, Error};
use crate::buffer::ByteBuffer;

impl BaseCodec {
    pub fn encode(&self, buffer: &ByteBuffer) -> String {
        self.encode_bytes(buffer.raw_bytes())
    }

    pub fn encode_bytes(&self, input: impl AsRef<[u8]>) -> String {
        match self.encode_digits(input.as_ref()) {
            Ok(output) => output,
            // The digit buffer is sized from the density ratio, so this is a bug.
            Err(error) => panic!("{}", error),
        }
    }

    fn encode_digits(&self, input: &[u8]) -> Result<String, Error> {
        let zeroes = input.iter().take_while(|&&value| value == 0).count();
        let size = carry::capacity(input.len() - zeroes, self.digits_per_byte);
        let mut digits = vec![0u8; size];
        let mut length = 0;

        for &value in &input[zeroes..] {
            length = carry::propagate(&mut digits, length, value as usize, 256, self.base())?;
        }

        let start = carry::first_significant(&digits, length);
        let mut output = String::with_capacity(zeroes + size - start);
        output.extend(std::iter::repeat(self.leader()).take(zeroes));
        for &digit in &digits[start..] {
            output.push(self.alphabet.encode(digit) as char);
        }
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use crate::{alphabets, buffer::ByteBuffer, codec::BaseCodec};

    fn base58() -> BaseCodec {
        BaseCodec::from_alphabet(alphabets::BASE58)
    }

    #[test]
    fn encode() {
        let codec = base58();
        assert_eq!(codec.encode_bytes([]), "");
        assert_eq!(codec.encode_bytes("a"), "2g");
        assert_eq!(codec.encode_bytes("bbb"), "a3gV");
        assert_eq!(codec.encode_bytes("ccc"), "aPEr");
        assert_eq!(codec.encode_bytes("simply a long string"), "2cFupjhnEsSn59qHXstmK2ffpLv2");
        assert_eq!(
            codec.encode_bytes([
                0x00, 0xeb, 0x15, 0x23, 0x1d, 0xfc, 0xeb, 0x60, 0x92, 0x58, 0x86, 0xb6, 0x7d, 0x06, 0x52, 0x99, 0x92, 0x59, 0x15, 0xae,
                0xb1, 0x72, 0xc0, 0x66, 0x47,
            ]),
            "1NS17iag9jJgTHD1VXjvLCEnZuQ3rJDE9L"
        );
        assert_eq!(codec.encode_bytes([0x51, 0x6b, 0x6f, 0xcd, 0x0f]), "ABnLTmg");
        assert_eq!(
            codec.encode_bytes([0xbf, 0x4f, 0x89, 0x00, 0x1e, 0x67, 0x02, 0x74, 0xdd]),
            "3SEo3LWLoPntC"
        );
        assert_eq!(codec.encode_bytes([0x57, 0x2e, 0x47, 0x94]), "3EFU7m");
        assert_eq!(
            codec.encode_bytes([0xec, 0xac, 0x89, 0xca, 0xd9, 0x39, 0x23, 0xc0, 0x23, 0x21]),
            "EJDM8drfXA6uyA"
        );
        assert_eq!(codec.encode_bytes([0x10, 0xc8, 0x51, 0x1e]), "Rt5zm");
    }

    #[test]
    fn leading_zeroes() {
        let codec = base58();
        assert_eq!(codec.encode_bytes([0x00; 10]), "1111111111");
        // 0x0102 = 258 = 4 * 58 + 26
        assert_eq!(codec.encode_bytes([0x00, 0x01, 0x02]), "15T");
        assert_eq!(codec.encode_bytes([0x00, 0x00, 0x01, 0x02]), "115T");
    }

    #[test]
    fn encode_buffer() {
        let codec = base58();
        let buffer = ByteBuffer::from_raw(vec![0x01, 0x02], Some(3)).unwrap();
        assert_eq!(codec.encode(&buffer), "15T");
        assert_eq!(codec.encode(&ByteBuffer::new()), "");
    }

    #[test]
    fn small_bases() {
        let binary = BaseCodec::new("01").unwrap();
        assert_eq!(binary.encode_bytes([0x05]), "101");
        assert_eq!(binary.encode_bytes([0x00, 0x05]), "0101");
        assert_eq!(binary.encode_bytes([0xff]), "11111111");

        let hex = BaseCodec::from_alphabet(alphabets::BASE16);
        assert_eq!(hex.encode_bytes([0x01, 0x02]), "102");
        assert_eq!(hex.encode_bytes([0xff, 0xff]), "FFFF");
    }

    #[test]
    fn large_base() {
        let characters: String = (33u8..127).map(char::from).collect();
        let codec = BaseCodec::new(&characters).unwrap();
        assert_eq!(codec.base(), 94);
        assert_eq!(codec.encode_bytes([0x00]), "!");
        assert_eq!(codec.encode_bytes([93]), "~");
        assert_eq!(codec.encode_bytes([94]), "\"!");
    }
}
