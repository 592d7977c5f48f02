use basex::{alphabets, BaseCodec, ByteBuffer};
use proptest::prelude::*;

fn codecs() -> Vec<BaseCodec> {
    let mut codecs: Vec<BaseCodec> = alphabets::NAMES
        .iter()
        .filter_map(|name| alphabets::by_name(name))
        .map(BaseCodec::from_alphabet)
        .collect();
    codecs.push(BaseCodec::new("01").unwrap());
    codecs.push(BaseCodec::new("xyz").unwrap());
    let printable: String = (33u8..127).map(char::from).collect();
    codecs.push(BaseCodec::new(&printable).unwrap());
    codecs
}

fn alphabet() -> impl Strategy<Value = String> {
    Just((33u8..127).map(char::from).collect::<Vec<_>>())
        .prop_shuffle()
        .prop_flat_map(|characters| (Just(characters), 2usize..=94))
        .prop_map(|(characters, len)| characters[..len].iter().collect())
}

proptest! {
    #[test]
    fn round_trip(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        for codec in codecs() {
            let text = codec.encode_bytes(&bytes);
            prop_assert_eq!(codec.decode_bytes(&text), Ok(bytes.clone()));
        }
    }

    #[test]
    fn round_trip_any_alphabet(alphabet in alphabet(), bytes in prop::collection::vec(any::<u8>(), 0..48)) {
        let codec = BaseCodec::new(&alphabet).unwrap();
        let text = codec.encode_bytes(&bytes);
        prop_assert!(text.chars().all(|character| alphabet.contains(character)));
        prop_assert_eq!(codec.decode_bytes(&text), Ok(bytes));
    }

    #[test]
    fn leading_zeroes(zeroes in 0usize..8, head in 1u8..=255, tail in prop::collection::vec(any::<u8>(), 0..16)) {
        let mut bytes = vec![0u8; zeroes];
        bytes.push(head);
        bytes.extend(tail);
        for codec in codecs() {
            let text = codec.encode_bytes(&bytes);
            let leaders = text.chars().take_while(|&character| character == codec.leader()).count();
            prop_assert_eq!(leaders, zeroes);
            let decoded = codec.decode_bytes(&text).unwrap();
            prop_assert_eq!(decoded.iter().take_while(|&&byte| byte == 0).count(), zeroes);
        }
    }

    #[test]
    fn all_zeroes(len in 0usize..32) {
        for codec in codecs() {
            let text = codec.encode(&ByteBuffer::from_raw(vec![0u8; len], None).unwrap());
            prop_assert_eq!(text.clone(), codec.leader().to_string().repeat(len));
            prop_assert_eq!(codec.decode(&text).unwrap().to_decimal_array(), vec![0u8; len]);
        }
    }

    #[test]
    fn spaces_are_rejected(bytes in prop::collection::vec(any::<u8>(), 1..16), position in any::<prop::sample::Index>()) {
        let codec = BaseCodec::from_alphabet(alphabets::BASE58);
        let mut text = codec.encode_bytes(&bytes);
        let index = position.index(text.len() + 1);
        text.insert(index, ' ');
        prop_assert!(codec.decode_unsafe(&text).is_none());
        prop_assert!(codec.decode(&text).is_err());
    }

    #[test]
    fn padded_buffers(bytes in prop::collection::vec(any::<u8>(), 0..16), extra in 0usize..8) {
        let size = bytes.len() + extra;
        let buffer = ByteBuffer::from_raw(bytes.clone(), Some(size)).unwrap();
        let raw = buffer.raw_bytes();
        prop_assert_eq!(raw.len(), size);
        prop_assert!(raw[..extra].iter().all(|&byte| byte == 0));
        prop_assert_eq!(&raw[extra..], &bytes[..]);
        prop_assert_eq!(ByteBuffer::from_hex(buffer.to_hex(), None).unwrap(), buffer.clone());
        prop_assert_eq!(ByteBuffer::from_unsigned(&buffer.to_unsigned(), Some(size.max(1))).unwrap().to_unsigned(), buffer.to_unsigned());
    }
}
