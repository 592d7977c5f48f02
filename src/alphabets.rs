use crate::alphabet::{self, Alphabet};

macro_rules! alphabet {
    ( $characters:expr ) => {
        match Alphabet::new($characters) {
            Ok(alphabet) => alphabet,
            Err(_) => panic!("Could not build alphabet"),
        }
    };
}

pub const BASE16: Alphabet = alphabet!(b"0123456789ABCDEF");
pub const BASE32: Alphabet = alphabet!(b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567");
pub const BASE36: Alphabet = alphabet!(b"0123456789abcdefghijklmnopqrstuvwxyz");
pub const BASE58: Alphabet = alphabet!(b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz");
pub const BASE58_FLICKR: Alphabet = alphabet!(b"123456789abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ");
pub const BASE58_RIPPLE: Alphabet = alphabet!(b"rpshnaf39wBUDNEGHJKLM4PQRST7VWXYZ2bcdeCg65jkm8oFqi1tuvAxyz");
pub const BASE62: Alphabet = alphabet!(b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz");
pub const BASE64: Alphabet = alphabet!(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/");
pub const BASE64_URL: Alphabet = alphabet!(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_");

pub const NAMES: [&str; 9] = [
    "base16",
    "base32",
    "base36",
    "base58",
    "base58-flickr",
    "base58-ripple",
    "base62",
    "base64",
    "base64url",
];

pub fn by_name(name: &str) -> Option<Alphabet> {
    match name {
        "base16" => Some(BASE16),
        "base32" => Some(BASE32),
        "base36" => Some(BASE36),
        "base58" | "base58-bitcoin" => Some(BASE58),
        "base58-flickr" => Some(BASE58_FLICKR),
        "base58-ripple" => Some(BASE58_RIPPLE),
        "base62" => Some(BASE62),
        "base64" => Some(BASE64),
        "base64url" => Some(BASE64_URL),
        _ => None,
    }
}

pub fn resolve(text: &str) -> Result<Alphabet, alphabet::Error> {
    match by_name(text) {
        Some(alphabet) => Ok(alphabet),
        None => Alphabet::new(text.as_bytes()),
    }
}
