use sha2::{
    digest::{consts::U32, generic_array::GenericArray},
    Digest, Sha256,
};

pub const LEN: usize = 4;

fn sha256(buffer: impl AsRef<[u8]>) -> GenericArray<u8, U32> {
    let mut hasher = Sha256::new();
    hasher.update(buffer);
    hasher.finalize()
}

pub fn compute_checksum(buffer: impl AsRef<[u8]>) -> [u8; LEN] {
    let hash = sha256(sha256(buffer));
    let mut checksum = [0u8; LEN];
    checksum.copy_from_slice(&hash[..LEN]);
    checksum
}

#[cfg(test)]
mod tests {
    #[test]
    fn compute_checksum() {
        // Version byte and hash160 of the genesis coinbase address.
        let payload = [
            0x00, 0x62, 0xe9, 0x07, 0xb1, 0x5c, 0xbf, 0x27, 0xd5, 0x42, 0x53, 0x99, 0xeb, 0xf6, 0xf0, 0xfb, 0x50, 0xeb, 0xb8, 0x8f,
            0x18,
        ];
        assert_eq!(super::compute_checksum(payload), [0xc2, 0x9b, 0x7d, 0x93]);
    }
}
