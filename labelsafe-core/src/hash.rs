//! hash.rs - Content hash used to keep truncated names distinct.
//!
//! 32-bit FNV-1a over the raw UTF-8 bytes of the input. It is not a security
//! primitive; it only has to be stable across runs and platforms and sensitive
//! to every byte of the input, including the ones lost to truncation.
//!
//! License: MIT OR APACHE 2.0

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// Width of a full hash suffix in hex digits.
pub const HASH_HEX_LEN: usize = 8;

/// 32-bit FNV-1a.
pub fn fnv1a_32(bytes: &[u8]) -> u32 {
    let mut hash = FNV_OFFSET_BASIS;
    for byte in bytes {
        hash ^= u32::from(*byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Renders the hash of `input` as 8 lowercase hex digits.
pub fn content_hash(input: &str) -> String {
    format!("{:08x}", fnv1a_32(input.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vectors() {
        assert_eq!(fnv1a_32(b""), 0x811c9dc5);
        assert_eq!(fnv1a_32(b"a"), 0xe40c292c);
        assert_eq!(fnv1a_32(b"foobar"), 0xbf9cf968);
    }

    #[test]
    fn test_content_hash_is_zero_padded_hex() {
        let hash = content_hash("some-string%");
        assert_eq!(hash, "71ea0770");
        assert_eq!(hash.len(), HASH_HEX_LEN);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_order_sensitive() {
        assert_ne!(content_hash("ab"), content_hash("ba"));
    }
}
