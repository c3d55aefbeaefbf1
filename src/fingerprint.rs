//! Deterministic fingerprints for rule tables and rewrite traces.
//!
//! Fingerprints are SHA-256 digests with domain separation and length
//! prefixing, so that a trace recorded against one rule table can be checked
//! against the table of a fresh build.
//!
//! # Citations
//! - SHA-256: NIST FIPS 180-4 (2015)
//! - Domain separation & length prefixing: Bernstein et al., "How to hash into elliptic curves" (2009)

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// A 256-bit hash value.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HashValue(pub [u8; 32]);

impl HashValue {
    /// Creates a zero hash (all zeros).
    #[inline]
    pub fn zero() -> Self {
        Self([0u8; 32])
    }

    /// Creates a hash from a raw byte array.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw byte array.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Computes SHA-256 of the given data with domain separation.
    ///
    /// The digest covers `b"TGPC:<domain>:v1" || length_prefix(data) || data`,
    /// where the length prefix is a 64-bit little-endian byte count.
    pub fn hash_with_domain(domain: &[u8], data: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(b"TGPC:");
        hasher.update(domain);
        hasher.update(b":v1");
        let len = data.len() as u64;
        hasher.update(len.to_le_bytes());
        hasher.update(data);
        Self(hasher.finalize().into())
    }

    /// Full lowercase hexadecimal form.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

impl std::fmt::Display for HashValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // First 4 bytes are enough to tell tables apart in logs.
        write!(
            f,
            "HashValue({:02x}{:02x}{:02x}{:02x}…)",
            self.0[0], self.0[1], self.0[2], self.0[3]
        )
    }
}

/// Types with a stable byte encoding that can be fingerprinted.
pub trait Canonicalizable {
    /// Domain tag separating this type from others.
    const DOMAIN: &'static [u8];

    /// Appends the canonical encoding of `self` to `out`.
    fn write_canonical(&self, out: &mut Vec<u8>);

    /// Fingerprint of the canonical encoding.
    fn fingerprint(&self) -> HashValue {
        let mut bytes = Vec::new();
        self.write_canonical(&mut bytes);
        HashValue::hash_with_domain(Self::DOMAIN, &bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Bytes(&'static [u8]);

    impl Canonicalizable for Bytes {
        const DOMAIN: &'static [u8] = b"test";

        fn write_canonical(&self, out: &mut Vec<u8>) {
            out.extend_from_slice(self.0);
        }
    }

    #[test]
    fn test_hash_with_domain_deterministic() {
        let a = HashValue::hash_with_domain(b"rules", b"0012");
        let b = HashValue::hash_with_domain(b"rules", b"0012");
        assert_eq!(a, b);
        assert_ne!(a, HashValue::zero());
    }

    #[test]
    fn test_domain_separation() {
        let a = HashValue::hash_with_domain(b"rules", b"0012");
        let b = HashValue::hash_with_domain(b"trace", b"0012");
        assert_ne!(a, b);
    }

    #[test]
    fn test_canonicalizable_uses_domain() {
        assert_eq!(
            Bytes(b"abc").fingerprint(),
            HashValue::hash_with_domain(b"test", b"abc")
        );
        assert_ne!(Bytes(b"abc").fingerprint(), Bytes(b"abd").fingerprint());
    }

    #[test]
    fn test_hex_and_display() {
        let hash = HashValue::from_bytes([0xab; 32]);
        assert_eq!(hash.to_hex().len(), 64);
        assert!(hash.to_hex().starts_with("abab"));
        assert_eq!(hash.to_string(), "HashValue(abababab…)");
    }
}
