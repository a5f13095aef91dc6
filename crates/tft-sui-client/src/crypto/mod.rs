//! Cryptographic primitives.
//!
//! Keys are thin newtype wrappers around `ed25519-dalek` and `k256`.
//! Private key material is zeroized on drop and never appears in
//! `Debug` output.

pub mod ed25519;
pub mod secp256k1;

pub use ed25519::{Ed25519PrivateKey, Ed25519PublicKey, Ed25519Signature};
pub use secp256k1::{Secp256k1PrivateKey, Secp256k1PublicKey, Secp256k1Signature};

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};

use crate::types::SuiAddress;

/// Signature scheme flag for Ed25519.
pub const ED25519_FLAG: u8 = 0x00;
/// Signature scheme flag for ECDSA over secp256k1.
pub const SECP256K1_FLAG: u8 = 0x01;

type Blake2b256 = Blake2b<U32>;

/// Computes the 32-byte BLAKE2b-256 hash of the input.
pub fn blake2b_256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Derives the account address for a public key.
///
/// The address is `BLAKE2b-256(flag || public_key_bytes)`, where `flag`
/// identifies the signature scheme.
pub fn derive_address(flag: u8, public_key_bytes: &[u8]) -> SuiAddress {
    let mut hasher = Blake2b256::new();
    hasher.update([flag]);
    hasher.update(public_key_bytes);
    let digest: [u8; 32] = hasher.finalize().into();
    SuiAddress::new(digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blake2b_256_is_32_bytes_and_deterministic() {
        let a = blake2b_256(b"hello");
        let b = blake2b_256(b"hello");
        let c = blake2b_256(b"hello!");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_derive_address_depends_on_flag() {
        let pk = [0x42u8; 32];
        let ed = derive_address(ED25519_FLAG, &pk);
        let k1 = derive_address(SECP256K1_FLAG, &pk);
        assert_ne!(ed, k1);
    }

    #[test]
    fn test_derive_address_matches_manual_hash() {
        let pk = [0x07u8; 32];
        let mut preimage = vec![ED25519_FLAG];
        preimage.extend_from_slice(&pk);
        let expected = SuiAddress::new(blake2b_256(&preimage));
        assert_eq!(derive_address(ED25519_FLAG, &pk), expected);
    }
}
