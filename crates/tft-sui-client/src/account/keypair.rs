//! Keypair trait and scheme identifiers.

use crate::crypto::{ED25519_FLAG, SECP256K1_FLAG};
use crate::error::{SuiError, SuiResult};
use crate::types::SuiAddress;
use std::fmt;

/// The signature schemes supported for account keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureScheme {
    /// Ed25519, flag byte `0x00`.
    Ed25519,
    /// ECDSA over secp256k1, flag byte `0x01`.
    Secp256k1,
}

impl SignatureScheme {
    /// Returns the one-byte scheme flag used on the wire.
    pub fn flag(&self) -> u8 {
        match self {
            SignatureScheme::Ed25519 => ED25519_FLAG,
            SignatureScheme::Secp256k1 => SECP256K1_FLAG,
        }
    }

    /// Maps a flag byte back to its scheme.
    ///
    /// # Errors
    ///
    /// Returns an error for flag values with no supported scheme.
    pub fn from_flag(flag: u8) -> SuiResult<Self> {
        match flag {
            ED25519_FLAG => Ok(SignatureScheme::Ed25519),
            SECP256K1_FLAG => Ok(SignatureScheme::Secp256k1),
            other => Err(SuiError::InvalidPrivateKey(format!(
                "unsupported signature scheme flag: 0x{other:02x}"
            ))),
        }
    }
}

impl fmt::Display for SignatureScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignatureScheme::Ed25519 => write!(f, "ed25519"),
            SignatureScheme::Secp256k1 => write!(f, "secp256k1"),
        }
    }
}

/// Trait for keypair types that can sign transactions.
///
/// Implementations sign the 32-byte intent digest and return the
/// serialized signature `flag || signature || public_key`, which is what
/// the fullnode expects (base64-encoded) alongside the transaction bytes.
pub trait Keypair: Send + Sync {
    /// Returns the account address derived from the public key.
    fn address(&self) -> SuiAddress;

    /// Signs a digest and returns the serialized signature bytes.
    ///
    /// # Errors
    ///
    /// May return an error if signing fails.
    fn sign(&self, digest: &[u8]) -> SuiResult<Vec<u8>>;

    /// Returns the public key bytes.
    fn public_key_bytes(&self) -> Vec<u8>;

    /// Returns the signature scheme of this keypair.
    fn scheme(&self) -> SignatureScheme;

    /// Signs a digest and returns the serialized signature as base64.
    ///
    /// # Errors
    ///
    /// May return an error if signing fails.
    fn sign_to_base64(&self, digest: &[u8]) -> SuiResult<String> {
        Ok(base64::encode(self.sign(digest)?))
    }
}

/// An enum that can hold any keypair type.
///
/// This is what [`derive_keypair`](super::derive_keypair) returns, since
/// the scheme is only known after decoding the flag byte.
#[derive(Debug, Clone)]
pub enum AnyKeypair {
    /// An Ed25519 keypair.
    Ed25519(super::Ed25519Keypair),
    /// A Secp256k1 keypair.
    Secp256k1(super::Secp256k1Keypair),
}

impl Keypair for AnyKeypair {
    fn address(&self) -> SuiAddress {
        match self {
            AnyKeypair::Ed25519(kp) => kp.address(),
            AnyKeypair::Secp256k1(kp) => kp.address(),
        }
    }

    fn sign(&self, digest: &[u8]) -> SuiResult<Vec<u8>> {
        match self {
            AnyKeypair::Ed25519(kp) => kp.sign(digest),
            AnyKeypair::Secp256k1(kp) => kp.sign(digest),
        }
    }

    fn public_key_bytes(&self) -> Vec<u8> {
        match self {
            AnyKeypair::Ed25519(kp) => kp.public_key_bytes(),
            AnyKeypair::Secp256k1(kp) => kp.public_key_bytes(),
        }
    }

    fn scheme(&self) -> SignatureScheme {
        match self {
            AnyKeypair::Ed25519(kp) => kp.scheme(),
            AnyKeypair::Secp256k1(kp) => kp.scheme(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_roundtrip() {
        for scheme in [SignatureScheme::Ed25519, SignatureScheme::Secp256k1] {
            assert_eq!(SignatureScheme::from_flag(scheme.flag()).unwrap(), scheme);
        }
    }

    #[test]
    fn test_unknown_flag() {
        assert!(SignatureScheme::from_flag(0x05).is_err());
        assert!(SignatureScheme::from_flag(0xff).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(SignatureScheme::Ed25519.to_string(), "ed25519");
        assert_eq!(SignatureScheme::Secp256k1.to_string(), "secp256k1");
    }
}
