//! Account management.
//!
//! This module provides keypair types that wrap cryptographic keys and
//! provide a unified interface for signing transactions.
//!
//! # Keypair types
//!
//! - [`Ed25519Keypair`] - Ed25519 keypair (the default scheme)
//! - [`Secp256k1Keypair`] - ECDSA Secp256k1 keypair
//!
//! # Flagged private keys
//!
//! Wallet exports encode the private key as base64 of
//! `flag || secret_key`, where the leading flag byte identifies the
//! signature scheme. [`derive_keypair`] decodes that form, checks the
//! flag against the requested scheme, strips it, and returns the
//! keypair.
//!
//! # Example
//!
//! ```rust
//! use tft_sui_client::account::{derive_keypair, Keypair, SignatureScheme};
//!
//! let keypair = tft_sui_client::account::Ed25519Keypair::generate();
//! let exported = keypair.to_flagged_base64();
//! let restored = derive_keypair(SignatureScheme::Ed25519, &exported).unwrap();
//! assert_eq!(keypair.address(), restored.address());
//! ```

mod ed25519;
mod keypair;
mod secp256k1;

pub use ed25519::Ed25519Keypair;
pub use keypair::{AnyKeypair, Keypair, SignatureScheme};
pub use secp256k1::Secp256k1Keypair;

use crate::crypto::ed25519::ED25519_PRIVATE_KEY_LENGTH;
use crate::crypto::secp256k1::SECP256K1_PRIVATE_KEY_LENGTH;
use crate::error::{SuiError, SuiResult};

/// Length of a base64-decoded flagged private key: flag byte plus the
/// 32-byte secret.
pub const FLAGGED_PRIVATE_KEY_LENGTH: usize = 1 + ED25519_PRIVATE_KEY_LENGTH;

/// Derives a keypair from a base64-encoded flagged private key.
///
/// The input is `base64(flag || secret_key)`, the form wallets export.
/// The flag byte is checked against the requested scheme and stripped
/// before the secret is interpreted; a silently mis-flagged key would
/// otherwise derive a different address than the wallet shows.
///
/// # Errors
///
/// Returns an error if the base64 is malformed, the decoded length is
/// wrong, or the flag byte does not match `scheme`.
pub fn derive_keypair(scheme: SignatureScheme, flagged_base64: &str) -> SuiResult<AnyKeypair> {
    let decoded = base64::decode(flagged_base64.trim())?;
    if decoded.len() != FLAGGED_PRIVATE_KEY_LENGTH {
        return Err(SuiError::InvalidPrivateKey(format!(
            "flagged private key must be {} bytes, got {}",
            FLAGGED_PRIVATE_KEY_LENGTH,
            decoded.len()
        )));
    }
    if decoded[0] != scheme.flag() {
        return Err(SuiError::InvalidPrivateKey(format!(
            "key flag 0x{:02x} does not match requested scheme {scheme}",
            decoded[0]
        )));
    }
    let secret = &decoded[1..];
    match scheme {
        SignatureScheme::Ed25519 => {
            debug_assert_eq!(secret.len(), ED25519_PRIVATE_KEY_LENGTH);
            Ok(AnyKeypair::Ed25519(Ed25519Keypair::from_secret_bytes(
                secret,
            )?))
        }
        SignatureScheme::Secp256k1 => {
            debug_assert_eq!(secret.len(), SECP256K1_PRIVATE_KEY_LENGTH);
            Ok(AnyKeypair::Secp256k1(Secp256k1Keypair::from_secret_bytes(
                secret,
            )?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flagged_b64(flag: u8, secret: &[u8]) -> String {
        let mut flagged = vec![flag];
        flagged.extend_from_slice(secret);
        base64::encode(&flagged)
    }

    #[test]
    fn test_derive_ed25519_keypair() {
        let secret = [7u8; 32];
        let encoded = flagged_b64(SignatureScheme::Ed25519.flag(), &secret);

        let keypair = derive_keypair(SignatureScheme::Ed25519, &encoded).unwrap();
        assert_eq!(keypair.scheme(), SignatureScheme::Ed25519);

        let direct = Ed25519Keypair::from_secret_bytes(&secret).unwrap();
        assert_eq!(keypair.address(), direct.address());
    }

    #[test]
    fn test_derive_secp256k1_keypair() {
        let secret = [7u8; 32];
        let encoded = flagged_b64(SignatureScheme::Secp256k1.flag(), &secret);

        let keypair = derive_keypair(SignatureScheme::Secp256k1, &encoded).unwrap();
        assert_eq!(keypair.scheme(), SignatureScheme::Secp256k1);
    }

    #[test]
    fn test_derive_rejects_mismatched_flag() {
        let secret = [7u8; 32];
        let encoded = flagged_b64(SignatureScheme::Secp256k1.flag(), &secret);
        let err = derive_keypair(SignatureScheme::Ed25519, &encoded).unwrap_err();
        assert!(err.to_string().contains("does not match"));
    }

    #[test]
    fn test_schemes_give_distinct_addresses() {
        let secret = [7u8; 32];
        let ed = Ed25519Keypair::from_secret_bytes(&secret).unwrap();
        let k1 = Secp256k1Keypair::from_secret_bytes(&secret).unwrap();
        assert_ne!(ed.address(), k1.address());
    }

    #[test]
    fn test_derive_rejects_bad_base64() {
        assert!(derive_keypair(SignatureScheme::Ed25519, "not base64!!!").is_err());
    }

    #[test]
    fn test_derive_rejects_wrong_length() {
        // 32 bytes: a bare secret without the flag byte
        let encoded = base64::encode([1u8; 32]);
        let err = derive_keypair(SignatureScheme::Ed25519, &encoded).unwrap_err();
        assert!(err.to_string().contains("33"));
    }

    #[test]
    fn test_derive_rejects_unknown_flag() {
        let encoded = flagged_b64(0x7f, &[1u8; 32]);
        assert!(derive_keypair(SignatureScheme::Ed25519, &encoded).is_err());
    }

    #[test]
    fn test_flagged_roundtrip() {
        let keypair = Ed25519Keypair::generate();
        let restored =
            derive_keypair(SignatureScheme::Ed25519, &keypair.to_flagged_base64()).unwrap();
        assert_eq!(keypair.address(), restored.address());
    }
}
