//! Ed25519 keypair implementation.

use crate::account::keypair::{Keypair, SignatureScheme};
use crate::crypto::{Ed25519PrivateKey, Ed25519PublicKey};
use crate::error::SuiResult;
use crate::types::SuiAddress;
use std::fmt;

/// An Ed25519 keypair for signing transactions.
///
/// This is the default account type.
///
/// # Example
///
/// ```rust
/// use tft_sui_client::account::{Ed25519Keypair, Keypair};
///
/// let keypair = Ed25519Keypair::generate();
/// println!("Address: {}", keypair.address());
/// ```
#[derive(Clone)]
pub struct Ed25519Keypair {
    private_key: Ed25519PrivateKey,
    public_key: Ed25519PublicKey,
    address: SuiAddress,
}

impl Ed25519Keypair {
    /// Generates a new random Ed25519 keypair.
    pub fn generate() -> Self {
        Self::from_private_key(Ed25519PrivateKey::generate())
    }

    /// Creates a keypair from a private key.
    pub fn from_private_key(private_key: Ed25519PrivateKey) -> Self {
        let public_key = private_key.public_key();
        let address = public_key.to_address();
        Self {
            private_key,
            public_key,
            address,
        }
    }

    /// Creates a keypair from raw secret key bytes (no flag byte).
    pub fn from_secret_bytes(bytes: &[u8]) -> SuiResult<Self> {
        Ok(Self::from_private_key(Ed25519PrivateKey::from_bytes(
            bytes,
        )?))
    }

    /// Returns the public key.
    pub fn public_key(&self) -> &Ed25519PublicKey {
        &self.public_key
    }

    /// Exports the keypair as a base64-encoded flagged private key.
    ///
    /// **Warning**: the output contains the secret key.
    pub fn to_flagged_base64(&self) -> String {
        let mut flagged = vec![SignatureScheme::Ed25519.flag()];
        flagged.extend_from_slice(&self.private_key.to_bytes());
        base64::encode(flagged)
    }
}

impl Keypair for Ed25519Keypair {
    fn address(&self) -> SuiAddress {
        self.address
    }

    fn sign(&self, digest: &[u8]) -> SuiResult<Vec<u8>> {
        let signature = self.private_key.sign(digest);
        let mut serialized = Vec::with_capacity(1 + 64 + 32);
        serialized.push(self.scheme().flag());
        serialized.extend_from_slice(&signature.to_bytes());
        serialized.extend_from_slice(&self.public_key.to_bytes());
        Ok(serialized)
    }

    fn public_key_bytes(&self) -> Vec<u8> {
        self.public_key.to_bytes().to_vec()
    }

    fn scheme(&self) -> SignatureScheme {
        SignatureScheme::Ed25519
    }
}

impl fmt::Debug for Ed25519Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ed25519Keypair")
            .field("address", &self.address)
            .field("public_key", &self.public_key)
            .finish()
    }
}
