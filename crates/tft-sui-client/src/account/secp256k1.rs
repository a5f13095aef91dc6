//! Secp256k1 keypair implementation.

use crate::account::keypair::{Keypair, SignatureScheme};
use crate::crypto::{Secp256k1PrivateKey, Secp256k1PublicKey};
use crate::error::SuiResult;
use crate::types::SuiAddress;
use std::fmt;

/// A Secp256k1 keypair for signing transactions.
#[derive(Clone)]
pub struct Secp256k1Keypair {
    private_key: Secp256k1PrivateKey,
    public_key: Secp256k1PublicKey,
    address: SuiAddress,
}

impl Secp256k1Keypair {
    /// Generates a new random Secp256k1 keypair.
    pub fn generate() -> Self {
        Self::from_private_key(Secp256k1PrivateKey::generate())
    }

    /// Creates a keypair from a private key.
    pub fn from_private_key(private_key: Secp256k1PrivateKey) -> Self {
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
        Ok(Self::from_private_key(Secp256k1PrivateKey::from_bytes(
            bytes,
        )?))
    }

    /// Returns the public key.
    pub fn public_key(&self) -> &Secp256k1PublicKey {
        &self.public_key
    }

    /// Exports the keypair as a base64-encoded flagged private key.
    ///
    /// **Warning**: the output contains the secret key.
    pub fn to_flagged_base64(&self) -> String {
        let mut flagged = vec![SignatureScheme::Secp256k1.flag()];
        flagged.extend_from_slice(&self.private_key.to_bytes());
        base64::encode(flagged)
    }
}

impl Keypair for Secp256k1Keypair {
    fn address(&self) -> SuiAddress {
        self.address
    }

    fn sign(&self, digest: &[u8]) -> SuiResult<Vec<u8>> {
        let signature = self.private_key.sign(digest);
        let mut serialized = Vec::with_capacity(1 + 64 + 33);
        serialized.push(self.scheme().flag());
        serialized.extend_from_slice(&signature.to_bytes());
        serialized.extend_from_slice(&self.public_key.to_bytes());
        Ok(serialized)
    }

    fn public_key_bytes(&self) -> Vec<u8> {
        self.public_key.to_bytes()
    }

    fn scheme(&self) -> SignatureScheme {
        SignatureScheme::Secp256k1
    }
}

impl fmt::Debug for Secp256k1Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secp256k1Keypair")
            .field("address", &self.address)
            .field("public_key", &self.public_key)
            .finish()
    }
}
