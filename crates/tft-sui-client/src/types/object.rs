//! Object references.
//!
//! An [`ObjectRef`] pins an object at an exact version and content digest.
//! The fullnode reports versions as decimal strings and digests as base58;
//! on the BCS wire the digest is a length-prefixed 32-byte value.

use crate::error::{SuiError, SuiResult};
use crate::types::ObjectId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The length of an object digest in bytes.
pub const OBJECT_DIGEST_LENGTH: usize = 32;

/// A 32-byte digest of an object's contents, displayed in base58.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectDigest([u8; OBJECT_DIGEST_LENGTH]);

impl ObjectDigest {
    /// Creates a digest from a byte array.
    pub const fn new(bytes: [u8; OBJECT_DIGEST_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Parses a digest from its base58 string form.
    pub fn from_base58(s: &str) -> SuiResult<Self> {
        let bytes = bs58::decode(s)
            .into_vec()
            .map_err(|e| SuiError::InvalidObject(format!("bad base58 digest: {e}")))?;
        if bytes.len() != OBJECT_DIGEST_LENGTH {
            return Err(SuiError::InvalidObject(format!(
                "digest must be {} bytes, got {}",
                OBJECT_DIGEST_LENGTH,
                bytes.len()
            )));
        }
        let mut out = [0u8; OBJECT_DIGEST_LENGTH];
        out.copy_from_slice(&bytes);
        Ok(Self(out))
    }

    /// Returns the digest as a base58 string.
    pub fn to_base58(&self) -> String {
        bs58::encode(self.0).into_string()
    }

    /// Returns the digest as a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for ObjectDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectDigest({})", self.to_base58())
    }
}

impl fmt::Display for ObjectDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_base58())
    }
}

impl FromStr for ObjectDigest {
    type Err = SuiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_base58(s)
    }
}

impl Serialize for ObjectDigest {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_base58())
        } else {
            // BCS form: length-prefixed byte sequence, matching the
            // on-chain digest encoding.
            serializer.serialize_bytes(&self.0)
        }
    }
}

impl<'de> Deserialize<'de> for ObjectDigest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            Self::from_base58(&s).map_err(serde::de::Error::custom)
        } else {
            let bytes = serde_bytes::ByteBuf::deserialize(deserializer)?;
            if bytes.len() != OBJECT_DIGEST_LENGTH {
                return Err(serde::de::Error::custom(format!(
                    "digest must be {} bytes, got {}",
                    OBJECT_DIGEST_LENGTH,
                    bytes.len()
                )));
            }
            let mut out = [0u8; OBJECT_DIGEST_LENGTH];
            out.copy_from_slice(&bytes);
            Ok(Self(out))
        }
    }
}

/// A reference to an object at a specific version.
///
/// This is the triple the builder attaches for owned-object inputs and
/// gas payment: (id, version, digest).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectRef {
    /// The object identifier.
    pub object_id: ObjectId,
    /// The object version at the time of reference.
    pub version: u64,
    /// The digest of the object contents at that version.
    pub digest: ObjectDigest,
}

impl ObjectRef {
    /// Creates a new object reference.
    pub fn new(object_id: ObjectId, version: u64, digest: ObjectDigest) -> Self {
        Self {
            object_id,
            version,
            digest,
        }
    }
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.object_id, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digest(byte: u8) -> ObjectDigest {
        ObjectDigest::new([byte; OBJECT_DIGEST_LENGTH])
    }

    #[test]
    fn test_base58_roundtrip() {
        let d = digest(7);
        let s = d.to_base58();
        let back = ObjectDigest::from_base58(&s).unwrap();
        assert_eq!(back, d);
    }

    #[test]
    fn test_base58_invalid() {
        assert!(ObjectDigest::from_base58("0OIl").is_err());
        // Valid base58 but wrong decoded length
        assert!(ObjectDigest::from_base58("abc").is_err());
    }

    #[test]
    fn test_json_uses_base58() {
        let d = digest(1);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, format!("\"{}\"", d.to_base58()));
        let back: ObjectDigest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
    }

    #[test]
    fn test_bcs_is_length_prefixed() {
        let d = digest(9);
        let bytes = bcs::to_bytes(&d).unwrap();
        // 1-byte ULEB length prefix + 32 bytes
        assert_eq!(bytes.len(), 33);
        assert_eq!(bytes[0], OBJECT_DIGEST_LENGTH as u8);
        let back: ObjectDigest = bcs::from_bytes(&bytes).unwrap();
        assert_eq!(back, d);
    }

    #[test]
    fn test_object_ref_bcs_roundtrip() {
        let obj = ObjectRef::new(ObjectId::from_hex("0xabc").unwrap(), 42, digest(3));
        let bytes = bcs::to_bytes(&obj).unwrap();
        // 32 (id) + 8 (version) + 33 (digest)
        assert_eq!(bytes.len(), 73);
        let back: ObjectRef = bcs::from_bytes(&bytes).unwrap();
        assert_eq!(back, obj);
    }
}
