//! Sui address and object-identifier types.
//!
//! Both are 32-byte values, displayed as 64 hexadecimal characters with a
//! `0x` prefix. An address is derived from a public key; an object ID
//! names a ledger-resident object (a deployed package is an object too,
//! which is why `PACKAGE_ID` parses as an [`ObjectId`]).

use crate::error::{SuiError, SuiResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The length of an address or object ID in bytes.
pub const ADDRESS_LENGTH: usize = 32;

/// A 32-byte Sui account address.
///
/// Addresses are derived from public keys by hashing the signature-scheme
/// flag byte followed by the public key bytes with BLAKE2b-256 (see
/// [`crate::crypto::derive_address`]).
///
/// # Display Format
///
/// Addresses display as 64 hexadecimal characters with a `0x` prefix.
/// Short inputs (like `0x2` for the Sui framework) are zero-padded on
/// the left when parsed.
///
/// # Example
///
/// ```rust
/// use tft_sui_client::types::SuiAddress;
///
/// let addr = SuiAddress::from_hex("0x2").unwrap();
/// assert_eq!(
///     addr.to_string(),
///     "0x0000000000000000000000000000000000000000000000000000000000000002"
/// );
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SuiAddress([u8; ADDRESS_LENGTH]);

impl SuiAddress {
    /// The "zero" address (all zeros).
    pub const ZERO: Self = Self([0u8; ADDRESS_LENGTH]);

    /// Creates an address from a byte array.
    pub const fn new(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Creates an address from a hex string (with or without `0x` prefix).
    ///
    /// Short inputs are zero-padded on the left. Empty strings and bare
    /// `0x` prefixes are rejected.
    pub fn from_hex<T: AsRef<str>>(hex_str: T) -> SuiResult<Self> {
        let bytes = decode_hex_padded(hex_str.as_ref())?;
        Ok(Self(bytes))
    }

    /// Creates an address from a byte slice.
    pub fn from_bytes<T: AsRef<[u8]>>(bytes: T) -> SuiResult<Self> {
        let bytes = bytes.as_ref();
        if bytes.len() != ADDRESS_LENGTH {
            return Err(SuiError::InvalidAddress(format!(
                "expected {} bytes, got {}",
                ADDRESS_LENGTH,
                bytes.len()
            )));
        }
        let mut address = [0u8; ADDRESS_LENGTH];
        address.copy_from_slice(bytes);
        Ok(Self(address))
    }

    /// Returns the address as a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the address as a byte array.
    pub fn to_bytes(&self) -> [u8; ADDRESS_LENGTH] {
        self.0
    }

    /// Returns the address as a hex string with `0x` prefix.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Returns true if this is the zero address.
    pub fn is_zero(&self) -> bool {
        self == &Self::ZERO
    }
}

impl Default for SuiAddress {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Debug for SuiAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SuiAddress({})", self.to_hex())
    }
}

impl fmt::Display for SuiAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for SuiAddress {
    type Err = SuiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for SuiAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_hex())
        } else {
            // BCS serialization: fixed-size array without length prefix
            serialize_fixed_bytes(&self.0, serializer)
        }
    }
}

impl<'de> Deserialize<'de> for SuiAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            Self::from_hex(&s).map_err(serde::de::Error::custom)
        } else {
            let bytes = <[u8; ADDRESS_LENGTH]>::deserialize(deserializer)?;
            Ok(Self(bytes))
        }
    }
}

impl From<[u8; ADDRESS_LENGTH]> for SuiAddress {
    fn from(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl From<ObjectId> for SuiAddress {
    fn from(id: ObjectId) -> Self {
        Self(id.0)
    }
}

impl AsRef<[u8]> for SuiAddress {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// A 32-byte identifier of a ledger-resident object.
///
/// Shares the address codec; the distinction is purely semantic.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId([u8; ADDRESS_LENGTH]);

impl ObjectId {
    /// Creates an object ID from a byte array.
    pub const fn new(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Creates an object ID from a hex string (with or without `0x` prefix).
    pub fn from_hex<T: AsRef<str>>(hex_str: T) -> SuiResult<Self> {
        let bytes = decode_hex_padded(hex_str.as_ref())?;
        Ok(Self(bytes))
    }

    /// Creates an object ID from a byte slice.
    pub fn from_bytes<T: AsRef<[u8]>>(bytes: T) -> SuiResult<Self> {
        SuiAddress::from_bytes(bytes).map(|a| Self(a.0))
    }

    /// Returns the object ID as a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the object ID as a hex string with `0x` prefix.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({})", self.to_hex())
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for ObjectId {
    type Err = SuiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for ObjectId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_hex())
        } else {
            serialize_fixed_bytes(&self.0, serializer)
        }
    }
}

impl<'de> Deserialize<'de> for ObjectId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            Self::from_hex(&s).map_err(serde::de::Error::custom)
        } else {
            let bytes = <[u8; ADDRESS_LENGTH]>::deserialize(deserializer)?;
            Ok(Self(bytes))
        }
    }
}

/// Decodes a possibly-short hex string into a left-padded 32-byte array.
fn decode_hex_padded(hex_str: &str) -> SuiResult<[u8; ADDRESS_LENGTH]> {
    if hex_str.is_empty() {
        return Err(SuiError::InvalidAddress(
            "address cannot be empty".to_string(),
        ));
    }

    let hex_str = hex_str
        .strip_prefix("0x")
        .or_else(|| hex_str.strip_prefix("0X"))
        .unwrap_or(hex_str);

    if hex_str.is_empty() {
        return Err(SuiError::InvalidAddress(
            "address must contain at least one hex digit".to_string(),
        ));
    }

    if hex_str.len() > ADDRESS_LENGTH * 2 {
        return Err(SuiError::InvalidAddress(format!(
            "address too long: {} characters (max {})",
            hex_str.len(),
            ADDRESS_LENGTH * 2
        )));
    }

    // Zero-pad short addresses to full length
    let padded = format!("{:0>64}", hex_str);
    let bytes = hex::decode(&padded)?;

    let mut out = [0u8; ADDRESS_LENGTH];
    out.copy_from_slice(&bytes);
    Ok(out)
}

/// BCS form of a 32-byte value: each byte in place, no length prefix.
fn serialize_fixed_bytes<S>(bytes: &[u8; ADDRESS_LENGTH], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    use serde::ser::SerializeTuple;
    let mut tuple = serializer.serialize_tuple(ADDRESS_LENGTH)?;
    for byte in bytes {
        tuple.serialize_element(byte)?;
    }
    tuple.end()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        let addr = SuiAddress::from_hex(
            "0x0000000000000000000000000000000000000000000000000000000000000002",
        )
        .unwrap();
        let short = SuiAddress::from_hex("0x2").unwrap();
        assert_eq!(addr, short);

        // Without prefix
        let bare = SuiAddress::from_hex("2").unwrap();
        assert_eq!(addr, bare);
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(SuiAddress::from_hex("").is_err());
        assert!(SuiAddress::from_hex("0x").is_err());
        assert!(SuiAddress::from_hex("not_hex").is_err());
        let too_long = format!("0x{}", "ab".repeat(33));
        assert!(SuiAddress::from_hex(&too_long).is_err());
    }

    #[test]
    fn test_display_full_width() {
        let addr = SuiAddress::from_hex("0xabcd").unwrap();
        let display = addr.to_string();
        assert!(display.starts_with("0x"));
        assert_eq!(display.len(), 66);
        assert!(display.ends_with("abcd"));
    }

    #[test]
    fn test_json_serialization() {
        let addr = SuiAddress::from_hex("0x2").unwrap();
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(
            json,
            "\"0x0000000000000000000000000000000000000000000000000000000000000002\""
        );
        let parsed: SuiAddress = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, addr);
    }

    #[test]
    fn test_bcs_is_fixed_width() {
        // No ULEB length prefix: exactly 32 bytes on the wire.
        let addr = SuiAddress::from_hex("0x2").unwrap();
        let bytes = bcs::to_bytes(&addr).unwrap();
        assert_eq!(bytes.len(), ADDRESS_LENGTH);
        assert_eq!(bytes[ADDRESS_LENGTH - 1], 2);

        let back: SuiAddress = bcs::from_bytes(&bytes).unwrap();
        assert_eq!(back, addr);
    }

    #[test]
    fn test_object_id_roundtrip() {
        let id = ObjectId::from_hex("0xdeadbeef").unwrap();
        let bytes = bcs::to_bytes(&id).unwrap();
        assert_eq!(bytes.len(), ADDRESS_LENGTH);
        let back: ObjectId = bcs::from_bytes(&bytes).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_object_id_to_address() {
        let id = ObjectId::from_hex("0x42").unwrap();
        let addr: SuiAddress = id.into();
        assert_eq!(addr.to_hex(), id.to_hex());
    }

    #[test]
    fn test_is_zero() {
        assert!(SuiAddress::ZERO.is_zero());
        assert!(!SuiAddress::from_hex("0x1").unwrap().is_zero());
    }

    #[test]
    fn test_from_str() {
        let addr: SuiAddress = "0x2".parse().unwrap();
        assert_eq!(addr, SuiAddress::from_hex("0x2").unwrap());
        let id: ObjectId = "0x2".parse().unwrap();
        assert_eq!(id, ObjectId::from_hex("0x2").unwrap());
    }
}
