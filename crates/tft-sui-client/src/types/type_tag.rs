//! Move type tags.
//!
//! Type arguments for generic entry functions. The `tft` entry functions
//! take none, but the field is part of the move-call wire format, so the
//! variant order here must stay aligned with the on-chain enum.

use crate::error::{SuiError, SuiResult};
use crate::types::SuiAddress;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A Move type tag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeTag {
    /// `bool`
    Bool,
    /// `u8`
    U8,
    /// `u64`
    U64,
    /// `u128`
    U128,
    /// `address`
    Address,
    /// `signer`
    Signer,
    /// `vector<T>`
    Vector(Box<TypeTag>),
    /// A struct type.
    Struct(Box<StructTag>),
    /// `u16`
    U16,
    /// `u32`
    U32,
    /// `u256`
    U256,
}

/// A fully-qualified Move struct type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructTag {
    /// The address of the defining package.
    pub address: SuiAddress,
    /// The module name.
    pub module: String,
    /// The struct name.
    pub name: String,
    /// Type parameters, if the struct is generic.
    pub type_params: Vec<TypeTag>,
}

impl fmt::Display for StructTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}::{}", self.address, self.module, self.name)?;
        if !self.type_params.is_empty() {
            write!(f, "<")?;
            for (i, t) in self.type_params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{t}")?;
            }
            write!(f, ">")?;
        }
        Ok(())
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeTag::Bool => write!(f, "bool"),
            TypeTag::U8 => write!(f, "u8"),
            TypeTag::U16 => write!(f, "u16"),
            TypeTag::U32 => write!(f, "u32"),
            TypeTag::U64 => write!(f, "u64"),
            TypeTag::U128 => write!(f, "u128"),
            TypeTag::U256 => write!(f, "u256"),
            TypeTag::Address => write!(f, "address"),
            TypeTag::Signer => write!(f, "signer"),
            TypeTag::Vector(inner) => write!(f, "vector<{inner}>"),
            TypeTag::Struct(s) => write!(f, "{s}"),
        }
    }
}

impl FromStr for TypeTag {
    type Err = SuiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_type_tag(s.trim())
    }
}

fn parse_type_tag(s: &str) -> SuiResult<TypeTag> {
    Ok(match s {
        "bool" => TypeTag::Bool,
        "u8" => TypeTag::U8,
        "u16" => TypeTag::U16,
        "u32" => TypeTag::U32,
        "u64" => TypeTag::U64,
        "u128" => TypeTag::U128,
        "u256" => TypeTag::U256,
        "address" => TypeTag::Address,
        "signer" => TypeTag::Signer,
        _ => {
            if let Some(inner) = s
                .strip_prefix("vector<")
                .and_then(|rest| rest.strip_suffix('>'))
            {
                TypeTag::Vector(Box::new(parse_type_tag(inner.trim())?))
            } else {
                TypeTag::Struct(Box::new(parse_struct_tag(s)?))
            }
        }
    })
}

/// Parses `0xADDR::module::Name`. Generic struct parameters are not
/// supported in the string form.
fn parse_struct_tag(s: &str) -> SuiResult<StructTag> {
    if s.contains('<') {
        return Err(SuiError::InvalidTypeTag(format!(
            "generic struct tags are not supported: {s}"
        )));
    }
    let mut parts = s.split("::");
    let (addr, module, name) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(a), Some(m), Some(n), None) if !m.is_empty() && !n.is_empty() => (a, m, n),
        _ => {
            return Err(SuiError::InvalidTypeTag(format!(
                "expected ADDRESS::module::Name, got {s}"
            )))
        }
    };
    Ok(StructTag {
        address: SuiAddress::from_hex(addr)
            .map_err(|e| SuiError::InvalidTypeTag(format!("bad address in {s}: {e}")))?,
        module: module.to_string(),
        name: name.to_string(),
        type_params: vec![],
    })
}
