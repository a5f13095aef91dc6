//! Core Sui types.

mod address;
mod object;
mod type_tag;

pub use address::{ObjectId, SuiAddress, ADDRESS_LENGTH};
pub use object::{ObjectDigest, ObjectRef, OBJECT_DIGEST_LENGTH};
pub use type_tag::{StructTag, TypeTag};
