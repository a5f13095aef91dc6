//! Transaction wire types.
//!
//! These mirror the on-chain BCS layout exactly. Variant order inside
//! each enum is part of the wire format and must not be rearranged.

use crate::crypto::blake2b_256;
use crate::error::{SuiError, SuiResult};
use crate::types::{ObjectId, ObjectRef, SuiAddress, TypeTag};
use serde::{Deserialize, Serialize};

/// Intent prefix for transaction signing: scope `TransactionData`,
/// version 0, app id `Sui`.
pub const TRANSACTION_INTENT: [u8; 3] = [0, 0, 0];

/// An argument to a programmable transaction command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Argument {
    /// The gas coin, usable by reference in most commands.
    GasCoin,
    /// An input to the transaction, by index into the inputs list.
    Input(u16),
    /// The result of an earlier command, by command index.
    Result(u16),
    /// One value out of an earlier command that returned several.
    NestedResult(u16, u16),
}

/// An object input to a transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectArg {
    /// An object owned by the sender, pinned at a version and digest.
    ImmOrOwnedObject(ObjectRef),
    /// A shared object.
    SharedObject {
        /// The object id.
        id: ObjectId,
        /// The version at which the object first became shared.
        initial_shared_version: u64,
        /// Whether the transaction takes the object mutably.
        mutable: bool,
    },
    /// An object sent to this transaction's sender.
    Receiving(ObjectRef),
}

/// A transaction input: either BCS-encoded pure bytes or an object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallArg {
    /// A pure value, already BCS-encoded.
    Pure(#[serde(with = "serde_bytes")] Vec<u8>),
    /// An object input.
    Object(ObjectArg),
}

/// A call to a Move entry function.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgrammableMoveCall {
    /// The package containing the module.
    pub package: ObjectId,
    /// The module name.
    pub module: String,
    /// The function name.
    pub function: String,
    /// Type arguments for generic functions.
    pub type_arguments: Vec<TypeTag>,
    /// Arguments to the call.
    pub arguments: Vec<Argument>,
}

/// A single command inside a programmable transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Call a Move function.
    MoveCall(Box<ProgrammableMoveCall>),
    /// Transfer objects to an address. The address is a pure input.
    TransferObjects(Vec<Argument>, Argument),
    /// Split amounts off a coin.
    SplitCoins(Argument, Vec<Argument>),
    /// Merge coins into the first one.
    MergeCoins(Argument, Vec<Argument>),
}

/// The body of a programmable transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgrammableTransaction {
    /// The inputs, referenced by commands via [`Argument::Input`].
    pub inputs: Vec<CallArg>,
    /// The commands, executed in order.
    pub commands: Vec<Command>,
}

/// The kind of transaction being executed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    /// A programmable transaction block.
    ProgrammableTransaction(ProgrammableTransaction),
}

/// Gas parameters for a transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GasData {
    /// The coins paying for gas.
    pub payment: Vec<ObjectRef>,
    /// The owner of the gas coins, normally the sender.
    pub owner: SuiAddress,
    /// The gas price in MIST per unit.
    pub price: u64,
    /// The maximum gas spend in MIST.
    pub budget: u64,
}

/// When a transaction stops being valid for execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionExpiration {
    /// Valid indefinitely.
    None,
    /// Valid until the given epoch ends.
    Epoch(u64),
}

/// Versioned transaction data. Only V1 exists.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionData {
    /// Version 1.
    V1(TransactionDataV1),
}

/// The V1 transaction envelope.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionDataV1 {
    /// What to execute.
    pub kind: TransactionKind,
    /// The sending address.
    pub sender: SuiAddress,
    /// Gas parameters.
    pub gas_data: GasData,
    /// Expiration, unset for immediate submission.
    pub expiration: TransactionExpiration,
}

impl TransactionData {
    /// Creates V1 transaction data for a programmable transaction with no
    /// expiration.
    pub fn new_programmable(
        sender: SuiAddress,
        pt: ProgrammableTransaction,
        gas_data: GasData,
    ) -> Self {
        TransactionData::V1(TransactionDataV1 {
            kind: TransactionKind::ProgrammableTransaction(pt),
            sender,
            gas_data,
            expiration: TransactionExpiration::None,
        })
    }

    /// Returns the sender address.
    pub fn sender(&self) -> SuiAddress {
        match self {
            TransactionData::V1(v1) => v1.sender,
        }
    }

    /// Returns the gas data.
    pub fn gas_data(&self) -> &GasData {
        match self {
            TransactionData::V1(v1) => &v1.gas_data,
        }
    }

    /// Serializes the transaction to its BCS wire form.
    ///
    /// # Errors
    ///
    /// Returns an error if BCS serialization fails.
    pub fn to_bcs(&self) -> SuiResult<Vec<u8>> {
        bcs::to_bytes(self).map_err(SuiError::bcs)
    }

    /// Computes the 32-byte digest that gets signed.
    ///
    /// The digest is `BLAKE2b-256(intent || bcs(transaction))`, where the
    /// intent prefix scopes the signature to transaction data.
    ///
    /// # Errors
    ///
    /// Returns an error if BCS serialization fails.
    pub fn signing_digest(&self) -> SuiResult<[u8; 32]> {
        let bytes = self.to_bcs()?;
        let mut message = Vec::with_capacity(TRANSACTION_INTENT.len() + bytes.len());
        message.extend_from_slice(&TRANSACTION_INTENT);
        message.extend_from_slice(&bytes);
        Ok(blake2b_256(&message))
    }
}

/// A transaction ready for submission: base64 BCS bytes plus the
/// serialized signatures.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedTransaction {
    /// Base64-encoded BCS transaction data.
    pub tx_bytes: String,
    /// Base64-encoded serialized signatures.
    pub signatures: Vec<String>,
}
