//! Transaction building and signing.
//!
//! This module provides the BCS wire types for transactions, a builder
//! for programmable transaction blocks, and the signing step that turns
//! built transaction data into submittable bytes plus signatures.
//!
//! # Example
//!
//! ```rust,ignore
//! use tft_sui_client::account::derive_keypair;
//! use tft_sui_client::transaction::{sign_transaction, TransactionBuilder};
//!
//! let keypair = derive_keypair(&flagged_base64)?;
//!
//! let mut builder = TransactionBuilder::new();
//! builder
//!     .sender(keypair.address())
//!     .gas_price(gas_price)
//!     .gas_budget(100_000_000)
//!     .gas_payment(gas_coin);
//! let name = builder.pure(&"alina")?;
//! let player = builder.move_call(package, "tft", "mint_player", vec![], vec![name])?;
//! builder.transfer_objects(vec![player], keypair.address())?;
//!
//! let signed = sign_transaction(&keypair, &builder.build()?)?;
//! ```

mod builder;
mod types;

pub use builder::TransactionBuilder;
pub use types::{
    Argument, CallArg, Command, GasData, ObjectArg, ProgrammableMoveCall, ProgrammableTransaction,
    SignedTransaction, TransactionData, TransactionDataV1, TransactionExpiration, TransactionKind,
    TRANSACTION_INTENT,
};

use crate::account::Keypair;
use crate::error::SuiResult;

/// Signs transaction data, producing the submission payload.
///
/// The returned value carries the base64 BCS bytes and one serialized
/// signature over the intent digest.
///
/// # Errors
///
/// Returns an error if serialization or signing fails.
pub fn sign_transaction<K: Keypair + ?Sized>(
    keypair: &K,
    tx: &TransactionData,
) -> SuiResult<SignedTransaction> {
    let tx_bcs = tx.to_bcs()?;
    let digest = tx.signing_digest()?;
    let signature = keypair.sign_to_base64(&digest)?;
    Ok(SignedTransaction {
        tx_bytes: base64::encode(tx_bcs),
        signatures: vec![signature],
    })
}
