//! # tft-sui-client
//!
//! A small Sui client library for the TFT game tooling: keypair
//! handling, programmable transaction building and signing, and a
//! fullnode JSON-RPC client.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tft_sui_client::account::{derive_keypair, Keypair, SignatureScheme};
//! use tft_sui_client::rpc::{ExecuteOptions, RequestType, SuiClient};
//! use tft_sui_client::transaction::{sign_transaction, TransactionBuilder};
//! use tft_sui_client::types::ObjectId;
//! use tft_sui_client::SuiConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let keypair = derive_keypair(
//!         SignatureScheme::Ed25519,
//!         &std::env::var("ADMIN_PRIVATE_KEY")?,
//!     )?;
//!     let client = SuiClient::new(SuiConfig::testnet())?;
//!
//!     let package = ObjectId::from_hex("0x2")?;
//!     let gas_price = client.get_reference_gas_price().await?;
//!     let gas_coin = client
//!         .select_gas_payment(keypair.address(), 100_000_000)
//!         .await?;
//!
//!     let mut builder = TransactionBuilder::new();
//!     builder
//!         .sender(keypair.address())
//!         .gas_price(gas_price)
//!         .gas_budget(100_000_000)
//!         .gas_payment(gas_coin);
//!     let name = builder.pure(&"alina")?;
//!     let player = builder.move_call(package, "tft", "mint_player", vec![], vec![name])?;
//!     builder.transfer_objects(vec![player], keypair.address())?;
//!
//!     let signed = sign_transaction(&keypair, &builder.build()?)?;
//!     let response = client
//!         .execute_transaction_block(
//!             &signed,
//!             ExecuteOptions::all(),
//!             RequestType::WaitForLocalExecution,
//!         )
//!         .await?;
//!     println!("executed: {}", response.digest);
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`account`] - Keypair derivation and signing schemes
//! - [`crypto`] - Cryptographic primitives
//! - [`transaction`] - Transaction building and signing
//! - [`rpc`] - Fullnode JSON-RPC client
//! - [`types`] - Core Sui types

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod account;
pub mod config;
pub mod crypto;
pub mod error;
pub mod rpc;
pub mod transaction;
pub mod types;

// Re-export main entry points
pub use config::{Network, SuiConfig};
pub use error::{SuiError, SuiResult};
