//! Fullnode JSON-RPC API.

mod client;
mod response;

pub use client::SuiClient;
pub use response::{
    Coin, ExecuteOptions, ExecutionStatus, ObjectChange, Page, RequestType, RpcErrorBody,
    RpcResponse, TransactionBlockResponse, TransactionEffects,
};
