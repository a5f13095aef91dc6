//! JSON-RPC request options and response types.

use crate::error::{SuiError, SuiResult};
use crate::types::{ObjectDigest, ObjectId, ObjectRef};
use serde::{Deserialize, Serialize};

/// The JSON-RPC response envelope.
#[derive(Debug, Deserialize)]
pub struct RpcResponse<T> {
    /// Protocol version, always "2.0".
    pub jsonrpc: String,
    /// Echoed request id.
    pub id: serde_json::Value,
    /// The result, present on success.
    pub result: Option<T>,
    /// The error, present on failure.
    pub error: Option<RpcErrorBody>,
}

/// A JSON-RPC error object.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcErrorBody {
    /// Error code.
    pub code: i64,
    /// Human-readable message.
    pub message: String,
}

/// Which parts of the execution result the node should return.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteOptions {
    /// Include execution effects.
    pub show_effects: bool,
    /// Include emitted events.
    pub show_events: bool,
    /// Include object change summaries.
    pub show_object_changes: bool,
}

impl ExecuteOptions {
    /// Requests effects, events, and object changes.
    pub fn all() -> Self {
        Self {
            show_effects: true,
            show_events: true,
            show_object_changes: true,
        }
    }
}

impl Default for ExecuteOptions {
    fn default() -> Self {
        Self::all()
    }
}

/// How long the node should wait before responding to an execution
/// request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RequestType {
    /// Respond once a certificate over the effects exists.
    WaitForEffectsCert,
    /// Respond after the node has executed the transaction locally.
    WaitForLocalExecution,
}

/// The node's response to `sui_executeTransactionBlock`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionBlockResponse {
    /// The transaction digest, base58.
    pub digest: String,
    /// Execution effects, if requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effects: Option<TransactionEffects>,
    /// Emitted events, if requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<serde_json::Value>,
    /// Object changes, if requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_changes: Option<Vec<ObjectChange>>,
}

impl TransactionBlockResponse {
    /// Returns the execution error message, if the transaction failed.
    pub fn execution_error(&self) -> Option<&str> {
        let status = &self.effects.as_ref()?.status;
        if status.is_success() {
            None
        } else {
            Some(status.error.as_deref().unwrap_or("unknown failure"))
        }
    }

    /// Converts an on-chain execution failure into an error.
    ///
    /// # Errors
    ///
    /// Returns [`SuiError::ExecutionFailed`] when the effects report a
    /// failed status.
    pub fn into_result(self) -> SuiResult<Self> {
        match self.execution_error() {
            Some(err) => Err(SuiError::ExecutionFailed {
                status: err.to_string(),
            }),
            None => Ok(self),
        }
    }

    /// Returns the ids of objects created by the transaction.
    pub fn created_object_ids(&self) -> Vec<ObjectId> {
        self.object_changes
            .iter()
            .flatten()
            .filter_map(|change| match change {
                ObjectChange::Created { object_id, .. } => Some(*object_id),
                _ => None,
            })
            .collect()
    }
}

/// Execution effects, reduced to the status we act on.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionEffects {
    /// The execution status.
    pub status: ExecutionStatus,
    /// Gas usage summary, as reported by the node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_used: Option<serde_json::Value>,
}

/// The success/failure status of an executed transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionStatus {
    /// `"success"` or `"failure"`.
    pub status: String,
    /// The failure reason, when status is `"failure"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExecutionStatus {
    /// Returns true if the transaction executed successfully.
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// A summary of how one object was affected by a transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ObjectChange {
    /// A new object was created.
    #[serde(rename_all = "camelCase")]
    Created {
        /// The Move type of the object.
        object_type: String,
        /// The new object's id.
        object_id: ObjectId,
    },
    /// An existing object was mutated.
    #[serde(rename_all = "camelCase")]
    Mutated {
        /// The Move type of the object.
        object_type: String,
        /// The mutated object's id.
        object_id: ObjectId,
    },
    /// An object was deleted.
    #[serde(rename_all = "camelCase")]
    Deleted {
        /// The deleted object's id.
        object_id: ObjectId,
    },
    /// A package was published.
    #[serde(rename_all = "camelCase")]
    Published {
        /// The published package's id.
        package_id: ObjectId,
    },
    /// Any change kind this client does not act on.
    #[serde(other)]
    Other,
}

/// One page of a paginated query.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// The items on this page.
    pub data: Vec<T>,
    /// Cursor to pass for the next page.
    pub next_cursor: Option<String>,
    /// Whether more pages exist.
    pub has_next_page: bool,
}

/// A coin owned by an address, as reported by `suix_getCoins`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coin {
    /// The coin's Move type.
    pub coin_type: String,
    /// The coin object id.
    pub coin_object_id: ObjectId,
    /// The object version, reported as a decimal string.
    pub version: String,
    /// The object digest, base58.
    pub digest: ObjectDigest,
    /// The balance in MIST, reported as a decimal string.
    pub balance: String,
}

impl Coin {
    /// Parses the balance string into MIST.
    ///
    /// # Errors
    ///
    /// Returns an error if the node sent a non-numeric balance.
    pub fn balance_value(&self) -> SuiResult<u64> {
        self.balance
            .parse()
            .map_err(|_| SuiError::Internal(format!("unparseable coin balance: {}", self.balance)))
    }

    /// Builds the object reference for using this coin as an input.
    ///
    /// # Errors
    ///
    /// Returns an error if the node sent a non-numeric version.
    pub fn object_ref(&self) -> SuiResult<ObjectRef> {
        let version = self
            .version
            .parse()
            .map_err(|_| SuiError::Internal(format!("unparseable coin version: {}", self.version)))?;
        Ok(ObjectRef::new(self.coin_object_id, version, self.digest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_type_serializes_as_pascal_case() {
        assert_eq!(
            serde_json::to_string(&RequestType::WaitForLocalExecution).unwrap(),
            "\"WaitForLocalExecution\""
        );
    }

    #[test]
    fn test_execute_options_camel_case() {
        let json = serde_json::to_value(ExecuteOptions::all()).unwrap();
        assert_eq!(json["showEffects"], true);
        assert_eq!(json["showObjectChanges"], true);
    }

    #[test]
    fn test_parse_success_response() {
        let raw = serde_json::json!({
            "digest": "8qCvxDHh5LtDfF2stoW5XZE5NmCTe1u9Z5fRu3hPviTK",
            "effects": { "status": { "status": "success" } },
            "objectChanges": [
                {
                    "type": "created",
                    "objectType": "0x2::tft::Player",
                    "objectId": "0x1111111111111111111111111111111111111111111111111111111111111111",
                    "sender": "0xaaa"
                },
                { "type": "transferred", "objectId": "0x2" }
            ]
        });
        let resp: TransactionBlockResponse = serde_json::from_value(raw).unwrap();
        assert!(resp.execution_error().is_none());
        assert_eq!(resp.created_object_ids().len(), 1);
        assert!(resp.into_result().is_ok());
    }

    #[test]
    fn test_parse_failure_response() {
        let raw = serde_json::json!({
            "digest": "8qCvxDHh5LtDfF2stoW5XZE5NmCTe1u9Z5fRu3hPviTK",
            "effects": {
                "status": { "status": "failure", "error": "MoveAbort(7)" }
            }
        });
        let resp: TransactionBlockResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(resp.execution_error(), Some("MoveAbort(7)"));
        assert!(matches!(
            resp.into_result(),
            Err(SuiError::ExecutionFailed { .. })
        ));
    }

    #[test]
    fn test_coin_conversions() {
        let raw = serde_json::json!({
            "coinType": "0x2::sui::SUI",
            "coinObjectId": "0x5",
            "version": "1234",
            "digest": bs58::encode([7u8; 32]).into_string(),
            "balance": "1000000000",
        });
        let coin: Coin = serde_json::from_value(raw).unwrap();
        assert_eq!(coin.balance_value().unwrap(), 1_000_000_000);
        let object_ref = coin.object_ref().unwrap();
        assert_eq!(object_ref.version, 1234);
    }

    #[test]
    fn test_coin_bad_balance() {
        let raw = serde_json::json!({
            "coinType": "0x2::sui::SUI",
            "coinObjectId": "0x5",
            "version": "1",
            "digest": bs58::encode([7u8; 32]).into_string(),
            "balance": "lots",
        });
        let coin: Coin = serde_json::from_value(raw).unwrap();
        assert!(coin.balance_value().is_err());
    }
}
