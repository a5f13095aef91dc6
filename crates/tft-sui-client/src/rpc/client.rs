//! Fullnode JSON-RPC client.

use crate::config::SuiConfig;
use crate::error::{SuiError, SuiResult};
use crate::rpc::response::{
    Coin, ExecuteOptions, Page, RequestType, RpcResponse, TransactionBlockResponse,
};
use crate::transaction::SignedTransaction;
use crate::types::{ObjectRef, SuiAddress};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use url::Url;

/// Client for the Sui fullnode JSON-RPC API.
///
/// # Example
///
/// ```rust,no_run
/// use tft_sui_client::rpc::SuiClient;
/// use tft_sui_client::SuiConfig;
///
/// #[tokio::main]
/// async fn main() -> anyhow::Result<()> {
///     let client = SuiClient::new(SuiConfig::testnet())?;
///     let gas_price = client.get_reference_gas_price().await?;
///     println!("gas price: {gas_price}");
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct SuiClient {
    config: SuiConfig,
    client: Client,
    request_id: AtomicU64,
}

impl SuiClient {
    /// Creates a new fullnode client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: SuiConfig) -> SuiResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(SuiError::Http)?;
        Ok(Self {
            config,
            client,
            request_id: AtomicU64::new(1),
        })
    }

    /// Returns the fullnode URL.
    pub fn base_url(&self) -> &Url {
        self.config.fullnode_url()
    }

    /// Returns the client configuration.
    pub fn config(&self) -> &SuiConfig {
        &self.config
    }

    /// Submits a signed transaction and waits for local execution.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the node rejects the
    /// transaction. An on-chain execution failure is reported through the
    /// response, not as an error; see
    /// [`TransactionBlockResponse::into_result`].
    pub async fn execute_transaction_block(
        &self,
        signed: &SignedTransaction,
        options: ExecuteOptions,
        request_type: RequestType,
    ) -> SuiResult<TransactionBlockResponse> {
        let params = serde_json::json!([
            signed.tx_bytes,
            signed.signatures,
            options,
            request_type,
        ]);
        let response: TransactionBlockResponse =
            self.call("sui_executeTransactionBlock", params).await?;
        tracing::info!(digest = %response.digest, "transaction executed");
        Ok(response)
    }

    /// Fetches the current reference gas price in MIST.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the node sends a
    /// non-numeric price.
    pub async fn get_reference_gas_price(&self) -> SuiResult<u64> {
        let price: String = self
            .call("suix_getReferenceGasPrice", serde_json::json!([]))
            .await?;
        price
            .parse()
            .map_err(|_| SuiError::Internal(format!("unparseable gas price: {price}")))
    }

    /// Fetches one page of SUI coins owned by an address.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get_coins(
        &self,
        owner: SuiAddress,
        cursor: Option<&str>,
        limit: Option<u32>,
    ) -> SuiResult<Page<Coin>> {
        // Null coin type defaults to 0x2::sui::SUI on the node side.
        let params = serde_json::json!([owner.to_hex(), null, cursor, limit]);
        self.call("suix_getCoins", params).await
    }

    /// Picks an owned SUI coin able to cover the gas budget.
    ///
    /// Pages through the owner's coins and returns the first one whose
    /// balance is at least `budget`.
    ///
    /// # Errors
    ///
    /// Returns [`SuiError::InsufficientGas`] if no single coin covers the
    /// budget.
    pub async fn select_gas_payment(
        &self,
        owner: SuiAddress,
        budget: u64,
    ) -> SuiResult<ObjectRef> {
        let mut cursor: Option<String> = None;
        loop {
            let page = self.get_coins(owner, cursor.as_deref(), None).await?;
            for coin in &page.data {
                if coin.balance_value()? >= budget {
                    tracing::debug!(coin = %coin.coin_object_id, "selected gas coin");
                    return coin.object_ref();
                }
            }
            if !page.has_next_page {
                return Err(SuiError::InsufficientGas { required: budget });
            }
            cursor = page.next_cursor;
        }
    }

    async fn call<R: DeserializeOwned>(
        &self,
        method: &str,
        params: impl Serialize,
    ) -> SuiResult<R> {
        let id = self.request_id.fetch_add(1, Ordering::Relaxed);
        let body = serde_json::json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });
        tracing::debug!(method, id, "sending JSON-RPC request");

        let response: RpcResponse<R> = self
            .client
            .post(self.config.fullnode_url().clone())
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if let Some(err) = response.error {
            tracing::warn!(method, code = err.code, message = %err.message, "JSON-RPC error");
            return Err(SuiError::rpc(err.code, err.message));
        }
        response
            .result
            .ok_or_else(|| SuiError::Internal(format!("{method}: response has no result")))
    }
}
