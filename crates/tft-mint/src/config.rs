//! Environment configuration for the mint script.

use anyhow::{Context, Result};
use tft_sui_client::types::ObjectId;

/// Configuration read once at process start.
///
/// All ambient environment lookups happen here; the rest of the program
/// receives this struct.
#[derive(Debug, Clone)]
pub struct EnvConfig {
    /// Base64-encoded flagged private key of the admin account.
    pub admin_private_key: String,
    /// The package containing the `tft` module.
    pub package_id: ObjectId,
    /// Network name, defaulting to testnet.
    pub network: String,
}

impl EnvConfig {
    /// Loads configuration from `.env` and the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or the package
    /// id is not valid hex.
    pub fn from_env() -> Result<Self> {
        // Missing .env is fine; variables may come from the environment.
        dotenv::dotenv().ok();

        // Older deployments used PRIVATE_KEY for the same value.
        let admin_private_key = std::env::var("ADMIN_PRIVATE_KEY")
            .or_else(|_| std::env::var("PRIVATE_KEY"))
            .context("neither ADMIN_PRIVATE_KEY nor PRIVATE_KEY is set")?;
        let package_id = std::env::var("PACKAGE_ID")
            .context("PACKAGE_ID is not set")?
            .parse::<ObjectId>()
            .context("PACKAGE_ID is not a valid object id")?;
        let network = std::env::var("SUI_NETWORK").unwrap_or_else(|_| "testnet".to_string());

        Ok(Self {
            admin_private_key,
            package_id,
            network,
        })
    }
}
