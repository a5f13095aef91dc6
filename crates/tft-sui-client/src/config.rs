//! Network configuration for the Sui client.
//!
//! This module provides configuration options for connecting to the
//! public Sui networks (mainnet, testnet, devnet) or a custom endpoint.

use crate::error::SuiError;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

/// Default request timeout. A remote node that never answers should turn
/// into an error, not a hang.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Known Sui networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    /// Sui mainnet
    Mainnet,
    /// Sui testnet
    Testnet,
    /// Sui devnet
    Devnet,
    /// Local development network
    Localnet,
    /// Custom network
    Custom,
}

impl Network {
    /// Returns the network name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Devnet => "devnet",
            Network::Localnet => "localnet",
            Network::Custom => "custom",
        }
    }
}

impl FromStr for Network {
    type Err = SuiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            "devnet" => Ok(Network::Devnet),
            "localnet" | "local" => Ok(Network::Localnet),
            other => Err(SuiError::Config(format!("unknown network: {other}"))),
        }
    }
}

/// Configuration for the Sui client.
///
/// Use one of the preset constructors like [`SuiConfig::testnet()`], or
/// [`SuiConfig::custom()`] for a self-hosted fullnode.
///
/// # Example
///
/// ```rust
/// use tft_sui_client::SuiConfig;
///
/// let config = SuiConfig::testnet()
///     .with_timeout(std::time::Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct SuiConfig {
    /// The network to connect to
    pub(crate) network: Network,
    /// Fullnode JSON-RPC URL
    pub(crate) fullnode_url: Url,
    /// Request timeout
    pub(crate) timeout: Duration,
}

impl Default for SuiConfig {
    fn default() -> Self {
        Self::testnet()
    }
}

impl SuiConfig {
    /// Creates a configuration for Sui mainnet.
    pub fn mainnet() -> Self {
        Self {
            network: Network::Mainnet,
            fullnode_url: Url::parse("https://fullnode.mainnet.sui.io:443")
                .expect("valid mainnet URL"),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Creates a configuration for Sui testnet.
    pub fn testnet() -> Self {
        Self {
            network: Network::Testnet,
            fullnode_url: Url::parse("https://fullnode.testnet.sui.io:443")
                .expect("valid testnet URL"),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Creates a configuration for Sui devnet.
    pub fn devnet() -> Self {
        Self {
            network: Network::Devnet,
            fullnode_url: Url::parse("https://fullnode.devnet.sui.io:443")
                .expect("valid devnet URL"),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Creates a configuration for a local development network on the
    /// default fullnode port.
    pub fn localnet() -> Self {
        Self {
            network: Network::Localnet,
            fullnode_url: Url::parse("http://127.0.0.1:9000").expect("valid local URL"),
            timeout: Duration::from_secs(10),
        }
    }

    /// Creates a custom configuration with the specified fullnode URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn custom(fullnode_url: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            network: Network::Custom,
            fullnode_url: Url::parse(fullnode_url)?,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Creates a configuration for a named network.
    ///
    /// # Errors
    ///
    /// Returns an error if the network name is not recognized.
    pub fn for_network(name: &str) -> crate::error::SuiResult<Self> {
        Ok(match name.parse::<Network>()? {
            Network::Mainnet => Self::mainnet(),
            Network::Testnet => Self::testnet(),
            Network::Devnet => Self::devnet(),
            Network::Localnet => Self::localnet(),
            // FromStr never produces Custom
            Network::Custom => unreachable!(),
        })
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the network this config is for.
    pub fn network(&self) -> Network {
        self.network
    }

    /// Returns the fullnode URL.
    pub fn fullnode_url(&self) -> &Url {
        &self.fullnode_url
    }

    /// Returns the request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_testnet_config() {
        let config = SuiConfig::testnet();
        assert_eq!(config.network(), Network::Testnet);
        assert!(config.fullnode_url().as_str().contains("testnet"));
    }

    #[test]
    fn test_mainnet_config() {
        let config = SuiConfig::mainnet();
        assert_eq!(config.network(), Network::Mainnet);
        assert!(config.fullnode_url().as_str().contains("mainnet"));
    }

    #[test]
    fn test_custom_config() {
        let config = SuiConfig::custom("https://my-node.example.com:443").unwrap();
        assert_eq!(config.network(), Network::Custom);
        assert!(config.fullnode_url().as_str().contains("my-node"));
    }

    #[test]
    fn test_for_network() {
        assert_eq!(
            SuiConfig::for_network("testnet").unwrap().network(),
            Network::Testnet
        );
        assert_eq!(
            SuiConfig::for_network("MAINNET").unwrap().network(),
            Network::Mainnet
        );
        assert!(SuiConfig::for_network("betanet").is_err());
    }

    #[test]
    fn test_with_timeout() {
        let config = SuiConfig::testnet().with_timeout(Duration::from_secs(5));
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_network_as_str() {
        assert_eq!(Network::Testnet.as_str(), "testnet");
        assert_eq!("local".parse::<Network>().unwrap(), Network::Localnet);
    }
}
