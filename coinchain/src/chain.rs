//! EVM chain definitions and the registry they are looked up in.
//!
//! - [`ChainInfo`] - Metadata of a single EVM chain
//! - [`NativeCurrency`] - The chain's gas token
//! - [`RpcUrls`] - HTTP and WebSocket RPC endpoints
//! - [`BlockExplorer`] - A block explorer front end
//! - [`ChainRegistry`] - Chains indexed by numeric chain ID
//!
//! # Serialization
//!
//! [`ChainInfo`] uses the camelCase chain-definition shape common to EVM
//! tooling:
//!
//! ```json
//! {
//!   "id": 1,
//!   "name": "Ethereum",
//!   "nativeCurrency": { "name": "Ether", "symbol": "ETH", "decimals": 18 },
//!   "rpcUrls": { "default": { "http": ["https://eth.merkle.io"] } },
//!   "blockExplorers": { "default": { "name": "Etherscan", "url": "https://etherscan.io" } }
//! }
//! ```

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Key of the endpoint set every chain carries.
pub const DEFAULT_KEY: &str = "default";

/// Metadata describing an EVM chain.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainInfo {
    /// EIP-155 chain ID.
    pub id: u64,
    /// Human-readable chain name.
    pub name: String,
    /// The chain's native currency.
    pub native_currency: NativeCurrency,
    /// RPC endpoint sets keyed by provider, always including `default`.
    pub rpc_urls: BTreeMap<String, RpcUrls>,
    /// Block explorers keyed by provider.
    pub block_explorers: Option<BTreeMap<String, BlockExplorer>>,
    /// Whether the chain is a test network.
    pub testnet: Option<bool>,
}

/// The native (gas) currency of a chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeCurrency {
    /// Currency name (e.g. `"Ether"`).
    pub name: String,
    /// Ticker symbol (e.g. `"ETH"`).
    pub symbol: String,
    /// Number of decimals of the smallest unit.
    pub decimals: u8,
}

/// A set of RPC endpoints.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcUrls {
    /// HTTP(S) JSON-RPC endpoints.
    pub http: Vec<String>,
    /// WebSocket JSON-RPC endpoints.
    pub web_socket: Option<Vec<String>>,
}

/// A block explorer front end.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockExplorer {
    /// Explorer name.
    pub name: String,
    /// Explorer base URL.
    pub url: String,
    /// Explorer API base URL.
    pub api_url: Option<String>,
}

impl NativeCurrency {
    /// Creates a native currency description.
    pub fn new(name: impl Into<String>, symbol: impl Into<String>, decimals: u8) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            decimals,
        }
    }

    /// An 18-decimals currency named "Ether" with symbol `ETH`.
    #[must_use]
    pub fn ether() -> Self {
        Self::new("Ether", "ETH", 18)
    }
}

impl ChainInfo {
    /// Creates a chain with a single default HTTP RPC endpoint.
    pub fn new(
        id: u64,
        name: impl Into<String>,
        native_currency: NativeCurrency,
        rpc_url: impl Into<String>,
    ) -> Self {
        let rpc = RpcUrls {
            http: vec![rpc_url.into()],
            web_socket: None,
        };
        Self {
            id,
            name: name.into(),
            native_currency,
            rpc_urls: BTreeMap::from([(DEFAULT_KEY.to_owned(), rpc)]),
            block_explorers: None,
            testnet: None,
        }
    }

    /// Adds a default WebSocket endpoint.
    #[must_use]
    pub fn with_web_socket(mut self, url: impl Into<String>) -> Self {
        self.rpc_urls
            .entry(DEFAULT_KEY.to_owned())
            .or_default()
            .web_socket
            .get_or_insert_with(Vec::new)
            .push(url.into());
        self
    }

    /// Sets the default block explorer.
    #[must_use]
    pub fn with_explorer(self, name: impl Into<String>, url: impl Into<String>) -> Self {
        self.with_explorer_api(name, url, None::<String>)
    }

    /// Sets the default block explorer along with its API URL.
    #[must_use]
    pub fn with_explorer_api(
        mut self,
        name: impl Into<String>,
        url: impl Into<String>,
        api_url: Option<impl Into<String>>,
    ) -> Self {
        let explorer = BlockExplorer {
            name: name.into(),
            url: url.into(),
            api_url: api_url.map(Into::into),
        };
        self.block_explorers
            .get_or_insert_with(BTreeMap::new)
            .insert(DEFAULT_KEY.to_owned(), explorer);
        self
    }

    /// Marks the chain as a test network.
    #[must_use]
    pub fn testnet(mut self) -> Self {
        self.testnet = Some(true);
        self
    }

    /// Returns the default HTTP RPC endpoints.
    #[must_use]
    pub fn default_rpc_urls(&self) -> &[String] {
        self.rpc_urls
            .get(DEFAULT_KEY)
            .map(|urls| urls.http.as_slice())
            .unwrap_or_default()
    }
}

/// Registry of chains indexed by chain ID.
///
/// Registering a chain whose ID is already present replaces the previous
/// entry, so configuration can override the built-in table.
///
/// # Example
///
/// ```
/// use coinchain::chain::{ChainInfo, ChainRegistry, NativeCurrency};
///
/// let registry = ChainRegistry::known().with_chains(vec![ChainInfo::new(
///     31337,
///     "Anvil",
///     NativeCurrency::ether(),
///     "http://127.0.0.1:8545",
/// )]);
///
/// assert_eq!(registry.get(31337).map(|c| c.name.as_str()), Some("Anvil"));
/// assert_eq!(registry.get(1).map(|c| c.name.as_str()), Some("Ethereum"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ChainRegistry {
    chains: HashMap<u64, ChainInfo>,
}

impl ChainRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry pre-populated with the given chains.
    #[must_use]
    pub fn from_chains(chains: Vec<ChainInfo>) -> Self {
        let mut registry = Self {
            chains: HashMap::with_capacity(chains.len()),
        };
        registry.register(chains);
        registry
    }

    /// Creates a registry holding the built-in [`known_chains`](crate::chains::known_chains).
    #[must_use]
    pub fn known() -> Self {
        Self::from_chains(crate::chains::known_chains())
    }

    /// Registers chains, replacing entries with the same ID.
    pub fn register(&mut self, chains: Vec<ChainInfo>) {
        for chain in chains {
            self.chains.insert(chain.id, chain);
        }
    }

    /// Builder-style method: registers chains and returns `self`.
    #[must_use]
    pub fn with_chains(mut self, chains: Vec<ChainInfo>) -> Self {
        self.register(chains);
        self
    }

    /// Looks up a chain by chain ID.
    #[must_use]
    pub fn get(&self, chain_id: u64) -> Option<&ChainInfo> {
        self.chains.get(&chain_id)
    }

    /// Iterates over the registered chains in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &ChainInfo> {
        self.chains.values()
    }

    /// Returns the number of registered chains.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chains.len()
    }

    /// Returns `true` if no chains are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anvil() -> ChainInfo {
        ChainInfo::new(31337, "Anvil", NativeCurrency::ether(), "http://127.0.0.1:8545")
    }

    #[test]
    fn test_chain_info_serialize_shape() {
        let chain = ChainInfo::new(1, "Ethereum", NativeCurrency::ether(), "https://eth.merkle.io")
            .with_explorer("Etherscan", "https://etherscan.io");
        let value = serde_json::to_value(&chain).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 1,
                "name": "Ethereum",
                "nativeCurrency": { "name": "Ether", "symbol": "ETH", "decimals": 18 },
                "rpcUrls": { "default": { "http": ["https://eth.merkle.io"] } },
                "blockExplorers": {
                    "default": { "name": "Etherscan", "url": "https://etherscan.io" }
                }
            })
        );
    }

    #[test]
    fn test_chain_info_serialize_optional_fields() {
        let chain = anvil()
            .with_web_socket("ws://127.0.0.1:8545")
            .with_explorer_api("Local", "http://127.0.0.1:4000", Some("http://127.0.0.1:4000/api"))
            .testnet();
        let value = serde_json::to_value(&chain).unwrap();
        assert_eq!(value["testnet"], true);
        assert_eq!(
            value["rpcUrls"]["default"]["webSocket"],
            serde_json::json!(["ws://127.0.0.1:8545"])
        );
        assert_eq!(
            value["blockExplorers"]["default"]["apiUrl"],
            "http://127.0.0.1:4000/api"
        );
    }

    #[test]
    fn test_chain_info_deserialize_minimal() {
        let chain: ChainInfo = serde_json::from_str(
            r#"{
                "id": 31337,
                "name": "Anvil",
                "nativeCurrency": { "name": "Ether", "symbol": "ETH", "decimals": 18 },
                "rpcUrls": { "default": { "http": ["http://127.0.0.1:8545"] } }
            }"#,
        )
        .unwrap();
        assert_eq!(chain, anvil());
        assert_eq!(chain.default_rpc_urls(), ["http://127.0.0.1:8545"]);
    }

    #[test]
    fn test_registry_lookup() {
        let registry = ChainRegistry::from_chains(vec![anvil()]);
        assert_eq!(registry.len(), 1);
        assert!(registry.get(31337).is_some());
        assert!(registry.get(1).is_none());
    }

    #[test]
    fn test_registry_register_replaces_same_id() {
        let mut registry = ChainRegistry::from_chains(vec![anvil()]);
        let mut renamed = anvil();
        renamed.name = "Local".into();
        registry.register(vec![renamed]);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(31337).unwrap().name, "Local");
    }

    #[test]
    fn test_registry_empty() {
        let registry = ChainRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.iter().count(), 0);
    }
}
