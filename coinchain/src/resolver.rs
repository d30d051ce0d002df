//! Coin identifier to chain resolution.
//!
//! [`Resolver::resolve`] takes a raw identifier (as found in a request path),
//! turns it into a coin type, converts the coin type to an EVM chain ID and
//! looks the chain up in a [`ChainRegistry`].

use crate::chain::{ChainInfo, ChainRegistry};
use crate::coin::{ETH_COIN_TYPE, coin_type_of, normalize};
use crate::chains::ETHEREUM_MAINNET;
use crate::ensip11::{CoinTypeConverter, Ensip11};
use crate::error::{LookupError, ResolveError};

/// Resolves coin names and coin types to chain metadata.
///
/// Holds no mutable state; concurrent calls never interact.
///
/// # Example
///
/// ```
/// use coinchain::chain::ChainRegistry;
/// use coinchain::resolver::Resolver;
///
/// let resolver = Resolver::new(ChainRegistry::known());
/// assert_eq!(resolver.resolve("/eth").unwrap().id, 1);
/// assert_eq!(resolver.resolve("2147483658").unwrap().name, "OP Mainnet");
/// assert!(resolver.resolve("abc").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Resolver<C = Ensip11> {
    registry: ChainRegistry,
    converter: C,
}

impl Resolver {
    /// Creates a resolver using the ENSIP-11 converter.
    #[must_use]
    pub const fn new(registry: ChainRegistry) -> Self {
        Self {
            registry,
            converter: Ensip11,
        }
    }
}

impl<C: CoinTypeConverter> Resolver<C> {
    /// Creates a resolver with a custom coin type converter.
    pub const fn with_converter(registry: ChainRegistry, converter: C) -> Self {
        Self {
            registry,
            converter,
        }
    }

    /// Returns the registry chains are looked up in.
    pub const fn registry(&self) -> &ChainRegistry {
        &self.registry
    }

    /// Resolves a raw coin identifier to a registered chain.
    ///
    /// The identifier is trimmed, stripped of one leading `/` and lower-cased,
    /// then matched against the coin name table and, failing that, parsed as
    /// a decimal coin type. Coin type 60 maps to Ethereum Mainnet; any other
    /// coin type goes through the converter.
    ///
    /// # Errors
    ///
    /// - [`LookupError::InvalidCoinType`] if the identifier is neither a known
    ///   name nor a decimal number.
    /// - [`LookupError::ChainNotFound`] if no chain with the computed ID is
    ///   registered.
    /// - [`ResolveError::Conversion`] if the converter rejects the coin type.
    #[cfg_attr(
        feature = "telemetry",
        tracing::instrument(name = "coinchain.resolve", skip(self), err(level = "debug"))
    )]
    pub fn resolve(&self, raw: &str) -> Result<&ChainInfo, ResolveError> {
        let identifier = normalize(raw);

        let Some(coin_type) = coin_type_of(&identifier) else {
            return Err(LookupError::InvalidCoinType { identifier }.into());
        };

        let chain_id = if coin_type == ETH_COIN_TYPE {
            ETHEREUM_MAINNET
        } else {
            self.converter.evm_chain_id(coin_type)?
        };

        #[cfg(feature = "telemetry")]
        tracing::debug!(%identifier, coin_type, chain_id, "Resolved coin type");

        self.registry.get(chain_id).ok_or_else(|| {
            LookupError::ChainNotFound {
                identifier,
                chain_id,
            }
            .into()
        })
    }
}
