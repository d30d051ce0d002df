//! Error types for coin type resolution.
//!
//! Expected lookup failures ([`LookupError`]) are kept apart from failures of
//! the coin type conversion ([`CoinTypeError`]) so that transports can map the
//! former to client errors and the latter to server errors.

/// A coin identifier could not be resolved to a known chain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// The identifier is neither a known coin name nor a decimal coin type.
    #[error("The coin type or coin name {identifier} could not be found")]
    InvalidCoinType {
        /// The normalized coin identifier.
        identifier: String,
    },

    /// The coin type is valid but no chain with the computed ID is registered.
    #[error("The chain {identifier} with ID {chain_id} could not be found")]
    ChainNotFound {
        /// The normalized coin identifier.
        identifier: String,
        /// The EVM chain ID derived from the coin type.
        chain_id: u64,
    },
}

impl LookupError {
    /// Short, stable description of the error kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidCoinType { .. } => "Invalid coin type",
            Self::ChainNotFound { .. } => "Chain not found",
        }
    }

    /// The normalized coin identifier the lookup was made with.
    #[must_use]
    pub fn identifier(&self) -> &str {
        match self {
            Self::InvalidCoinType { identifier } | Self::ChainNotFound { identifier, .. } => {
                identifier
            }
        }
    }
}

/// Conversion between coin types and EVM chain IDs failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CoinTypeError {
    /// The coin type does not fit the 32-bit coin type space.
    #[error("Coin type {0} is out of range")]
    OutOfRange(u64),

    /// The chain ID cannot be encoded as an ENSIP-11 coin type.
    #[error("Invalid chain ID {0}")]
    InvalidChainId(u64),
}

/// Errors returned by [`Resolver::resolve`](crate::resolver::Resolver::resolve).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The identifier did not resolve to a known chain.
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// The coin type converter failed.
    #[error(transparent)]
    Conversion(#[from] CoinTypeError),
}
