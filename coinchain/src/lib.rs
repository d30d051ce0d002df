#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Coin type to EVM chain resolution.
//!
//! This crate maps a coin identifier, either a well-known coin name such as
//! `"eth"` or a numeric SLIP-44 / ENSIP-11 coin type, to the metadata of the
//! EVM chain it denotes: name, native currency, RPC endpoints and block
//! explorers.
//!
//! # Modules
//!
//! - [`coin`] - Coin name table and identifier parsing
//! - [`ensip11`] - Coin type to EVM chain ID conversion
//! - [`chain`] - Chain metadata types and the chain registry
//! - [`chains`] - Built-in table of well-known EVM chains
//! - [`resolver`] - The coin identifier resolver
//! - [`error`] - Error types
//!
//! # Feature Flags
//!
//! - `telemetry` - Enables tracing instrumentation of lookups

pub mod chain;
pub mod chains;
pub mod coin;
pub mod ensip11;
pub mod error;
pub mod resolver;

pub use chain::{ChainInfo, ChainRegistry};
pub use error::{CoinTypeError, LookupError, ResolveError};
pub use resolver::Resolver;
