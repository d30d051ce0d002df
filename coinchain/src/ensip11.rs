//! Conversion between coin types and EVM chain IDs.
//!
//! ENSIP-11 assigns every EVM chain the coin type `0x8000_0000 | chain_id`,
//! keeping EVM coin types clear of the SLIP-44 range. Decoding masks the most
//! significant bit off again.
//!
//! Coin types below [`SLIP44_MSB`] decode to themselves. This makes plain
//! chain IDs usable as lookup keys (`61` is Ethereum Classic on both sides).

use crate::error::CoinTypeError;

/// Most significant bit of a 32-bit coin type, set on every EVM coin type.
pub const SLIP44_MSB: u64 = 0x8000_0000;

/// Largest representable coin type.
pub const COIN_TYPE_MAX: u64 = 0xFFFF_FFFF;

/// Converts a coin type to the EVM chain ID it encodes.
///
/// # Errors
///
/// Returns [`CoinTypeError::OutOfRange`] if `coin_type` exceeds [`COIN_TYPE_MAX`].
pub const fn coin_type_to_evm_chain_id(coin_type: u64) -> Result<u64, CoinTypeError> {
    if coin_type > COIN_TYPE_MAX {
        return Err(CoinTypeError::OutOfRange(coin_type));
    }
    Ok(coin_type & (SLIP44_MSB - 1))
}

/// Encodes an EVM chain ID as an ENSIP-11 coin type.
///
/// # Errors
///
/// Returns [`CoinTypeError::InvalidChainId`] if `chain_id` collides with the
/// most significant bit.
pub const fn evm_chain_id_to_coin_type(chain_id: u64) -> Result<u64, CoinTypeError> {
    if chain_id >= SLIP44_MSB {
        return Err(CoinTypeError::InvalidChainId(chain_id));
    }
    Ok(SLIP44_MSB | chain_id)
}

/// Maps a coin type to an EVM chain ID.
///
/// Implemented by [`Ensip11`]; other implementations can be plugged into a
/// [`Resolver`](crate::resolver::Resolver).
pub trait CoinTypeConverter: Send + Sync {
    /// Returns the EVM chain ID for `coin_type`.
    ///
    /// # Errors
    ///
    /// Returns a [`CoinTypeError`] if the coin type cannot be converted.
    fn evm_chain_id(&self, coin_type: u64) -> Result<u64, CoinTypeError>;
}

/// The ENSIP-11 converter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ensip11;

impl CoinTypeConverter for Ensip11 {
    fn evm_chain_id(&self, coin_type: u64) -> Result<u64, CoinTypeError> {
        coin_type_to_evm_chain_id(coin_type)
    }
}
