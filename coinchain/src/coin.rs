//! Coin names, coin types and identifier parsing.
//!
//! A coin identifier is either a well-known coin name (`"eth"`, `"op"`) or a
//! decimal coin type (`"60"`, `"2147483658"`). Names resolve through
//! [`COIN_NAMES`], numbers through [`parse_coin_type`].

use std::collections::HashMap;
use std::sync::LazyLock;

/// Coin type of Ether in the SLIP-44 registry.
pub const ETH_COIN_TYPE: u64 = 60;

/// Well-known coin names and their coin types.
///
/// Legacy coins carry their SLIP-44 coin type; EVM chains carry their
/// ENSIP-11 coin type (`0x8000_0000 | chain_id`).
pub const COIN_NAMES: &[(&str, u64)] = &[
    // SLIP-44
    ("btc", 0),
    ("ltc", 2),
    ("doge", 3),
    ("dash", 5),
    ("eth", ETH_COIN_TYPE),
    ("etc", 61),
    ("atom", 118),
    ("zec", 133),
    ("xrp", 144),
    ("bch", 145),
    ("xlm", 148),
    ("eos", 194),
    ("trx", 195),
    ("algo", 283),
    ("dot", 354),
    ("near", 397),
    ("ksm", 434),
    ("fil", 461),
    ("sol", 501),
    ("egld", 508),
    ("flow", 539),
    ("bnb", 714),
    ("xtz", 1729),
    ("ada", 1815),
    ("hbar", 3030),
    // ENSIP-11
    ("op", 2_147_483_658),
    ("cro", 2_147_483_673),
    ("bsc", 2_147_483_704),
    ("gno", 2_147_483_748),
    ("matic", 2_147_483_785),
    ("ftm", 2_147_483_898),
    ("zksync", 2_147_483_972),
    ("metis", 2_147_484_736),
    ("zkevm", 2_147_484_749),
    ("glmr", 2_147_484_932),
    ("mnt", 2_147_488_648),
    ("base", 2_147_492_101),
    ("arb1", 2_147_525_809),
    ("arbnova", 2_147_525_818),
    ("celo", 2_147_525_868),
    ("avaxc", 2_147_526_762),
    ("linea", 2_147_542_792),
    ("blast", 2_147_565_105),
    ("scr", 2_148_018_000),
    ("zora", 2_155_261_425),
];

static NAME_TO_TYPE: LazyLock<HashMap<&'static str, u64>> =
    LazyLock::new(|| COIN_NAMES.iter().copied().collect());

/// Looks up a coin type by coin name, ignoring ASCII case.
#[must_use]
pub fn coin_type_by_name(name: &str) -> Option<u64> {
    if let Some(coin_type) = NAME_TO_TYPE.get(name) {
        return Some(*coin_type);
    }
    NAME_TO_TYPE.get(name.to_ascii_lowercase().as_str()).copied()
}

/// Looks up the coin name registered for a coin type.
#[must_use]
pub fn coin_name_by_type(coin_type: u64) -> Option<&'static str> {
    COIN_NAMES
        .iter()
        .find(|(_, ty)| *ty == coin_type)
        .map(|(name, _)| *name)
}

/// Normalizes a raw request identifier.
///
/// Trims surrounding whitespace, strips a single leading `/` and lower-cases
/// the rest.
#[must_use]
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix('/')
        .unwrap_or(trimmed)
        .to_lowercase()
}

/// Parses a decimal coin type.
///
/// Only ASCII digits are accepted, across the whole input. Signs, hex
/// prefixes, trailing garbage and values beyond `u64` are rejected.
#[must_use]
pub fn parse_coin_type(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Resolves a normalized identifier to a coin type, by name first.
#[must_use]
pub fn coin_type_of(identifier: &str) -> Option<u64> {
    coin_type_by_name(identifier).or_else(|| parse_coin_type(identifier))
}
