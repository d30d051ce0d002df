//! Built-in registry of well-known EVM chains.

use crate::chain::{ChainInfo, NativeCurrency};

/// Ethereum Mainnet chain ID.
pub const ETHEREUM_MAINNET: u64 = 1;

/// OP Mainnet chain ID.
pub const OPTIMISM: u64 = 10;

/// Cronos Mainnet chain ID.
pub const CRONOS: u64 = 25;

/// BNB Smart Chain chain ID.
pub const BSC: u64 = 56;

/// Ethereum Classic chain ID.
pub const ETHEREUM_CLASSIC: u64 = 61;

/// Gnosis chain ID.
pub const GNOSIS: u64 = 100;

/// Polygon Mainnet chain ID.
pub const POLYGON_MAINNET: u64 = 137;

/// Fantom Opera chain ID.
pub const FANTOM: u64 = 250;

/// `ZKsync` Era chain ID.
pub const ZKSYNC_ERA: u64 = 324;

/// Metis Andromeda chain ID.
pub const METIS: u64 = 1088;

/// Polygon zkEVM chain ID.
pub const POLYGON_ZKEVM: u64 = 1101;

/// Moonbeam chain ID.
pub const MOONBEAM: u64 = 1284;

/// Mantle chain ID.
pub const MANTLE: u64 = 5000;

/// Base Mainnet chain ID.
pub const BASE_MAINNET: u64 = 8453;

/// Holesky (testnet) chain ID.
pub const HOLESKY: u64 = 17000;

/// Arbitrum One chain ID.
pub const ARBITRUM_ONE: u64 = 42161;

/// Arbitrum Nova chain ID.
pub const ARBITRUM_NOVA: u64 = 42170;

/// Celo Mainnet chain ID.
pub const CELO_MAINNET: u64 = 42220;

/// Avalanche C-Chain chain ID.
pub const AVALANCHE_MAINNET: u64 = 43114;

/// Linea Mainnet chain ID.
pub const LINEA: u64 = 59144;

/// Blast chain ID.
pub const BLAST: u64 = 81457;

/// Base Sepolia (testnet) chain ID.
pub const BASE_SEPOLIA: u64 = 84532;

/// Scroll chain ID.
pub const SCROLL: u64 = 534_352;

/// Zora chain ID.
pub const ZORA: u64 = 7_777_777;

/// Sepolia (testnet) chain ID.
pub const SEPOLIA: u64 = 11_155_111;

/// Returns definitions for all built-in EVM chains.
#[must_use]
pub fn known_chains() -> Vec<ChainInfo> {
    vec![
        ChainInfo::new(
            ETHEREUM_MAINNET,
            "Ethereum",
            NativeCurrency::ether(),
            "https://eth.merkle.io",
        )
        .with_explorer_api(
            "Etherscan",
            "https://etherscan.io",
            Some("https://api.etherscan.io/api"),
        ),
        ChainInfo::new(
            OPTIMISM,
            "OP Mainnet",
            NativeCurrency::ether(),
            "https://mainnet.optimism.io",
        )
        .with_explorer_api(
            "Optimism Explorer",
            "https://optimistic.etherscan.io",
            Some("https://api-optimistic.etherscan.io/api"),
        ),
        ChainInfo::new(
            CRONOS,
            "Cronos Mainnet",
            NativeCurrency::new("Cronos", "CRO", 18),
            "https://evm.cronos.org",
        )
        .with_explorer("Cronos Explorer", "https://explorer.cronos.org"),
        ChainInfo::new(
            BSC,
            "BNB Smart Chain",
            NativeCurrency::new("BNB", "BNB", 18),
            "https://56.rpc.thirdweb.com",
        )
        .with_explorer_api(
            "BscScan",
            "https://bscscan.com",
            Some("https://api.bscscan.com/api"),
        ),
        ChainInfo::new(
            ETHEREUM_CLASSIC,
            "Ethereum Classic",
            NativeCurrency::new("ETC", "ETC", 18),
            "https://etc.rivet.link",
        )
        .with_explorer("Blockscout", "https://blockscout.com/etc/mainnet"),
        ChainInfo::new(
            GNOSIS,
            "Gnosis",
            NativeCurrency::new("xDAI", "XDAI", 18),
            "https://rpc.gnosischain.com",
        )
        .with_web_socket("wss://rpc.gnosischain.com/wss")
        .with_explorer_api(
            "Gnosisscan",
            "https://gnosisscan.io",
            Some("https://api.gnosisscan.io/api"),
        ),
        ChainInfo::new(
            POLYGON_MAINNET,
            "Polygon",
            NativeCurrency::new("POL", "POL", 18),
            "https://polygon-rpc.com",
        )
        .with_explorer_api(
            "PolygonScan",
            "https://polygonscan.com",
            Some("https://api.polygonscan.com/api"),
        ),
        ChainInfo::new(
            FANTOM,
            "Fantom",
            NativeCurrency::new("Fantom", "FTM", 18),
            "https://250.rpc.thirdweb.com",
        )
        .with_explorer("FTMScan", "https://ftmscan.com"),
        ChainInfo::new(
            ZKSYNC_ERA,
            "ZKsync Era",
            NativeCurrency::ether(),
            "https://mainnet.era.zksync.io",
        )
        .with_web_socket("wss://mainnet.era.zksync.io/ws")
        .with_explorer("Etherscan", "https://era.zksync.network"),
        ChainInfo::new(
            METIS,
            "Metis",
            NativeCurrency::new("Metis", "METIS", 18),
            "https://metis-mainnet.public.blastapi.io",
        )
        .with_explorer("Metis Explorer", "https://explorer.metis.io"),
        ChainInfo::new(
            POLYGON_ZKEVM,
            "Polygon zkEVM",
            NativeCurrency::ether(),
            "https://zkevm-rpc.com",
        )
        .with_explorer("PolygonScan", "https://zkevm.polygonscan.com"),
        ChainInfo::new(
            MOONBEAM,
            "Moonbeam",
            NativeCurrency::new("GLMR", "GLMR", 18),
            "https://moonbeam.public.blastapi.io",
        )
        .with_web_socket("wss://moonbeam.public.blastapi.io")
        .with_explorer("Moonscan", "https://moonscan.io"),
        ChainInfo::new(
            MANTLE,
            "Mantle",
            NativeCurrency::new("MNT", "MNT", 18),
            "https://rpc.mantle.xyz",
        )
        .with_explorer("Mantle Explorer", "https://mantlescan.xyz"),
        ChainInfo::new(
            BASE_MAINNET,
            "Base",
            NativeCurrency::ether(),
            "https://mainnet.base.org",
        )
        .with_explorer_api(
            "Basescan",
            "https://basescan.org",
            Some("https://api.basescan.org/api"),
        ),
        ChainInfo::new(
            HOLESKY,
            "Holesky",
            NativeCurrency::new("Holesky Ether", "ETH", 18),
            "https://ethereum-holesky-rpc.publicnode.com",
        )
        .with_explorer("Etherscan", "https://holesky.etherscan.io")
        .testnet(),
        ChainInfo::new(
            ARBITRUM_ONE,
            "Arbitrum One",
            NativeCurrency::ether(),
            "https://arb1.arbitrum.io/rpc",
        )
        .with_explorer_api(
            "Arbiscan",
            "https://arbiscan.io",
            Some("https://api.arbiscan.io/api"),
        ),
        ChainInfo::new(
            ARBITRUM_NOVA,
            "Arbitrum Nova",
            NativeCurrency::ether(),
            "https://nova.arbitrum.io/rpc",
        )
        .with_explorer("Arbiscan", "https://nova.arbiscan.io"),
        ChainInfo::new(
            CELO_MAINNET,
            "Celo",
            NativeCurrency::new("CELO", "CELO", 18),
            "https://forno.celo.org",
        )
        .with_explorer("Celo Explorer", "https://celoscan.io"),
        ChainInfo::new(
            AVALANCHE_MAINNET,
            "Avalanche",
            NativeCurrency::new("Avalanche", "AVAX", 18),
            "https://api.avax.network/ext/bc/C/rpc",
        )
        .with_explorer("SnowTrace", "https://snowtrace.io"),
        ChainInfo::new(LINEA, "Linea Mainnet", NativeCurrency::ether(), "https://rpc.linea.build")
            .with_web_socket("wss://rpc.linea.build")
            .with_explorer("Etherscan", "https://lineascan.build"),
        ChainInfo::new(BLAST, "Blast", NativeCurrency::ether(), "https://rpc.blast.io")
            .with_explorer("Blastscan", "https://blastscan.io"),
        ChainInfo::new(
            BASE_SEPOLIA,
            "Base Sepolia",
            NativeCurrency::new("Sepolia Ether", "ETH", 18),
            "https://sepolia.base.org",
        )
        .with_explorer("Basescan", "https://sepolia.basescan.org")
        .testnet(),
        ChainInfo::new(SCROLL, "Scroll", NativeCurrency::ether(), "https://rpc.scroll.io")
            .with_explorer("Scrollscan", "https://scrollscan.com"),
        ChainInfo::new(ZORA, "Zora", NativeCurrency::ether(), "https://rpc.zora.energy")
            .with_web_socket("wss://rpc.zora.energy")
            .with_explorer("Explorer", "https://explorer.zora.energy"),
        ChainInfo::new(
            SEPOLIA,
            "Sepolia",
            NativeCurrency::new("Sepolia Ether", "SEP", 18),
            "https://sepolia.drpc.org",
        )
        .with_explorer("Etherscan", "https://sepolia.etherscan.io")
        .testnet(),
    ]
}

/// Returns the chain IDs of all built-in chains.
#[must_use]
pub fn known_chain_ids() -> Vec<u64> {
    known_chains().into_iter().map(|c| c.id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coin::COIN_NAMES;
    use crate::ensip11::{SLIP44_MSB, coin_type_to_evm_chain_id};
    use std::collections::HashSet;

    #[test]
    fn test_known_chain_ids_are_unique() {
        let ids = known_chain_ids();
        let unique: HashSet<_> = ids.iter().copied().collect();
        assert_eq!(ids.len(), unique.len());
    }

    #[test]
    fn test_known_chains_have_default_rpc() {
        for chain in known_chains() {
            assert!(!chain.default_rpc_urls().is_empty(), "{}", chain.name);
            assert_eq!(chain.native_currency.decimals, 18, "{}", chain.name);
        }
    }

    #[test]
    fn test_every_evm_coin_name_has_a_chain() {
        let ids: HashSet<_> = known_chain_ids().into_iter().collect();
        for (name, coin_type) in COIN_NAMES {
            if coin_type & SLIP44_MSB == 0 {
                continue;
            }
            let chain_id = coin_type_to_evm_chain_id(*coin_type).unwrap();
            assert!(ids.contains(&chain_id), "{name} -> {chain_id}");
        }
    }

    #[test]
    fn test_testnets_are_flagged() {
        for chain in known_chains() {
            let expected = matches!(chain.id, HOLESKY | BASE_SEPOLIA | SEPOLIA);
            assert_eq!(chain.testnet.unwrap_or(false), expected, "{}", chain.name);
        }
    }
}
