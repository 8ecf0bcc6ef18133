//! Platform Registry
//!
//! Static catalog of known Sui DeFi protocols. Matching is entirely
//! table-driven: adding a protocol means adding an entry here, nothing else.

use serde::{Deserialize, Serialize};

/// Protocol category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformCategory {
    Lending,
    DexAmm,
    Derivatives,
    NftDefi,
    Orderbook,
    Other,
}

impl PlatformCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Lending => "Lending",
            Self::DexAmm => "DEX/AMM",
            Self::Derivatives => "Derivatives",
            Self::NftDefi => "NFT/DeFi",
            Self::Orderbook => "Orderbook",
            Self::Other => "Other",
        }
    }
}

/// One known protocol. Constructed once in the static table, never mutated.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct PlatformEntry {
    /// Unique short code
    pub key: &'static str,
    pub name: &'static str,
    pub category: PlatformCategory,
    pub description: &'static str,
    /// Lowercase substrings identifying the protocol's coin types
    pub coin_type_markers: &'static [&'static str],
    /// Lowercase substrings identifying the protocol's package ids
    pub package_id_markers: &'static [&'static str],
    pub features: &'static [&'static str],
}

/// Known protocols, in detection order. Identifiers are illustrative:
/// matching is substring-based, so a marker only needs to appear somewhere
/// in a deployed type string.
static PLATFORMS: &[PlatformEntry] = &[
    PlatformEntry {
        key: "NAVI",
        name: "NAVI Protocol",
        category: PlatformCategory::Lending,
        description: "Leading lending protocol on Sui",
        coin_type_markers: &["navi", "navx"],
        package_id_markers: &[
            "0xa99b8952d4f7d947ea77fe0ecdcc9e5fc0bcab2841d6e2a5aa00c3044e5544b5",
            "0xd899cf7d2b5db716bd2cf55599fb0d5ee38a3061e7b6bb6eebf73fa5bc4c81ca",
        ],
        features: &["Lending", "Borrowing", "Yield Farming"],
    },
    PlatformEntry {
        key: "CETUS",
        name: "Cetus Protocol",
        category: PlatformCategory::DexAmm,
        description: "Concentrated liquidity DEX on Sui",
        coin_type_markers: &["cetus"],
        package_id_markers: &[
            "0x1eabed72c53feb3805120a081dc15963c204dc8d091542592abaf7a35689b2fb",
            "0x0868b71c0cba55bf0faf6c40df8c179c67a4d0ba0e79965b68b3d72d7dfbf666",
        ],
        features: &["DEX", "Liquidity Pools", "Concentrated Liquidity"],
    },
    PlatformEntry {
        key: "SUILEND",
        name: "Suilend",
        category: PlatformCategory::Lending,
        description: "Decentralized lending protocol",
        coin_type_markers: &["slnd"],
        package_id_markers: &[
            "0xf95b06141ed4a174f239417323bde3f209b972f5930d8521ea38a52aff3a6ddf",
        ],
        features: &["Lending", "Borrowing"],
    },
    PlatformEntry {
        key: "SCALLOP",
        name: "Scallop",
        category: PlatformCategory::Lending,
        description: "Multi-feature DeFi protocol",
        coin_type_markers: &["sca", "scallop"],
        package_id_markers: &[
            "0xefe8b36d5b2e43728cc323298626b83177803521d195cfb11e15b910e892fddf",
        ],
        features: &["Lending", "Staking", "Yield Farming"],
    },
    PlatformEntry {
        key: "DEEPBOOK",
        name: "DeepBook",
        category: PlatformCategory::Orderbook,
        description: "Central limit order book DEX",
        coin_type_markers: &["deep"],
        package_id_markers: &[
            "0x000000000000000000000000000000000000000000000000000000000000dee9",
        ],
        features: &["Order Book", "Trading", "Market Making"],
    },
    PlatformEntry {
        key: "BLUEMOVE",
        name: "BlueMove",
        category: PlatformCategory::NftDefi,
        description: "NFT marketplace with DeFi features",
        coin_type_markers: &["move"],
        package_id_markers: &[
            "0x5c8657a6009556804585cd667be3b43487062195422ff586333721de0f8baeae",
        ],
        features: &["NFT Trading", "Staking", "Launchpad"],
    },
    PlatformEntry {
        key: "TURBOS",
        name: "Turbos Finance",
        category: PlatformCategory::DexAmm,
        description: "Concentrated liquidity AMM",
        coin_type_markers: &["turbos"],
        package_id_markers: &[
            "0x91bfbc386a41afcfd9b2533058d7e915a1d3829089cc268ff4333d54d6339ca1",
        ],
        features: &["AMM", "Concentrated Liquidity", "Yield Farming"],
    },
    PlatformEntry {
        key: "AFTERMATH",
        name: "Aftermath Finance",
        category: PlatformCategory::DexAmm,
        description: "Multi-pool AMM with advanced features",
        coin_type_markers: &["af", "aftermath"],
        package_id_markers: &[
            "0xefe170ec0be4d762196bedecd7a065816576198a6527c99282a2551aaa7da38c",
            "0x0625dc2cd40aee3998a1d6620de8892964c15066e0a285d8b573910ed4c75d50",
        ],
        features: &["DEX", "Multi-Pool AMM", "Yield Farming", "Liquidity Mining"],
    },
    PlatformEntry {
        key: "BLUEFIN",
        name: "Bluefin",
        category: PlatformCategory::Derivatives,
        description: "Decentralized derivatives and perpetuals exchange",
        coin_type_markers: &["blue", "bluefin"],
        package_id_markers: &[
            "0x3492c874c1e3b3e2984e8c41b589e642d4d0a5d6459e5a9cfc2d52fd7c89c267",
        ],
        features: &["Perpetuals", "Derivatives", "Margin Trading", "Order Book"],
    },
];

/// Read-only view over the platform table.
#[derive(Clone, Copy, Debug)]
pub struct PlatformRegistry {
    entries: &'static [PlatformEntry],
}

impl Default for PlatformRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformRegistry {
    pub const fn new() -> Self {
        Self { entries: PLATFORMS }
    }

    /// Build over an alternate table (used by tests).
    pub const fn with_entries(entries: &'static [PlatformEntry]) -> Self {
        Self { entries }
    }

    /// All entries in fixed detection order.
    pub const fn entries(&self) -> &'static [PlatformEntry] {
        self.entries
    }

    /// Case-insensitive lookup by short code.
    pub fn by_key(&self, key: &str) -> Option<&'static PlatformEntry> {
        self.entries.iter().find(|e| e.key.eq_ignore_ascii_case(key))
    }

    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_key() {
        let registry = PlatformRegistry::new();
        let cetus = registry.by_key("cetus").unwrap();
        assert_eq!(cetus.name, "Cetus Protocol");
        assert_eq!(cetus.category, PlatformCategory::DexAmm);
        assert!(registry.by_key("nonexistent").is_none());
    }

    #[test]
    fn test_required_categories_present() {
        let registry = PlatformRegistry::new();
        for category in [
            PlatformCategory::Lending,
            PlatformCategory::DexAmm,
            PlatformCategory::Derivatives,
            PlatformCategory::NftDefi,
            PlatformCategory::Orderbook,
        ] {
            assert!(
                registry.entries().iter().any(|e| e.category == category),
                "no entry for {category:?}"
            );
        }
    }

    #[test]
    fn test_markers_are_lowercase() {
        for entry in PlatformRegistry::new().entries() {
            for marker in entry.coin_type_markers.iter().chain(entry.package_id_markers) {
                assert_eq!(*marker, marker.to_lowercase(), "marker on {}", entry.key);
            }
        }
    }
}
