//! Marker Matching
//!
//! Case-insensitive substring matching of coin/object type strings against
//! the platform registry, plus keyword classification of position objects.

use crate::model::PositionType;
use crate::registry::{PlatformEntry, PlatformRegistry};

/// Standard fungible-token wrapper marker. Objects of this shape are coin
/// holders counted as balances, never positions.
pub const COIN_WRAPPER_MARKER: &str = "coin::coin";

/// One registry hit for an input type string.
#[derive(Clone, Copy, Debug)]
pub struct MarkerMatch {
    pub entry: &'static PlatformEntry,
    pub marker: &'static str,
}

/// Matches type strings against a registry. Cheap to copy; the registry is a
/// static table.
#[derive(Clone, Copy, Debug, Default)]
pub struct Matcher {
    registry: PlatformRegistry,
}

impl Matcher {
    pub const fn new(registry: PlatformRegistry) -> Self {
        Self { registry }
    }

    pub const fn registry(&self) -> &PlatformRegistry {
        &self.registry
    }

    /// All (entry, marker) hits for a coin type. Registry order, then marker
    /// order; a type may hit zero, one, or several entries and every hit is
    /// emitted.
    pub fn match_coin_type(&self, coin_type: &str) -> Vec<MarkerMatch> {
        self.match_markers(coin_type, |entry| entry.coin_type_markers)
    }

    /// Same algorithm over the package-id markers.
    pub fn match_object_type(&self, object_type: &str) -> Vec<MarkerMatch> {
        self.match_markers(object_type, |entry| entry.package_id_markers)
    }

    fn match_markers(
        &self,
        input: &str,
        markers_of: fn(&PlatformEntry) -> &'static [&'static str],
    ) -> Vec<MarkerMatch> {
        let lower = input.to_lowercase();
        let mut matches = Vec::new();
        for entry in self.registry.entries() {
            for marker in markers_of(entry) {
                if lower.contains(marker) {
                    matches.push(MarkerMatch { entry, marker });
                }
            }
        }
        matches
    }
}

/// Whether an object type is a plain fungible-coin wrapper.
pub fn is_coin_wrapper(object_type: &str) -> bool {
    object_type.to_lowercase().contains(COIN_WRAPPER_MARKER)
}

/// Keyword scan with fixed precedence; the first matching rule wins.
pub fn classify_position_type(object_type: &str) -> PositionType {
    let lower = object_type.to_lowercase();
    if lower.contains("pool") || lower.contains("lp") {
        PositionType::Liquidity
    } else if lower.contains("stake") || lower.contains("staking") {
        PositionType::Staking
    } else if lower.contains("borrow") || lower.contains("loan") {
        PositionType::Lending
    } else if lower.contains("vault") {
        PositionType::Vault
    } else if lower.contains("farm") {
        PositionType::Farming
    } else {
        PositionType::Generic
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::PlatformCategory;

    fn matcher() -> Matcher {
        Matcher::new(PlatformRegistry::new())
    }

    const ALPHA: PlatformEntry = PlatformEntry {
        key: "ALPHA",
        name: "Alpha Swap",
        category: PlatformCategory::DexAmm,
        description: "test-only entry",
        coin_type_markers: &["alpha"],
        package_id_markers: &["0xaaaa"],
        features: &[],
    };
    const BETA: PlatformEntry = PlatformEntry {
        key: "BETA",
        name: "Beta Lend",
        category: PlatformCategory::Lending,
        description: "test-only entry",
        coin_type_markers: &["beta"],
        package_id_markers: &["0xbbbb"],
        features: &[],
    };
    static ALPHA_FIRST: &[PlatformEntry] = &[ALPHA, BETA];
    static BETA_FIRST: &[PlatformEntry] = &[BETA, ALPHA];

    #[test]
    fn test_coin_type_match_is_case_insensitive() {
        let hits = matcher().match_coin_type("0xabc::token::CETUS");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].entry.name, "Cetus Protocol");
        assert_eq!(hits[0].marker, "cetus");
    }

    #[test]
    fn test_no_match_yields_empty() {
        assert!(matcher().match_coin_type("0x2::unknown::XYZ").is_empty());
    }

    #[test]
    fn test_multiple_markers_all_emitted() {
        // "scallop" contains both "sca" and "scallop"
        let hits = matcher().match_coin_type("0xefe::token::SCALLOP");
        let markers: Vec<_> = hits.iter().map(|h| h.marker).collect();
        assert_eq!(markers, vec!["sca", "scallop"]);
    }

    #[test]
    fn test_ordering_is_deterministic() {
        let m = matcher();
        let input = "0xdef::navi_cetus_bridge::LP";
        let first: Vec<_> = m.match_coin_type(input).iter().map(|h| h.marker).collect();
        let second: Vec<_> = m.match_coin_type(input).iter().map(|h| h.marker).collect();
        assert_eq!(first, second);
        // NAVI precedes CETUS in the table
        assert_eq!(first, vec!["navi", "cetus"]);
    }

    #[test]
    fn test_match_set_independent_of_table_order() {
        let input = "0x1::alpha_beta::TOKEN";
        let hits = |table| {
            Matcher::new(PlatformRegistry::with_entries(table))
                .match_coin_type(input)
                .iter()
                .map(|h| (h.entry.key, h.marker))
                .collect::<Vec<_>>()
        };

        let alpha_first = hits(ALPHA_FIRST);
        let beta_first = hits(BETA_FIRST);

        // Emitted order follows table order...
        assert_eq!(alpha_first, vec![("ALPHA", "alpha"), ("BETA", "beta")]);
        assert_eq!(beta_first, vec![("BETA", "beta"), ("ALPHA", "alpha")]);

        // ...but the set of matches is the same either way.
        let mut sorted_a = alpha_first;
        let mut sorted_b = beta_first;
        sorted_a.sort_unstable();
        sorted_b.sort_unstable();
        assert_eq!(sorted_a, sorted_b);
    }

    #[test]
    fn test_object_type_matches_package_ids() {
        let hits = matcher().match_object_type(
            "0x1eabed72c53feb3805120a081dc15963c204dc8d091542592abaf7a35689b2fb::pool::Position",
        );
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].entry.key, "CETUS");
    }

    #[test]
    fn test_position_precedence() {
        assert_eq!(classify_position_type("x::pool::LP"), PositionType::Liquidity);
        // "pool" wins over "stake" regardless of position in the string
        assert_eq!(classify_position_type("x::stake_pool::Receipt"), PositionType::Liquidity);
        assert_eq!(classify_position_type("x::staking::Receipt"), PositionType::Staking);
        assert_eq!(classify_position_type("x::borrow::Obligation"), PositionType::Lending);
        assert_eq!(classify_position_type("x::vault::Share"), PositionType::Vault);
        assert_eq!(classify_position_type("x::farm::Ticket"), PositionType::Farming);
        assert_eq!(classify_position_type("x::misc::Thing"), PositionType::Generic);
    }

    #[test]
    fn test_coin_wrapper_detection() {
        assert!(is_coin_wrapper("0x2::coin::Coin<0x2::sui::SUI>"));
        assert!(!is_coin_wrapper("0x2::sui::SUI"));
    }
}
