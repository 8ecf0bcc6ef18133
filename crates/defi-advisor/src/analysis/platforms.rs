//! Platform-Interaction Analyzer
//!
//! Detects which registry protocols a wallet has touched, from platform
//! tokens in the balance listing and position objects in the object listing.

use tracing::debug;

use crate::advice::platform_recommendations;
use crate::matcher::{classify_position_type, is_coin_wrapper, Matcher};
use crate::model::{
    ActivePlatform, CoinBalance, DefiPosition, OwnedObject, PlatformDetection, TokenHolding,
};
use crate::registry::PlatformRegistry;

/// Detects platform interactions via the registry markers.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlatformDetector {
    matcher: Matcher,
}

impl PlatformDetector {
    pub const fn new(registry: PlatformRegistry) -> Self {
        Self {
            matcher: Matcher::new(registry),
        }
    }

    /// Analyze objects and balances into a [`PlatformDetection`].
    ///
    /// Every marker hit is retained: a balance matching two platforms
    /// contributes one entry per platform, with no dedup.
    pub fn detect(&self, objects: &[OwnedObject], balances: &[CoinBalance]) -> PlatformDetection {
        let mut detection = PlatformDetection::default();

        for balance in balances {
            for hit in self.matcher.match_coin_type(&balance.coin_type) {
                detection.active_platforms.push(ActivePlatform {
                    platform: hit.entry.name.to_string(),
                    category: hit.entry.category,
                    token: hit.marker.to_uppercase(),
                    balance: balance.total_balance.clone(),
                });
                detection.token_holdings.push(TokenHolding {
                    token: hit.marker.to_uppercase(),
                    platform: hit.entry.name.to_string(),
                    balance: balance.total_balance.clone(),
                });
            }
        }

        for object in objects {
            // Coin wrappers are balances, not positions.
            if is_coin_wrapper(&object.object_type) {
                continue;
            }
            for hit in self.matcher.match_object_type(&object.object_type) {
                detection.defi_positions.push(DefiPosition {
                    platform: hit.entry.name.to_string(),
                    category: hit.entry.category,
                    position_type: classify_position_type(&object.object_type),
                    object_id: object.object_id.clone(),
                });
            }
        }

        debug!(
            platforms = detection.active_platforms.len(),
            positions = detection.defi_positions.len(),
            "platform detection complete"
        );

        detection.recommendations = platform_recommendations(
            &detection.active_platforms,
            &detection.token_holdings,
            &detection.defi_positions,
        );
        detection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PositionType, Recommendation};
    use crate::registry::PlatformCategory;

    fn detector() -> PlatformDetector {
        PlatformDetector::new(PlatformRegistry::new())
    }

    #[test]
    fn test_cetus_token_detected() {
        let balances = vec![CoinBalance::new("0x6864a6::cetus::CETUS", "12000")];
        let detection = detector().detect(&[], &balances);

        assert_eq!(detection.active_platforms.len(), 1);
        let active = &detection.active_platforms[0];
        assert_eq!(active.platform, "Cetus Protocol");
        assert_eq!(active.category, PlatformCategory::DexAmm);
        assert_eq!(active.token, "CETUS");
        assert_eq!(active.balance, "12000");
        assert_eq!(detection.token_holdings.len(), 1);
        assert!(detection.recommendations.contains(&Recommendation::WatchImpermanentLoss));
        assert!(detection.recommendations.contains(&Recommendation::StakePlatformTokens));
    }

    #[test]
    fn test_pool_object_is_liquidity_position() {
        let objects = vec![OwnedObject::new(
            "0x91bfbc386a41afcfd9b2533058d7e915a1d3829089cc268ff4333d54d6339ca1::pool::Position",
            "0xobj1",
        )];
        let detection = detector().detect(&objects, &[]);

        assert_eq!(detection.defi_positions.len(), 1);
        let position = &detection.defi_positions[0];
        assert_eq!(position.platform, "Turbos Finance");
        assert_eq!(position.position_type, PositionType::Liquidity);
        assert_eq!(position.object_id, "0xobj1");
    }

    #[test]
    fn test_wrapper_object_excluded() {
        let objects = vec![OwnedObject::new(
            "0x2::coin::Coin<0x1eabed72c53feb3805120a081dc15963c204dc8d091542592abaf7a35689b2fb::cetus::CETUS>",
            "0xobj2",
        )];
        let detection = detector().detect(&objects, &[]);
        assert!(detection.defi_positions.is_empty());
    }

    #[test]
    fn test_no_activity_recommendations() {
        let detection = detector().detect(&[], &[]);
        assert!(detection.active_platforms.is_empty());
        assert!(detection.recommendations.contains(&Recommendation::NotUsingDefiYet));
        assert!(detection.recommendations.contains(&Recommendation::StartWithLending));
    }

    #[test]
    fn test_single_platform_counts_distinct() {
        // Two Scallop markers on one balance: two entries, one distinct platform.
        let balances = vec![CoinBalance::new("0xefe::token::SCALLOP", "10")];
        let detection = detector().detect(&[], &balances);
        assert_eq!(detection.active_platforms.len(), 2);
        assert_eq!(detection.distinct_platform_count(), 1);
        assert!(detection.recommendations.contains(&Recommendation::SpreadAcrossPlatforms));
        // Scallop is a lending platform
        assert!(detection.recommendations.contains(&Recommendation::MonitorLendingRates));
    }

    #[test]
    fn test_multiple_platforms() {
        let balances = vec![
            CoinBalance::new("0xaaa::navx::NAVX", "5"),
            CoinBalance::new("0xbbb::cetus::CETUS", "7"),
        ];
        let detection = detector().detect(&[], &balances);
        assert_eq!(detection.distinct_platform_count(), 2);
        assert!(detection.recommendations.contains(&Recommendation::WellDiversifiedAcrossPlatforms));
        assert!(detection.recommendations.contains(&Recommendation::MonitorLendingRates));
        assert!(detection.recommendations.contains(&Recommendation::WatchImpermanentLoss));
    }
}
