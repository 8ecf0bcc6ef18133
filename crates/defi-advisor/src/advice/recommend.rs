//! Recommendation rule tables.
//!
//! Deterministic, ordered lists keyed on coarse portfolio/platform metrics.
//! The appended conditional lines are cumulative, not alternatives to the
//! base branch.

use crate::model::{
    distinct_platform_count, ActivePlatform, DefiPosition, Recommendation, TokenHolding,
};
use crate::registry::PlatformCategory;

/// Portfolio recommendations from the coin-type count tiers.
pub fn portfolio_recommendations(
    total_coin_types: usize,
    has_native: bool,
    has_stablecoins: bool,
) -> Vec<Recommendation> {
    let mut recs = match total_coin_types {
        0 => vec![
            Recommendation::AcquireSui,
            Recommendation::LearnEcosystem,
            Recommendation::DollarCostAverage,
        ],
        1 | 2 => vec![
            Recommendation::DiversifyIntoStablecoins,
            Recommendation::StartStakingSui,
            Recommendation::ExploreDefiProtocols,
        ],
        _ => vec![
            Recommendation::ReviewBalanceRegularly,
            Recommendation::ConsiderYieldFarming,
            Recommendation::KeepStablecoinBuffer,
            Recommendation::RebalanceQuarterly,
        ],
    };

    if has_native {
        recs.push(Recommendation::StakeSuiHoldings);
    }
    if has_stablecoins {
        recs.push(Recommendation::HoldStablecoinsForStability);
    }
    recs
}

/// Platform recommendations. The base branch keys on the number of
/// *distinct* active platforms; category and holding lines are appended.
pub fn platform_recommendations(
    active: &[ActivePlatform],
    holdings: &[TokenHolding],
    positions: &[DefiPosition],
) -> Vec<Recommendation> {
    let mut recs = if active.is_empty() && positions.is_empty() {
        vec![
            Recommendation::NotUsingDefiYet,
            Recommendation::StartWithLending,
            Recommendation::TryDexSwapping,
            Recommendation::ResearchBeforeInvesting,
        ]
    } else if distinct_platform_count(active) == 1 {
        vec![
            Recommendation::SpreadAcrossPlatforms,
            Recommendation::AvoidSingleProtocolConcentration,
            Recommendation::ExploreOtherProtocols,
        ]
    } else {
        vec![
            Recommendation::WellDiversifiedAcrossPlatforms,
            Recommendation::MonitorPositionsRegularly,
            Recommendation::RebalancePeriodically,
        ]
    };

    if active.iter().any(|p| p.category == PlatformCategory::Lending) {
        recs.push(Recommendation::MonitorLendingRates);
    }
    if active.iter().any(|p| p.category == PlatformCategory::DexAmm) {
        recs.push(Recommendation::WatchImpermanentLoss);
    }
    if !holdings.is_empty() {
        recs.push(Recommendation::StakePlatformTokens);
    }
    recs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(portfolio_recommendations(0, false, false)[0], Recommendation::AcquireSui);
        assert_eq!(
            portfolio_recommendations(2, false, false)[0],
            Recommendation::DiversifyIntoStablecoins
        );
        assert_eq!(
            portfolio_recommendations(3, false, false)[0],
            Recommendation::ReviewBalanceRegularly
        );
    }

    #[test]
    fn test_conditional_lines_append() {
        let recs = portfolio_recommendations(1, true, true);
        let tail = &recs[recs.len() - 2..];
        assert_eq!(
            tail,
            &[
                Recommendation::StakeSuiHoldings,
                Recommendation::HoldStablecoinsForStability
            ]
        );
    }

    #[test]
    fn test_positions_without_tokens_skip_not_started() {
        let positions = vec![DefiPosition {
            platform: "Cetus Protocol".into(),
            category: PlatformCategory::DexAmm,
            position_type: crate::model::PositionType::Liquidity,
            object_id: "0x1".into(),
        }];
        let recs = platform_recommendations(&[], &[], &positions);
        assert!(!recs.contains(&Recommendation::NotUsingDefiYet));
        // Category appends look at active platforms only
        assert!(!recs.contains(&Recommendation::WatchImpermanentLoss));
    }
}
