//! Portfolio Analyzer
//!
//! Derives asset counts, a risk level, and insight/recommendation tags from
//! raw balance and object listings. Never fails: malformed records degrade
//! to skips, unparseable balances count as zero.

use std::collections::HashSet;

use crate::advice::portfolio_recommendations;
use crate::matcher::is_coin_wrapper;
use crate::model::{CoinBalance, Insight, OwnedObject, PortfolioSummary, RiskLevel, SpecialObject};

/// How many special-object labels the object insight lists.
const INSIGHT_EXAMPLE_LIMIT: usize = 3;

/// How many coin display names the summary carries.
const COIN_NAME_LIMIT: usize = 5;

/// Analyze a wallet's balances and objects into a [`PortfolioSummary`].
pub fn analyze_portfolio(balances: &[CoinBalance], objects: &[OwnedObject]) -> PortfolioSummary {
    let mut total_coin_types = 0usize;
    let mut seen_types: HashSet<&str> = HashSet::new();
    let mut total_balance_mist = 0u128;
    let mut has_native = false;
    let mut has_stablecoins = false;
    let mut coin_names = Vec::new();

    for balance in balances {
        if balance.coin_type.is_empty() {
            continue;
        }
        total_coin_types += 1;
        seen_types.insert(balance.coin_type.as_str());
        if let Some(value) = balance.parsed_balance() {
            total_balance_mist = total_balance_mist.saturating_add(value);
        }
        has_native |= balance.is_native();
        has_stablecoins |= balance.is_stablecoin();
        if coin_names.len() < COIN_NAME_LIMIT {
            coin_names.push(balance.display_name().to_string());
        }
    }

    // Wrapper objects are counted in objects_owned but never labelled.
    let mut special_objects = Vec::new();
    for object in objects {
        if is_coin_wrapper(&object.object_type) {
            continue;
        }
        special_objects.push(classify_special_object(&object.object_type));
    }
    let objects_owned = objects.len();

    let risk_level = RiskLevel::from_asset_count(total_coin_types);

    let mut insights = Vec::new();
    insights.push(match total_coin_types {
        0 => Insight::EmptyPortfolio,
        1 => Insight::SingleAsset,
        2 | 3 => Insight::LimitedDiversification,
        _ => Insight::GoodDiversification,
    });
    if objects_owned > 0 {
        insights.push(Insight::ObjectHoldings {
            count: objects_owned,
            examples: special_objects
                .iter()
                .take(INSIGHT_EXAMPLE_LIMIT)
                .copied()
                .collect(),
        });
    }
    if has_native {
        insights.push(Insight::NativeStakingAvailable);
    }
    if has_stablecoins {
        insights.push(Insight::StablecoinCushion);
    }

    PortfolioSummary {
        total_coin_types,
        unique_coin_types: seen_types.len(),
        objects_owned,
        total_balance_mist,
        risk_level,
        special_objects,
        coin_names,
        insights,
        recommendations: portfolio_recommendations(total_coin_types, has_native, has_stablecoins),
    }
}

/// Keyword classification for non-coin objects.
fn classify_special_object(object_type: &str) -> SpecialObject {
    let lower = object_type.to_lowercase();
    if lower.contains("suins_registration") {
        SpecialObject::SuinsDomain
    } else if lower.contains("vote") {
        SpecialObject::VotingNft
    } else if lower.contains("upgradecap") {
        SpecialObject::UpgradeCap
    } else {
        SpecialObject::DefiPosition
    }
}
