//! Staking Advisor
//!
//! Cost-based gas advice and the staking opportunity report.

use crate::model::{GasAdvice, GasCostAnalysis, Recommendation, StakingOpportunities, ValidatorApy};

/// Gas prices at or above this (in MIST) read as "consider waiting".
pub const GAS_PRICE_HIGH_WATER: u64 = 1_000;

/// How many validators the opportunity report lists.
const TOP_VALIDATOR_LIMIT: usize = 5;

/// Threshold advice on the reference gas price. Unparseable input degrades
/// to no directional advice, never an error.
pub fn gas_cost_advice(gas_price: &str) -> GasCostAnalysis {
    let recommendation = match gas_price.trim().parse::<u64>() {
        Ok(price) if price < GAS_PRICE_HIGH_WATER => GasAdvice::LowGas,
        Ok(_) => GasAdvice::HighGas,
        Err(_) => GasAdvice::NoDirection,
    };
    GasCostAnalysis {
        current_gas_price: gas_price.to_string(),
        recommendation,
    }
}

/// Staking opportunity report: validators sorted by APY descending, the gas
/// analysis, and the fixed general advice list.
pub fn staking_opportunities(gas_price: &str, validators: &[ValidatorApy]) -> StakingOpportunities {
    let mut top = validators.to_vec();
    top.sort_by(|a, b| b.apy.partial_cmp(&a.apy).unwrap_or(std::cmp::Ordering::Equal));
    top.truncate(TOP_VALIDATOR_LIMIT);

    StakingOpportunities {
        top_validators: top,
        gas_cost_analysis: gas_cost_advice(gas_price),
        recommendations: vec![
            Recommendation::StakeForPassiveIncome,
            Recommendation::SeekHighApyValidators,
            Recommendation::CheckCommissionAndUptime,
            Recommendation::SpreadStakeAcrossValidators,
        ],
    }
}
