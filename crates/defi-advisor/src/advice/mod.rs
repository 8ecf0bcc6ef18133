//! Recommendation Rules
//!
//! Fixed rule tables mapping analysis results to ordered recommendation
//! tags, plus the gas/staking advisor.

mod recommend;
mod staking;

pub use recommend::{platform_recommendations, portfolio_recommendations};
pub use staking::{gas_cost_advice, staking_opportunities, GAS_PRICE_HIGH_WATER};
