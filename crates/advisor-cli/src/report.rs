//! Report Assembler
//!
//! Renders the engine's structured results to terminal text or JSON. All
//! human-readable wording for the insight/recommendation tags lives here;
//! the engine only emits tags.

use chrono::Utc;
use serde::Serialize;

use defi_advisor::model::{GasAdvice, Insight, Recommendation, SpecialObject};
use defi_advisor::registry::PlatformRegistry;
use defi_advisor::{
    AdvisorError, PlatformDetection, PortfolioSummary, PositionType, StakingOpportunities,
};

const RULE_WIDTH: usize = 50;
const SECTION_WIDTH: usize = 30;

/// Everything one analysis run produced, for the JSON detail mode.
#[derive(Debug, Serialize)]
pub struct FullAnalysis<'a> {
    pub address: &'a str,
    pub portfolio: &'a PortfolioSummary,
    pub platforms: &'a PlatformDetection,
    pub staking: &'a StakingOpportunities,
}

pub fn render_json(analysis: &FullAnalysis<'_>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(analysis)
}

/// The portfolio advisor report (summary, insights, recommendations, staking).
pub fn render_portfolio_report(
    address: &str,
    summary: &PortfolioSummary,
    staking: &StakingOpportunities,
) -> String {
    let mut out = String::new();
    header(&mut out, "🏦 SUI DEFI ADVISOR REPORT", address);

    section(&mut out, "📊 PORTFOLIO ANALYSIS:");
    out.push_str(&format!("• Total Coin Types: {}\n", summary.total_coin_types));
    out.push_str(&format!("• Unique Assets: {}\n", summary.unique_coin_types));
    out.push_str(&format!("• Objects Owned: {}\n", summary.objects_owned));
    out.push_str(&format!("• Total Balance: {} SUI\n", summary.total_balance_sui()));
    out.push_str(&format!("• Risk Level: {:?}\n", summary.risk_level));

    if !summary.coin_names.is_empty() {
        out.push_str(&format!("• Assets: {}\n", summary.coin_names.join(", ")));
    }

    out.push_str("\n💡 KEY INSIGHTS:\n");
    for insight in &summary.insights {
        out.push_str(&format!("  {}\n", insight_text(insight)));
    }

    out.push_str("\n🎯 RECOMMENDATIONS:\n");
    for rec in &summary.recommendations {
        out.push_str(&format!("  {}\n", recommendation_text(*rec)));
    }

    section(&mut out, "💰 STAKING OPPORTUNITIES:");
    for rec in &staking.recommendations {
        out.push_str(&format!("  {}\n", recommendation_text(*rec)));
    }
    if !staking.top_validators.is_empty() {
        out.push_str("\n🏅 Top validators by APY:\n");
        for validator in &staking.top_validators {
            out.push_str(&format!(
                "  • {}: {:.2}%\n",
                validator.address,
                validator.apy * 100.0
            ));
        }
    }
    out.push_str(&format!(
        "\n⛽ Gas Price: {}\n  {}\n",
        staking.gas_cost_analysis.current_gas_price,
        gas_advice_text(staking.gas_cost_analysis.recommendation)
    ));

    footer(&mut out);
    out
}

/// The platform-interaction report.
pub fn render_platforms_report(
    address: &str,
    detection: &PlatformDetection,
    registry: &PlatformRegistry,
) -> String {
    let mut out = String::new();
    header(&mut out, "🏗️ SUI DEFI PLATFORMS REPORT", address);

    section(&mut out, "🔍 PLATFORM INTERACTIONS:");
    if !detection.active_platforms.is_empty() {
        out.push_str("\n🎯 ACTIVE PLATFORMS:\n");
        for platform in &detection.active_platforms {
            out.push_str(&format!(
                "  • {} ({})\n    Token: {} | Balance: {}\n",
                platform.platform,
                platform.category.label(),
                platform.token,
                platform.balance
            ));
        }
    }
    if !detection.defi_positions.is_empty() {
        out.push_str("\n💼 DEFI POSITIONS:\n");
        for position in &detection.defi_positions {
            out.push_str(&format!(
                "  • {}: {}\n",
                position.platform,
                position_type_label(position.position_type)
            ));
        }
    }
    if !detection.token_holdings.is_empty() {
        out.push_str("\n🪙 PLATFORM TOKENS:\n");
        for holding in &detection.token_holdings {
            out.push_str(&format!(
                "  • {} ({}): {}\n",
                holding.token, holding.platform, holding.balance
            ));
        }
    }
    if detection.active_platforms.is_empty() && detection.defi_positions.is_empty() {
        out.push_str("\n📋 No DeFi platform interactions detected\n");
        out.push_str("💡 This could mean you're new to Sui DeFi or using different platforms\n");
    }

    out.push_str("\n🎯 RECOMMENDATIONS:\n");
    for rec in &detection.recommendations {
        out.push_str(&format!("  {}\n", recommendation_text(*rec)));
    }

    section(&mut out, "📚 AVAILABLE PLATFORMS ON SUI:");
    for entry in registry.entries() {
        out.push_str(&format!(
            "\n🏗️ {} ({})\n   {}\n   Features: {}\n",
            entry.name,
            entry.category.label(),
            entry.description,
            entry.features.join(", ")
        ));
    }

    footer(&mut out);
    out
}

/// Structured error report; failures never render as partial analysis.
pub fn render_error(address: &str, error: &AdvisorError) -> String {
    let mut out = String::new();
    header(&mut out, "🏦 SUI DEFI ADVISOR REPORT", address);
    out.push_str(&format!("❌ {}\n", error.report_message()));
    footer(&mut out);
    out
}

fn header(out: &mut String, title: &str, address: &str) {
    out.push_str(&format!("\n{title}\n{}\n\n", "=".repeat(RULE_WIDTH)));
    out.push_str(&format!("📍 Address: {address}\n"));
}

fn section(out: &mut String, title: &str) {
    out.push_str(&format!("\n{title}\n{}\n", "-".repeat(SECTION_WIDTH)));
}

fn footer(out: &mut String) {
    out.push_str(&format!(
        "\n{}\n🤖 Report generated by Sui DeFi Advisor\n📅 {}\n",
        "=".repeat(RULE_WIDTH),
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    ));
}

fn insight_text(insight: &Insight) -> String {
    match insight {
        Insight::EmptyPortfolio => "⚠️  Empty portfolio - consider acquiring some SUI tokens".into(),
        Insight::SingleAsset => "⚠️  Single asset portfolio - consider diversification".into(),
        Insight::LimitedDiversification => {
            "📊 Limited diversification - consider adding more asset types".into()
        }
        Insight::GoodDiversification => "✅ Good diversification across multiple assets".into(),
        Insight::ObjectHoldings { count, examples } => {
            let labels: Vec<_> = examples.iter().map(|e| special_object_label(*e)).collect();
            format!("🎨 You own {count} objects including: {}", labels.join(", "))
        }
        Insight::NativeStakingAvailable => "💰 You have SUI tokens - great for staking!".into(),
        Insight::StablecoinCushion => {
            "🛡️  You have stablecoins - good for portfolio stability".into()
        }
    }
}

const fn recommendation_text(rec: Recommendation) -> &'static str {
    match rec {
        Recommendation::AcquireSui => "🚀 Start by acquiring some SUI tokens",
        Recommendation::LearnEcosystem => "📚 Learn about Sui ecosystem and available DeFi protocols",
        Recommendation::DollarCostAverage => "💼 Consider dollar-cost averaging into your first positions",
        Recommendation::DiversifyIntoStablecoins => "🌈 Diversify into stablecoins for stability",
        Recommendation::StartStakingSui => "💰 Start staking SUI tokens for passive income",
        Recommendation::ExploreDefiProtocols => "🔍 Explore Sui DeFi protocols for yield opportunities",
        Recommendation::ReviewBalanceRegularly => "⚖️  Review portfolio balance regularly",
        Recommendation::ConsiderYieldFarming => "📈 Consider yield farming opportunities",
        Recommendation::KeepStablecoinBuffer => "🛡️  Keep some stablecoins for stability",
        Recommendation::RebalanceQuarterly => "🔄 Rebalance portfolio quarterly",
        Recommendation::StakeSuiHoldings => "💰 Consider staking your SUI tokens for passive income",
        Recommendation::HoldStablecoinsForStability => "🛡️  Consider holding stablecoins for portfolio stability",
        Recommendation::NotUsingDefiYet => "🚀 You haven't started using DeFi on Sui yet!",
        Recommendation::StartWithLending => "💡 Consider starting with NAVI Protocol for lending",
        Recommendation::TryDexSwapping => "🔄 Try Cetus DEX for token swapping",
        Recommendation::ResearchBeforeInvesting => "📚 Research Sui DeFi ecosystem before investing",
        Recommendation::SpreadAcrossPlatforms => "🌈 Diversify across multiple DeFi platforms",
        Recommendation::AvoidSingleProtocolConcentration => "⚖️  Don't put all funds in one protocol",
        Recommendation::ExploreOtherProtocols => "🔍 Explore other Sui DeFi opportunities",
        Recommendation::WellDiversifiedAcrossPlatforms => "✅ Good diversification across platforms!",
        Recommendation::MonitorPositionsRegularly => "📊 Monitor your positions regularly",
        Recommendation::RebalancePeriodically => "🔄 Consider rebalancing periodically",
        Recommendation::MonitorLendingRates => "💰 Monitor lending rates and adjust positions",
        Recommendation::WatchImpermanentLoss => "🌊 Watch for impermanent loss in liquidity positions",
        Recommendation::StakePlatformTokens => "🎯 Consider staking platform tokens for additional rewards",
        Recommendation::StakeForPassiveIncome => "💡 Staking SUI tokens can provide passive income",
        Recommendation::SeekHighApyValidators => "🎯 Look for validators with high APY and good performance",
        Recommendation::CheckCommissionAndUptime => "⚖️  Consider validator commission rates and uptime",
        Recommendation::SpreadStakeAcrossValidators => "🔄 Diversify across multiple validators to reduce risk",
    }
}

const fn gas_advice_text(advice: GasAdvice) -> &'static str {
    match advice {
        GasAdvice::LowGas => "Low gas costs - good time for transactions",
        GasAdvice::HighGas => "High gas costs - consider waiting",
        GasAdvice::NoDirection => "Gas price information available",
    }
}

const fn special_object_label(object: SpecialObject) -> &'static str {
    match object {
        SpecialObject::SuinsDomain => "SuiNS Domain",
        SpecialObject::VotingNft => "Voting NFT",
        SpecialObject::UpgradeCap => "Package Upgrade Cap",
        SpecialObject::DefiPosition => "DeFi Position",
    }
}

const fn position_type_label(position: PositionType) -> &'static str {
    match position {
        PositionType::Liquidity => "Liquidity Position",
        PositionType::Staking => "Staking Position",
        PositionType::Lending => "Lending Position",
        PositionType::Vault => "Vault Position",
        PositionType::Farming => "Farming Position",
        PositionType::Generic => "DeFi Position",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use defi_advisor::{analyze_portfolio, staking_opportunities, CoinBalance, PlatformDetector};

    #[test]
    fn test_portfolio_report_carries_insight_text() {
        let summary = analyze_portfolio(&[CoinBalance::new("0x2::sui::SUI", "500")], &[]);
        let staking = staking_opportunities("999", &[]);
        let report = render_portfolio_report("0xabc", &summary, &staking);

        assert!(report.contains("Single asset portfolio"));
        assert!(report.contains("great for staking"));
        assert!(report.contains("Low gas costs"));
        assert!(report.contains("Risk Level: High"));
    }

    #[test]
    fn test_platforms_report_lists_registry() {
        let registry = PlatformRegistry::new();
        let detection = PlatformDetector::new(registry).detect(&[], &[]);
        let report = render_platforms_report("0xabc", &detection, &registry);

        assert!(report.contains("No DeFi platform interactions detected"));
        assert!(report.contains("Cetus Protocol"));
        assert!(report.contains("haven't started using DeFi"));
    }

    #[test]
    fn test_json_mode_serializes() {
        let registry = PlatformRegistry::new();
        let summary = analyze_portfolio(&[], &[]);
        let detection = PlatformDetector::new(registry).detect(&[], &[]);
        let staking = staking_opportunities("x", &[]);
        let analysis = FullAnalysis {
            address: "0xabc",
            portfolio: &summary,
            platforms: &detection,
            staking: &staking,
        };
        let json = render_json(&analysis).unwrap();
        assert!(json.contains("\"risk_level\": \"high\""));
        assert!(json.contains("\"no_direction\""));
    }
}
