//! Domain Models
//!
//! Input records as supplied by the chain data source, and the structured
//! results the analyzers derive from them. Insights and recommendations are
//! enum tags; human-readable text belongs to the report renderer, never here.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::registry::PlatformCategory;

/// Symbol segment of the native gas token type (`0x2::sui::SUI`).
pub const NATIVE_COIN_SYMBOL: &str = "SUI";

/// Case-insensitive substrings identifying stablecoin types.
pub const STABLECOIN_MARKERS: &[&str] = &["usdc", "usdt"];

/// MIST per SUI.
const MIST_PER_SUI_SCALE: u32 = 9;

/// A coin balance as reported by the fullnode.
///
/// `total_balance` is kept as the raw string: an absent or unparseable value
/// counts as zero and is excluded from totals, never an error.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CoinBalance {
    /// Fully-qualified coin type, e.g. `0x2::sui::SUI`
    pub coin_type: String,

    /// Raw balance in base units (MIST for SUI)
    #[serde(default)]
    pub total_balance: String,
}

impl CoinBalance {
    pub fn new(coin_type: impl Into<String>, total_balance: impl Into<String>) -> Self {
        Self {
            coin_type: coin_type.into(),
            total_balance: total_balance.into(),
        }
    }

    /// Integer parse of the raw balance. `None` means "skip, count as 0".
    pub fn parsed_balance(&self) -> Option<u128> {
        self.total_balance.trim().parse().ok()
    }

    /// Case-sensitive exact segment match against the native symbol,
    /// so `0x2::sui::SUI` qualifies but a coin merely named "suit" does not.
    pub fn is_native(&self) -> bool {
        self.coin_type.split("::").any(|seg| seg == NATIVE_COIN_SYMBOL)
    }

    pub fn is_stablecoin(&self) -> bool {
        let lower = self.coin_type.to_lowercase();
        STABLECOIN_MARKERS.iter().any(|m| lower.contains(m))
    }

    /// Short display name: the last `::` segment of the type.
    pub fn display_name(&self) -> &str {
        self.coin_type.rsplit("::").next().unwrap_or(&self.coin_type)
    }
}

/// A non-fungible object owned by the account.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct OwnedObject {
    /// Fully-qualified object type
    pub object_type: String,

    /// Opaque object identifier
    pub object_id: String,
}

impl OwnedObject {
    pub fn new(object_type: impl Into<String>, object_id: impl Into<String>) -> Self {
        Self {
            object_type: object_type.into(),
            object_id: object_id.into(),
        }
    }
}

/// Coarse diversification score, a pure function of distinct-asset count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Tier table over the total coin-type count. Exhaustive and mutually
    /// exclusive: 0..=1 High, 2..=3 Medium, 4.. Low.
    pub const fn from_asset_count(total_coin_types: usize) -> Self {
        match total_coin_types {
            0 | 1 => Self::High,
            2 | 3 => Self::Medium,
            _ => Self::Low,
        }
    }
}

/// Kind of DeFi position an object represents, from its type keywords.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionType {
    Liquidity,
    Staking,
    Lending,
    Vault,
    Farming,
    Generic,
}

/// Category label for a non-coin object in the portfolio.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialObject {
    SuinsDomain,
    VotingNft,
    UpgradeCap,
    DefiPosition,
}

/// Structured insight tags. Rendering to text happens at the report boundary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Insight {
    EmptyPortfolio,
    SingleAsset,
    LimitedDiversification,
    GoodDiversification,
    /// Object count plus up to the first three special-object labels
    ObjectHoldings {
        count: usize,
        examples: Vec<SpecialObject>,
    },
    NativeStakingAvailable,
    StablecoinCushion,
}

/// Structured recommendation tags, grouped by which rule table emits them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    // Portfolio tiers (0 / 1..=2 / >2 coin types)
    AcquireSui,
    LearnEcosystem,
    DollarCostAverage,
    DiversifyIntoStablecoins,
    StartStakingSui,
    ExploreDefiProtocols,
    ReviewBalanceRegularly,
    ConsiderYieldFarming,
    KeepStablecoinBuffer,
    RebalanceQuarterly,
    // Conditional portfolio appends
    StakeSuiHoldings,
    HoldStablecoinsForStability,
    // Platform detection: no activity
    NotUsingDefiYet,
    StartWithLending,
    TryDexSwapping,
    ResearchBeforeInvesting,
    // Platform detection: single platform
    SpreadAcrossPlatforms,
    AvoidSingleProtocolConcentration,
    ExploreOtherProtocols,
    // Platform detection: several platforms
    WellDiversifiedAcrossPlatforms,
    MonitorPositionsRegularly,
    RebalancePeriodically,
    // Platform detection: category appends
    MonitorLendingRates,
    WatchImpermanentLoss,
    StakePlatformTokens,
    // General staking advice
    StakeForPassiveIncome,
    SeekHighApyValidators,
    CheckCommissionAndUptime,
    SpreadStakeAcrossValidators,
}

/// Structured portfolio analysis result. Immutable once built.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub total_coin_types: usize,
    pub unique_coin_types: usize,
    pub objects_owned: usize,
    /// Sum of all parseable balances, in MIST
    #[serde(with = "mist_string")]
    pub total_balance_mist: u128,
    pub risk_level: RiskLevel,
    pub special_objects: Vec<SpecialObject>,
    /// Short display names for the first few coin types held
    pub coin_names: Vec<String>,
    pub insights: Vec<Insight>,
    pub recommendations: Vec<Recommendation>,
}

impl PortfolioSummary {
    /// Total parseable balance converted to whole SUI for display.
    pub fn total_balance_sui(&self) -> Decimal {
        mist_to_sui(self.total_balance_mist)
    }
}

/// One platform-token hit in the balance listing.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ActivePlatform {
    pub platform: String,
    pub category: PlatformCategory,
    /// The matched marker, uppercased
    pub token: String,
    /// Raw balance as given, no numeric coercion
    pub balance: String,
}

/// A platform token held by the account.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TokenHolding {
    pub token: String,
    pub platform: String,
    pub balance: String,
}

/// A non-fungible object matched to a platform's package ids.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DefiPosition {
    pub platform: String,
    pub category: PlatformCategory,
    pub position_type: PositionType,
    pub object_id: String,
}

/// Platform-interaction analysis result.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PlatformDetection {
    pub active_platforms: Vec<ActivePlatform>,
    pub token_holdings: Vec<TokenHolding>,
    pub defi_positions: Vec<DefiPosition>,
    pub recommendations: Vec<Recommendation>,
}

impl PlatformDetection {
    /// Count of distinct platforms in `active_platforms` (a platform with
    /// two matching tokens still counts once).
    pub fn distinct_platform_count(&self) -> usize {
        distinct_platform_count(&self.active_platforms)
    }
}

/// Distinct platform names among active-platform entries. The recommendation
/// rules branch on this, not on raw entry count.
pub fn distinct_platform_count(active: &[ActivePlatform]) -> usize {
    let mut names: Vec<&str> = active.iter().map(|p| p.platform.as_str()).collect();
    names.sort_unstable();
    names.dedup();
    names.len()
}

/// A validator and its reported APY.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ValidatorApy {
    pub address: String,
    pub apy: f64,
}

/// Directional gas-cost advice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GasAdvice {
    LowGas,
    HighGas,
    NoDirection,
}

/// Gas-cost analysis for transaction timing.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GasCostAnalysis {
    /// Raw gas price as reported, even when unparseable
    pub current_gas_price: String,
    pub recommendation: GasAdvice,
}

/// Staking opportunity report: gas analysis, top validators, fixed advice.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StakingOpportunities {
    pub top_validators: Vec<ValidatorApy>,
    pub gas_cost_analysis: GasCostAnalysis,
    pub recommendations: Vec<Recommendation>,
}

/// Convert a MIST amount to whole SUI, saturating on overflow.
pub fn mist_to_sui(mist: u128) -> Decimal {
    let clamped = i128::try_from(mist).unwrap_or(i128::MAX);
    Decimal::try_from_i128_with_scale(clamped, MIST_PER_SUI_SCALE)
        .unwrap_or(Decimal::MAX)
        .normalize()
}

/// Serialize u128 MIST totals as strings; serde_json numbers top out at u64.
mod mist_string {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &u128, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<u128, D::Error> {
        let raw = String::deserialize(de)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_risk_tiers() {
        assert_eq!(RiskLevel::from_asset_count(0), RiskLevel::High);
        assert_eq!(RiskLevel::from_asset_count(1), RiskLevel::High);
        assert_eq!(RiskLevel::from_asset_count(2), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_asset_count(3), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_asset_count(4), RiskLevel::Low);
    }

    #[test]
    fn test_native_requires_exact_segment() {
        assert!(CoinBalance::new("0x2::sui::SUI", "1").is_native());
        assert!(!CoinBalance::new("0x2::suit::SUIT", "1").is_native());
        assert!(!CoinBalance::new("0x2::sui::sui", "1").is_native());
    }

    #[test]
    fn test_balance_parse() {
        assert_eq!(CoinBalance::new("0x2::sui::SUI", "500").parsed_balance(), Some(500));
        assert_eq!(CoinBalance::new("0x2::sui::SUI", "about 500").parsed_balance(), None);
        assert_eq!(CoinBalance::new("0x2::sui::SUI", "").parsed_balance(), None);
    }

    #[test]
    fn test_stablecoin_markers() {
        assert!(CoinBalance::new("0xdba::coin::USDC", "0").is_stablecoin());
        assert!(CoinBalance::new("0xdba::coin::wUSDT", "0").is_stablecoin());
        assert!(!CoinBalance::new("0x2::sui::SUI", "0").is_stablecoin());
    }

    #[test]
    fn test_distinct_platform_count_dedups_names() {
        let entry = |platform: &str| ActivePlatform {
            platform: platform.into(),
            category: PlatformCategory::DexAmm,
            token: "X".into(),
            balance: "1".into(),
        };
        let active = vec![
            entry("Cetus Protocol"),
            entry("Cetus Protocol"),
            entry("NAVI Protocol"),
        ];
        assert_eq!(distinct_platform_count(&active), 2);

        let detection = PlatformDetection {
            active_platforms: active,
            ..Default::default()
        };
        assert_eq!(detection.distinct_platform_count(), 2);
    }

    #[test]
    fn test_mist_to_sui() {
        assert_eq!(mist_to_sui(1_000_000_000), dec!(1));
        assert_eq!(mist_to_sui(1_500_000_000), dec!(1.5));
        assert_eq!(mist_to_sui(0), dec!(0));
    }
}
