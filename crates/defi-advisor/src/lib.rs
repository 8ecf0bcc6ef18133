//! # defi-advisor
//!
//! Read-only DeFi portfolio advisor for Sui accounts. Classifies a wallet's
//! coin balances and owned objects against a registry of known protocols,
//! scores diversification risk, and derives rule-based recommendations.
//! No smart contracts, no transactions: it only reads existing chain data.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  ChainClient (JSON-RPC / mock)                               │
//! │        │ balances + objects                                  │
//! │        ▼                                                     │
//! │  ┌──────────────────┐      ┌───────────────────────┐         │
//! │  │ PortfolioAnalyzer│      │ PlatformDetector      │         │
//! │  └──────────────────┘      └───────────────────────┘         │
//! │        │     both consult the Matcher + Registry   │         │
//! │        ▼                                           ▼         │
//! │  PortfolioSummary                       PlatformDetection    │
//! │        └────────────► rule tables ◄────────────────┘         │
//! │                    (insights / recommendations)              │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Analysis is pure and synchronous; only the chain fetch is async. Insights
//! and recommendations are enum tags so presentation stays at the report
//! boundary.

pub mod advice;
pub mod analysis;
pub mod chain;
pub mod error;
pub mod matcher;
pub mod model;
pub mod registry;

pub use advice::{gas_cost_advice, staking_opportunities};
pub use analysis::{analyze_portfolio, PlatformDetector};
pub use chain::{AccountSnapshot, ChainClient, MockChainClient, SuiRpcClient};
pub use error::{AdvisorError, Result};
pub use matcher::Matcher;
pub use model::{
    CoinBalance, GasAdvice, Insight, OwnedObject, PlatformDetection, PortfolioSummary,
    PositionType, Recommendation, RiskLevel, StakingOpportunities,
};
pub use registry::{PlatformCategory, PlatformEntry, PlatformRegistry};
