//! Chain Data Source
//!
//! Abstraction over the Sui fullnode. The analyzers never talk to the
//! network themselves; they take listings from a [`ChainClient`] injected by
//! the caller, which keeps them deterministic under test.

mod mock;
mod rpc;

pub use mock::MockChainClient;
pub use rpc::{RpcConfig, SuiRpcClient};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{CoinBalance, OwnedObject, ValidatorApy};

/// Read-only chain data source.
#[async_trait]
pub trait ChainClient: Send + Sync {
    /// All coin balances owned by the address
    async fn fetch_balances(&self, address: &str) -> Result<Vec<CoinBalance>>;

    /// All objects owned by the address
    async fn fetch_objects(&self, address: &str) -> Result<Vec<OwnedObject>>;

    /// Current reference gas price, as a raw string
    async fn fetch_gas_price(&self) -> Result<String>;

    /// Validator APY listing
    async fn fetch_validators_apy(&self) -> Result<Vec<ValidatorApy>>;

    /// Fetch both listings for one analysis pass.
    async fn snapshot(&self, address: &str) -> Result<AccountSnapshot> {
        let balances = self.fetch_balances(address).await?;
        let objects = self.fetch_objects(address).await?;
        Ok(AccountSnapshot {
            address: address.to_string(),
            balances,
            objects,
            fetched_at: Utc::now(),
        })
    }

    /// Whether the source is reachable
    async fn health_check(&self) -> bool;

    /// Source name
    fn name(&self) -> &str;
}

/// One account's raw listings, fetched together.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AccountSnapshot {
    pub address: String,
    pub balances: Vec<CoinBalance>,
    pub objects: Vec<OwnedObject>,
    pub fetched_at: DateTime<Utc>,
}
