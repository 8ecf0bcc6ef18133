//! Mock Chain Client
//!
//! Canned listings for tests and offline demo runs.

use async_trait::async_trait;

use super::ChainClient;
use crate::error::Result;
use crate::model::{CoinBalance, OwnedObject, ValidatorApy};

/// Chain client serving fixed listings.
#[derive(Clone, Debug, Default)]
pub struct MockChainClient {
    balances: Vec<CoinBalance>,
    objects: Vec<OwnedObject>,
    gas_price: String,
    validators: Vec<ValidatorApy>,
}

impl MockChainClient {
    /// Empty account, gas price 750.
    pub fn new() -> Self {
        Self {
            gas_price: "750".into(),
            ..Default::default()
        }
    }

    /// A plausible mainnet-ish account for demo runs.
    pub fn sample() -> Self {
        Self {
            balances: vec![
                CoinBalance::new("0x2::sui::SUI", "2500000000"),
                CoinBalance::new("0x5d4b30::coin::COIN", "120000000"),
                CoinBalance::new("0xdba349::usdc::USDC", "85000000"),
                CoinBalance::new("0x6864a6::cetus::CETUS", "4200000"),
            ],
            objects: vec![
                OwnedObject::new(
                    "0x2::coin::Coin<0x2::sui::SUI>",
                    "0x11fe2f4c7a2e1b5d1c6f0a9e8d7c6b5a4f3e2d1c",
                ),
                OwnedObject::new(
                    "0xd22b24::suins_registration::SuinsRegistration",
                    "0x22ad3e5b8c9d0e1f2a3b4c5d6e7f8091a2b3c4d5",
                ),
                OwnedObject::new(
                    "0x1eabed72c53feb3805120a081dc15963c204dc8d091542592abaf7a35689b2fb::pool::Position",
                    "0x33be4f6c9dae1f203b4c5d6e7f8091a2b3c4d5e6",
                ),
            ],
            gas_price: "750".into(),
            validators: vec![
                ValidatorApy {
                    address: "0x44cf507dabf1e9c1e8d9f0a1b2c3d4e5f6071829".into(),
                    apy: 0.045,
                },
                ValidatorApy {
                    address: "0x55d0618ebc02fad2f90a1b2c3d4e5f6071829304".into(),
                    apy: 0.039,
                },
                ValidatorApy {
                    address: "0x66e1729fcd13ebe301b2c3d4e5f607182930415f".into(),
                    apy: 0.051,
                },
            ],
        }
    }

    pub fn with_balances(mut self, balances: Vec<CoinBalance>) -> Self {
        self.balances = balances;
        self
    }

    pub fn with_objects(mut self, objects: Vec<OwnedObject>) -> Self {
        self.objects = objects;
        self
    }

    pub fn with_gas_price(mut self, gas_price: impl Into<String>) -> Self {
        self.gas_price = gas_price.into();
        self
    }

    pub fn with_validators(mut self, validators: Vec<ValidatorApy>) -> Self {
        self.validators = validators;
        self
    }
}

#[async_trait]
impl ChainClient for MockChainClient {
    async fn fetch_balances(&self, _address: &str) -> Result<Vec<CoinBalance>> {
        Ok(self.balances.clone())
    }

    async fn fetch_objects(&self, _address: &str) -> Result<Vec<OwnedObject>> {
        Ok(self.objects.clone())
    }

    async fn fetch_gas_price(&self) -> Result<String> {
        Ok(self.gas_price.clone())
    }

    async fn fetch_validators_apy(&self) -> Result<Vec<ValidatorApy>> {
        Ok(self.validators.clone())
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "MockChain"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_snapshot_combines_listings() {
        let client = MockChainClient::sample();
        let snapshot = client.snapshot("0xabc").await.unwrap();
        assert_eq!(snapshot.address, "0xabc");
        assert_eq!(snapshot.balances.len(), 4);
        assert_eq!(snapshot.objects.len(), 3);
    }

    #[tokio::test]
    async fn test_snapshot_feeds_analyzers() {
        let client = MockChainClient::sample();
        let snapshot = client.snapshot("0xabc").await.unwrap();

        let summary = crate::analysis::analyze_portfolio(&snapshot.balances, &snapshot.objects);
        assert_eq!(summary.total_coin_types, 4);
        assert_eq!(summary.risk_level, crate::model::RiskLevel::Low);

        let registry = crate::registry::PlatformRegistry::new();
        let detection = crate::analysis::PlatformDetector::new(registry)
            .detect(&snapshot.objects, &snapshot.balances);
        assert_eq!(detection.distinct_platform_count(), 1);
        assert_eq!(detection.defi_positions.len(), 1);
    }

    #[tokio::test]
    async fn test_empty_account() {
        let client = MockChainClient::new();
        assert!(client.fetch_balances("0xabc").await.unwrap().is_empty());
        assert_eq!(client.fetch_gas_price().await.unwrap(), "750");
        assert!(client.health_check().await);
    }
}
