//! Sui JSON-RPC Client
//!
//! `ChainClient` implementation over a fullnode's JSON-RPC endpoint
//! (`suix_getAllBalances`, `suix_getOwnedObjects`, `suix_getReferenceGasPrice`,
//! `suix_getValidatorsApy`). Individual records missing expected fields are
//! skipped; only transport and RPC-level failures surface as errors.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::{debug, warn};

use super::ChainClient;
use crate::error::{AdvisorError, Result};
use crate::model::{CoinBalance, OwnedObject, ValidatorApy};

/// Pagination guard for object listings.
const MAX_OBJECT_PAGES: usize = 10;

/// Objects requested per page.
const OBJECT_PAGE_SIZE: usize = 50;

/// Fullnode connection configuration
#[derive(Clone, Debug)]
pub struct RpcConfig {
    /// Fullnode JSON-RPC URL
    pub url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            url: "https://fullnode.mainnet.sui.io:443".into(),
            timeout_secs: 30,
        }
    }
}

impl RpcConfig {
    pub fn from_env() -> Self {
        let url = std::env::var("SUI_RPC_URL")
            .unwrap_or_else(|_| "https://fullnode.mainnet.sui.io:443".into());
        Self {
            url,
            ..Default::default()
        }
    }
}

/// JSON-RPC chain client
pub struct SuiRpcClient {
    http: reqwest::Client,
    config: RpcConfig,
}

impl SuiRpcClient {
    /// Create from configuration
    pub fn from_config(config: RpcConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { http, config })
    }

    /// Create from environment variables (`SUI_RPC_URL`)
    pub fn from_env() -> Result<Self> {
        Self::from_config(RpcConfig::from_env())
    }

    /// One JSON-RPC call; unwraps the `result` member.
    async fn call(&self, method: &str, params: Value) -> Result<Value> {
        debug!(method, "rpc call");
        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });

        let response = self
            .http
            .post(&self.config.url)
            .json(&body)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| AdvisorError::Upstream(e.to_string()))?;

        let mut envelope: Value = response.json().await?;
        if let Some(error) = envelope.get("error") {
            return Err(AdvisorError::Rpc {
                code: error.get("code").and_then(Value::as_i64).unwrap_or(0),
                message: error
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown")
                    .to_string(),
            });
        }
        match envelope.get_mut("result") {
            Some(result) => Ok(result.take()),
            None => Err(AdvisorError::MalformedResponse(format!(
                "{method}: no result member"
            ))),
        }
    }
}

#[async_trait]
impl ChainClient for SuiRpcClient {
    async fn fetch_balances(&self, address: &str) -> Result<Vec<CoinBalance>> {
        let result = self.call("suix_getAllBalances", json!([address])).await?;
        let entries = result
            .as_array()
            .ok_or_else(|| AdvisorError::MalformedResponse("balances: not an array".into()))?;

        let mut balances = Vec::with_capacity(entries.len());
        for entry in entries {
            // Records without a coin type are skipped, not fatal.
            let Some(coin_type) = entry.get("coinType").and_then(Value::as_str) else {
                warn!("balance record without coinType, skipping");
                continue;
            };
            let total_balance = entry
                .get("totalBalance")
                .and_then(Value::as_str)
                .unwrap_or_default();
            balances.push(CoinBalance::new(coin_type, total_balance));
        }
        Ok(balances)
    }

    async fn fetch_objects(&self, address: &str) -> Result<Vec<OwnedObject>> {
        let mut objects = Vec::new();
        let mut cursor = Value::Null;

        for _ in 0..MAX_OBJECT_PAGES {
            let params = json!([
                address,
                { "options": { "showType": true } },
                cursor,
                OBJECT_PAGE_SIZE,
            ]);
            let page = self.call("suix_getOwnedObjects", params).await?;

            let Some(entries) = page.get("data").and_then(Value::as_array) else {
                return Err(AdvisorError::MalformedResponse("objects: no data array".into()));
            };
            for entry in entries {
                let Some(data) = entry.get("data") else {
                    continue;
                };
                let Some(object_id) = data.get("objectId").and_then(Value::as_str) else {
                    warn!("object record without objectId, skipping");
                    continue;
                };
                let object_type = data.get("type").and_then(Value::as_str).unwrap_or_default();
                objects.push(OwnedObject::new(object_type, object_id));
            }

            if !page.get("hasNextPage").and_then(Value::as_bool).unwrap_or(false) {
                break;
            }
            cursor = page.get("nextCursor").cloned().unwrap_or(Value::Null);
        }

        debug!(count = objects.len(), "fetched owned objects");
        Ok(objects)
    }

    async fn fetch_gas_price(&self) -> Result<String> {
        let result = self.call("suix_getReferenceGasPrice", json!([])).await?;
        match result {
            Value::String(price) => Ok(price),
            Value::Number(price) => Ok(price.to_string()),
            other => Err(AdvisorError::MalformedResponse(format!(
                "gas price: unexpected {other}"
            ))),
        }
    }

    async fn fetch_validators_apy(&self) -> Result<Vec<ValidatorApy>> {
        let result = self.call("suix_getValidatorsApy", json!([])).await?;
        let entries = result
            .get("apys")
            .and_then(Value::as_array)
            .ok_or_else(|| AdvisorError::MalformedResponse("validators: no apys array".into()))?;

        let validators = entries
            .iter()
            .filter_map(|entry| {
                let address = entry.get("address").and_then(Value::as_str)?;
                let apy = entry.get("apy").and_then(Value::as_f64)?;
                Some(ValidatorApy {
                    address: address.to_string(),
                    apy,
                })
            })
            .collect();
        Ok(validators)
    }

    async fn health_check(&self) -> bool {
        self.fetch_gas_price().await.is_ok()
    }

    fn name(&self) -> &str {
        &self.config.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = RpcConfig::default();
        assert!(config.url.contains("mainnet"));
        assert_eq!(config.timeout_secs, 30);
    }
}
