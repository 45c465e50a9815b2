use async_trait::async_trait;
use ethers::{
    core::types::{Address, U256},
    providers::{Http, Middleware, Provider},
};
use log::debug;
use std::{str::FromStr, sync::Arc};

use crate::{
    errors::CustomError,
    models::{
        network_config::NetworkConfig,
        token::{RawTokenBalance, TokenBalancesResult},
    },
};

const TOKEN_BALANCES_METHOD: &str = "alchemy_getTokenBalances";

/// Source of on-chain balances for a wallet.
#[async_trait]
pub trait BalanceProvider: Send + Sync {
    /// Native balance in wei.
    async fn get_native_balance(&self, wallet_address: &str) -> Result<U256, CustomError>;

    /// Raw ERC20 balances, one entry per requested contract.
    async fn get_token_balances(
        &self,
        wallet_address: &str,
        token_addresses: &[String],
    ) -> Result<Vec<RawTokenBalance>, CustomError>;
}

#[derive(Clone, Debug)]
pub struct BlockchainClient {
    provider: Arc<Provider<Http>>,
    config: NetworkConfig,
}

impl BlockchainClient {
    pub fn new(config: NetworkConfig) -> Result<Self, CustomError> {
        let provider = Provider::<Http>::try_from(config.rpc_url.as_str())
            .map_err(|e| CustomError::ConfigError(format!("Invalid RPC URL: {}", e)))?;

        Ok(Self {
            provider: Arc::new(provider),
            config,
        })
    }

    fn parse_address(wallet_address: &str) -> Result<Address, CustomError> {
        Address::from_str(wallet_address)
            .map_err(|_| CustomError::InvalidAddressError(wallet_address.to_string()))
    }
}

#[async_trait]
impl BalanceProvider for BlockchainClient {
    async fn get_native_balance(&self, wallet_address: &str) -> Result<U256, CustomError> {
        let address = Self::parse_address(wallet_address)?;
        debug!("eth_getBalance on {} for {:?}", self.config.name, address);

        let balance = self.provider.get_balance(address, None).await?;
        Ok(balance)
    }

    async fn get_token_balances(
        &self,
        wallet_address: &str,
        token_addresses: &[String],
    ) -> Result<Vec<RawTokenBalance>, CustomError> {
        let address = Self::parse_address(wallet_address)?;
        debug!(
            "{} on {} for {:?} ({} contracts)",
            TOKEN_BALANCES_METHOD,
            self.config.name,
            address,
            token_addresses.len()
        );

        let result: TokenBalancesResult = self
            .provider
            .request(TOKEN_BALANCES_METHOD, (address, token_addresses))
            .await?;

        Ok(result.token_balances)
    }
}

/// Decode a `0x`-prefixed hex quantity. `0x` alone is zero.
pub fn parse_hex_balance(hex_value: &str) -> Result<U256, CustomError> {
    let digits = hex_value
        .strip_prefix("0x")
        .or_else(|| hex_value.strip_prefix("0X"))
        .unwrap_or(hex_value);

    if digits.is_empty() {
        return Ok(U256::zero());
    }

    U256::from_str_radix(digits, 16).map_err(|e| {
        CustomError::StringifiedProviderError(format!(
            "Malformed balance {:?}: {:?}",
            hex_value, e
        ))
    })
}

/// Hex balance of a token entry, failing when the provider reported an error for it.
pub fn raw_token_amount(entry: &RawTokenBalance) -> Result<U256, CustomError> {
    match (&entry.token_balance, &entry.error) {
        (Some(balance), None) => parse_hex_balance(balance),
        (_, Some(error)) => Err(CustomError::StringifiedProviderError(format!(
            "Token {}: {}",
            entry.contract_address, error
        ))),
        (None, None) => Err(CustomError::StringifiedProviderError(format!(
            "Token {}: missing balance",
            entry.contract_address
        ))),
    }
}
