use log::{debug, error, info};
use std::sync::Arc;

use crate::{
    errors::CustomError,
    models::{
        address::validate_address,
        balance::BalanceResponse,
        token::{FormattedBalance, TokenDescriptor},
    },
};

use super::{
    balance_cache::{BalanceCache, CacheEntry},
    blockchain_service::{raw_token_amount, BalanceProvider},
    format::format_balance,
    token_config::find_symbol,
};

/// Aggregates the native and tracked token balances of an address.
#[derive(Clone)]
pub struct BalanceService {
    provider: Arc<dyn BalanceProvider>,
    cache: BalanceCache,
    native_symbol: String,
    tokens: &'static [TokenDescriptor],
}

impl BalanceService {
    pub fn new(
        provider: Arc<dyn BalanceProvider>,
        cache: BalanceCache,
        native_symbol: String,
        tokens: &'static [TokenDescriptor],
    ) -> Self {
        Self {
            provider,
            cache,
            native_symbol,
            tokens,
        }
    }

    #[cfg(test)]
    pub fn cache(&self) -> &BalanceCache {
        &self.cache
    }

    pub async fn get_balances(&self, address: &str) -> Result<BalanceResponse, CustomError> {
        validate_address(address)?;

        if let Some(entry) = self.cache.get(address) {
            debug!("Returning cached balances for {}", address);
            return Ok(entry.data);
        }

        info!("Fetching balances for {}", address);
        let token_addresses: Vec<String> = self
            .tokens
            .iter()
            .map(|token| token.contract_address.to_string())
            .collect();

        let (native_balance, token_balances) = tokio::try_join!(
            self.provider.get_native_balance(address),
            self.provider.get_token_balances(address, &token_addresses),
        )
        .map_err(|e| {
            error!("Balance lookup for {} failed: {}", address, e);
            e
        })?;

        if token_balances.len() != self.tokens.len() {
            error!(
                "Expected {} token balances for {}, provider returned {}",
                self.tokens.len(),
                address,
                token_balances.len()
            );
            return Err(CustomError::StringifiedProviderError(format!(
                "Expected {} token balances, got {}",
                self.tokens.len(),
                token_balances.len()
            )));
        }

        let mut tokens = Vec::with_capacity(self.tokens.len() + 1);
        tokens.push(FormattedBalance {
            symbol: self.native_symbol.clone(),
            balance: format_balance(native_balance),
        });

        for entry in &token_balances {
            // Every token is formatted with 18 decimals, whatever the contract declares.
            let amount = raw_token_amount(entry)?;
            tokens.push(FormattedBalance {
                symbol: find_symbol(self.tokens, &entry.contract_address).to_string(),
                balance: format_balance(amount),
            });
        }

        let response = BalanceResponse {
            tokens,
            success: true,
        };

        self.cache.set(address, CacheEntry::new(response.clone()));
        debug!("Cached balances for {} ({} entries)", address, self.cache.len());
        Ok(response)
    }
}
