use async_trait::async_trait;
use ethers::types::U256;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use crate::{errors::CustomError, models::token::RawTokenBalance};

use super::blockchain_service::BalanceProvider;

/// In-memory provider that counts every lookup.
#[derive(Clone, Default)]
pub struct MockProvider {
    native: Arc<Mutex<U256>>,
    token_balances: Arc<Mutex<Vec<RawTokenBalance>>>,
    fail_native: bool,
    fail_tokens: bool,
    pub native_calls: Arc<AtomicUsize>,
    pub token_calls: Arc<AtomicUsize>,
}

impl MockProvider {
    pub fn new(native: U256, token_balances: Vec<RawTokenBalance>) -> Self {
        Self {
            native: Arc::new(Mutex::new(native)),
            token_balances: Arc::new(Mutex::new(token_balances)),
            ..Default::default()
        }
    }

    pub fn failing_native(mut self) -> Self {
        self.fail_native = true;
        self
    }

    pub fn failing_tokens(mut self) -> Self {
        self.fail_tokens = true;
        self
    }

    pub fn set_native(&self, native: U256) {
        *self.native.lock().unwrap() = native;
    }

    pub fn lookups(&self) -> usize {
        self.native_calls.load(Ordering::SeqCst) + self.token_calls.load(Ordering::SeqCst)
    }
}

pub fn raw_token(contract_address: &str, hex_balance: &str) -> RawTokenBalance {
    RawTokenBalance {
        contract_address: contract_address.to_string(),
        token_balance: Some(hex_balance.to_string()),
        error: None,
    }
}

#[async_trait]
impl BalanceProvider for MockProvider {
    async fn get_native_balance(&self, _wallet_address: &str) -> Result<U256, CustomError> {
        self.native_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_native {
            return Err(CustomError::StringifiedProviderError(
                "native lookup failed".to_string(),
            ));
        }
        Ok(*self.native.lock().unwrap())
    }

    async fn get_token_balances(
        &self,
        _wallet_address: &str,
        _token_addresses: &[String],
    ) -> Result<Vec<RawTokenBalance>, CustomError> {
        self.token_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_tokens {
            return Err(CustomError::StringifiedProviderError(
                "token lookup failed".to_string(),
            ));
        }
        Ok(self.token_balances.lock().unwrap().clone())
    }
}
