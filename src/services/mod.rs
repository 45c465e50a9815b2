pub mod balance_cache;
pub mod balance_service;
pub mod blockchain_service;
pub mod format;
#[cfg(test)]
pub mod mock_provider;
pub mod network_config;
pub mod token_config;
