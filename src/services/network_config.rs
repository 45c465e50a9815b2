use crate::{config::Config, models::network_config::NetworkConfig};

const ALCHEMY_MAINNET_URL: &str = "https://eth-mainnet.g.alchemy.com/v2/";

/// Ethereum mainnet configuration, the only network balances are served for.
pub fn get_network_config(config: &Config) -> NetworkConfig {
    let rpc_url = match &config.rpc_url_override {
        Some(url) => url.clone(),
        None => format!("{}{}", ALCHEMY_MAINNET_URL, config.alchemy_api_key),
    };

    NetworkConfig {
        chain_id: 1,
        name: "Ethereum Mainnet".to_string(),
        rpc_url,
        native_symbol: "ETH".to_string(),
    }
}
