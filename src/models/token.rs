use serde::{Deserialize, Serialize};

/// A tracked ERC20 contract. The set is fixed at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenDescriptor {
    pub name: &'static str,
    pub symbol: &'static str,
    pub contract_address: &'static str,
}

/// Display-ready balance of one asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedBalance {
    pub symbol: String,
    pub balance: String,
}

/// One entry of an `alchemy_getTokenBalances` result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTokenBalance {
    pub contract_address: String,
    pub token_balance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenBalancesResult {
    pub address: String,
    pub token_balances: Vec<RawTokenBalance>,
}
