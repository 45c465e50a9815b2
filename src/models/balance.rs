use serde::{Deserialize, Serialize};

use super::token::FormattedBalance;

#[derive(Debug, Deserialize)]
pub struct BalanceQuery {
    pub address: String,
}

/// Native balance first, then tracked tokens in configured order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceResponse {
    pub tokens: Vec<FormattedBalance>,
    pub success: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}
