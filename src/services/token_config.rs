use crate::models::token::TokenDescriptor;

pub const USDC: TokenDescriptor = TokenDescriptor {
    name: "USD Coin",
    symbol: "USDC",
    contract_address: "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48",
};

pub const LINK: TokenDescriptor = TokenDescriptor {
    name: "Chainlink",
    symbol: "LINK",
    contract_address: "0x514910771AF9Ca656af840dff83E8264EcF986CA",
};

/// Tokens queried for every address, in response order.
pub const TRACKED_TOKENS: &[TokenDescriptor] = &[USDC, LINK];

/// Symbol for a contract address as returned by the provider.
/// The comparison is exact; unknown contracts map to an empty symbol.
pub fn find_symbol<'a>(tokens: &'a [TokenDescriptor], contract_address: &str) -> &'a str {
    tokens
        .iter()
        .find(|token| token.contract_address == contract_address)
        .map(|token| token.symbol)
        .unwrap_or("")
}
