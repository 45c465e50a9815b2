/// Chain the service reads balances from.
#[derive(Clone, Debug)]
pub struct NetworkConfig {
    pub chain_id: u64,
    pub name: String,
    pub rpc_url: String,
    pub native_symbol: String,
}
