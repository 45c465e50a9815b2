pub mod address;
pub mod balance;
pub mod network_config;
pub mod token;
