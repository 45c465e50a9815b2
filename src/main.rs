use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use log::info;
use std::io;
use std::sync::Arc;

mod api;
mod config;
mod errors;
mod models;
mod services;

use services::{
    balance_cache::BalanceCache, balance_service::BalanceService,
    blockchain_service::BlockchainClient, network_config::get_network_config,
    token_config::TRACKED_TOKENS,
};

fn startup_error(e: errors::CustomError) -> io::Error {
    io::Error::new(io::ErrorKind::Other, e.to_string())
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = config::Config::from_env().map_err(startup_error)?;
    let network = get_network_config(&config);
    info!("Serving {} (chain {}) balances", network.name, network.chain_id);
    for token in TRACKED_TOKENS {
        info!("Tracking {} ({}) at {}", token.name, token.symbol, token.contract_address);
    }

    let client = BlockchainClient::new(network.clone()).map_err(startup_error)?;
    let cache = BalanceCache::new(config.cache_ttl);
    let balance_service = web::Data::new(BalanceService::new(
        Arc::new(client),
        cache,
        network.native_symbol,
        TRACKED_TOKENS,
    ));

    info!("Listening on {}:{}", config.host, config.port);
    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET"])
            .allow_any_header();
        App::new()
            .app_data(balance_service.clone())
            .configure(api::config)
            .wrap(cors)
            .wrap(Logger::default())
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
