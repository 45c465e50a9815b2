use actix_web::{get, web, HttpResponse};
use log::info;

use crate::{
    errors::CustomError,
    models::balance::{BalanceQuery, StatusResponse},
    services::balance_service::BalanceService,
};

#[get("/status")]
async fn get_status() -> HttpResponse {
    HttpResponse::Ok().json(StatusResponse {
        status: "API server up and running".to_string(),
    })
}

#[get("/balance")]
async fn get_balance(
    query: web::Query<BalanceQuery>,
    balance_service: web::Data<BalanceService>,
) -> Result<HttpResponse, CustomError> {
    info!("Balance requested for {}", query.address);
    let balances = balance_service.get_balances(&query.address).await?;
    Ok(HttpResponse::Ok().json(balances))
}
