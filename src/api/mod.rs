use actix_web::web;

use crate::errors::CustomError;

mod handlers;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(web::QueryConfig::default().error_handler(|err, _req| {
                CustomError::ValidationError(err.to_string()).into()
            }))
            .service(handlers::get_status)
            .service(handlers::get_balance),
    );
}
