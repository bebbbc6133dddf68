//! app.rs
use actix_web::{http::Method, middleware::DefaultHeaders, web};

use crate::errors::ScheduledError;
use crate::handlers::message_handler;

pub const LIST_SCHEDULED_PATH: &str = "/api/1.0/messages/list-scheduled.json";
pub const CANCEL_SCHEDULED_PATH: &str = "/api/1.0/messages/cancel-scheduled.json";

/// Headers CORS permisivos, presentes en toda respuesta (también en errores).
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", "*"))
        .add(("Access-Control-Allow-Methods", "POST, OPTIONS"))
        .add(("Access-Control-Allow-Headers", "Content-Type"))
        .add(("Access-Control-Allow-Credentials", "false"))
}

pub fn init_app(cfg: &mut web::ServiceConfig) {
    // El body se interpreta como JSON sin importar el Content-Type
    let json_cfg = web::JsonConfig::default()
        .content_type_required(false)
        .content_type(|_| true)
        .error_handler(|err, _req| ScheduledError::BadRequest(err.to_string()).into());

    cfg.app_data(json_cfg)
        .service(
            web::resource(LIST_SCHEDULED_PATH)
                .route(web::post().to(message_handler::list_scheduled_endpoint))
                .route(web::method(Method::OPTIONS).to(message_handler::preflight_endpoint)),
        )
        .service(
            web::resource(CANCEL_SCHEDULED_PATH)
                .route(web::post().to(message_handler::cancel_scheduled_endpoint))
                .route(web::method(Method::OPTIONS).to(message_handler::preflight_endpoint)),
        );
}
