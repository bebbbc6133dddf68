//! handlers/message_handler.rs
//! Endpoints de mensajes programados.

use actix_web::{web, HttpResponse};

use crate::models::message_model::CancelScheduledRequest;
use crate::services::scheduled_service::ScheduledService;

/// OPTIONS en cualquiera de los dos endpoints.
/// Los headers CORS los agrega el middleware.
pub async fn preflight_endpoint() -> HttpResponse {
    HttpResponse::Ok().finish()
}

/// POST /api/1.0/messages/list-scheduled.json
/// El body se ignora.
pub async fn list_scheduled_endpoint(
    scheduled_service: web::Data<ScheduledService>,
) -> HttpResponse {
    let messages = scheduled_service.list().await;
    log::debug!("Listando {} mensajes programados", messages.len());
    HttpResponse::Ok().json(messages)
}

/// POST /api/1.0/messages/cancel-scheduled.json
pub async fn cancel_scheduled_endpoint(
    scheduled_service: web::Data<ScheduledService>,
    body: web::Json<CancelScheduledRequest>,
) -> Result<HttpResponse, actix_web::Error> {
    let req_data = body.into_inner();

    match scheduled_service.cancel(&req_data.id).await {
        Ok(message) => {
            log::info!("Mensaje {} cancelado ({})", message.id, message.subject);
            Ok(HttpResponse::Ok().json(message))
        }
        Err(e) => {
            log::warn!("Cancel fallido: {}", e);
            Err(e.into())
        }
    }
}
