//! HTTP routes and the envelope → status code mapping they share.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, get, web};
use log::{debug, warn};
use serde::Serialize;

use crate::dto::envelope::ServiceResponse;

pub mod cliente;

/// Registers the cliente scope and the liveness probe.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health).service(
        web::scope("/api/cliente")
            .service(cliente::get_clientes)
            .service(cliente::create_cliente)
            .service(cliente::update_cliente)
            .service(cliente::inativa_cliente)
            .service(cliente::get_cliente_by_id)
            .service(cliente::delete_cliente)
            .service(cliente::get_cliente_by_telefone),
    );
}

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

/// Status for read operations: found or not.
pub fn lookup_status(success: bool) -> StatusCode {
    if success {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    }
}

/// Status for create: 201 on success, otherwise 404 only for a missing
/// cliente and 400 for everything else.
pub fn create_status<T>(response: &ServiceResponse<T>) -> StatusCode {
    if response.success {
        StatusCode::CREATED
    } else if response.is_not_found() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::BAD_REQUEST
    }
}

/// Status for update, deactivate and delete.
pub fn mutation_status(success: bool, has_payload: bool) -> StatusCode {
    match (success, has_payload) {
        (false, _) => StatusCode::NOT_FOUND,
        (true, true) => StatusCode::OK,
        (true, false) => StatusCode::NO_CONTENT,
    }
}

/// Writes the envelope with `status`; 204 always goes out with an empty body.
pub(crate) fn respond<T: Serialize>(
    operation: &str,
    status: StatusCode,
    response: &ServiceResponse<T>,
) -> HttpResponse {
    if response.success {
        debug!("{operation} -> {status}");
    } else {
        warn!("{operation} -> {status}: {}", response.message);
    }

    if status == StatusCode::NO_CONTENT {
        HttpResponse::NoContent().finish()
    } else {
        HttpResponse::build(status).json(response)
    }
}
