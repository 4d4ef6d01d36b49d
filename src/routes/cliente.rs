//! Cliente endpoints.
//!
//! ```text
//! GET    /api/cliente
//! GET    /api/cliente/{id}
//! GET    /api/cliente/{ddd}/{numero}
//! POST   /api/cliente
//! PUT    /api/cliente/InativarCliente/{id}
//! PUT    /api/cliente
//! DELETE /api/cliente/{email}
//! ```
//!
//! Each handler makes exactly one call into [`ClienteService`] and echoes its
//! envelope as the body.

use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, delete, get, post, put, web};
use log::debug;

use crate::domain::cliente::Cliente;
use crate::routes::{create_status, lookup_status, mutation_status, respond};
use crate::services::ClienteService;

#[get("")]
pub async fn get_clientes(service: web::Data<dyn ClienteService>) -> HttpResponse {
    let response = service.get_clientes().await;
    // Listing never fails from the client's point of view.
    respond("get_clientes", lookup_status(true), &response)
}

#[get("/{id}", name = "get_cliente_by_id")]
pub async fn get_cliente_by_id(
    id: web::Path<i32>,
    service: web::Data<dyn ClienteService>,
) -> HttpResponse {
    let response = service.get_cliente_by_id(id.into_inner()).await;
    respond("get_cliente_by_id", lookup_status(response.success), &response)
}

#[get("/{ddd}/{numero}")]
pub async fn get_cliente_by_telefone(
    path: web::Path<(String, String)>,
    service: web::Data<dyn ClienteService>,
) -> HttpResponse {
    let (ddd, numero) = path.into_inner();
    let response = service.get_cliente_by_telefone(&ddd, &numero).await;
    respond(
        "get_cliente_by_telefone",
        lookup_status(response.success),
        &response,
    )
}

#[post("")]
pub async fn create_cliente(
    req: HttpRequest,
    service: web::Data<dyn ClienteService>,
    web::Json(payload): web::Json<Cliente>,
) -> HttpResponse {
    let submitted_id = payload.id;
    let response = service.create_cliente(payload).await;
    let status = create_status(&response);

    if !response.success {
        return respond("create_cliente", status, &response);
    }

    let id = response.data.as_ref().map_or(submitted_id, |c| c.id);
    let location = req
        .url_for("get_cliente_by_id", [id.to_string()])
        .map(|url| url.to_string())
        .unwrap_or_else(|_| format!("/api/cliente/{id}"));
    debug!("create_cliente -> {status} at {location}");

    HttpResponse::Created()
        .insert_header((header::LOCATION, location))
        .json(&response)
}

#[put("/InativarCliente/{id}")]
pub async fn inativa_cliente(
    id: web::Path<i32>,
    service: web::Data<dyn ClienteService>,
) -> HttpResponse {
    let response = service.inativa_cliente(id.into_inner()).await;
    let status = mutation_status(response.success, response.has_data());
    respond("inativa_cliente", status, &response)
}

#[put("")]
pub async fn update_cliente(
    service: web::Data<dyn ClienteService>,
    web::Json(payload): web::Json<Cliente>,
) -> HttpResponse {
    let response = service.update_cliente(payload).await;
    let status = mutation_status(response.success, response.has_data());
    respond("update_cliente", status, &response)
}

#[delete("/{email}")]
pub async fn delete_cliente(
    email: web::Path<String>,
    service: web::Data<dyn ClienteService>,
) -> HttpResponse {
    let response = service.delete_cliente(&email).await;
    let has_payload = response
        .data
        .as_ref()
        .is_some_and(|restantes| !restantes.is_empty());
    let status = mutation_status(response.success, has_payload);
    respond("delete_cliente", status, &response)
}
