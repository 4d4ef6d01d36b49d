use std::sync::Arc;

use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use async_trait::async_trait;
use mockall::mock;
use serde_json::{Value, json};

use cliente_api::domain::cliente::Cliente;
use cliente_api::dto::envelope::{CLIENTE_NAO_ENCONTRADO, FailureKind, ServiceResponse};
use cliente_api::routes::configure;
use cliente_api::services::ClienteService;

mock! {
    pub Service {}

    #[async_trait]
    impl ClienteService for Service {
        async fn get_clientes(&self) -> ServiceResponse<Vec<Cliente>>;
        async fn get_cliente_by_id(&self, id: i32) -> ServiceResponse<Cliente>;
        async fn get_cliente_by_telefone(&self, ddd: &str, numero: &str) -> ServiceResponse<Cliente>;
        async fn create_cliente(&self, cliente: Cliente) -> ServiceResponse<Cliente>;
        async fn inativa_cliente(&self, id: i32) -> ServiceResponse<Cliente>;
        async fn update_cliente(&self, cliente: Cliente) -> ServiceResponse<Cliente>;
        async fn delete_cliente(&self, email: &str) -> ServiceResponse<Vec<Cliente>>;
    }
}

fn cliente(id: i32) -> Cliente {
    Cliente {
        id,
        nome: format!("Cliente {id}"),
        email: format!("cliente{id}@example.com"),
        ..Cliente::default()
    }
}

macro_rules! app {
    ($service:expr) => {{
        let service: Arc<dyn ClienteService> = Arc::new($service);
        test::init_service(
            App::new()
                .app_data(web::Data::from(service))
                .configure(configure),
        )
        .await
    }};
}

#[actix_web::test]
async fn list_is_always_ok() {
    let mut service = MockService::new();
    service
        .expect_get_clientes()
        .times(1)
        .returning(|| ServiceResponse::success(vec![cliente(1), cliente(2)], "ok"));
    let app = app!(service);

    let req = test::TestRequest::get().uri("/api/cliente").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(2));
}

#[actix_web::test]
async fn get_by_id_echoes_envelope() {
    let mut service = MockService::new();
    service
        .expect_get_cliente_by_id()
        .withf(|id| *id == 5)
        .times(1)
        .returning(|id| ServiceResponse::success(cliente(id), "Cliente encontrado!"));
    let app = app!(service);

    let req = test::TestRequest::get().uri("/api/cliente/5").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let expected = serde_json::to_value(ServiceResponse::success(cliente(5), "Cliente encontrado!"))
        .unwrap();
    assert_eq!(body, expected);
}

#[actix_web::test]
async fn get_by_id_not_found() {
    let mut service = MockService::new();
    service
        .expect_get_cliente_by_id()
        .times(1)
        .returning(|_| ServiceResponse::not_found());
    let app = app!(service);

    let req = test::TestRequest::get().uri("/api/cliente/999").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], CLIENTE_NAO_ENCONTRADO);
    assert_eq!(body["success"], false);
}

#[actix_web::test]
async fn get_by_telefone_passes_both_segments() {
    let mut service = MockService::new();
    service
        .expect_get_cliente_by_telefone()
        .withf(|ddd, numero| ddd == "11" && numero == "912345678")
        .times(1)
        .returning(|_, _| ServiceResponse::success(cliente(3), "ok"));
    let app = app!(service);

    let req = test::TestRequest::get()
        .uri("/api/cliente/11/912345678")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn get_by_telefone_not_found() {
    let mut service = MockService::new();
    service
        .expect_get_cliente_by_telefone()
        .times(1)
        .returning(|_, _| ServiceResponse::not_found());
    let app = app!(service);

    let req = test::TestRequest::get()
        .uri("/api/cliente/11/00000000")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn create_returns_created_with_location() {
    let mut service = MockService::new();
    service
        .expect_create_cliente()
        .withf(|c| c.nome == "Nova" && c.id == 0)
        .times(1)
        .returning(|c| ServiceResponse::success(Cliente { id: 7, ..c }, "criado"));
    let app = app!(service);

    let req = test::TestRequest::post()
        .uri("/api/cliente")
        .set_json(json!({"nome": "Nova", "email": "nova@example.com"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let location = resp
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert!(location.ends_with("/api/cliente/7"), "location was {location}");

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["id"], 7);
}

#[actix_web::test]
async fn create_not_found_failure_is_404() {
    let mut service = MockService::new();
    service
        .expect_create_cliente()
        .times(1)
        .returning(|_| ServiceResponse::not_found());
    let app = app!(service);

    let req = test::TestRequest::post()
        .uri("/api/cliente")
        .set_json(json!({"nome": "Nova", "email": "nova@example.com"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn create_other_failures_are_400() {
    for kind in [FailureKind::Invalid, FailureKind::Conflict, FailureKind::Internal] {
        let mut service = MockService::new();
        service
            .expect_create_cliente()
            .times(1)
            .returning(move |_| ServiceResponse::failure(kind, "Email já cadastrado"));
        let app = app!(service);

        let req = test::TestRequest::post()
            .uri("/api/cliente")
            .set_json(json!({"nome": "Nova", "email": "nova@example.com"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "kind {kind:?}");
    }
}

#[actix_web::test]
async fn inativa_maps_payload_presence() {
    let cases: [(ServiceResponse<Cliente>, StatusCode); 4] = [
        (ServiceResponse::success(cliente(4), "ok"), StatusCode::OK),
        (ServiceResponse::empty("já inativo"), StatusCode::NO_CONTENT),
        (ServiceResponse::not_found(), StatusCode::NOT_FOUND),
        (
            ServiceResponse {
                data: Some(cliente(4)),
                ..ServiceResponse::failure(FailureKind::Internal, "erro")
            },
            StatusCode::NOT_FOUND,
        ),
    ];

    for (response, expected) in cases {
        let mut service = MockService::new();
        service
            .expect_inativa_cliente()
            .withf(|id| *id == 4)
            .times(1)
            .return_once(move |_| response);
        let app = app!(service);

        let req = test::TestRequest::put()
            .uri("/api/cliente/InativarCliente/4")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), expected);
    }
}

#[actix_web::test]
async fn update_maps_payload_presence() {
    let cases: [(ServiceResponse<Cliente>, StatusCode); 4] = [
        (ServiceResponse::success(cliente(2), "ok"), StatusCode::OK),
        (ServiceResponse::empty("nada mudou"), StatusCode::NO_CONTENT),
        (
            ServiceResponse::failure(FailureKind::Invalid, "email inválido"),
            StatusCode::NOT_FOUND,
        ),
        (
            ServiceResponse {
                data: Some(cliente(2)),
                ..ServiceResponse::failure(FailureKind::Conflict, "email em uso")
            },
            StatusCode::NOT_FOUND,
        ),
    ];

    for (response, expected) in cases {
        let mut service = MockService::new();
        service
            .expect_update_cliente()
            .withf(|c| c.id == 2)
            .times(1)
            .return_once(move |_| response);
        let app = app!(service);

        let req = test::TestRequest::put()
            .uri("/api/cliente")
            .set_json(cliente(2))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), expected);
    }
}

#[actix_web::test]
async fn delete_with_empty_list_is_no_content() {
    let mut service = MockService::new();
    service
        .expect_delete_cliente()
        .withf(|email| email == "a@b.com")
        .times(1)
        .returning(|_| ServiceResponse::success(vec![], "removido"));
    let app = app!(service);

    let req = test::TestRequest::delete()
        .uri("/api/cliente/a@b.com")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let body = test::read_body(resp).await;
    assert!(body.is_empty());
}

#[actix_web::test]
async fn delete_maps_remaining_list() {
    let cases: [(ServiceResponse<Vec<Cliente>>, StatusCode); 4] = [
        (
            ServiceResponse::success(vec![cliente(1)], "removido"),
            StatusCode::OK,
        ),
        (ServiceResponse::empty("removido"), StatusCode::NO_CONTENT),
        (ServiceResponse::not_found(), StatusCode::NOT_FOUND),
        (
            ServiceResponse {
                data: Some(vec![cliente(1)]),
                ..ServiceResponse::failure(FailureKind::Internal, "erro")
            },
            StatusCode::NOT_FOUND,
        ),
    ];

    for (response, expected) in cases {
        let mut service = MockService::new();
        service
            .expect_delete_cliente()
            .times(1)
            .return_once(move |_| response);
        let app = app!(service);

        let req = test::TestRequest::delete()
            .uri("/api/cliente/x@y.com")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), expected);
    }
}

#[actix_web::test]
async fn non_numeric_id_never_reaches_service() {
    let mut service = MockService::new();
    service.expect_get_cliente_by_id().never();
    let app = app!(service);

    let req = test::TestRequest::get().uri("/api/cliente/abc").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn health_is_ok() {
    let app = app!(MockService::new());

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}
