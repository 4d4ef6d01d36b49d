//! Cliente service contract and its repository-backed implementation.

use std::sync::Arc;

use async_trait::async_trait;
use log::error;

use crate::domain::cliente::Cliente;
use crate::dto::envelope::{FailureKind, ServiceResponse};
use crate::repository::{ClienteReader, ClienteWriter};

pub mod cliente;

/// Operations the HTTP layer delegates to.
///
/// Every call resolves to an envelope; failures are reported through
/// `success == false` and a [`FailureKind`], never as an `Err` or a panic.
#[async_trait]
pub trait ClienteService: Send + Sync {
    async fn get_clientes(&self) -> ServiceResponse<Vec<Cliente>>;
    async fn get_cliente_by_id(&self, id: i32) -> ServiceResponse<Cliente>;
    async fn get_cliente_by_telefone(&self, ddd: &str, numero: &str) -> ServiceResponse<Cliente>;
    async fn create_cliente(&self, cliente: Cliente) -> ServiceResponse<Cliente>;
    async fn inativa_cliente(&self, id: i32) -> ServiceResponse<Cliente>;
    async fn update_cliente(&self, cliente: Cliente) -> ServiceResponse<Cliente>;
    /// Returns the clientes left after the removal.
    async fn delete_cliente(&self, email: &str) -> ServiceResponse<Vec<Cliente>>;
}

/// [`ClienteService`] backed by a cliente repository.
///
/// Repository calls block on SQLite, so each operation runs on the tokio
/// blocking pool and the calling task only awaits its result.
pub struct ClienteServiceImpl<R> {
    repo: Arc<R>,
}

impl<R> ClienteServiceImpl<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo: Arc::new(repo),
        }
    }
}

impl<R> ClienteServiceImpl<R>
where
    R: ClienteReader + ClienteWriter + Send + Sync + 'static,
{
    async fn blocking<T, F>(&self, operation: &'static str, f: F) -> ServiceResponse<T>
    where
        T: Send + 'static,
        F: FnOnce(&R) -> ServiceResponse<T> + Send + 'static,
    {
        let repo = Arc::clone(&self.repo);
        match tokio::task::spawn_blocking(move || f(&repo)).await {
            Ok(response) => response,
            Err(err) => {
                error!("Failed to {operation}: {err}");
                ServiceResponse::failure(FailureKind::Internal, cliente::ERRO_INTERNO)
            }
        }
    }
}

#[async_trait]
impl<R> ClienteService for ClienteServiceImpl<R>
where
    R: ClienteReader + ClienteWriter + Send + Sync + 'static,
{
    async fn get_clientes(&self) -> ServiceResponse<Vec<Cliente>> {
        self.blocking("list clientes", |repo| cliente::list_clientes(repo))
            .await
    }

    async fn get_cliente_by_id(&self, id: i32) -> ServiceResponse<Cliente> {
        self.blocking("get cliente by id", move |repo| {
            cliente::get_cliente_by_id(repo, id)
        })
        .await
    }

    async fn get_cliente_by_telefone(&self, ddd: &str, numero: &str) -> ServiceResponse<Cliente> {
        let (ddd, numero) = (ddd.to_owned(), numero.to_owned());
        self.blocking("get cliente by telefone", move |repo| {
            cliente::get_cliente_by_telefone(repo, &ddd, &numero)
        })
        .await
    }

    async fn create_cliente(&self, payload: Cliente) -> ServiceResponse<Cliente> {
        self.blocking("create cliente", move |repo| {
            cliente::create_cliente(repo, &payload)
        })
        .await
    }

    async fn inativa_cliente(&self, id: i32) -> ServiceResponse<Cliente> {
        self.blocking("deactivate cliente", move |repo| {
            cliente::inativa_cliente(repo, id)
        })
        .await
    }

    async fn update_cliente(&self, payload: Cliente) -> ServiceResponse<Cliente> {
        self.blocking("update cliente", move |repo| {
            cliente::update_cliente(repo, &payload)
        })
        .await
    }

    async fn delete_cliente(&self, email: &str) -> ServiceResponse<Vec<Cliente>> {
        let email = email.to_owned();
        self.blocking("delete cliente", move |repo| {
            cliente::delete_cliente(repo, &email)
        })
        .await
    }
}
