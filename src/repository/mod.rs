use crate::db::{DbConnection, DbPool};
use crate::domain::cliente::{Cliente, NewCliente, UpdateCliente};
use crate::domain::types::{ClienteEmail, ClienteId, Ddd, NumeroTelefone};
use crate::repository::errors::RepositoryResult;

pub mod cliente;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Diesel-backed repository over a shared SQLite pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

pub trait ClienteReader {
    /// Every stored cliente ordered by id, phones included.
    fn list_clientes(&self) -> RepositoryResult<Vec<Cliente>>;
    fn get_cliente_by_id(&self, id: ClienteId) -> RepositoryResult<Option<Cliente>>;
    fn get_cliente_by_email(&self, email: &ClienteEmail) -> RepositoryResult<Option<Cliente>>;
    /// First cliente owning a phone with the exact area code and number.
    fn get_cliente_by_telefone(
        &self,
        ddd: &Ddd,
        numero: &NumeroTelefone,
    ) -> RepositoryResult<Option<Cliente>>;
}

pub trait ClienteWriter {
    fn create_cliente(&self, new_cliente: &NewCliente) -> RepositoryResult<Cliente>;
    /// Replaces scalar fields and the whole phone list.
    fn update_cliente(&self, id: ClienteId, updates: &UpdateCliente) -> RepositoryResult<Cliente>;
    fn set_cliente_ativo(&self, id: ClienteId, ativo: bool) -> RepositoryResult<Cliente>;
    fn delete_cliente(&self, id: ClienteId) -> RepositoryResult<()>;
}
