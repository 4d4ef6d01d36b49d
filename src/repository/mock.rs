//! Mock repository implementation for isolating services in tests.

use mockall::mock;

use crate::domain::cliente::{Cliente, NewCliente, UpdateCliente};
use crate::domain::types::{ClienteEmail, ClienteId, Ddd, NumeroTelefone};
use crate::repository::errors::RepositoryResult;
use crate::repository::{ClienteReader, ClienteWriter};

mock! {
    pub Repository {}

    impl ClienteReader for Repository {
        fn list_clientes(&self) -> RepositoryResult<Vec<Cliente>>;
        fn get_cliente_by_id(&self, id: ClienteId) -> RepositoryResult<Option<Cliente>>;
        fn get_cliente_by_email(&self, email: &ClienteEmail) -> RepositoryResult<Option<Cliente>>;
        fn get_cliente_by_telefone(
            &self,
            ddd: &Ddd,
            numero: &NumeroTelefone,
        ) -> RepositoryResult<Option<Cliente>>;
    }

    impl ClienteWriter for Repository {
        fn create_cliente(&self, new_cliente: &NewCliente) -> RepositoryResult<Cliente>;
        fn update_cliente(
            &self,
            id: ClienteId,
            updates: &UpdateCliente,
        ) -> RepositoryResult<Cliente>;
        fn set_cliente_ativo(&self, id: ClienteId, ativo: bool) -> RepositoryResult<Cliente>;
        fn delete_cliente(&self, id: ClienteId) -> RepositoryResult<()>;
    }
}
