//! Business rules behind each cliente operation.

use log::{error, info, warn};

use crate::domain::cliente::{Cliente, NewCliente, UpdateCliente};
use crate::domain::types::{ClienteEmail, ClienteId, Ddd, NumeroTelefone};
use crate::dto::envelope::{FailureKind, ServiceResponse};
use crate::repository::errors::RepositoryError;
use crate::repository::{ClienteReader, ClienteWriter};

pub const CLIENTES_ENCONTRADOS: &str = "Clientes encontrados!";
pub const NENHUM_CLIENTE: &str = "Nenhum cliente cadastrado.";
pub const CLIENTE_ENCONTRADO: &str = "Cliente encontrado!";
pub const CLIENTE_CADASTRADO: &str = "Cliente cadastrado com sucesso!";
pub const CLIENTE_INATIVADO: &str = "Cliente inativado com sucesso!";
pub const CLIENTE_JA_INATIVO: &str = "Cliente já está inativo.";
pub const CLIENTE_ATUALIZADO: &str = "Cliente atualizado com sucesso!";
pub const NENHUMA_ALTERACAO: &str = "Nenhuma alteração realizada.";
pub const CLIENTE_REMOVIDO: &str = "Cliente removido com sucesso!";
pub const EMAIL_DUPLICADO: &str = "Já existe um cliente cadastrado com este email!";
pub const ERRO_INTERNO: &str = "Erro interno ao acessar os dados.";

fn repository_failure<T>(operation: &str, err: RepositoryError) -> ServiceResponse<T> {
    match err {
        RepositoryError::NotFound => ServiceResponse::not_found(),
        // `clientes.email` is the only unique column.
        RepositoryError::UniqueViolation(msg) => {
            warn!("Unique violation while trying to {operation}: {msg}");
            ServiceResponse::failure(FailureKind::Conflict, EMAIL_DUPLICADO)
        }
        err => {
            error!("Failed to {operation}: {err}");
            ServiceResponse::failure(FailureKind::Internal, ERRO_INTERNO)
        }
    }
}

fn invalid<T>(err: impl std::fmt::Display) -> ServiceResponse<T> {
    ServiceResponse::failure(
        FailureKind::Invalid,
        format!("Dados do cliente inválidos: {err}"),
    )
}

/// Returns `Some(conflict)` when `email` already belongs to a cliente other
/// than `owner`.
fn email_conflict<R, T>(
    repo: &R,
    email: &ClienteEmail,
    owner: Option<ClienteId>,
) -> Option<ServiceResponse<T>>
where
    R: ClienteReader + ?Sized,
{
    match repo.get_cliente_by_email(email) {
        Ok(Some(existing)) if owner.is_none_or(|id| id.get() != existing.id) => Some(
            ServiceResponse::failure(FailureKind::Conflict, EMAIL_DUPLICADO),
        ),
        Ok(_) => None,
        Err(err) => Some(repository_failure("check email uniqueness", err)),
    }
}

/// Lists all clientes; an empty store is still a success.
pub fn list_clientes<R>(repo: &R) -> ServiceResponse<Vec<Cliente>>
where
    R: ClienteReader + ?Sized,
{
    match repo.list_clientes() {
        Ok(clientes) if clientes.is_empty() => ServiceResponse::success(clientes, NENHUM_CLIENTE),
        Ok(clientes) => ServiceResponse::success(clientes, CLIENTES_ENCONTRADOS),
        Err(err) => repository_failure("list clientes", err),
    }
}

pub fn get_cliente_by_id<R>(repo: &R, id: i32) -> ServiceResponse<Cliente>
where
    R: ClienteReader + ?Sized,
{
    let Ok(id) = ClienteId::new(id) else {
        return ServiceResponse::not_found();
    };

    match repo.get_cliente_by_id(id) {
        Ok(Some(cliente)) => ServiceResponse::success(cliente, CLIENTE_ENCONTRADO),
        Ok(None) => ServiceResponse::not_found(),
        Err(err) => repository_failure("get cliente by id", err),
    }
}

/// Looks a cliente up by one of its phones. Malformed phone parts cannot
/// match any stored phone and are reported as not found.
pub fn get_cliente_by_telefone<R>(repo: &R, ddd: &str, numero: &str) -> ServiceResponse<Cliente>
where
    R: ClienteReader + ?Sized,
{
    let (Ok(ddd), Ok(numero)) = (Ddd::new(ddd), NumeroTelefone::new(numero)) else {
        return ServiceResponse::not_found();
    };

    match repo.get_cliente_by_telefone(&ddd, &numero) {
        Ok(Some(cliente)) => ServiceResponse::success(cliente, CLIENTE_ENCONTRADO),
        Ok(None) => ServiceResponse::not_found(),
        Err(err) => repository_failure("get cliente by telefone", err),
    }
}

/// Validates and stores a new cliente. The payload id is ignored.
pub fn create_cliente<R>(repo: &R, payload: &Cliente) -> ServiceResponse<Cliente>
where
    R: ClienteReader + ClienteWriter + ?Sized,
{
    let new_cliente = match NewCliente::try_from(payload) {
        Ok(new_cliente) => new_cliente,
        Err(err) => return invalid(err),
    };

    if let Some(conflict) = email_conflict(repo, &new_cliente.email, None) {
        return conflict;
    }

    match repo.create_cliente(&new_cliente) {
        Ok(cliente) => {
            info!("Created cliente {}", cliente.id);
            ServiceResponse::success(cliente, CLIENTE_CADASTRADO)
        }
        Err(err) => repository_failure("create cliente", err),
    }
}

/// Marks a cliente as inactive. Deactivating an inactive cliente succeeds
/// without payload.
pub fn inativa_cliente<R>(repo: &R, id: i32) -> ServiceResponse<Cliente>
where
    R: ClienteReader + ClienteWriter + ?Sized,
{
    let Ok(id) = ClienteId::new(id) else {
        return ServiceResponse::not_found();
    };

    match repo.get_cliente_by_id(id) {
        Ok(Some(cliente)) if !cliente.ativo => return ServiceResponse::empty(CLIENTE_JA_INATIVO),
        Ok(Some(_)) => {}
        Ok(None) => return ServiceResponse::not_found(),
        Err(err) => return repository_failure("get cliente by id", err),
    }

    match repo.set_cliente_ativo(id, false) {
        Ok(cliente) => {
            info!("Deactivated cliente {id}");
            ServiceResponse::success(cliente, CLIENTE_INATIVADO)
        }
        Err(err) => repository_failure("deactivate cliente", err),
    }
}

/// Replaces the stored cliente identified by `payload.id`.
pub fn update_cliente<R>(repo: &R, payload: &Cliente) -> ServiceResponse<Cliente>
where
    R: ClienteReader + ClienteWriter + ?Sized,
{
    let Ok(id) = ClienteId::new(payload.id) else {
        return ServiceResponse::not_found();
    };

    let updates = match UpdateCliente::try_from(payload) {
        Ok(updates) => updates,
        Err(err) => return invalid(err),
    };

    let current = match repo.get_cliente_by_id(id) {
        Ok(Some(current)) => current,
        Ok(None) => return ServiceResponse::not_found(),
        Err(err) => return repository_failure("get cliente by id", err),
    };

    if updates.is_noop_for(&current) {
        return ServiceResponse::empty(NENHUMA_ALTERACAO);
    }

    if updates.email.as_str() != current.email {
        if let Some(conflict) = email_conflict(repo, &updates.email, Some(id)) {
            return conflict;
        }
    }

    match repo.update_cliente(id, &updates) {
        Ok(cliente) => {
            info!("Updated cliente {id}");
            ServiceResponse::success(cliente, CLIENTE_ATUALIZADO)
        }
        Err(err) => repository_failure("update cliente", err),
    }
}

/// Removes the cliente owning `email` and returns the remaining clientes.
pub fn delete_cliente<R>(repo: &R, email: &str) -> ServiceResponse<Vec<Cliente>>
where
    R: ClienteReader + ClienteWriter + ?Sized,
{
    let Ok(email) = ClienteEmail::new(email) else {
        return ServiceResponse::not_found();
    };

    let cliente = match repo.get_cliente_by_email(&email) {
        Ok(Some(cliente)) => cliente,
        Ok(None) => return ServiceResponse::not_found(),
        Err(err) => return repository_failure("get cliente by email", err),
    };

    let id = match ClienteId::new(cliente.id) {
        Ok(id) => id,
        Err(err) => return repository_failure("delete cliente", err.into()),
    };

    if let Err(err) = repo.delete_cliente(id) {
        return repository_failure("delete cliente", err);
    }
    info!("Deleted cliente {id}");

    match repo.list_clientes() {
        Ok(restantes) => ServiceResponse::success(restantes, CLIENTE_REMOVIDO),
        Err(err) => repository_failure("list clientes", err),
    }
}
