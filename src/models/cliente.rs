use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::cliente::{
    Cliente as DomainCliente, NewCliente as DomainNewCliente, NewTelefone as DomainNewTelefone,
    Telefone as DomainTelefone, UpdateCliente as DomainUpdateCliente,
};
use crate::domain::types::TypeConstraintError;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::clientes)]
/// Diesel model for [`crate::domain::cliente::Cliente`] without its phones.
pub struct Cliente {
    pub id: i32,
    pub nome: String,
    pub email: String,
    pub tipo_cliente: String,
    pub ativo: bool,
    pub data_alteracao: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::telefones)]
#[diesel(belongs_to(Cliente, foreign_key = cliente_id))]
pub struct Telefone {
    pub id: i32,
    pub cliente_id: i32,
    pub ddd: String,
    pub numero: String,
    pub tipo: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::clientes)]
/// Insertable form of [`Cliente`].
pub struct NewCliente<'a> {
    pub nome: &'a str,
    pub email: &'a str,
    pub tipo_cliente: &'a str,
    pub ativo: bool,
    pub data_alteracao: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::telefones)]
pub struct NewTelefone<'a> {
    pub cliente_id: i32,
    pub ddd: &'a str,
    pub numero: &'a str,
    pub tipo: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::clientes)]
/// Data used when replacing the scalar columns of a [`Cliente`].
pub struct UpdateCliente<'a> {
    pub nome: &'a str,
    pub email: &'a str,
    pub tipo_cliente: &'a str,
    pub ativo: bool,
    pub data_alteracao: NaiveDateTime,
}

impl<'a> NewCliente<'a> {
    pub fn from_domain(cliente: &'a DomainNewCliente, now: NaiveDateTime) -> Self {
        Self {
            nome: cliente.nome.as_str(),
            email: cliente.email.as_str(),
            tipo_cliente: cliente.tipo_cliente.as_str(),
            ativo: true,
            data_alteracao: now,
        }
    }
}

impl<'a> NewTelefone<'a> {
    pub fn from_domain(cliente_id: i32, telefone: &'a DomainNewTelefone) -> Self {
        Self {
            cliente_id,
            ddd: telefone.ddd.as_str(),
            numero: telefone.numero.as_str(),
            tipo: telefone.tipo.as_str(),
        }
    }
}

impl<'a> UpdateCliente<'a> {
    pub fn from_domain(cliente: &'a DomainUpdateCliente, now: NaiveDateTime) -> Self {
        Self {
            nome: cliente.nome.as_str(),
            email: cliente.email.as_str(),
            tipo_cliente: cliente.tipo_cliente.as_str(),
            ativo: cliente.ativo,
            data_alteracao: now,
        }
    }
}

impl TryFrom<Telefone> for DomainTelefone {
    type Error = TypeConstraintError;

    fn try_from(telefone: Telefone) -> Result<Self, Self::Error> {
        Ok(Self {
            ddd: telefone.ddd,
            numero: telefone.numero,
            tipo: telefone.tipo.parse()?,
        })
    }
}

/// Assembles the domain aggregate from a row and its phone rows.
pub fn into_domain(
    cliente: Cliente,
    telefones: Vec<Telefone>,
) -> Result<DomainCliente, TypeConstraintError> {
    Ok(DomainCliente {
        id: cliente.id,
        nome: cliente.nome,
        email: cliente.email,
        telefones: telefones
            .into_iter()
            .map(DomainTelefone::try_from)
            .collect::<Result<Vec<_>, _>>()?,
        tipo_cliente: cliente.tipo_cliente.parse()?,
        ativo: cliente.ativo,
        data_alteracao: cliente.data_alteracao,
    })
}
