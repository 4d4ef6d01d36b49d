use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    ClienteEmail, Ddd, NomeCliente, NumeroTelefone, TypeConstraintError,
};

/// Customer tier.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TipoCliente {
    #[default]
    Bronze,
    Prata,
    Ouro,
}

impl TipoCliente {
    pub const fn as_str(self) -> &'static str {
        match self {
            TipoCliente::Bronze => "Bronze",
            TipoCliente::Prata => "Prata",
            TipoCliente::Ouro => "Ouro",
        }
    }
}

impl Display for TipoCliente {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TipoCliente {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Bronze" => Ok(TipoCliente::Bronze),
            "Prata" => Ok(TipoCliente::Prata),
            "Ouro" => Ok(TipoCliente::Ouro),
            other => Err(TypeConstraintError::UnknownVariant(other.to_string())),
        }
    }
}

/// Kind of phone line.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TipoTelefone {
    #[default]
    Fixo,
    Celular,
    Comercial,
}

impl TipoTelefone {
    pub const fn as_str(self) -> &'static str {
        match self {
            TipoTelefone::Fixo => "Fixo",
            TipoTelefone::Celular => "Celular",
            TipoTelefone::Comercial => "Comercial",
        }
    }
}

impl FromStr for TipoTelefone {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Fixo" => Ok(TipoTelefone::Fixo),
            "Celular" => Ok(TipoTelefone::Celular),
            "Comercial" => Ok(TipoTelefone::Comercial),
            other => Err(TypeConstraintError::UnknownVariant(other.to_string())),
        }
    }
}

/// Phone entry embedded in a [`Cliente`].
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Telefone {
    pub ddd: String,
    pub numero: String,
    pub tipo: TipoTelefone,
}

/// Customer record as exchanged over the API.
///
/// Missing fields in incoming payloads fall back to their defaults, so a
/// create request may omit `id`, `ativo` and `dataAlteracao`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Cliente {
    pub id: i32,
    pub nome: String,
    pub email: String,
    pub telefones: Vec<Telefone>,
    pub tipo_cliente: TipoCliente,
    pub ativo: bool,
    pub data_alteracao: NaiveDateTime,
}

impl Default for Cliente {
    fn default() -> Self {
        Self {
            id: 0,
            nome: String::new(),
            email: String::new(),
            telefones: Vec::new(),
            tipo_cliente: TipoCliente::default(),
            ativo: true,
            data_alteracao: NaiveDateTime::default(),
        }
    }
}

/// Validated phone entry ready to be stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewTelefone {
    pub ddd: Ddd,
    pub numero: NumeroTelefone,
    pub tipo: TipoTelefone,
}

impl TryFrom<&Telefone> for NewTelefone {
    type Error = TypeConstraintError;

    fn try_from(telefone: &Telefone) -> Result<Self, Self::Error> {
        Ok(Self {
            ddd: Ddd::new(telefone.ddd.as_str())?,
            numero: NumeroTelefone::new(telefone.numero.as_str())?,
            tipo: telefone.tipo,
        })
    }
}

impl NewTelefone {
    fn matches(&self, telefone: &Telefone) -> bool {
        self.ddd.as_str() == telefone.ddd
            && self.numero.as_str() == telefone.numero
            && self.tipo == telefone.tipo
    }
}

fn validate_telefones(telefones: &[Telefone]) -> Result<Vec<NewTelefone>, TypeConstraintError> {
    telefones.iter().map(NewTelefone::try_from).collect()
}

/// Validated payload for inserting a cliente. New clientes are always active.
#[derive(Clone, Debug, PartialEq)]
pub struct NewCliente {
    pub nome: NomeCliente,
    pub email: ClienteEmail,
    pub telefones: Vec<NewTelefone>,
    pub tipo_cliente: TipoCliente,
}

impl TryFrom<&Cliente> for NewCliente {
    type Error = TypeConstraintError;

    fn try_from(cliente: &Cliente) -> Result<Self, Self::Error> {
        Ok(Self {
            nome: NomeCliente::new(cliente.nome.as_str())?,
            email: ClienteEmail::new(cliente.email.as_str())?,
            telefones: validate_telefones(&cliente.telefones)?,
            tipo_cliente: cliente.tipo_cliente,
        })
    }
}

/// Validated replacement values for an existing cliente.
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateCliente {
    pub nome: NomeCliente,
    pub email: ClienteEmail,
    pub telefones: Vec<NewTelefone>,
    pub tipo_cliente: TipoCliente,
    pub ativo: bool,
}

impl TryFrom<&Cliente> for UpdateCliente {
    type Error = TypeConstraintError;

    fn try_from(cliente: &Cliente) -> Result<Self, Self::Error> {
        Ok(Self {
            nome: NomeCliente::new(cliente.nome.as_str())?,
            email: ClienteEmail::new(cliente.email.as_str())?,
            telefones: validate_telefones(&cliente.telefones)?,
            tipo_cliente: cliente.tipo_cliente,
            ativo: cliente.ativo,
        })
    }
}

impl UpdateCliente {
    /// Returns `true` when applying these values would leave `current` as is.
    pub fn is_noop_for(&self, current: &Cliente) -> bool {
        self.nome.as_str() == current.nome
            && self.email.as_str() == current.email
            && self.tipo_cliente == current.tipo_cliente
            && self.ativo == current.ativo
            && self.telefones.len() == current.telefones.len()
            && self
                .telefones
                .iter()
                .zip(&current.telefones)
                .all(|(new, old)| new.matches(old))
    }
}
