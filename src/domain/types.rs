//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (positive identifiers, normalized
//! and validated email, digit-only phone parts) so that once a value reaches
//! the repository layer it can be treated as trusted.
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidateEmail;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("o identificador deve ser maior que zero")]
    NonPositiveId,
    /// Provided email failed format validation.
    #[error("email inválido")]
    InvalidEmail,
    /// Provided string contained no non-whitespace characters.
    #[error("o campo {0} não pode ser vazio")]
    EmptyString(&'static str),
    /// Area code is not exactly two digits.
    #[error("DDD inválido: {0}")]
    InvalidDdd(String),
    /// Phone number is not 8 or 9 digits.
    #[error("número de telefone inválido: {0}")]
    InvalidPhone(String),
    /// Provided value did not match any known variant.
    #[error("valor desconhecido: {0}")]
    UnknownVariant(String),
}

/// Unique identifier for a cliente.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ClienteId(i32);

impl ClienteId {
    /// Creates a new identifier ensuring it is greater than zero.
    pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::NonPositiveId)
        }
    }

    /// Returns the raw `i32` backing this identifier.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl Display for ClienteId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i32> for ClienteId {
    type Error = TypeConstraintError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Lower-cased and validated email address.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ClienteEmail(String);

impl ClienteEmail {
    /// Validates and normalizes an email string.
    pub fn new<S: Into<String>>(email: S) -> Result<Self, TypeConstraintError> {
        let normalized = email.into().trim().to_lowercase();
        if normalized.validate_email() {
            Ok(Self(normalized))
        } else {
            Err(TypeConstraintError::InvalidEmail)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for ClienteEmail {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Trimmed, non-empty display name of a cliente.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NomeCliente(String);

impl NomeCliente {
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString("nome"));
        }
        Ok(Self(trimmed))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for NomeCliente {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Two-digit Brazilian area code.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Ddd(String);

impl Ddd {
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.len() == 2 && trimmed.chars().all(|c| c.is_ascii_digit()) {
            Ok(Self(trimmed))
        } else {
            Err(TypeConstraintError::InvalidDdd(trimmed))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Subscriber number without area code: 8 digits for landlines, 9 for mobiles.
///
/// Common separators (`-`, spaces) are stripped before validation.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NumeroTelefone(String);

impl NumeroTelefone {
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let raw = value.into();
        let digits: String = raw
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect();
        if matches!(digits.len(), 8 | 9) && digits.chars().all(|c| c.is_ascii_digit()) {
            Ok(Self(digits))
        } else {
            Err(TypeConstraintError::InvalidPhone(raw.trim().to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
