//! Uniform result wrapper returned by every cliente service operation.

use serde::{Deserialize, Serialize};

/// Message carried by every not-found envelope.
pub const CLIENTE_NAO_ENCONTRADO: &str = "Cliente não encontrado!";

/// Why an envelope reports `success == false`.
///
/// Kept out of the JSON body; the HTTP layer reads it to pick a status code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    NotFound,
    Invalid,
    Conflict,
    Internal,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ServiceResponse<T> {
    pub data: Option<T>,
    pub success: bool,
    pub message: String,
    #[serde(skip)]
    pub failure: Option<FailureKind>,
}

impl<T> ServiceResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            data: Some(data),
            success: true,
            message: message.into(),
            failure: None,
        }
    }

    /// Successful outcome with nothing to show.
    pub fn empty(message: impl Into<String>) -> Self {
        Self {
            data: None,
            success: true,
            message: message.into(),
            failure: None,
        }
    }

    pub fn failure(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            data: None,
            success: false,
            message: message.into(),
            failure: Some(kind),
        }
    }

    pub fn not_found() -> Self {
        Self::failure(FailureKind::NotFound, CLIENTE_NAO_ENCONTRADO)
    }

    pub fn has_data(&self) -> bool {
        self.data.is_some()
    }

    pub fn is_not_found(&self) -> bool {
        !self.success && self.failure == Some(FailureKind::NotFound)
    }
}
