//! Domain entities exposed by the cliente service layer.

pub mod cliente;
pub mod types;
