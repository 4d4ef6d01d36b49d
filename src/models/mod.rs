//! Database models and configuration.

pub mod cliente;
pub mod config;
