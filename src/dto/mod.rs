//! DTOs shared between the service layer and the HTTP routes.

pub mod envelope;
