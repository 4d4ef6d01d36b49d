//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Settings read from `config/*.yaml` and `APP_*` environment variables.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
}
