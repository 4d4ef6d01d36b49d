#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "data")]
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: models::config::ServerConfig) -> std::io::Result<()> {
    use std::sync::Arc;

    use actix_cors::Cors;
    use actix_web::{App, HttpServer, middleware, web};
    use log::info;

    use crate::db::{establish_connection_pool, run_pending_migrations};
    use crate::repository::DieselRepository;
    use crate::services::{ClienteService, ClienteServiceImpl};

    // Establish Diesel connection pool for the SQLite database.
    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    run_pending_migrations(&pool)
        .map_err(|e| std::io::Error::other(format!("Failed to run migrations: {e}")))?;

    let service: Arc<dyn ClienteService> =
        Arc::new(ClienteServiceImpl::new(DieselRepository::new(pool)));
    let service = web::Data::from(service);

    info!(
        "Starting cliente-api on {}:{}",
        server_config.address,
        server_config.port
    );
    let bind_address = (server_config.address, server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::NormalizePath::trim())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .app_data(service.clone())
            .configure(routes::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
