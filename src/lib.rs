#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
pub mod engine;
#[cfg(feature = "data")]
pub mod forms;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "data")]
pub mod services;

#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod routes;

#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: crate::models::config::ServerConfig) -> std::io::Result<()> {
    use crate::repository::memory::InMemorySubmissionStore;
    use crate::routes::intake::{create_intake, intake_options, show_intake};

    // Submissions live in one process-wide store shared by all workers.
    let store = web::Data::new(InMemorySubmissionStore::new());
    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(
                web::scope("/api")
                    .service(intake_options)
                    .service(create_intake)
                    .service(show_intake),
            )
            .app_data(store.clone())
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
