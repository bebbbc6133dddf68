use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Result;
use dotenv::dotenv;

use crate::config::server_config::ServerConfig;
use crate::logger::init_logger;
use crate::services::scheduled_service::ScheduledService;

mod app;
mod config;
mod errors;
mod handlers;
mod logger;
mod models;
mod services;

#[cfg(test)]
mod tests;

fn setup_store(config: &ServerConfig) -> Result<ScheduledService> {
    match &config.seed_file {
        Some(path) => {
            log::info!("Cargando seed desde {}", path.display());
            ScheduledService::from_seed_file(path)
        }
        None => ScheduledService::seeded(),
    }
}

#[actix_web::main]
async fn main() -> Result<()> {
    dotenv().ok(); // Cargar .env al inicio
    init_logger();

    let config = ServerConfig::from_env()?;

    // Un solo almacén compartido por todos los workers
    let scheduled_service = setup_store(&config)?;
    if scheduled_service.is_empty().await {
        log::warn!("El seed no tiene mensajes; list-scheduled devolverá []");
    } else {
        log::info!(
            "{} mensajes programados en memoria",
            scheduled_service.len().await
        );
    }

    let (host, port) = config.bind_addr();
    log::info!("Levantando servidor en {}:{}", host, port);
    HttpServer::new(move || {
        App::new()
            .wrap(app::cors_headers())
            .wrap(Logger::default())
            .app_data(web::Data::new(scheduled_service.clone()))
            .configure(app::init_app)
    })
    .workers(config.workers)
    .bind((host, port))?
    .run()
    .await?;

    Ok(())
}
