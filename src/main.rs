mod config;
mod db;
mod errors;
mod handlers;
mod models;

use std::io;
use std::sync::Arc;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::info;

use crate::config::Config;
use crate::db::{PgStore, Store};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(io::Error::other)?;

    // Initialize the database pool
    let pool = db::create_pool(&config).await.map_err(io::Error::other)?;

    if config.run_migrations {
        info!("Applying database migrations");
        db::run_migrations(&pool).await.map_err(io::Error::other)?;
    }
    db::schema::verify(&pool).await.map_err(io::Error::other)?;

    let store: Arc<dyn Store> = Arc::new(PgStore::new(pool));
    let store = web::Data::from(store);

    info!("Starting server at {}", config.bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(store.clone())
            .configure(handlers::configure)
    })
    .bind(&config.bind_address)?
    .run()
    .await
}
