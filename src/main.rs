use crate::config::WikiConfig;
use crate::database::sqlite::SqliteRepository;
use crate::database::PageStore;
use crate::dispatcher::client::QueueClient;
use crate::dispatcher::worker::start_store_worker;
use crate::dispatcher::Dispatcher;
use anyhow::Context;
use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::Sqlite;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod config;
mod database;
mod dispatcher;
mod domain;
mod features;
mod parser;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PageStore>,
    pub config: Arc<WikiConfig>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // determine environment variables
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // load centralized config
    let config = WikiConfig::from_env();
    let shared_config = Arc::new(config.clone());

    // verify db exists
    if !Sqlite::database_exists(&config.database_url)
        .await
        .unwrap_or(false)
    {
        tracing::info!("no database at {}, creating", config.database_url);
        Sqlite::create_database(&config.database_url)
            .await
            .with_context(|| format!("unable to create database at {}", config.database_url))?;
    }

    // connect to our db
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
        .with_context(|| format!("failed to create pool on {}", config.database_url))?;

    // run migrations
    sqlx::migrate!()
        .run(&pool)
        .await
        .context("failed to run database migrations")?;

    // wire the storage tier behind its queue address
    let dispatcher = Arc::new(Dispatcher::new(config.request_timeout));
    let queue_rx = dispatcher.register(&config.queue_address);
    start_store_worker(SqliteRepository::new(pool.clone()), queue_rx);

    tracing::info!("store worker serving address {}", config.queue_address);

    // the HTTP tier reaches storage only through the dispatcher
    let store: Arc<dyn PageStore> = Arc::new(QueueClient::new(
        dispatcher.clone(),
        config.queue_address.clone(),
    ));

    let app_state = AppState {
        store,
        config: shared_config.clone(),
    };

    let app = features::wiki::wiki_router().with_state(app_state);

    let addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("could not bind {}", addr))?;

    tracing::info!("http server running on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
