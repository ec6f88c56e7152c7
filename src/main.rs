use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use chats::config::ServerConfig;
use chats::handlers::AppState;
use chats::routes::configure_routes;
use chats::store::{self, PgChatRepository, PgMessageRepository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,chats=debug")),
        )
        .init();

    let config = ServerConfig::from_env().context("invalid configuration")?;
    info!(
        http_addr = %config.http_addr,
        db_host = %config.store.host,
        db_port = config.store.port,
        db_name = %config.store.database,
        "Loaded configuration"
    );

    let pool = config.store.build_pool()?;
    store::migrate(&pool)
        .await
        .context("failed to connect to database")?;

    let state = AppState::new(
        Arc::new(PgChatRepository::new(pool.clone())),
        Arc::new(PgMessageRepository::new(pool)),
    );
    let routes = configure_routes(state);

    info!("Starting server on http://{}", config.http_addr);
    warp::serve(routes).run(config.http_addr).await;

    Ok(())
}
