pub mod access_log;
pub mod logging;
pub mod routes;
pub mod server_config;

use std::{net::{Ipv4Addr, SocketAddr}, sync::Arc};

use anyhow::Context;
use log::{debug, info};
use tokio::net::TcpListener;

use crate::backend::{JsonStore, UserSource};
use crate::core::UserDirectory;

pub use logging::init_logging;
pub use routes::build_router;
pub use server_config::{AppConfig, LISTEN_PORT};

/// Loads the users named by `config`. Any failure here means the
/// service must not start.
pub fn load_directory(config: &AppConfig) -> anyhow::Result<UserDirectory> {
    let store = JsonStore::new(&config.users_file);
    let directory = store.load()
        .with_context(|| "failed to load users")?;
    debug!("loaded {} users from {}", directory.len(), store.path().display());
    return Ok(directory);
}

/// Serves `directory` on `listener` until the process is stopped.
pub async fn serve(listener: TcpListener, directory: Arc<UserDirectory>) -> anyhow::Result<()> {
    let app = build_router(directory);
    info!("Worker started");
    axum::serve(listener, app).await?;
    return Ok(());
}

pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    let directory = Arc::new(load_directory(&config)?);

    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, LISTEN_PORT));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    return serve(listener, directory).await;
}
