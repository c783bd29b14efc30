use users_service::server::{self, AppConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::init_logging();

    let config = AppConfig::load_default()?;
    server::run(config).await
}
