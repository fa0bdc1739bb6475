use repair_backend::{build_router, config::Config, database::pool::create_pool, AppState};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let pool = create_pool(&config).await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    let addr: SocketAddr = config.server_address.parse()?;
    let app = build_router(AppState::new(pool, config));

    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
