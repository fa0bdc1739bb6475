//! Seeds the default staff accounts. Safe to run repeatedly; does nothing
//! once at least two users exist.

use repair_backend::{
    config::Config,
    database::pool::create_pool,
    dto::user_dto::CreateUserPayload,
    models::user::UserRole,
    services::user_service::UserService,
};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let pool = create_pool(&config).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let user_service = UserService::new(pool);

    let existing = user_service.count().await?;
    if existing >= 2 {
        info!("Database already seeded with {} users", existing);
        return Ok(());
    }

    user_service
        .create(CreateUserPayload {
            email: "admin@example.com".to_string(),
            full_name: "Admin User".to_string(),
            role: UserRole::Admin,
            password: "admin123".to_string(),
        })
        .await?;

    user_service
        .create(CreateUserPayload {
            email: "worker@example.com".to_string(),
            full_name: "Worker User".to_string(),
            role: UserRole::Worker,
            password: "worker123".to_string(),
        })
        .await?;

    info!("Database seeded successfully:");
    info!("  - Admin: admin@example.com / admin123");
    info!("  - Worker: worker@example.com / worker123");

    Ok(())
}
