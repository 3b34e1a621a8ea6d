use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use salary_manager::api::{AppState, create_router};
use salary_manager::config::ConfigLoader;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("salary_manager=debug,info")),
        )
        .with_target(false)
        .compact()
        .init();

    let config_dir =
        std::env::var("CONFIG_DIR").unwrap_or_else(|_| "./config/salary".to_string());
    let config = ConfigLoader::load(&config_dir).expect("Failed to load configuration");
    info!(config_dir = %config_dir, approvers = config.approvers().len(), "Configuration loaded");

    let state = AppState::new(config);
    let router = create_router(state);

    let addr = std::env::var("SERVER_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Failed to bind server address");
    info!(addr = %addr, "Salary Manager listening");

    axum::serve(listener, router).await.expect("Server error");
}
