use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use moodshelf::config::Config;
use moodshelf::infrastructure::AppState;
use moodshelf::server;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moodshelf=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    let mut config = Config::from_env();

    // --port overrides PORT
    let args: Vec<String> = std::env::args().collect();
    if let Some(pos) = args.iter().position(|arg| arg == "--port") {
        match args.get(pos + 1).map(|v| v.parse::<u16>()) {
            Some(Ok(port)) => config.port = port,
            _ => tracing::warn!("Ignoring invalid --port argument"),
        }
    }

    tracing::info!(
        "History limit {}, catalog cache {:?}, thinking delay {:?}",
        config.history_limit,
        config.catalog_ttl,
        config.thinking_delay
    );

    let state = AppState::from_config(&config).expect("Failed to initialize application state");
    let app = server::build_router(state, &config.cors_allowed_origins);

    server::serve(app, config.port)
        .await
        .expect("Failed to start server");
}
