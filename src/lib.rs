pub mod api;
pub mod config;
pub mod db;
pub mod entities;
pub mod validation;

use anyhow::Result;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

pub use config::Config;
use db::Store;

pub async fn run() -> Result<()> {
    let config = Config::load()?;
    config.validate()?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(String::as_str) {
        None | Some("serve") => run_server(config).await,

        Some("seed") => {
            let store = Store::new(&config.general.database_path).await?;
            db::seed::seed_sample_data(&store).await?;
            Ok(())
        }

        Some("help" | "-h" | "--help") => {
            print_help();
            Ok(())
        }

        Some(other) => {
            error!("Unknown command: {}", other);
            print_help();
            Ok(())
        }
    }
}

async fn run_server(config: Config) -> Result<()> {
    info!("Herodex v{} starting...", env!("CARGO_PKG_VERSION"));

    let state = api::create_app_state_from_config(config.clone()).await?;
    state.store().ping().await?;

    let app = api::router(state);
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("API server running at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => error!("Error listening for shutdown: {}", e),
    }
}

fn print_help() {
    println!("Herodex - heroes & powers JSON API");
    println!();
    println!("Usage: herodex [command]");
    println!();
    println!("Commands:");
    println!("  serve    Start the API server (default)");
    println!("  seed     Insert sample heroes, powers, episodes and guests");
    println!("  help     Show this help");
}
