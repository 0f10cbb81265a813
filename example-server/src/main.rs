use anyhow::Context;
use axum::{routing::get, Router};
use axum_db_browser::DbBrowserLayer;
use clap::Parser;
use sqlx::sqlite::SqlitePoolOptions;
use std::path::PathBuf;
use tower_http::trace::TraceLayer;

mod config;
mod database;

use config::ServerConfig;

/// Serve the database browser over the databases listed in a settings file
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Path to the TOML settings file
    #[arg(short, long, default_value = "example-server/browser.toml")]
    config: PathBuf,

    /// Create and fill the demo forum schema in every configured SQLite database
    #[arg(long)]
    seed: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = ServerConfig::load(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(format!(
                    "example_server={level},axum_db_browser={level},tower_http=info",
                    level = config.logging.level
                ))
            }),
        )
        .init();

    if cli.seed {
        for database in config.browser.databases.iter().filter(|d| d.is_sqlite()) {
            let pool = SqlitePoolOptions::new()
                .connect(&database.url)
                .await
                .with_context(|| format!("Failed to connect to database '{}'", database.name))?;
            database::seed_demo_forum(&pool)
                .await
                .with_context(|| format!("Failed to seed database '{}'", database.name))?;
            pool.close().await;
        }
    }

    if !config.browser.activate {
        tracing::warn!(
            "browser is not activated; set activate = true or {}=1 to enable it",
            config::ACTIVATE_VARIABLE
        );
    }

    let base_path = config.server.base_path.clone();
    let browser = DbBrowserLayer::from_config(base_path.clone(), config.browser)?;

    // The browser owns "/" when mounted at the root.
    let app = if base_path.is_empty() || base_path == "/" {
        Router::new()
    } else {
        Router::new().route("/", get(root_handler))
    };
    let app = app
        .merge(browser.into_router())
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.server.listen)
        .await
        .with_context(|| format!("Failed to bind to {}", config.server.listen))?;

    tracing::info!(
        "Database browser available at http://{}{}/",
        config.server.listen,
        base_path.trim_end_matches('/')
    );

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}

async fn root_handler() -> &'static str {
    "axum-db-browser example server"
}
