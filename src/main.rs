//! forge-api - serves archive requests for a local git repository
//!
//! # Usage
//! ```bash
//! forge-api /path/to/repository            # Serve on 127.0.0.1:3001
//! forge-api /path/to/repository --port 8080
//! ```
//!
//! Then request e.g.
//! `GET /api/v1/repos/<name>/+/archive/refs/heads/main.zip?path=docs`.

use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use forge_api::git::GitRepository;
use forge_api::routes::{self, AppState};
use forge_api::translate::Translator;

/// Serve git archive requests over HTTP
#[derive(Parser)]
#[command(name = "forge-api")]
#[command(about = "HTTP archive endpoint for a local git repository", long_about = None)]
struct Cli {
    /// Path to the git repository to serve
    #[arg(value_name = "REPO_PATH", default_value = ".")]
    repo_path: String,

    /// Address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to run the server on
    #[arg(short, long, default_value = "3001")]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let repo = GitRepository::open(&cli.repo_path)
        .with_context(|| format!("failed to open repository {}", cli.repo_path))?;
    let name = repo.name.clone();

    let state = AppState::new(Arc::new(repo), Translator::default());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(routes::create_router(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;

    println!();
    println!("  Repository: {} ({})", name, cli.repo_path);
    println!("  Server:     http://{}", addr);
    println!("  Archives:   http://{}/api/v1/repos/{}/+/archive/<ref>.<format>", addr, name);
    println!();
    println!("  Press Ctrl+C to stop");
    println!();

    tracing::info!(repository = %name, %addr, "listening");

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
        println!("\n  Shutting down...");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
