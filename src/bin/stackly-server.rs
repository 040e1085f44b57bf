//! In-memory development server implementing the Stackly remote API
//! contract. Used by the integration tests and for local development; state
//! lives for the lifetime of the process.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use axum::routing::{get, post};
use clap::Parser;
use tokio::sync::RwLock;

#[path = "stackly_server/state.rs"]
mod state;
use self::state::*;
#[path = "stackly_server/handlers.rs"]
mod handlers;
use self::handlers::*;

#[derive(Parser)]
#[command(name = "stackly-server")]
#[command(about = "Stackly development API server", long_about = None)]
struct Args {
    /// Listen address; port 0 picks a free port
    #[arg(long, default_value = "127.0.0.1:7878")]
    addr: SocketAddr,

    /// Write the bound address to this file once listening
    #[arg(long)]
    addr_file: Option<PathBuf>,

    /// Seed demo data (an HR space with an Employees stack)
    #[arg(long)]
    demo: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut store = Store::default();
    if args.demo {
        store.seed_demo();
    }
    let state = Arc::new(RwLock::new(store));

    let app = Router::new()
        .route("/healthz", get(healthz))
        .route("/spaces", get(list_spaces))
        .route("/space", post(create_space))
        .route("/stacks", get(list_stack_names))
        .route("/stack", post(create_stack))
        .route("/stack/:stack_name", get(stack_schema))
        .route(
            "/stack/:stack_name/documents",
            get(list_documents).post(create_document),
        )
        .route("/:space_name/stacks", get(list_space_stacks))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(args.addr)
        .await
        .with_context(|| format!("bind {}", args.addr))?;

    let local_addr = listener.local_addr().context("read listener local addr")?;
    eprintln!("stackly-server listening on {}", local_addr);

    if let Some(addr_file) = &args.addr_file {
        std::fs::write(addr_file, local_addr.to_string())
            .with_context(|| format!("write addr file {}", addr_file.display()))?;
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
