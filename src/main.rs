//! Doctor Query Adapter
//!
//! ```text
//!     Client                        Adapter                          Backend
//!       │  GET /healthcare/           │                                 │
//!       │  querydoctor/{category}     │                                 │
//!       ├────────────────────────────▶│  GET {base_url}/{category}      │
//!       │                             ├────────────────────────────────▶│
//!       │                             │◀────────────────────────────────┤
//!       │  200 [Doctor] │ 404 │ 500   │                                 │
//!       │◀────────────────────────────┤                                 │
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use doctor_query_adapter::config::{finalize, read_config};
use doctor_query_adapter::lifecycle::{wait_for_signal, Shutdown};
use doctor_query_adapter::observability::logging;
use doctor_query_adapter::HttpServer;

#[derive(Parser)]
#[command(name = "doctor-query-adapter")]
#[command(about = "Forwards doctor-by-category queries to a healthcare backend", long_about = None)]
struct Args {
    /// TOML configuration file; defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(long)]
    bind: Option<String>,

    /// Override backend.base_url.
    #[arg(long)]
    backend_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = read_config(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }
    if let Some(url) = args.backend_url {
        config.backend.base_url = url;
    }
    let config = finalize(config)?;

    logging::init(&config.observability);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.listener.bind_address,
        backend = %config.backend.base_url,
        "doctor-query-adapter starting"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config)?;
    let server_shutdown = shutdown.signalled();

    let signals = tokio::spawn(async move {
        wait_for_signal().await;
        shutdown.trigger();
    });

    server.run(listener, server_shutdown).await?;
    signals.abort();

    tracing::info!("Shutdown complete");
    Ok(())
}
