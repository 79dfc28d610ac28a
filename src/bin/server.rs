use std::net::{IpAddr, SocketAddr};

use axum::{
    Router,
    extract::{MatchedPath, Request},
};
use axum_server::Handle;
use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use bank_accounts_rs::{AppState, IdAllocation, build_router, graceful_shutdown, seed_accounts};

/// The REST API server for bank_accounts_rs.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The port to serve the API from.
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    port: u16,

    /// The IP address to bind to.
    #[arg(long, env = "ADDRESS", default_value = "127.0.0.1")]
    address: IpAddr,

    /// The base URL clients use to reach the server, e.g. "http://localhost:3000".
    ///
    /// Used for the links returned when an account is created. Links are
    /// relative paths if this is not set.
    #[arg(long, env = "PUBLIC_URL")]
    public_url: Option<String>,

    /// How IDs are picked for new accounts: "monotonic" never reuses an ID,
    /// "last-record" uses one more than the ID of the most recently added account.
    #[arg(long, default_value = "monotonic")]
    id_allocation: IdAllocation,

    /// Start without the example accounts.
    #[arg(long)]
    no_seed: bool,
}

#[tokio::main]
async fn main() {
    setup_logging();

    let args = Args::parse();

    let addr = SocketAddr::from((args.address, args.port));

    let accounts = if args.no_seed {
        Vec::new()
    } else {
        seed_accounts()
    };
    tracing::info!(
        "Starting with {} accounts, allocating IDs with {:?}",
        accounts.len(),
        args.id_allocation
    );
    let state = AppState::new(accounts, args.public_url, args.id_allocation);

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = add_tracing_layer(build_router(state));

    tracing::info!("HTTP server listening on {}", addr);
    if let Err(error) = axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
    {
        tracing::error!("Server stopped with an error: {error}");
        std::process::exit(1);
    }
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}

fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();

            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::debug_span!("request", %method, %uri, matched_path)
        })
        // Errors are logged where they are converted into responses.
        .on_failure(());

    router.layer(tracing_layer)
}
