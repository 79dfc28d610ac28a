//! A REST API for managing bank accounts.
//!
//! Accounts live in memory for the lifetime of the process. The
//! [AccountRepository] owns them, allocates their IDs and serializes
//! concurrent requests, while the routes built by [build_router] translate
//! between HTTP and the repository.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod account;
mod app_state;
mod endpoints;
mod error;
mod extract;
mod logging;
mod routing;
#[cfg(test)]
mod test_utils;

pub use account::{
    Account, AccountId, AccountPatch, AccountRepository, IdAllocation, Link, LinkRelation,
    LinkSet, NewAccount, build_link_set, seed_accounts,
};
pub use app_state::AppState;
pub use endpoints::{ACCOUNT, ACCOUNTS, format_endpoint};
pub use error::{Error, ErrorResponse};
pub use logging::{LOG_BODY_LENGTH_LIMIT, REQUEST_BODY_LIMIT, logging_middleware};
pub use routing::build_router;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("Could not listen for the ctrl+c signal: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!("Could not listen for the terminate signal: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
