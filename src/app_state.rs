//! Implements a struct that holds the state of the REST server.

use axum::extract::FromRef;

use crate::account::{Account, AccountRepository, IdAllocation};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The store that owns every account.
    pub account_repository: AccountRepository,
}

impl AppState {
    /// Create a new [AppState] whose repository starts with `accounts`.
    ///
    /// `public_url` is the base URL clients use to reach the server, e.g.
    /// "http://localhost:3000". It is used to build the links returned when an
    /// account is created.
    pub fn new(
        accounts: Vec<Account>,
        public_url: Option<String>,
        id_allocation: IdAllocation,
    ) -> Self {
        Self {
            account_repository: AccountRepository::with_accounts(
                accounts,
                public_url,
                id_allocation,
            ),
        }
    }
}

impl FromRef<AppState> for AccountRepository {
    fn from_ref(state: &AppState) -> Self {
        state.account_repository.clone()
    }
}
