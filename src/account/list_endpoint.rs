//! Defines the endpoint for listing every account.

use axum::{Json, extract::State};

use crate::{
    Error,
    account::{Account, AccountRepository},
};

/// A route handler for listing all accounts in the order they were created.
pub async fn list_accounts_endpoint(
    State(repository): State<AccountRepository>,
) -> Result<Json<Vec<Account>>, Error> {
    repository.list().map(Json)
}
