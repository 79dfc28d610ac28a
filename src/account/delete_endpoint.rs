//! Defines the endpoint for deleting an account.

use axum::{extract::State, http::StatusCode};

use crate::{
    Error,
    account::{AccountId, AccountRepository},
    extract::PathParam,
};

/// A route handler for deleting an account, responds with 204 and no body.
pub async fn delete_account_endpoint(
    State(repository): State<AccountRepository>,
    PathParam(account_id): PathParam<AccountId>,
) -> Result<StatusCode, Error> {
    repository.delete(account_id)?;

    Ok(StatusCode::NO_CONTENT)
}
