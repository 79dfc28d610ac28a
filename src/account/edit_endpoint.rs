//! Defines the endpoint for updating an account
use axum::{Json, extract::State};

use crate::{
    Error,
    account::{Account, AccountId, AccountPatch, AccountRepository},
    extract::{JsonBody, PathParam},
};

/// A route handler for updating the holder and/or balance of an account.
///
/// Fields that are missing, empty or zero in the body keep their current value.
pub async fn edit_account_endpoint(
    State(repository): State<AccountRepository>,
    PathParam(account_id): PathParam<AccountId>,
    JsonBody(patch): JsonBody<AccountPatch>,
) -> Result<Json<Account>, Error> {
    repository.update(account_id, &patch).map(Json)
}
