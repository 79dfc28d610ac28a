//! Defines the endpoint for getting a single account.

use axum::{Json, extract::State};

use crate::{
    Error,
    account::{Account, AccountId, AccountRepository},
    extract::PathParam,
};

/// A route handler for getting the account with the ID in the path.
///
/// Responds with 404 and an error message if there is no such account.
pub async fn get_account_endpoint(
    State(repository): State<AccountRepository>,
    PathParam(account_id): PathParam<AccountId>,
) -> Result<Json<Account>, Error> {
    repository.get(account_id).map(Json)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::{
        account::Account,
        endpoints::{self, format_endpoint},
        error::ErrorResponse,
        test_utils::get_test_server,
    };

    #[tokio::test]
    async fn gets_account() {
        let server = get_test_server();

        let response = server.get(&format_endpoint(endpoints::ACCOUNT, 2)).await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<Account>(),
            Account::new(2, "Maria Oliveira", 3000.0)
        );
    }

    #[tokio::test]
    async fn missing_account_is_not_found() {
        let server = get_test_server();

        let response = server.get(&format_endpoint(endpoints::ACCOUNT, 99)).await;

        response.assert_status_not_found();
        response.assert_json(&json!({ "message": "account not found" }));
    }

    #[tokio::test]
    async fn non_numeric_id_is_bad_request() {
        let server = get_test_server();

        let response = server.get("/api/accounts/abc").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body = response.json::<ErrorResponse>();
        assert!(
            body.message.starts_with("invalid request"),
            "got message {:?}",
            body.message
        );
    }
}
