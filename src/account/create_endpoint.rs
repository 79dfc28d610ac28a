//! Defines the endpoint for creating a new account.

use axum::{
    Json,
    extract::State,
    http::{
        StatusCode,
        header::{LINK, LOCATION},
    },
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    account::{AccountRepository, NewAccount},
    endpoints::{self, format_endpoint},
    extract::JsonBody,
};

/// A route handler for creating a new account.
///
/// Responds with 201, the stored account, a `Location` header pointing at the
/// account and a `Link` header with the self, update and delete links.
pub async fn create_account_endpoint(
    State(repository): State<AccountRepository>,
    JsonBody(new_account): JsonBody<NewAccount>,
) -> Result<Response, Error> {
    let (account, links) = repository.create(new_account)?;

    Ok((
        StatusCode::CREATED,
        [
            (LOCATION, format_endpoint(endpoints::ACCOUNT, account.id)),
            (LINK, links.to_header_value()),
        ],
        Json(account),
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Bytes,
        extract::State,
        http::{
            StatusCode,
            header::{LINK, LOCATION},
        },
    };
    use axum_test::TestServer;
    use serde_json::json;

    use crate::{
        AppState,
        account::{
            Account, AccountRepository, IdAllocation, NewAccount, create_account_endpoint,
            seed_accounts,
        },
        build_router, endpoints,
        error::ErrorResponse,
        extract::JsonBody,
        logging::REQUEST_BODY_LIMIT,
        test_utils::{get_header, get_test_server},
    };

    #[tokio::test]
    async fn can_create_account() {
        let repository = AccountRepository::new(None, IdAllocation::default());

        let response = create_account_endpoint(
            State(repository.clone()),
            JsonBody(NewAccount {
                holder: "test account".to_owned(),
                balance: 123.45,
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(get_header(&response, LOCATION.as_str()), "/api/accounts/1");
        assert_eq!(
            repository.get(1),
            Ok(Account::new(1, "test account", 123.45))
        );
    }

    #[tokio::test]
    async fn create_returns_account_and_links() {
        let server = TestServer::try_new(build_router(AppState::new(
            seed_accounts(),
            Some("http://localhost:3000".to_owned()),
            IdAllocation::default(),
        )))
        .expect("Could not create test server.");

        let response = server
            .post(endpoints::ACCOUNTS)
            .json(&json!({ "holder": "C", "balance": 100 }))
            .await;

        response.assert_status(StatusCode::CREATED);
        assert_eq!(response.json::<Account>(), Account::new(3, "C", 100.0));

        let link = response
            .headers()
            .get(LINK)
            .expect("response is missing the link header")
            .to_str()
            .expect("link header is not valid ASCII");
        let entries: Vec<_> = link.split(", ").collect();
        assert_eq!(
            entries,
            vec![
                "<http://localhost:3000/api/accounts/3>; rel=\"self\"",
                "<http://localhost:3000/api/accounts/3>; rel=\"update\"",
                "<http://localhost:3000/api/accounts/3>; rel=\"delete\"",
            ]
        );

        let accounts = server.get(endpoints::ACCOUNTS).await.json::<Vec<Account>>();
        assert_eq!(accounts.len(), 3);
    }

    #[tokio::test]
    async fn links_are_relative_without_public_url() {
        let server = get_test_server();

        let response = server
            .post(endpoints::ACCOUNTS)
            .json(&json!({ "holder": "C", "balance": 1 }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let link = response
            .headers()
            .get(LINK)
            .expect("response is missing the link header");
        assert_eq!(
            link,
            "</api/accounts/3>; rel=\"self\", \
            </api/accounts/3>; rel=\"update\", \
            </api/accounts/3>; rel=\"delete\""
        );
    }

    #[tokio::test]
    async fn missing_holder_is_bad_request() {
        let server = get_test_server();

        let response = server
            .post(endpoints::ACCOUNTS)
            .json(&json!({ "balance": 100 }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "message": "holder and balance are required" }));
        assert_accounts_unchanged(&server).await;
    }

    #[tokio::test]
    async fn zero_balance_is_bad_request() {
        let server = get_test_server();

        let response = server
            .post(endpoints::ACCOUNTS)
            .json(&json!({ "holder": "C", "balance": 0 }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "message": "holder and balance are required" }));
        assert_accounts_unchanged(&server).await;
    }

    #[tokio::test]
    async fn malformed_body_is_bad_request() {
        let server = get_test_server();

        let response = server
            .post(endpoints::ACCOUNTS)
            .json(&json!({ "holder": 5, "balance": "lots" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body = response.json::<ErrorResponse>();
        assert!(
            body.message.starts_with("invalid request"),
            "got message {:?}",
            body.message
        );
        assert_accounts_unchanged(&server).await;
    }

    #[tokio::test]
    async fn invalid_utf8_holder_is_bad_request() {
        let server = get_test_server();

        let response = server
            .post(endpoints::ACCOUNTS)
            .bytes(Bytes::from_static(b"{\"holder\":\"\xff\",\"balance\":1}"))
            .content_type("application/json")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body = response.json::<ErrorResponse>();
        assert!(
            body.message.starts_with("invalid request"),
            "got message {:?}",
            body.message
        );
        assert_accounts_unchanged(&server).await;
    }

    #[tokio::test]
    async fn oversized_body_is_rejected() {
        let server = get_test_server();
        let holder = "x".repeat(REQUEST_BODY_LIMIT);

        let response = server
            .post(endpoints::ACCOUNTS)
            .json(&json!({ "holder": holder, "balance": 1 }))
            .await;

        response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
        response.assert_json(&json!({ "message": "request body is too large" }));
        assert_accounts_unchanged(&server).await;
    }

    #[tokio::test]
    async fn client_id_is_ignored() {
        let server = get_test_server();

        let response = server
            .post(endpoints::ACCOUNTS)
            .json(&json!({ "id": 1, "holder": "C", "balance": 100 }))
            .await;

        response.assert_status(StatusCode::CREATED);
        assert_eq!(response.json::<Account>().id, 3);
    }

    async fn assert_accounts_unchanged(server: &TestServer) {
        let accounts = server.get(endpoints::ACCOUNTS).await.json::<Vec<Account>>();
        assert_eq!(accounts, seed_accounts());
    }
}
