use axum::{body::Body, http::Response};
use axum_test::TestServer;

use crate::{
    AppState,
    account::{IdAllocation, seed_accounts},
    build_router,
};

/// A server for the full app, seeded with the default accounts and without a
/// public URL.
pub(crate) fn get_test_server() -> TestServer {
    let state = AppState::new(seed_accounts(), None, IdAllocation::default());

    TestServer::try_new(build_router(state)).expect("Could not create test server.")
}

#[track_caller]
pub(crate) fn get_header(response: &Response<Body>, header_name: &str) -> String {
    let header_error_message = format!("Headers missing {header_name}");

    response
        .headers()
        .get(header_name)
        .expect(&header_error_message)
        .to_str()
        .expect("Could not convert to str")
        .to_string()
}
