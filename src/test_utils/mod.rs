#![allow(missing_docs)]

pub(crate) mod http;

pub(crate) use http::{get_header, get_test_server};
