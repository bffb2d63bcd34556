// Common utilities for integration tests

use mockito::{Matcher, Server};
use ts_client::prelude::*;

pub const TOKEN: &str = "test-token";

/// Creates a client talking to the mock server through the real transport
pub fn mock_client(server: &Server) -> Client {
    setup_logger();
    let session = Session::new(&server.url(), TOKEN).expect("valid session");
    Client::with_session(session).expect("http client")
}

/// Matcher for the bearer header sent on every request
pub fn bearer() -> Matcher {
    Matcher::Exact(format!("Bearer {TOKEN}"))
}

/// Matcher requiring exactly the given query parameters
pub fn query(pairs: &[(&str, &str)]) -> Matcher {
    Matcher::AllOf(
        pairs
            .iter()
            .map(|(name, value)| Matcher::UrlEncoded(name.to_string(), value.to_string()))
            .collect(),
    )
}
