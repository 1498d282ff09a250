//! Tests of `percolate` against a real HTTP server.
#![cfg(test)]

mod client;
mod errors;

use std::time::Duration;

use percolate::Config;
use wiremock::MockServer;

pub(crate) const API_KEY: &str = "secret-key";

pub(crate) fn config(server: &MockServer) -> Config {
    let _ = env_logger::builder().is_test(true).try_init();
    Config::new()
        .base_url(format!("{}/api/v3", server.uri()))
        .timeout(Duration::from_secs(5))
}

/// Runs the blocking client off the async runtime.
pub(crate) async fn blocking<F, T>(f: F) -> T
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .expect("blocking task panicked")
}
