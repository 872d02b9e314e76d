//! Shared utilities for integration tests.

use std::time::Duration;

/// Poll until the server behind `url` accepts requests, or panic after ~5s.
#[allow(dead_code)]
pub async fn wait_until_serving(client: &reqwest::Client, url: &str) {
    for _ in 0..50 {
        if client.get(url).send().await.is_ok() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    panic!("server at {url} did not come up in time");
}

/// Non-pooling client so test connections never hold a server open.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
