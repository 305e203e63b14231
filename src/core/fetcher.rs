use crate::domain::ports::AssetSource;
use async_trait::async_trait;
use reqwest::{redirect, Client, StatusCode};

/// Fetches decorative animation documents over HTTP.
///
/// The contract is deliberately blunt: one GET, status must be exactly 200,
/// body must parse as JSON. Anything else is absence. No retries, no caching
/// between calls, default transport timeouts. Redirects are not followed, so
/// a 3xx is observed as just another non-200 status.
pub struct HttpAssetFetcher {
    client: Client,
}

impl HttpAssetFetcher {
    pub fn new() -> Self {
        let client = Client::builder()
            .redirect(redirect::Policy::none())
            .build()
            .expect("failed to construct HTTP client");
        Self { client }
    }
}

impl Default for HttpAssetFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AssetSource for HttpAssetFetcher {
    async fn fetch(&self, url: &str) -> Option<serde_json::Value> {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!("asset request to {} failed: {}", url, e);
                return None;
            }
        };

        if response.status() != StatusCode::OK {
            tracing::debug!("asset request to {} returned {}", url, response.status());
            return None;
        }

        match response.json().await {
            Ok(document) => Some(document),
            Err(e) => {
                tracing::debug!("asset body from {} is not valid JSON: {}", url, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_fetch_returns_document_on_200() {
        let server = MockServer::start();
        let mock_data = serde_json::json!({"v": 1, "layers": [{"ty": 4}]});

        let asset_mock = server.mock(|when, then| {
            when.method(GET).path("/animation.json");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(mock_data.clone());
        });

        let fetcher = HttpAssetFetcher::new();
        let result = fetcher.fetch(&server.url("/animation.json")).await;

        asset_mock.assert();
        assert_eq!(result, Some(mock_data));
    }

    #[tokio::test]
    async fn test_fetch_returns_none_on_404() {
        let server = MockServer::start();
        let asset_mock = server.mock(|when, then| {
            when.method(GET).path("/missing.json");
            then.status(404);
        });

        let fetcher = HttpAssetFetcher::new();
        let result = fetcher.fetch(&server.url("/missing.json")).await;

        asset_mock.assert();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_fetch_returns_none_on_500() {
        let server = MockServer::start();
        let asset_mock = server.mock(|when, then| {
            when.method(GET).path("/broken.json");
            then.status(500);
        });

        let fetcher = HttpAssetFetcher::new();
        let result = fetcher.fetch(&server.url("/broken.json")).await;

        asset_mock.assert();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_fetch_does_not_follow_redirects() {
        let server = MockServer::start();
        let asset_mock = server.mock(|when, then| {
            when.method(GET).path("/moved.json");
            then.status(302).header("Location", "/animation.json");
        });

        let fetcher = HttpAssetFetcher::new();
        let result = fetcher.fetch(&server.url("/moved.json")).await;

        asset_mock.assert();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_fetch_returns_none_on_malformed_body() {
        let server = MockServer::start();
        let asset_mock = server.mock(|when, then| {
            when.method(GET).path("/garbage.json");
            then.status(200)
                .header("Content-Type", "application/json")
                .body("not json at all");
        });

        let fetcher = HttpAssetFetcher::new();
        let result = fetcher.fetch(&server.url("/garbage.json")).await;

        asset_mock.assert();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_fetch_returns_none_on_transport_failure() {
        // Nothing listens on port 1; the connection is refused.
        let fetcher = HttpAssetFetcher::new();
        let result = fetcher.fetch("http://127.0.0.1:1/animation.json").await;

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_fetch_does_not_cache_between_calls() {
        let server = MockServer::start();
        let asset_mock = server.mock(|when, then| {
            when.method(GET).path("/animation.json");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"v": 1}));
        });

        let fetcher = HttpAssetFetcher::new();
        let first = fetcher.fetch(&server.url("/animation.json")).await;
        let second = fetcher.fetch(&server.url("/animation.json")).await;

        asset_mock.assert_hits(2);
        assert_eq!(first, second);
    }
}
