use reqwest::header::{CONTENT_TYPE, HeaderValue};

use super::UsdaError;
use crate::{BoxFuture, FoodSource, Pagination};

/// Client for the USDA FoodData Central API.
#[derive(Debug, Clone)]
pub struct UsdaClient {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl UsdaClient {
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), api_url, api_key)
    }

    pub fn with_client(
        http: reqwest::Client,
        api_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();

        Self {
            http,
            api_url,
            api_key: api_key.into(),
        }
    }

    async fn request(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<serde_json::Value, UsdaError> {
        let mut query = Vec::with_capacity(params.len() + 1);
        query.push(("api_key", self.api_key.as_str()));
        query.extend_from_slice(params);

        // the request url carries the api key, keep it out of error messages
        let response = self
            .http
            .get(format!("{}{endpoint}", self.api_url))
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .query(&query)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = response.status();
        if !status.is_success() {
            return Err(UsdaError::Status {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response
            .json()
            .await
            .map_err(reqwest::Error::without_url)?;

        Ok(body)
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_foods(
        &self,
        pagination: &Pagination,
    ) -> Result<serde_json::Value, UsdaError> {
        self.request(
            "/foods/list",
            &[
                ("pageSize", pagination.page_size()),
                ("pageNumber", pagination.page_number()),
            ],
        )
        .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn search_foods(
        &self,
        query: &str,
        pagination: &Pagination,
    ) -> Result<serde_json::Value, UsdaError> {
        self.request(
            "/foods/search",
            &[
                ("query", query),
                ("pageSize", pagination.page_size()),
                ("pageNumber", pagination.page_number()),
            ],
        )
        .await
    }
}

impl FoodSource for UsdaClient {
    fn list_foods(
        &self,
        pagination: Pagination,
    ) -> BoxFuture<'_, Result<serde_json::Value, UsdaError>> {
        Box::pin(async move { UsdaClient::list_foods(self, &pagination).await })
    }

    fn search_foods(
        &self,
        query: String,
        pagination: Pagination,
    ) -> BoxFuture<'_, Result<serde_json::Value, UsdaError>> {
        Box::pin(async move { UsdaClient::search_foods(self, &query, &pagination).await })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn list_applies_default_pagination() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/foods/list"))
            .and(query_param("api_key", "secret"))
            .and(query_param("pageSize", "25"))
            .and(query_param("pageNumber", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let client = UsdaClient::new(server.uri(), "secret");
        let body = client.list_foods(&Pagination::default()).await.unwrap();

        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn search_forwards_query_and_pagination() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/foods/search"))
            .and(query_param("api_key", "secret"))
            .and(query_param("query", "mac & cheese"))
            .and(query_param("pageSize", "10"))
            .and(query_param("pageNumber", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "foods": [] })))
            .expect(1)
            .mount(&server)
            .await;

        let client = UsdaClient::new(server.uri(), "secret");
        let pagination = Pagination {
            page_size: Some("10".into()),
            page_number: Some("3".into()),
        };
        let body = client
            .search_foods("mac & cheese", &pagination)
            .await
            .unwrap();

        assert_eq!(body, json!({ "foods": [] }));
    }

    #[tokio::test]
    async fn upstream_failure_carries_status_text() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let client = UsdaClient::new(server.uri(), "wrong");
        let err = client.list_foods(&Pagination::default()).await.unwrap_err();

        assert_eq!(err.status(), Some(403));
        assert_eq!(err.to_string(), "USDA API error: Forbidden");
    }

    #[tokio::test]
    async fn transport_errors_hide_the_api_key() {
        let client = UsdaClient::new("http://127.0.0.1:1", "SUPER-SECRET-KEY");
        let err = client.list_foods(&Pagination::default()).await.unwrap_err();

        assert!(matches!(err, UsdaError::Request(_)));
        assert!(!err.to_string().contains("SUPER-SECRET-KEY"));
    }

    #[tokio::test]
    async fn decode_errors_hide_the_api_key() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let client = UsdaClient::new(server.uri(), "SUPER-SECRET-KEY");
        let err = client
            .search_foods("apple", &Pagination::default())
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "USDA API request failed: error decoding response body"
        );
    }
}
