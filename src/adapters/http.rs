use crate::domain::model::CalculationResult;
use crate::domain::ports::{ConfigProvider, MultiplyApi};
use crate::utils::error::{ClientError, Result};
use crate::utils::validation::validate_url;
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

pub struct HttpMultiplyApi {
    client: Client,
    base_url: Url,
}

impl HttpMultiplyApi {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            client: Client::new(),
            base_url: parse_base_url(base_url)?,
        })
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: parse_base_url(config.base_url())?,
        })
    }

    /// `{base}/api/multiply/{num1}/{num2}`, keeping any path prefix of the base.
    pub fn multiply_url(&self, num1: i64, num2: i64) -> Result<Url> {
        let (num1, num2) = (num1.to_string(), num2.to_string());
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::ConfigError {
                message: format!("Base URL cannot carry a path: {}", self.base_url),
            })?
            .pop_if_empty()
            .extend(["api", "multiply", num1.as_str(), num2.as_str()]);
        Ok(url)
    }
}

fn parse_base_url(base_url: &str) -> Result<Url> {
    validate_url("base_url", base_url)?;
    Url::parse(base_url).map_err(|e| ClientError::InvalidConfigValueError {
        field: "base_url".to_string(),
        value: base_url.to_string(),
        reason: format!("Invalid URL format: {}", e),
    })
}

#[async_trait]
impl MultiplyApi for HttpMultiplyApi {
    async fn multiply(&self, num1: i64, num2: i64) -> Result<CalculationResult> {
        let url = self.multiply_url(num1, num2)?;

        tracing::debug!("Sending request to {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(ClientError::Remote {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body: CalculationResult = response.json().await?;
        tracing::debug!("Response received: {:?}", body);
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn test_multiply_url_keeps_base_path() {
        let api = HttpMultiplyApi::new("http://localhost:8080/").unwrap();
        assert_eq!(
            api.multiply_url(6, -7).unwrap().as_str(),
            "http://localhost:8080/api/multiply/6/-7"
        );

        let api = HttpMultiplyApi::new("http://example.com/calc").unwrap();
        assert_eq!(
            api.multiply_url(1, 2).unwrap().as_str(),
            "http://example.com/calc/api/multiply/1/2"
        );
    }

    #[test]
    fn test_new_rejects_invalid_base_url() {
        assert!(matches!(
            HttpMultiplyApi::new("not a url"),
            Err(ClientError::InvalidConfigValueError { .. })
        ));
    }

    #[tokio::test]
    async fn test_multiply_successful_response() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/api/multiply/6/7");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "result": 42,
                    "message": "6 times 7 equals 42",
                    "operation": "6 × 7"
                }));
        });

        let api = HttpMultiplyApi::new(&server.base_url()).unwrap();
        let result = api.multiply(6, 7).await.unwrap();

        api_mock.assert();
        assert_eq!(result.result, 42);
        assert_eq!(result.operation, "6 × 7");
    }

    #[tokio::test]
    async fn test_multiply_non_success_status_is_remote_error() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/api/multiply/1/2");
            then.status(500);
        });

        let api = HttpMultiplyApi::new(&server.base_url()).unwrap();
        let err = api.multiply(1, 2).await.unwrap_err();

        api_mock.assert();
        match err {
            ClientError::Remote {
                status,
                status_text,
            } => {
                assert_eq!(status, 500);
                assert_eq!(status_text, "Internal Server Error");
            }
            other => panic!("expected remote error, got {:?}", other),
        }
    }

    #[test]
    fn test_new_rejects_non_http_scheme() {
        for base in ["mailto:calc@example.com", "ftp://example.com"] {
            assert!(matches!(
                HttpMultiplyApi::new(base),
                Err(ClientError::InvalidConfigValueError { .. })
            ));
        }
    }

    #[tokio::test]
    async fn test_multiply_unknown_status_has_no_dangling_reason() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/multiply/5/5");
            then.status(599);
        });

        let api = HttpMultiplyApi::new(&server.base_url()).unwrap();
        let err = api.multiply(5, 5).await.unwrap_err();

        assert!(matches!(err, ClientError::Remote { status: 599, .. }));
        assert_eq!(err.user_friendly_message(), "Failed to calculate: HTTP 599");
    }

    #[tokio::test]
    async fn test_multiply_malformed_body_is_transport_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/multiply/3/4");
            then.status(200).body("not json");
        });

        let api = HttpMultiplyApi::new(&server.base_url()).unwrap();
        let err = api.multiply(3, 4).await.unwrap_err();

        assert!(matches!(err, ClientError::Transport { .. }));
    }
}
