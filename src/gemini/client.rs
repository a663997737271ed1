use async_trait::async_trait;
use once_cell::sync::OnceCell;

use crate::{
    config::AppConfig,
    error::ServiceError,
    gemini::types::{GenerateContentRequest, GenerateContentResponse},
    orchestrator::TextGenerator,
    prompt::GenerationConfig,
};

/// Client for the Gemini `generateContent` REST endpoint.
///
/// The underlying HTTP client is created on first use and reused for the
/// lifetime of the process; it carries no state between calls. No request
/// timeout is configured, the transport defaults apply.
pub struct GeminiClient {
    api_key: Option<String>,
    model_id: String,
    base_url: String,
    http: OnceCell<reqwest::Client>,
}

impl GeminiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            api_key: config.api_key.clone(),
            model_id: config.model_id.clone(),
            base_url: config.api_base_url.clone(),
            http: OnceCell::new(),
        }
    }

    fn http(&self) -> &reqwest::Client {
        self.http.get_or_init(reqwest::Client::new)
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model_id
        )
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(
        &self,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<String, ServiceError> {
        // Checked before any request is issued.
        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                ServiceError::Configuration(
                    "GEMINI_API_KEY is missing or empty; set it and restart the service".into(),
                )
            })?;

        let request = GenerateContentRequest::single_turn(prompt, config);

        // The key travels in a header, never in the URL, so transport errors
        // (which echo the URL) cannot leak it to the caller or the logs.
        let response = self
            .http()
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await
            .map_err(|err| ServiceError::Generation(format!("request to Gemini failed: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::Generation(format!(
                "Gemini returned {status}: {body}"
            )));
        }

        let payload: GenerateContentResponse = response
            .json()
            .await
            .map_err(|err| ServiceError::Generation(format!("malformed Gemini response: {err}")))?;

        let block_reason = payload.block_reason().map(str::to_string);
        payload.into_text().ok_or_else(|| match block_reason {
            Some(reason) => {
                ServiceError::Generation(format!("prompt was blocked by the service: {reason}"))
            }
            None => ServiceError::Generation("Gemini response contained no text".into()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::Creativity;
    use std::net::SocketAddr;

    fn config_with_key(api_key: Option<&str>) -> AppConfig {
        AppConfig {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            api_key: api_key.map(str::to_string),
            model_id: "gemini-pro".into(),
            api_base_url: "https://generativelanguage.googleapis.com".into(),
        }
    }

    #[tokio::test]
    async fn missing_key_fails_without_touching_the_network() {
        let client = GeminiClient::new(&config_with_key(None));
        let config = GenerationConfig::for_creativity(Creativity::Low);

        let err = client.generate("prompt", &config).await.unwrap_err();
        assert!(matches!(err, ServiceError::Configuration(_)));
        // The lazily-created HTTP client is never built on this path.
        assert!(client.http.get().is_none());
    }

    #[tokio::test]
    async fn whitespace_key_is_treated_as_missing() {
        let client = GeminiClient::new(&config_with_key(Some("   ")));
        let config = GenerationConfig::for_creativity(Creativity::High);

        let err = client.generate("prompt", &config).await.unwrap_err();
        assert!(matches!(err, ServiceError::Configuration(_)));
    }

    #[test]
    fn endpoint_joins_base_url_without_double_slash() {
        let mut app_config = config_with_key(Some("k"));
        app_config.api_base_url = "http://localhost:9090/".into();
        let client = GeminiClient::new(&app_config);

        assert_eq!(
            client.endpoint(),
            "http://localhost:9090/v1beta/models/gemini-pro:generateContent"
        );
    }

    #[tokio::test]
    async fn transport_error_message_never_contains_the_api_key() {
        // Nothing listens on port 1, so the send fails with a transport
        // error that echoes the request URL.
        let mut app_config = config_with_key(Some("super-secret-key"));
        app_config.api_base_url = "http://127.0.0.1:1".into();
        let client = GeminiClient::new(&app_config);
        let config = GenerationConfig::for_creativity(Creativity::Low);

        let err = client.generate("prompt", &config).await.unwrap_err();
        assert!(matches!(err, ServiceError::Generation(_)));
        assert!(!err.to_string().contains("super-secret-key"));
    }
}
