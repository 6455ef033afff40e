use crate::domain::error::{Credential, TranslateError};
use crate::domain::model::{ErrorResponse, TranslationRequest, TranslationResponse};
use crate::domain::traits::Translator;
use crate::infrastructure::network::http::create_client;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;

/// Watson Language Translator v2 endpoint
pub const DEFAULT_BASE_URL: &str = "https://gateway.watsonplatform.net/language-translator/api/v2";

/// Overall bound on a single API call
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Settings needed to talk to the translation service
#[derive(Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub username: String,
    pub password: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            username: username.into(),
            password: password.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Watson translator client
pub struct WatsonClient {
    base_url: String,
    http_client: Client,
    username: String,
    password: String,
}

impl WatsonClient {
    pub fn new(username: &str, password: &str) -> Result<Self, TranslateError> {
        Self::from_config(ClientConfig::new(username, password))
    }

    pub fn from_config(config: ClientConfig) -> Result<Self, TranslateError> {
        if config.username.is_empty() {
            return Err(TranslateError::MissingCredential(Credential::Username));
        }

        if config.password.is_empty() {
            return Err(TranslateError::MissingCredential(Credential::Password));
        }

        let http_client = create_client(config.timeout)?;

        Ok(Self {
            base_url: config.base_url,
            http_client,
            username: config.username,
            password: config.password,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn send(&self, request: &TranslationRequest) -> Result<String, TranslateError> {
        // Serialize up front so an encoding failure never reaches the network
        let body = serde_json::to_vec(request)?;

        let response = self
            .http_client
            .post(self.endpoint("/translate"))
            .basic_auth(&self.username, Some(&self.password))
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;
        debug!(status = status.as_u16(), size = bytes.len(), "response received");

        if status != StatusCode::OK {
            return Err(api_error(status, &bytes));
        }

        let parsed: TranslationResponse =
            serde_json::from_slice(&bytes).map_err(|source| TranslateError::Decode {
                status: status.as_u16(),
                source,
            })?;

        parsed
            .translations
            .into_iter()
            .next()
            .map(|t| t.translation)
            .ok_or(TranslateError::EmptyTranslation)
    }
}

/// Map a non-200 response to an error; the expected body shape depends on the status
fn api_error(status: StatusCode, body: &[u8]) -> TranslateError {
    let code = status.as_u16();
    let err_body = serde_json::from_slice::<ErrorResponse>(body).unwrap_or_else(|e| {
        debug!(
            "Unparsable error body ({}): {}",
            e,
            String::from_utf8_lossy(body)
        );
        ErrorResponse::default()
    });

    let detail = match code {
        400 | 404 | 500 => format!(
            "\"code\":{}, \"error_message\":\"{}\"",
            code,
            err_body.error_message.unwrap_or_default()
        ),
        _ => format!(
            "\"code\":{}, \"error\":\"{}\", \"description\":\"{}\"",
            code,
            err_body.error.unwrap_or_default(),
            err_body.description.unwrap_or_default()
        ),
    };

    TranslateError::Translation {
        status: code,
        detail,
    }
}

#[async_trait]
impl Translator for WatsonClient {
    async fn translate(
        &self,
        request: &TranslationRequest,
        deadline: Duration,
    ) -> Result<String, TranslateError> {
        match tokio::time::timeout(deadline, self.send(request)).await {
            Ok(result) => result,
            Err(_) => {
                debug!("Translation request cancelled after {:?}", deadline);
                Err(TranslateError::DeadlineExceeded(deadline))
            }
        }
    }
}
