use crate::domain::error::TranslateError;
use crate::domain::traits::Translator;
use crate::infrastructure::config::Config;
use crate::infrastructure::network::client::{ClientConfig, WatsonClient};

/// Everything a single invocation needs, built once in `main`
pub struct AppState {
    pub config: Config,
    pub translator: Box<dyn Translator>,
}

impl AppState {
    pub fn new(config: Config, username: &str, password: &str) -> Result<Self, TranslateError> {
        let client_config = ClientConfig::new(username, password).with_timeout(config.timeout());
        let translator = WatsonClient::from_config(client_config)?;

        Ok(Self {
            config,
            translator: Box::new(translator),
        })
    }

    pub fn with_translator(config: Config, translator: Box<dyn Translator>) -> Self {
        Self { config, translator }
    }

    /// Deadline for the translation call
    pub fn deadline(&self) -> std::time::Duration {
        self.config.timeout()
    }
}
