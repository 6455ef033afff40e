use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Which credential was missing when building the client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Credential {
    Username,
    Password,
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credential::Username => write!(f, "username"),
            Credential::Password => write!(f, "user password"),
        }
    }
}

#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("Missing {0}")]
    MissingCredential(Credential),

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP request error: deadline of {0:?} exceeded")]
    DeadlineExceeded(Duration),

    #[error("Translation error: {detail}")]
    Translation { status: u16, detail: String },

    #[error("Failed to decode response (HTTP {status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    #[error("API returned no translations")]
    EmptyTranslation,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl TranslateError {
    /// Network level failure, including an expired deadline
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            TranslateError::Transport(_) | TranslateError::DeadlineExceeded(_)
        )
    }

    pub fn is_timeout(&self) -> bool {
        match self {
            TranslateError::DeadlineExceeded(_) => true,
            TranslateError::Transport(e) => e.is_timeout(),
            _ => false,
        }
    }

    /// HTTP status of a rejected translation call
    pub fn status(&self) -> Option<u16> {
        match self {
            TranslateError::Translation { status, .. } | TranslateError::Decode { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}
