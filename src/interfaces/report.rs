use crate::domain::error::{Credential, TranslateError};
use crate::infrastructure::config::{PASSWORD_ENV, USERNAME_ENV};

/// One-line message for a failed run.
///
/// Error variants already embed their cause in `Display`, so only the
/// outermost message is printed.
pub fn error_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<TranslateError>() {
        Some(TranslateError::MissingCredential(which)) => {
            let var = match which {
                Credential::Username => USERNAME_ENV,
                Credential::Password => PASSWORD_ENV,
            };
            format!("Missing {}. Please set '{}'.", which, var)
        }
        _ => err.to_string(),
    }
}
