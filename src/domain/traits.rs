use crate::domain::error::TranslateError;
use crate::domain::model::TranslationRequest;
use async_trait::async_trait;
use std::time::Duration;

/// Trait for translation services
///
/// The CLI talks to Watson through this seam; tests swap in stubs.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate a single request, giving up once `deadline` has elapsed
    async fn translate(
        &self,
        request: &TranslationRequest,
        deadline: Duration,
    ) -> Result<String, TranslateError>;
}
