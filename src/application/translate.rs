use crate::domain::error::TranslateError;
use crate::domain::model::build_request;
use crate::domain::traits::Translator;
use std::time::Duration;
use tracing::debug;

pub async fn translate_text(
    translator: &dyn Translator,
    text: &str,
    deadline: Duration,
) -> Result<String, TranslateError> {
    let request = build_request(text);
    debug!(
        model_id = %request.model_id,
        chars = text.chars().count(),
        "translating"
    );

    translator.translate(&request, deadline).await
}
