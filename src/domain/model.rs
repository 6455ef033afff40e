use crate::domain::lang::{detect, LanguagePair};
use serde::{Deserialize, Serialize};

// 翻译请求体
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TranslationRequest {
    pub model_id: String,
    pub source: String,
    pub target: String,
    pub text: Vec<String>,
}

impl TranslationRequest {
    pub fn new(pair: LanguagePair, text: &str) -> Self {
        Self {
            model_id: pair.model_id().to_string(),
            source: pair.source().to_string(),
            target: pair.target().to_string(),
            text: vec![text.to_string()],
        }
    }
}

/// Build a request for `text`, picking the direction with `detect`
pub fn build_request(text: &str) -> TranslationRequest {
    TranslationRequest::new(detect(text), text)
}

// 成功响应 (200)
#[derive(Debug, Clone, Deserialize)]
pub struct TranslationResponse {
    #[serde(default)]
    pub translations: Vec<Translation>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Translation {
    pub translation: String,
}

// 错误响应，字段是否存在取决于状态码
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorResponse {
    pub error_message: Option<String>,
    pub error: Option<String>,
    pub description: Option<String>,
}
