//! Japanese/English translation through the Watson Language Translator API.
//!
//! Input is classified by `domain::lang::detect`, wrapped into a
//! `TranslationRequest` and sent by `WatsonClient` with Basic auth under a
//! caller supplied deadline.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod state;

pub use domain::error::{Credential, TranslateError};
pub use domain::lang::{detect, LanguagePair};
pub use domain::model::{build_request, TranslationRequest};
pub use domain::traits::Translator;
pub use infrastructure::network::client::{ClientConfig, WatsonClient};
