//! Credential types for AI providers.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

use super::ProviderKind;

/// API key credentials for AI providers.
#[derive(Clone, Serialize, Deserialize)]
pub struct ApiKeyCredentials {
    /// API key.
    pub api_key: String,
}

impl ApiKeyCredentials {
    /// Creates credentials from an API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }
}

impl fmt::Debug for ApiKeyCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKeyCredentials")
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Credentials for all supported completion providers.
#[derive(Debug, Clone, Serialize, Deserialize, IntoStaticStr)]
#[serde(tag = "provider", rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Credentials {
    /// Google Gemini credentials.
    Gemini(ApiKeyCredentials),
    /// OpenAI credentials.
    #[strum(serialize = "openai")]
    #[serde(rename = "openai")]
    OpenAi(ApiKeyCredentials),
    /// Anthropic credentials.
    Anthropic(ApiKeyCredentials),
}

impl Credentials {
    /// Creates credentials for the given provider.
    pub fn new(kind: ProviderKind, api_key: impl Into<String>) -> Self {
        let credentials = ApiKeyCredentials::new(api_key);
        match kind {
            ProviderKind::Gemini => Self::Gemini(credentials),
            ProviderKind::OpenAi => Self::OpenAi(credentials),
            ProviderKind::Anthropic => Self::Anthropic(credentials),
        }
    }

    /// Returns the provider name as a string.
    pub fn provider(&self) -> &'static str {
        self.into()
    }

    /// Returns the provider kind.
    pub fn kind(&self) -> ProviderKind {
        match self {
            Self::Gemini(_) => ProviderKind::Gemini,
            Self::OpenAi(_) => ProviderKind::OpenAi,
            Self::Anthropic(_) => ProviderKind::Anthropic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_names() {
        assert_eq!(Credentials::new(ProviderKind::Gemini, "k").provider(), "gemini");
        assert_eq!(Credentials::new(ProviderKind::OpenAi, "k").provider(), "openai");
        assert_eq!(
            Credentials::new(ProviderKind::Anthropic, "k").provider(),
            "anthropic"
        );
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let credentials = Credentials::new(ProviderKind::Gemini, "secret-key");
        let debug = format!("{credentials:?}");
        assert!(!debug.contains("secret-key"));
    }

    #[test]
    fn test_serde_tagging() {
        let credentials = Credentials::new(ProviderKind::OpenAi, "k");
        let json = serde_json::to_value(&credentials).unwrap();
        assert_eq!(json["provider"], "openai");
        assert_eq!(json["api_key"], "k");
    }
}
