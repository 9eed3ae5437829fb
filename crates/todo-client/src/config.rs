//! Client Configuration

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Origin used when nothing else is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Variable read by [`ClientConfig::from_build_env`] and [`ClientConfig::from_env`]
pub const API_BASE_URL_VAR: &str = "TODO_API_BASE_URL";

/// Durable storage key of the display name
pub const NAME_STORAGE_KEY: &str = "user_name";

const COLLECTION_PATH: &str = "/v1/todos";

/// Characters escaped when an id is placed in a path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Base URL baked in at compile time (works in the browser)
    pub fn from_build_env() -> Self {
        option_env!("TODO_API_BASE_URL")
            .filter(|url| !url.trim().is_empty())
            .map(Self::new)
            .unwrap_or_default()
    }

    /// Base URL from the process environment
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        std::env::var(API_BASE_URL_VAR)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .map(Self::new)
            .unwrap_or_else(Self::from_build_env)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, COLLECTION_PATH)
    }

    pub fn item_url(&self, id: &str) -> String {
        format!(
            "{}{}/{}",
            self.base_url,
            COLLECTION_PATH,
            utf8_percent_encode(id, PATH_SEGMENT)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let config = ClientConfig::default();
        assert_eq!(config.collection_url(), "http://localhost:3000/v1/todos");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ClientConfig::new("https://api.example.com/");
        assert_eq!(config.base_url(), "https://api.example.com");
        assert_eq!(config.item_url("42"), "https://api.example.com/v1/todos/42");
    }

    #[test]
    fn test_item_id_is_one_segment() {
        let config = ClientConfig::new("http://h");
        assert_eq!(config.item_url("a/b c"), "http://h/v1/todos/a%2Fb%20c");
    }
}
