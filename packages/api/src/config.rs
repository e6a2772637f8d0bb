//! API endpoint configuration from environment variables.

/// Base URL used when `API_URL` is unset or empty.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Where the client sends its requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Read `API_URL`.
    ///
    /// Native builds load `.env` and read the variable at runtime; web builds
    /// bake it in at compile time.
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        let value = {
            dotenvy::dotenv().ok();
            std::env::var("API_URL").ok()
        };
        #[cfg(target_arch = "wasm32")]
        let value = option_env!("API_URL").map(str::to_string);

        Self::from_value(value)
    }

    fn from_value(value: Option<String>) -> Self {
        match value.map(|v| v.trim().to_string()) {
            Some(url) if !url.is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset_or_blank() {
        assert_eq!(ApiConfig::from_value(None).base_url, DEFAULT_API_URL);
        assert_eq!(
            ApiConfig::from_value(Some("  ".to_string())).base_url,
            DEFAULT_API_URL
        );
    }

    #[test]
    fn test_uses_provided_url() {
        let config = ApiConfig::from_value(Some("https://api.example.com/api".to_string()));
        assert_eq!(config.base_url, "https://api.example.com/api");
    }
}
