// Explorer client configuration

use serde::Deserialize;

/// Environment variable consulted by [`InsightConfig::from_env`]
pub const BASE_URL_ENV: &str = "INSIGHT_BASE_URL";

/// Where the explorer API lives
///
/// Deserializable so it can sit inside a caller's own config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InsightConfig {
    /// Server root, e.g. `https://insight.example.com/`
    pub base_url: String,
}

impl InsightConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// Read the base URL from `INSIGHT_BASE_URL`
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        lookup(BASE_URL_ENV)
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize() {
        let config: InsightConfig =
            serde_json::from_str(r#"{"base_url": "https://insight.example.com/"}"#).unwrap();
        assert_eq!(config, InsightConfig::new("https://insight.example.com/"));
    }

    #[test]
    fn test_from_lookup() {
        let config = InsightConfig::from_lookup(|name| {
            assert_eq!(name, BASE_URL_ENV);
            Some(" http://localhost:3001 ".to_string())
        });
        assert_eq!(config, Some(InsightConfig::new("http://localhost:3001")));

        assert_eq!(InsightConfig::from_lookup(|_| None), None);
        assert_eq!(InsightConfig::from_lookup(|_| Some("  ".to_string())), None);
    }
}
