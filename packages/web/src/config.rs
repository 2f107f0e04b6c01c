//! Contentful configuration from the environment

use anyhow::{bail, Context, Result};

const CONTENTFUL_GRAPHQL_BASE: &str = "https://graphql.contentful.com/content/v1/spaces";

/// Contentful configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ContentfulConfig {
    pub space_id: String,
    pub environment: String,
    pub access_token: String,
    pub preview_access_token: Option<String>,
    /// Serve draft content with the preview token
    pub preview: bool,
}

impl ContentfulConfig {
    /// Load configuration from environment variables
    #[cfg(feature = "server")]
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let preview = match lookup("CONTENTFUL_PREVIEW") {
            Some(value) => value
                .parse()
                .context("CONTENTFUL_PREVIEW must be true or false")?,
            None => false,
        };

        let config = Self {
            space_id: lookup("CONTENTFUL_SPACE_ID").context("CONTENTFUL_SPACE_ID must be set")?,
            environment: lookup("CONTENTFUL_ENVIRONMENT").unwrap_or_else(|| "master".to_string()),
            access_token: lookup("CONTENTFUL_ACCESS_TOKEN")
                .context("CONTENTFUL_ACCESS_TOKEN must be set")?,
            preview_access_token: lookup("CONTENTFUL_PREVIEW_ACCESS_TOKEN"),
            preview,
        };

        if config.preview && config.preview_access_token.is_none() {
            bail!("CONTENTFUL_PREVIEW_ACCESS_TOKEN must be set when CONTENTFUL_PREVIEW is enabled");
        }

        Ok(config)
    }

    /// GraphQL endpoint for the configured space and environment
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}/environments/{}",
            CONTENTFUL_GRAPHQL_BASE, self.space_id, self.environment
        )
    }

    /// Token matching the current delivery mode
    pub fn active_token(&self) -> &str {
        match (&self.preview_access_token, self.preview) {
            (Some(token), true) => token,
            _ => &self.access_token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<ContentfulConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ContentfulConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_minimal_config() {
        let config = load(&[
            ("CONTENTFUL_SPACE_ID", "space123"),
            ("CONTENTFUL_ACCESS_TOKEN", "delivery"),
        ])
        .unwrap();

        assert_eq!(config.environment, "master");
        assert!(!config.preview);
        assert_eq!(config.active_token(), "delivery");
        assert_eq!(
            config.endpoint(),
            "https://graphql.contentful.com/content/v1/spaces/space123/environments/master"
        );
    }

    #[test]
    fn test_preview_uses_preview_token() {
        let config = load(&[
            ("CONTENTFUL_SPACE_ID", "space123"),
            ("CONTENTFUL_ACCESS_TOKEN", "delivery"),
            ("CONTENTFUL_PREVIEW_ACCESS_TOKEN", "draft"),
            ("CONTENTFUL_PREVIEW", "true"),
            ("CONTENTFUL_ENVIRONMENT", "staging"),
        ])
        .unwrap();

        assert_eq!(config.active_token(), "draft");
        assert!(config.endpoint().ends_with("/environments/staging"));
    }

    #[test]
    fn test_missing_space_fails() {
        let err = load(&[("CONTENTFUL_ACCESS_TOKEN", "delivery")]).unwrap_err();
        assert!(err.to_string().contains("CONTENTFUL_SPACE_ID"));
    }

    #[test]
    fn test_preview_without_token_fails() {
        let err = load(&[
            ("CONTENTFUL_SPACE_ID", "space123"),
            ("CONTENTFUL_ACCESS_TOKEN", "delivery"),
            ("CONTENTFUL_PREVIEW", "true"),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("CONTENTFUL_PREVIEW_ACCESS_TOKEN"));
    }

    #[test]
    fn test_invalid_preview_flag_fails() {
        let err = load(&[
            ("CONTENTFUL_SPACE_ID", "space123"),
            ("CONTENTFUL_ACCESS_TOKEN", "delivery"),
            ("CONTENTFUL_PREVIEW", "yes"),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("CONTENTFUL_PREVIEW"));
    }
}
