use crate::adapters::firebase::DEFAULT_API_ENDPOINT;
use crate::config::{
    validate_link_settings, DEFAULT_ANDROID_PACKAGE_NAME, DEFAULT_DEEP_LINK_BASE,
    DEFAULT_DOMAIN_URI_PREFIX, DEFAULT_TIMEOUT_SECONDS,
};
use crate::core::ConfigProvider;
use crate::utils::error::{LinkError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub api_key: String,
    pub domain_uri_prefix: String,
    pub deep_link_base: String,
    pub android_package_name: String,
    pub api_endpoint: String,
    pub timeout_seconds: u64,
}

impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 以任意來源讀取變數 (測試時使用 HashMap)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeout_seconds = match lookup("REQUEST_TIMEOUT_SECONDS") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| LinkError::InvalidConfigValueError {
                    field: "REQUEST_TIMEOUT_SECONDS".to_string(),
                    value: raw.clone(),
                    reason: "Value must be a whole number of seconds".to_string(),
                })?,
            None => DEFAULT_TIMEOUT_SECONDS,
        };

        Ok(Self {
            api_key: lookup("FIREBASE_API_KEY").ok_or_else(|| LinkError::ConfigError {
                message: "FIREBASE_API_KEY environment variable is required".to_string(),
            })?,
            domain_uri_prefix: lookup("DYNAMIC_LINK_DOMAIN")
                .unwrap_or_else(|| DEFAULT_DOMAIN_URI_PREFIX.to_string()),
            deep_link_base: lookup("DEEP_LINK_BASE")
                .unwrap_or_else(|| DEFAULT_DEEP_LINK_BASE.to_string()),
            android_package_name: lookup("ANDROID_PACKAGE_NAME")
                .unwrap_or_else(|| DEFAULT_ANDROID_PACKAGE_NAME.to_string()),
            api_endpoint: lookup("DYNAMIC_LINKS_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string()),
            timeout_seconds,
        })
    }
}

impl ConfigProvider for LambdaConfig {
    fn domain_uri_prefix(&self) -> &str {
        &self.domain_uri_prefix
    }

    fn deep_link_base(&self) -> &str {
        &self.deep_link_base
    }

    fn android_package_name(&self) -> &str {
        &self.android_package_name
    }

    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn api_key(&self) -> Option<&str> {
        Some(&self.api_key)
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("api_key", &self.api_key)?;
        validate_link_settings(self)?;

        tracing::info!("✅ Lambda configuration validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_with_api_key() {
        let config = LambdaConfig::from_lookup(lookup_from(&[("FIREBASE_API_KEY", "secret")]))
            .unwrap();

        assert_eq!(config.api_key(), Some("secret"));
        assert_eq!(config.domain_uri_prefix(), "https://splitmate.page.link");
        assert_eq!(config.deep_link_base(), "splitmate://parent");
        assert_eq!(config.android_package_name(), "com.splitmate.app");
        assert_eq!(config.api_endpoint(), DEFAULT_API_ENDPOINT);
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_api_key() {
        let result = LambdaConfig::from_lookup(lookup_from(&[]));
        assert!(matches!(result, Err(LinkError::ConfigError { .. })));
    }

    #[test]
    fn test_overrides_and_invalid_timeout() {
        let config = LambdaConfig::from_lookup(lookup_from(&[
            ("FIREBASE_API_KEY", "secret"),
            ("DYNAMIC_LINK_DOMAIN", "https://example.page.link"),
            ("ANDROID_PACKAGE_NAME", "com.example.app"),
            ("REQUEST_TIMEOUT_SECONDS", "5"),
        ]))
        .unwrap();
        assert_eq!(config.domain_uri_prefix(), "https://example.page.link");
        assert_eq!(config.android_package_name(), "com.example.app");
        assert_eq!(config.request_timeout(), Duration::from_secs(5));

        let result = LambdaConfig::from_lookup(lookup_from(&[
            ("FIREBASE_API_KEY", "secret"),
            ("REQUEST_TIMEOUT_SECONDS", "soon"),
        ]));
        assert!(matches!(
            result,
            Err(LinkError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_validation_rejects_bad_package() {
        let config = LambdaConfig::from_lookup(lookup_from(&[
            ("FIREBASE_API_KEY", "secret"),
            ("ANDROID_PACKAGE_NAME", "not-a-package"),
        ]))
        .unwrap();
        assert!(config.validate().is_err());
    }
}
