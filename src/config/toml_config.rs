use crate::adapters::firebase::DEFAULT_API_ENDPOINT;
use crate::config::{
    validate_link_settings, DEFAULT_ANDROID_PACKAGE_NAME, DEFAULT_DEEP_LINK_BASE,
    DEFAULT_DOMAIN_URI_PREFIX, DEFAULT_TIMEOUT_SECONDS,
};
use crate::core::ConfigProvider;
use crate::utils::error::{LinkError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub link: LinkSection,
    #[serde(default)]
    pub provider: ProviderSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinkSection {
    pub domain_uri_prefix: Option<String>,
    pub deep_link_base: Option<String>,
    pub android_package_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderSection {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(LinkError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| LinkError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${FIREBASE_API_KEY})，找不到的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_link_settings(self)?;

        if let Some(api_key) = &self.provider.api_key {
            if let Some(caps) = ENV_VAR_PATTERN.captures(api_key) {
                return Err(LinkError::ConfigValidationError {
                    field: "provider.api_key".to_string(),
                    message: format!("environment variable {} is not set", &caps[1]),
                });
            }
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn domain_uri_prefix(&self) -> &str {
        self.link
            .domain_uri_prefix
            .as_deref()
            .unwrap_or(DEFAULT_DOMAIN_URI_PREFIX)
    }

    fn deep_link_base(&self) -> &str {
        self.link
            .deep_link_base
            .as_deref()
            .unwrap_or(DEFAULT_DEEP_LINK_BASE)
    }

    fn android_package_name(&self) -> &str {
        self.link
            .android_package_name
            .as_deref()
            .unwrap_or(DEFAULT_ANDROID_PACKAGE_NAME)
    }

    fn api_endpoint(&self) -> &str {
        self.provider
            .endpoint
            .as_deref()
            .unwrap_or(DEFAULT_API_ENDPOINT)
    }

    fn api_key(&self) -> Option<&str> {
        self.provider.api_key.as_deref()
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.provider
                .timeout_seconds
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
        )
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[link]
domain_uri_prefix = "https://splitmate.page.link"
deep_link_base = "splitmate://parent"
android_package_name = "com.splitmate.app"

[provider]
api_key = "abc"
timeout_seconds = 5
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.domain_uri_prefix(), "https://splitmate.page.link");
        assert_eq!(config.api_key(), Some("abc"));
        assert_eq!(config.api_endpoint(), DEFAULT_API_ENDPOINT);
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.deep_link_base(), DEFAULT_DEEP_LINK_BASE);
        assert_eq!(config.api_key(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PARENT_LINK_TEST_API_KEY", "from-env");

        let toml_content = r#"
[provider]
api_key = "${PARENT_LINK_TEST_API_KEY}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.api_key(), Some("from-env"));

        std::env::remove_var("PARENT_LINK_TEST_API_KEY");
    }

    #[test]
    fn test_unresolved_env_var_fails_validation() {
        let toml_content = r#"
[provider]
api_key = "${PARENT_LINK_TEST_UNSET_VARIABLE}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("PARENT_LINK_TEST_UNSET_VARIABLE"));
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[link]
domain_uri_prefix = "invalid-url"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[link]
android_package_name = "com.file.app"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.android_package_name(), "com.file.app");
    }

    #[test]
    fn test_invalid_toml() {
        let result = TomlConfig::from_toml_str("[link\n");
        assert!(matches!(
            result,
            Err(LinkError::ConfigValidationError { .. })
        ));
    }
}
