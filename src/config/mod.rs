pub mod lambda;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_deep_link_base, validate_package_name, validate_range, validate_url,
};

#[cfg(feature = "cli")]
use crate::adapters::firebase::DEFAULT_API_ENDPOINT;
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::time::Duration;
#[cfg(feature = "cli")]
use toml_config::TomlConfig;

pub const DEFAULT_DOMAIN_URI_PREFIX: &str = "https://splitmate.page.link";
pub const DEFAULT_DEEP_LINK_BASE: &str = "splitmate://parent";
pub const DEFAULT_ANDROID_PACKAGE_NAME: &str = "com.splitmate.app";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
pub const MAX_TIMEOUT_SECONDS: u64 = 60;

/// 共用的連結設定驗證
pub(crate) fn validate_link_settings<C: ConfigProvider>(config: &C) -> Result<()> {
    validate_url("domain_uri_prefix", config.domain_uri_prefix())?;
    validate_deep_link_base("deep_link_base", config.deep_link_base())?;
    validate_package_name("android_package_name", config.android_package_name())?;
    validate_url("api_endpoint", config.api_endpoint())?;
    validate_range(
        "timeout_seconds",
        config.request_timeout().as_secs(),
        1,
        MAX_TIMEOUT_SECONDS,
    )?;
    Ok(())
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "parent-link")]
#[command(about = "Create a shareable parent invite link")]
pub struct CliConfig {
    #[arg(long, help = "Invite code to embed in the link")]
    pub code: String,

    #[arg(long = "config", help = "Path to a TOML config file")]
    pub config_file: Option<String>,

    #[arg(long, env = "FIREBASE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long)]
    pub domain_uri_prefix: Option<String>,

    #[arg(long)]
    pub deep_link_base: Option<String>,

    #[arg(long)]
    pub android_package_name: Option<String>,

    #[arg(long)]
    pub api_endpoint: Option<String>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Print the fallback link without contacting the provider")]
    pub offline: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 命令列參數優先，未指定的欄位才採用設定檔的值
    pub fn with_file_defaults(mut self, file: &TomlConfig) -> Self {
        let link = &file.link;
        let provider = &file.provider;

        self.domain_uri_prefix = self
            .domain_uri_prefix
            .or_else(|| link.domain_uri_prefix.clone());
        self.deep_link_base = self.deep_link_base.or_else(|| link.deep_link_base.clone());
        self.android_package_name = self
            .android_package_name
            .or_else(|| link.android_package_name.clone());
        self.api_endpoint = self.api_endpoint.or_else(|| provider.endpoint.clone());
        self.api_key = self.api_key.or_else(|| provider.api_key.clone());
        self.timeout_seconds = self.timeout_seconds.or(provider.timeout_seconds);
        self
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn domain_uri_prefix(&self) -> &str {
        self.domain_uri_prefix
            .as_deref()
            .unwrap_or(DEFAULT_DOMAIN_URI_PREFIX)
    }

    fn deep_link_base(&self) -> &str {
        self.deep_link_base.as_deref().unwrap_or(DEFAULT_DEEP_LINK_BASE)
    }

    fn android_package_name(&self) -> &str {
        self.android_package_name
            .as_deref()
            .unwrap_or(DEFAULT_ANDROID_PACKAGE_NAME)
    }

    fn api_endpoint(&self) -> &str {
        self.api_endpoint.as_deref().unwrap_or(DEFAULT_API_ENDPOINT)
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS))
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_link_settings(self)
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let config = CliConfig::parse_from(["parent-link", "--code", "ABC123"]);
        assert_eq!(config.code, "ABC123");
        assert_eq!(config.domain_uri_prefix(), DEFAULT_DOMAIN_URI_PREFIX);
        assert_eq!(config.deep_link_base(), DEFAULT_DEEP_LINK_BASE);
        assert_eq!(config.android_package_name(), DEFAULT_ANDROID_PACKAGE_NAME);
        assert_eq!(config.api_endpoint(), DEFAULT_API_ENDPOINT);
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_flags_override_file() {
        let file = TomlConfig::from_toml_str(
            r#"
[link]
domain_uri_prefix = "https://file.page.link"
android_package_name = "com.file.app"

[provider]
api_key = "file-key"
timeout_seconds = 30
"#,
        )
        .unwrap();

        let config = CliConfig::parse_from([
            "parent-link",
            "--code",
            "ABC123",
            "--api-key",
            "cli-key",
            "--android-package-name",
            "com.cli.app",
        ])
        .with_file_defaults(&file);

        assert_eq!(config.api_key(), Some("cli-key"));
        assert_eq!(config.android_package_name(), "com.cli.app");
        assert_eq!(config.domain_uri_prefix(), "https://file.page.link");
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_cli_rejects_invalid_timeout() {
        let config = CliConfig::parse_from([
            "parent-link",
            "--code",
            "ABC123",
            "--timeout-seconds",
            "0",
        ]);
        assert!(config.validate().is_err());
    }
}
