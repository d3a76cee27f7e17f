use crate::domain::model::LinkTarget;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// 外部短網址供應商
#[async_trait]
pub trait LinkShortener: Send + Sync {
    async fn shorten(&self, target: &LinkTarget, deep_link: &str) -> Result<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn domain_uri_prefix(&self) -> &str;
    fn deep_link_base(&self) -> &str;
    fn android_package_name(&self) -> &str;
    fn api_endpoint(&self) -> &str;
    fn api_key(&self) -> Option<&str>;
    fn request_timeout(&self) -> Duration;

    fn link_target(&self) -> LinkTarget {
        LinkTarget {
            domain_uri_prefix: self.domain_uri_prefix().to_string(),
            deep_link_base: self.deep_link_base().to_string(),
            android_package_name: self.android_package_name().to_string(),
        }
        .normalized()
    }
}
