use crate::domain::model::{
    AndroidInfo, CreateShortLinkRequest, CreateShortLinkResponse, DynamicLinkInfo, LinkTarget,
    ProviderErrorBody, Suffix, SuffixOption,
};
use crate::domain::ports::{ConfigProvider, LinkShortener};
use crate::utils::error::{LinkError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_required_field};
use async_trait::async_trait;
use reqwest::Client;

pub const DEFAULT_API_ENDPOINT: &str = "https://firebasedynamiclinks.googleapis.com/v1/shortLinks";

/// Firebase Dynamic Links REST 客戶端
///
/// `Client` 依設定的逾時建立一次，之後每次呼叫共用
#[derive(Debug, Clone)]
pub struct FirebaseShortener {
    client: Client,
    endpoint: String,
    api_key: String,
    suffix: SuffixOption,
}

impl FirebaseShortener {
    pub fn new(client: Client, endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            suffix: SuffixOption::Short,
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let api_key = config.api_key().map(str::to_string);
        let api_key = validate_required_field("api_key", &api_key)?;
        validate_non_empty_string("api_key", api_key)?;

        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self::new(client, config.api_endpoint(), api_key.as_str()))
    }

    pub fn with_suffix(mut self, suffix: SuffixOption) -> Self {
        self.suffix = suffix;
        self
    }

    fn build_request(&self, target: &LinkTarget, deep_link: &str) -> CreateShortLinkRequest {
        CreateShortLinkRequest {
            dynamic_link_info: DynamicLinkInfo {
                domain_uri_prefix: target.domain_uri_prefix.clone(),
                link: deep_link.to_string(),
                android_info: AndroidInfo {
                    android_package_name: target.android_package_name.clone(),
                },
            },
            suffix: Suffix {
                option: self.suffix,
            },
        }
    }
}

#[async_trait]
impl LinkShortener for FirebaseShortener {
    async fn shorten(&self, target: &LinkTarget, deep_link: &str) -> Result<String> {
        let body = self.build_request(target, deep_link);

        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            // reqwest 錯誤訊息含請求 URL，其中帶有 API key
            .map_err(|e| LinkError::ApiError(e.without_url()))?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            // 供應商錯誤格式: {"error": {"code": 400, "message": "...", "status": "..."}}
            let message = serde_json::from_str::<ProviderErrorBody>(&text)
                .ok()
                .and_then(|body| body.error.message)
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("unknown provider error")
                        .to_string()
                });

            return Err(LinkError::ProviderError {
                status: status.as_u16(),
                message,
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| LinkError::ApiError(e.without_url()))?;
        let parsed: CreateShortLinkResponse =
            serde_json::from_str(&text).map_err(|e| LinkError::MalformedResponse {
                message: format!("invalid JSON body: {}", e),
            })?;

        for warning in &parsed.warning {
            tracing::warn!(
                "⚠️ Provider warning {}: {}",
                warning.warning_code.as_deref().unwrap_or("UNKNOWN"),
                warning.warning_message.as_deref().unwrap_or("")
            );
        }

        if let Some(preview) = &parsed.preview_link {
            tracing::debug!("Preview link: {}", preview);
        }

        parsed
            .short_link
            .filter(|link| !link.trim().is_empty())
            .ok_or_else(|| LinkError::MalformedResponse {
                message: "response did not contain a shortLink".to_string(),
            })
    }
}
