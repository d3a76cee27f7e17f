use serde::{Deserialize, Serialize};

/// 呼叫端送來的邀請碼請求。缺少 `code` 時由驗證拒絕
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRequest {
    #[serde(default)]
    pub code: Option<String>,
}

impl LinkRequest {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
        }
    }
}

/// 回傳給行動端的結果。`link` 永遠存在，`error` 僅在供應商失敗時出現
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkResult {
    pub link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LinkResult {
    pub fn shortened(link: String) -> Self {
        Self { link, error: None }
    }

    pub fn fallback(link: String, error: String) -> Self {
        Self {
            link,
            error: Some(error),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.error.is_some()
    }
}

/// 每個連結共用的固定參數
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkTarget {
    pub domain_uri_prefix: String,
    pub deep_link_base: String,
    pub android_package_name: String,
}

impl LinkTarget {
    /// 去除網域前綴結尾的 `/`，讓備用連結與供應商請求使用同一個值
    pub fn normalized(mut self) -> Self {
        let trimmed_len = self.domain_uri_prefix.trim_end_matches('/').len();
        self.domain_uri_prefix.truncate(trimmed_len);
        self
    }
}

impl Default for LinkTarget {
    fn default() -> Self {
        Self {
            domain_uri_prefix: "https://splitmate.page.link".to_string(),
            deep_link_base: "splitmate://parent".to_string(),
            android_package_name: "com.splitmate.app".to_string(),
        }
    }
}

// Firebase Dynamic Links REST wire types

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShortLinkRequest {
    pub dynamic_link_info: DynamicLinkInfo,
    pub suffix: Suffix,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicLinkInfo {
    pub domain_uri_prefix: String,
    pub link: String,
    pub android_info: AndroidInfo,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AndroidInfo {
    pub android_package_name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Suffix {
    pub option: SuffixOption,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SuffixOption {
    Short,
    Unguessable,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShortLinkResponse {
    #[serde(default)]
    pub short_link: Option<String>,
    #[serde(default)]
    pub preview_link: Option<String>,
    #[serde(default)]
    pub warning: Vec<ProviderWarning>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderWarning {
    #[serde(default)]
    pub warning_code: Option<String>,
    #[serde(default)]
    pub warning_message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderErrorBody {
    pub error: ProviderErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderErrorDetail {
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}
