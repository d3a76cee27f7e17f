use crate::core::links;
use crate::domain::model::{LinkRequest, LinkResult, LinkTarget};
use crate::domain::ports::LinkShortener;
use crate::utils::error::Result;
use crate::utils::validation::validate_code;

/// 建立家長邀請連結
///
/// 對短網址供應商只嘗試一次；供應商失敗時記錄錯誤並改回傳本地計算的備用連結，
/// 因此唯一會回傳的錯誤是請求驗證失敗。
pub struct LinkService<S: LinkShortener> {
    shortener: S,
    target: LinkTarget,
}

impl<S: LinkShortener> LinkService<S> {
    pub fn new(shortener: S, target: LinkTarget) -> Self {
        Self {
            shortener,
            target: target.normalized(),
        }
    }

    pub fn target(&self) -> &LinkTarget {
        &self.target
    }

    pub fn fallback_link(&self, code: &str) -> String {
        links::fallback_link(&self.target, code)
    }

    pub async fn create_link(&self, request: &LinkRequest) -> Result<LinkResult> {
        let code = validate_code(request.code.as_deref())?;

        let fallback_link = self.fallback_link(code);
        let deep_link = links::deep_link(&self.target, code);

        tracing::debug!("Requesting short link for deep link: {}", deep_link);

        match self.shortener.shorten(&self.target, &deep_link).await {
            Ok(short_link) => {
                tracing::info!(code, "✅ Short link created: {}", short_link);
                Ok(LinkResult::shortened(short_link))
            }
            Err(e) => {
                tracing::error!(
                    code,
                    category = ?e.category(),
                    "❌ Error creating link, using fallback: {}",
                    e
                );
                Ok(LinkResult::fallback(fallback_link, e.provider_message()))
            }
        }
    }
}
