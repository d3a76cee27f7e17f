// Lambda 與 CLI 共用的呼叫入口

use crate::core::link_service::LinkService;
use crate::domain::model::{LinkRequest, LinkResult};
use crate::domain::ports::LinkShortener;
use crate::utils::error::Result;
use serde::Deserialize;

/// 接受 `{"code": ".."}` 與 callable 包裝 `{"data": {"code": ".."}}` 兩種格式。
/// 最上層有 `code` 時優先採用，不論是否另有 `data`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum InvocationRequest {
    Direct { code: String },
    Envelope { data: LinkRequest },
    Bare(LinkRequest),
}

impl InvocationRequest {
    pub fn into_link_request(self) -> LinkRequest {
        match self {
            InvocationRequest::Direct { code } => LinkRequest::new(code),
            InvocationRequest::Envelope { data } => data,
            InvocationRequest::Bare(request) => request,
        }
    }
}

impl From<LinkRequest> for InvocationRequest {
    fn from(request: LinkRequest) -> Self {
        InvocationRequest::Bare(request)
    }
}

pub async fn handle_request<S: LinkShortener>(
    service: &LinkService<S>,
    request: InvocationRequest,
) -> Result<LinkResult> {
    let request = request.into_link_request();
    tracing::info!("Creating parent link");

    match service.create_link(&request).await {
        Ok(result) => Ok(result),
        Err(e) => {
            tracing::warn!("Rejected link request: {}", e);
            Err(e)
        }
    }
}
