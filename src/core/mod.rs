pub mod link_service;
pub mod links;

pub use crate::domain::model::{LinkRequest, LinkResult, LinkTarget};
pub use crate::domain::ports::{ConfigProvider, LinkShortener};
pub use crate::utils::error::Result;
