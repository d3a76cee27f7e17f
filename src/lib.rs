pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod handler;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::firebase::FirebaseShortener;
pub use config::{lambda::LambdaConfig, toml_config::TomlConfig};
pub use core::link_service::LinkService;
pub use domain::model::{LinkRequest, LinkResult, LinkTarget};
pub use handler::{handle_request, InvocationRequest};
pub use utils::error::{LinkError, Result};
