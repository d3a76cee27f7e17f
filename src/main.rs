use clap::Parser;
use parent_link::core::{links, ConfigProvider};
use parent_link::utils::error::ErrorSeverity;
use parent_link::utils::{logger, validation::Validate};
use parent_link::{
    CliConfig, FirebaseShortener, LinkError, LinkRequest, LinkResult, LinkService, TomlConfig,
};

fn exit_with(e: LinkError) -> ! {
    tracing::error!(
        "❌ Failed to create link: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 4,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

async fn run(config: CliConfig) -> Result<LinkResult, LinkError> {
    let config = match &config.config_file {
        Some(path) => {
            tracing::debug!("Loading config file: {}", path);
            let file = TomlConfig::from_file(path)?;
            config.with_file_defaults(&file)
        }
        None => config,
    };

    config.validate()?;
    tracing::debug!(
        "Target: {} {} {}",
        config.domain_uri_prefix(),
        config.deep_link_base(),
        config.android_package_name()
    );

    let request = LinkRequest::new(config.code.clone());

    if config.offline {
        let code = parent_link::utils::validation::validate_code(request.code.as_deref())?;
        return Ok(LinkResult {
            link: links::fallback_link(&config.link_target(), code),
            error: None,
        });
    }

    let shortener = FirebaseShortener::from_config(&config)?;
    let service = LinkService::new(shortener, config.link_target());
    service.create_link(&request).await
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::info!("Starting parent-link CLI");

    match run(config).await {
        Ok(result) => {
            if let Some(error) = &result.error {
                tracing::warn!("⚠️ Provider unavailable, returning fallback link: {}", error);
            }
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Err(e) => exit_with(e),
    }

    Ok(())
}
