use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use parent_link::core::{ConfigProvider, LinkShortener};
use parent_link::utils::{logger, validation::Validate};
use parent_link::{
    handle_request, FirebaseShortener, InvocationRequest, LambdaConfig, LinkResult, LinkService,
};

async fn function_handler<S: LinkShortener>(
    service: &LinkService<S>,
    event: LambdaEvent<InvocationRequest>,
) -> Result<LinkResult, Error> {
    let (payload, context) = event.into_parts();
    tracing::debug!("Invocation {}", context.request_id);

    Ok(handle_request(service, payload).await?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let config = LambdaConfig::from_env()?;
    config.validate()?;

    // 冷啟動時建立一次，之後所有呼叫共用
    let shortener = FirebaseShortener::from_config(&config)?;
    let service = LinkService::new(shortener, config.link_target());

    tracing::info!("Starting parent link Lambda function");

    let service = &service;
    run(service_fn(move |event: LambdaEvent<InvocationRequest>| async move {
        function_handler(service, event).await
    }))
    .await
}
