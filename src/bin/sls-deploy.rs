use deploy_handlers::deploy_handler;
use deploy_handlers::event::LifecycleEvent;
use deploy_handlers::lambda_function_client::{Deploy, LambdaFunctionClient};
use lambda_runtime::{handler_fn, Context, Error};
use log::{error, info, LevelFilter};
use rusoto_core::Region;
use serde_json::Value;
use simple_logger::SimpleLogger;

#[tokio::main]
async fn main() -> Result<(), Error> {
    SimpleLogger::new().with_level(LevelFilter::Info).init()?;
    let client = LambdaFunctionClient::new(Region::default());
    let client_ref = &client;
    lambda_runtime::run(handler_fn(move |event: Value, _: Context| async move {
        on_event(client_ref, event).await
    }))
    .await?;
    Ok(())
}

async fn on_event<C>(client: &C, event: Value) -> Result<(), Error>
where
    C: Deploy + Sync,
{
    info!("Received event: {}", event);
    let event: LifecycleEvent = serde_json::from_value(event)?;
    if let Err(error) = deploy_handler::handle(client, event).await {
        error!("Error: {}", error);
        return Err(Box::new(error));
    }
    Ok(())
}
