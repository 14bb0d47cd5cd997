use deploy_handlers::code_pipeline_job_client::{CodePipelineJobClient, Report};
use deploy_handlers::event::PipelineEvent;
use deploy_handlers::lambda_function_client::{Deploy, LambdaFunctionClient};
use deploy_handlers::pipeline_deploy_handler;
use lambda_runtime::{handler_fn, Context, Error};
use log::{error, info, LevelFilter};
use rusoto_core::Region;
use serde_json::Value;
use simple_logger::SimpleLogger;

#[tokio::main]
async fn main() -> Result<(), Error> {
    SimpleLogger::new().with_level(LevelFilter::Info).init()?;
    let deploy_client = LambdaFunctionClient::new(Region::default());
    let report_client = CodePipelineJobClient::new(Region::default());
    let deploy_ref = &deploy_client;
    let report_ref = &report_client;
    lambda_runtime::run(handler_fn(move |event: Value, _: Context| async move {
        on_event(deploy_ref, report_ref, event).await
    }))
    .await?;
    Ok(())
}

async fn on_event<D, R>(deploy_client: &D, report_client: &R, event: Value) -> Result<(), Error>
where
    D: Deploy + Sync,
    R: Report + Sync,
{
    info!("Received event: {}", event);
    let event: PipelineEvent = serde_json::from_value(event)?;
    if let Err(error) = pipeline_deploy_handler::handle(deploy_client, report_client, event).await {
        error!("Error: {}", error);
        return Err(Box::new(error));
    }
    Ok(())
}
