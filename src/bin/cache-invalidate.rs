use deploy_handlers::cloud_front_distribution_client::{
    CloudFrontDistributionClient, Invalidate,
};
use deploy_handlers::code_pipeline_job_client::{CodePipelineJobClient, Report};
use deploy_handlers::distribution_handler;
use deploy_handlers::event::PipelineEvent;
use lambda_runtime::{handler_fn, Context, Error};
use log::{error, info, LevelFilter};
use rusoto_core::Region;
use serde_json::Value;
use simple_logger::SimpleLogger;

#[tokio::main]
async fn main() -> Result<(), Error> {
    SimpleLogger::new().with_level(LevelFilter::Info).init()?;
    let distribution_client = CloudFrontDistributionClient::new(Region::default());
    let report_client = CodePipelineJobClient::new(Region::default());
    let distribution_ref = &distribution_client;
    let report_ref = &report_client;
    lambda_runtime::run(handler_fn(move |event: Value, _: Context| async move {
        on_event(distribution_ref, report_ref, event).await
    }))
    .await?;
    Ok(())
}

async fn on_event<D, R>(
    distribution_client: &D,
    report_client: &R,
    event: Value,
) -> Result<(), Error>
where
    D: Invalidate + Sync,
    R: Report + Sync,
{
    info!("Received event: {}", event);
    let event: PipelineEvent = serde_json::from_value(event)?;
    if let Err(error) = distribution_handler::handle(distribution_client, report_client, event).await
    {
        error!("Error: {}", error);
        return Err(Box::new(error));
    }
    Ok(())
}
