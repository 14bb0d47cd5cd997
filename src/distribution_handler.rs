use crate::cloud_front_distribution_client::Invalidate;
use crate::code_pipeline_job_client::{FailureType, Report};
use crate::error::DeployHandlerError;
use crate::event::{InvalidationParameters, PipelineEvent};

pub async fn handle<D, R>(
    distribution_client: &D,
    report_client: &R,
    event: PipelineEvent,
) -> Result<(), DeployHandlerError>
where
    D: Invalidate + Sync,
    R: Report + Sync,
{
    let job_id = event.job.id;
    let user_parameters = event.job.data.action_configuration.configuration.user_parameters;

    let parameters = match serde_json::from_str::<InvalidationParameters>(&user_parameters) {
        Ok(parameters) => parameters,
        Err(error) => {
            return report_client
                .report_failure(&job_id, FailureType::ConfigurationError, &error.to_string())
                .await;
        }
    };

    // The job id doubles as the invalidation's caller reference.
    match distribution_client
        .invalidate_all(&parameters.distribution_id, &job_id)
        .await
    {
        Ok(()) => report_client.report_success(&job_id).await,
        Err(error) => {
            report_client
                .report_failure(&job_id, FailureType::JobFailed, &error.to_string())
                .await
        }
    }
}
