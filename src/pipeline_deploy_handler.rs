use crate::code_pipeline_job_client::{FailureType, Report};
use crate::error::DeployHandlerError;
use crate::event::{DeployParameters, PipelineEvent};
use crate::lambda_function_client::Deploy;

pub async fn handle<D, R>(
    deploy_client: &D,
    report_client: &R,
    event: PipelineEvent,
) -> Result<(), DeployHandlerError>
where
    D: Deploy + Sync,
    R: Report + Sync,
{
    let job_id = event.job.id;
    let user_parameters = event.job.data.action_configuration.configuration.user_parameters;

    let parameters = match serde_json::from_str::<DeployParameters>(&user_parameters) {
        Ok(parameters) => parameters,
        Err(error) => {
            return report_client
                .report_failure(&job_id, FailureType::ConfigurationError, &error.to_string())
                .await;
        }
    };

    match deploy_client
        .update_function_code(&parameters.func_name, &parameters.repo_uri)
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
