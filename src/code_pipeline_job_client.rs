use crate::error::DeployHandlerError;
use async_trait::async_trait;

use rusoto_codepipeline::{
    CodePipeline, CodePipelineClient, FailureDetails, PutJobFailureResultInput,
    PutJobSuccessResultInput,
};
use rusoto_core::Region;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FailureType {
    ConfigurationError,
    JobFailed,
}

impl FailureType {
    fn as_str(&self) -> &'static str {
        match *self {
            FailureType::ConfigurationError => "ConfigurationError",
            FailureType::JobFailed => "JobFailed",
        }
    }
}

pub struct CodePipelineJobClient {
    client: CodePipelineClient,
}

#[async_trait]
pub trait Report {
    async fn report_success(&self, job_id: &str) -> Result<(), DeployHandlerError>;
    async fn report_failure(
        &self,
        job_id: &str,
        failure_type: FailureType,
        message: &str,
    ) -> Result<(), DeployHandlerError>;
}

#[async_trait]
impl Report for CodePipelineJobClient {
    async fn report_success(&self, job_id: &str) -> Result<(), DeployHandlerError> {
        self.client
            .put_job_success_result(PutJobSuccessResultInput {
                job_id: job_id.to_string(),
                ..Default::default()
            })
            .await?;
        Ok(())
    }

    async fn report_failure(
        &self,
        job_id: &str,
        failure_type: FailureType,
        message: &str,
    ) -> Result<(), DeployHandlerError> {
        self.client
            .put_job_failure_result(PutJobFailureResultInput {
                job_id: job_id.to_string(),
                failure_details: FailureDetails {
                    type_: failure_type.as_str().to_string(),
                    message: message.to_string(),
                    external_execution_id: None,
                },
            })
            .await?;
        Ok(())
    }
}

impl CodePipelineJobClient {
    pub fn new(region: Region) -> Self {
        Self::new_with_client(CodePipelineClient::new(region))
    }

    pub fn new_with_client(client: CodePipelineClient) -> Self {
        CodePipelineJobClient { client }
    }
}

#[cfg(test)]
mod tests {
    use crate::code_pipeline_job_client::{CodePipelineJobClient, FailureType, Report};
    use rusoto_codepipeline::CodePipelineClient;
    use rusoto_mock::{
        MockCredentialsProvider, MockRequestDispatcher, MockResponseReader, ReadMockResponse,
    };

    #[tokio::test]
    async fn test_report_success() {
        let mock = CodePipelineClient::new_with(
            MockRequestDispatcher::default(),
            MockCredentialsProvider,
            Default::default(),
        );

        let client = CodePipelineJobClient::new_with_client(mock);
        let result = client
            .report_success("11111111-abcd-1111-abcd-111111abcdef")
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_report_failure() {
        let mock = CodePipelineClient::new_with(
            MockRequestDispatcher::default(),
            MockCredentialsProvider,
            Default::default(),
        );

        let client = CodePipelineJobClient::new_with_client(mock);
        let result = client
            .report_failure(
                "11111111-abcd-1111-abcd-111111abcdef",
                FailureType::JobFailed,
                "update failed",
            )
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_report_success_error() {
        let mock = CodePipelineClient::new_with(
            MockRequestDispatcher::with_status(400).with_body(&*MockResponseReader::read_response(
                "test_resources/error",
                "put_job_result.json",
            )),
            MockCredentialsProvider,
            Default::default(),
        );

        let client = CodePipelineJobClient::new_with_client(mock);
        let result = client
            .report_success("11111111-abcd-1111-abcd-111111abcdef")
            .await;

        assert!(result.is_err());
    }
}
