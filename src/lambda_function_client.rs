use crate::error::DeployHandlerError;
use async_trait::async_trait;

use rusoto_core::Region;
use rusoto_lambda::{Lambda, LambdaClient, UpdateFunctionCodeRequest};

pub struct LambdaFunctionClient {
    client: LambdaClient,
}

#[async_trait]
pub trait Deploy {
    async fn update_function_code(
        &self,
        function_name: &str,
        image_uri: &str,
    ) -> Result<(), DeployHandlerError>;
}

#[async_trait]
impl Deploy for LambdaFunctionClient {
    async fn update_function_code(
        &self,
        function_name: &str,
        image_uri: &str,
    ) -> Result<(), DeployHandlerError> {
        self.client
            .update_function_code(UpdateFunctionCodeRequest {
                function_name: function_name.to_string(),
                image_uri: Some(image_uri.to_string()),
                publish: Some(true),
                ..Default::default()
            })
            .await?;
        Ok(())
    }
}

impl LambdaFunctionClient {
    pub fn new(region: Region) -> Self {
        Self::new_with_client(LambdaClient::new(region))
    }

    pub fn new_with_client(client: LambdaClient) -> Self {
        LambdaFunctionClient { client }
    }
}

#[cfg(test)]
mod tests {
    use crate::lambda_function_client::{Deploy, LambdaFunctionClient};
    use rusoto_lambda::LambdaClient;
    use rusoto_mock::{
        MockCredentialsProvider, MockRequestDispatcher, MockResponseReader, ReadMockResponse,
    };

    #[tokio::test]
    async fn test_update_function_code() {
        let mock = LambdaClient::new_with(
            MockRequestDispatcher::default().with_body(&*MockResponseReader::read_response(
                "test_resources/valid",
                "update_function_code.json",
            )),
            MockCredentialsProvider,
            Default::default(),
        );

        let client = LambdaFunctionClient::new_with_client(mock);
        let result = client
            .update_function_code("f1", "123456789012.dkr.ecr.us-east-1.amazonaws.com/f1:latest")
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_update_function_code_error() {
        let mock = LambdaClient::new_with(
            MockRequestDispatcher::with_status(429).with_body(&*MockResponseReader::read_response(
                "test_resources/error",
                "update_function_code.json",
            )),
            MockCredentialsProvider,
            Default::default(),
        );

        let client = LambdaFunctionClient::new_with_client(mock);
        let result = client
            .update_function_code("f1", "123456789012.dkr.ecr.us-east-1.amazonaws.com/f1:latest")
            .await;

        assert!(result.is_err());
    }
}
