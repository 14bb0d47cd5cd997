use crate::error::DeployHandlerError;
use async_trait::async_trait;

use rusoto_cloudfront::{
    CloudFront, CloudFrontClient, CreateInvalidationRequest, InvalidationBatch, Paths,
};
use rusoto_core::Region;

const ALL_PATHS: [&'static str; 1] = ["/*"];

pub struct CloudFrontDistributionClient {
    client: CloudFrontClient,
}

#[async_trait]
pub trait Invalidate {
    async fn invalidate_all(
        &self,
        distribution_id: &str,
        caller_reference: &str,
    ) -> Result<(), DeployHandlerError>;
}

#[async_trait]
impl Invalidate for CloudFrontDistributionClient {
    async fn invalidate_all(
        &self,
        distribution_id: &str,
        caller_reference: &str,
    ) -> Result<(), DeployHandlerError> {
        self.client
            .create_invalidation(CreateInvalidationRequest {
                distribution_id: distribution_id.to_string(),
                invalidation_batch: InvalidationBatch {
                    caller_reference: caller_reference.to_string(),
                    paths: Paths {
                        quantity: ALL_PATHS.len() as i64,
                        items: Some(ALL_PATHS.iter().map(|path| path.to_string()).collect()),
                    },
                },
            })
            .await?;
        Ok(())
    }
}

impl CloudFrontDistributionClient {
    pub fn new(region: Region) -> Self {
        Self::new_with_client(CloudFrontClient::new(region))
    }

    pub fn new_with_client(client: CloudFrontClient) -> Self {
        CloudFrontDistributionClient { client }
    }
}
