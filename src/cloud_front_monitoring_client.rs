use crate::error::DeployHandlerError;
use async_trait::async_trait;

use rusoto_cloudfront::{
    CloudFront, CloudFrontClient, CreateMonitoringSubscriptionRequest,
    DeleteMonitoringSubscriptionRequest, MonitoringSubscription,
    RealtimeMetricsSubscriptionConfig,
};
use rusoto_core::Region;

const REALTIME_METRICS_ENABLED: &'static str = "Enabled";

pub struct CloudFrontMonitoringClient {
    client: CloudFrontClient,
}

#[async_trait]
pub trait Subscribe {
    async fn subscribe(&self, distribution_id: &str) -> Result<(), DeployHandlerError>;
    async fn unsubscribe(&self, distribution_id: &str) -> Result<(), DeployHandlerError>;
}

#[async_trait]
impl Subscribe for CloudFrontMonitoringClient {
    async fn subscribe(&self, distribution_id: &str) -> Result<(), DeployHandlerError> {
        self.client
            .create_monitoring_subscription(CreateMonitoringSubscriptionRequest {
                distribution_id: distribution_id.to_string(),
                monitoring_subscription: MonitoringSubscription {
                    realtime_metrics_subscription_config: Some(RealtimeMetricsSubscriptionConfig {
                        realtime_metrics_subscription_status: REALTIME_METRICS_ENABLED.to_string(),
                    }),
                },
            })
            .await?;
        Ok(())
    }

    async fn unsubscribe(&self, distribution_id: &str) -> Result<(), DeployHandlerError> {
        self.client
            .delete_monitoring_subscription(DeleteMonitoringSubscriptionRequest {
                distribution_id: distribution_id.to_string(),
            })
            .await?;
        Ok(())
    }
}

impl CloudFrontMonitoringClient {
    pub fn new(region: Region) -> Self {
        Self::new_with_client(CloudFrontClient::new(region))
    }

    pub fn new_with_client(client: CloudFrontClient) -> Self {
        CloudFrontMonitoringClient { client }
    }
}
