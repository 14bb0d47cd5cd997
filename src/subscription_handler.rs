use crate::cloud_front_monitoring_client::Subscribe;
use crate::error::DeployHandlerError;
use crate::event::{LifecycleEvent, RequestType};

pub async fn handle<C>(client: &C, event: LifecycleEvent) -> Result<(), DeployHandlerError>
where
    C: Subscribe + Sync,
{
    match event.request_type {
        RequestType::Create | RequestType::Update => {
            let distribution_id = event.resource_property("distributionId")?;
            client.subscribe(distribution_id).await
        }
        RequestType::Delete => {
            let distribution_id = event.resource_property("distributionId")?;
            client.unsubscribe(distribution_id).await
        }
        RequestType::Unrecognized(ref request_type) => {
            Err(DeployHandlerError::InvalidRequestType(request_type.clone()))
        }
    }
}
