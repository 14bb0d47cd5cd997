use crate::error::DeployHandlerError;
use crate::event::{LifecycleEvent, RequestType};
use crate::lambda_function_client::Deploy;

pub async fn handle<C>(client: &C, event: LifecycleEvent) -> Result<(), DeployHandlerError>
where
    C: Deploy + Sync,
{
    match event.request_type {
        RequestType::Create | RequestType::Update => {
            let function_name = event.resource_property("funcName")?;
            let image_uri = event.resource_property("repoUri")?;
            client.update_function_code(function_name, image_uri).await
        }
        // Todo: decide what cleanup, if any, a Delete should perform
        RequestType::Delete => Ok(()),
        RequestType::Unrecognized(ref request_type) => {
            Err(DeployHandlerError::InvalidRequestType(request_type.clone()))
        }
    }
}
