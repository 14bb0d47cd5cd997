use crate::error::DeployHandlerError;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "String")]
pub enum RequestType {
    Create,
    Update,
    Delete,
    Unrecognized(String),
}

impl From<String> for RequestType {
    fn from(value: String) -> RequestType {
        match value.as_str() {
            "Create" => RequestType::Create,
            "Update" => RequestType::Update,
            "Delete" => RequestType::Delete,
            _ => RequestType::Unrecognized(value),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LifecycleEvent {
    pub request_type: RequestType,
    pub resource_properties: HashMap<String, String>,
}

impl LifecycleEvent {
    pub fn resource_property(&self, key: &'static str) -> Result<&str, DeployHandlerError> {
        self.resource_properties
            .get(key)
            .map(String::as_str)
            .ok_or(DeployHandlerError::MissingResourceProperty(key))
    }
}

#[derive(Debug, Deserialize)]
pub struct PipelineEvent {
    #[serde(rename = "CodePipeline.job")]
    pub job: PipelineJob,
}

#[derive(Debug, Deserialize)]
pub struct PipelineJob {
    pub id: String,
    pub data: PipelineJobData,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineJobData {
    pub action_configuration: ActionConfiguration,
}

#[derive(Debug, Deserialize)]
pub struct ActionConfiguration {
    pub configuration: ActionConfigurationProperties,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ActionConfigurationProperties {
    pub user_parameters: String,
}

#[derive(Debug, PartialEq, Deserialize)]
pub struct DeployParameters {
    #[serde(rename = "funcName")]
    pub func_name: String,
    #[serde(rename = "repoUri")]
    pub repo_uri: String,
}

#[derive(Debug, PartialEq, Deserialize)]
pub struct InvalidationParameters {
    #[serde(rename = "distributionId")]
    pub distribution_id: String,
}

#[cfg(test)]
mod tests {
    use crate::event::{DeployParameters, LifecycleEvent, PipelineEvent, RequestType};

    #[test]
    fn test_request_type_from_string() {
        assert_eq!(RequestType::from("Create".to_string()), RequestType::Create);
        assert_eq!(RequestType::from("Update".to_string()), RequestType::Update);
        assert_eq!(RequestType::from("Delete".to_string()), RequestType::Delete);
        assert_eq!(
            RequestType::from("Destroy".to_string()),
            RequestType::Unrecognized("Destroy".to_string())
        );
    }

    #[test]
    fn test_deserialize_lifecycle_event() {
        let event: LifecycleEvent = serde_json::from_str(
            r#"{
                "RequestType": "Create",
                "ResourceProperties": { "distributionId": "E123" }
            }"#,
        )
        .unwrap();

        assert_eq!(event.request_type, RequestType::Create);
        assert_eq!(event.resource_property("distributionId").unwrap(), "E123");
        assert!(event.resource_property("funcName").is_err());
    }

    #[test]
    fn test_deserialize_pipeline_event() {
        let event: PipelineEvent = serde_json::from_str(
            r#"{
                "CodePipeline.job": {
                    "id": "11111111-abcd-1111-abcd-111111abcdef",
                    "data": {
                        "actionConfiguration": {
                            "configuration": {
                                "FunctionName": "SlsDeploy",
                                "UserParameters": "{\"funcName\":\"f1\",\"repoUri\":\"uri\"}"
                            }
                        }
                    }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(event.job.id, "11111111-abcd-1111-abcd-111111abcdef");
        let parameters: DeployParameters =
            serde_json::from_str(&event.job.data.action_configuration.configuration.user_parameters)
                .unwrap();
        assert_eq!(
            parameters,
            DeployParameters {
                func_name: "f1".to_string(),
                repo_uri: "uri".to_string(),
            }
        );
    }

    #[test]
    fn test_pipeline_event_without_job_id_is_rejected() {
        let result = serde_json::from_str::<PipelineEvent>(
            r#"{
                "CodePipeline.job": {
                    "data": {
                        "actionConfiguration": {
                            "configuration": { "UserParameters": "{}" }
                        }
                    }
                }
            }"#,
        );
        assert!(result.is_err());
    }
}
