//! Amazon Simple Workflow Service starter
//!
//! Credentials and region come from the ambient AWS configuration chain
//! (environment, shared config files, instance role) unless overridden in
//! [`SwfSettings`].

use crate::input::InputEncoding;
use crate::starter::{Error, Result, StartRequest, WorkflowHandle, WorkflowStarter};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_swf::error::DisplayErrorContext;
use aws_sdk_swf::types::{TaskList, WorkflowType};
use snafu::prelude::*;

/// Where and what to start on SWF
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwfSettings {
    pub domain: String,
    pub workflow_type: String,
    pub workflow_version: String,
    pub task_list: Option<String>,
    /// Seconds
    pub execution_start_to_close_timeout: Option<u64>,
    /// Seconds
    pub task_start_to_close_timeout: Option<u64>,
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
    pub input_encoding: InputEncoding,
}

#[derive(Debug, Clone)]
pub struct SwfStarter {
    client: aws_sdk_swf::Client,
    settings: SwfSettings,
}

impl SwfStarter {
    #[must_use]
    pub fn new(client: aws_sdk_swf::Client, settings: SwfSettings) -> Self {
        Self { client, settings }
    }

    /// Build a client from the ambient AWS configuration
    pub async fn from_env(settings: SwfSettings) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &settings.region {
            loader = loader.region(aws_config::Region::new(region.clone()));
        }
        if let Some(endpoint_url) = &settings.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }
        let sdk_config = loader.load().await;

        tracing::debug!(
            region = ?sdk_config.region(),
            domain = %settings.domain,
            "Configured SWF client"
        );

        Self::new(aws_sdk_swf::Client::new(&sdk_config), settings)
    }

    fn workflow_type(&self) -> Result<WorkflowType> {
        WorkflowType::builder()
            .name(&self.settings.workflow_type)
            .version(&self.settings.workflow_version)
            .build()
            .map_err(|e| Error::InvalidRequest {
                message: e.to_string(),
            })
    }

    fn task_list(&self) -> Result<Option<TaskList>> {
        self.settings
            .task_list
            .as_ref()
            .map(|name| {
                TaskList::builder()
                    .name(name)
                    .build()
                    .map_err(|e| Error::InvalidRequest {
                        message: e.to_string(),
                    })
            })
            .transpose()
    }
}

#[async_trait]
impl WorkflowStarter for SwfStarter {
    async fn start_execution(&self, request: &StartRequest) -> Result<WorkflowHandle> {
        let input = self
            .settings
            .input_encoding
            .encode(&request.parameters)
            .context(crate::starter::EncodingSnafu)?;

        tracing::debug!(
            workflow_id = %request.workflow_id,
            input = %input,
            "Sending StartWorkflowExecution"
        );

        let output = self
            .client
            .start_workflow_execution()
            .domain(&self.settings.domain)
            .workflow_id(&request.workflow_id)
            .workflow_type(self.workflow_type()?)
            .input(input)
            .set_task_list(self.task_list()?)
            .set_execution_start_to_close_timeout(
                self.settings
                    .execution_start_to_close_timeout
                    .map(|secs| secs.to_string()),
            )
            .set_task_start_to_close_timeout(
                self.settings
                    .task_start_to_close_timeout
                    .map(|secs| secs.to_string()),
            )
            .send()
            .await
            .map_err(|e| Error::Dispatch {
                message: DisplayErrorContext(&e).to_string(),
            })?;

        let run_id = output.run_id().context(crate::starter::MissingRunIdSnafu {
            workflow_id: request.workflow_id.clone(),
        })?;

        Ok(WorkflowHandle {
            workflow_id: request.workflow_id.clone(),
            run_id: run_id.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::race::LaunchParameters;
    use aws_sdk_swf::config::retry::RetryConfig;
    use aws_sdk_swf::config::{Credentials, Region};

    fn settings() -> SwfSettings {
        SwfSettings {
            domain: "Demo".to_string(),
            workflow_type: "RaceFlow.go".to_string(),
            workflow_version: "1.0".to_string(),
            task_list: Some("race".to_string()),
            execution_start_to_close_timeout: Some(3600),
            task_start_to_close_timeout: None,
            region: None,
            endpoint_url: None,
            input_encoding: InputEncoding::Flow,
        }
    }

    fn unreachable_client() -> aws_sdk_swf::Client {
        let config = aws_sdk_swf::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .credentials_provider(Credentials::new("test", "test", None, None, "test"))
            .endpoint_url("http://127.0.0.1:1")
            .retry_config(RetryConfig::disabled())
            .build();
        aws_sdk_swf::Client::from_conf(config)
    }

    #[test]
    fn test_workflow_type_uses_configured_name_and_version() {
        let starter = SwfStarter::new(unreachable_client(), settings());
        let workflow_type = starter.workflow_type().unwrap();
        assert_eq!(workflow_type.name(), "RaceFlow.go");
        assert_eq!(workflow_type.version(), "1.0");
    }

    #[test]
    fn test_task_list_is_optional() {
        let starter = SwfStarter::new(unreachable_client(), settings());
        assert_eq!(starter.task_list().unwrap().unwrap().name(), "race");

        let starter = SwfStarter::new(
            unreachable_client(),
            SwfSettings {
                task_list: None,
                ..settings()
            },
        );
        assert!(starter.task_list().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unreachable_service_surfaces_dispatch_error() {
        let starter = SwfStarter::new(unreachable_client(), settings());
        let request = StartRequest {
            workflow_id: "race-1".to_string(),
            parameters: LaunchParameters::defaults(),
        };

        let result = starter.start_execution(&request).await;
        assert!(
            matches!(result, Err(Error::Dispatch { .. })),
            "expected dispatch error, got {result:?}"
        );
    }
}
