//! The seam between the launcher and the orchestration service
//!
//! [`WorkflowStarter`] is the single capability the launcher needs from the
//! outside world: start one workflow execution. Implementations live under
//! [`crate::providers::starter`].

use crate::race::LaunchParameters;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use snafu::prelude::*;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Start workflow execution failed: {message}"))]
    Dispatch { message: String },

    #[snafu(display("Invalid start request: {message}"))]
    InvalidRequest { message: String },

    #[snafu(display("Failed to encode workflow input: {source}"))]
    Encoding { source: serde_json::Error },

    #[snafu(display("Service returned no run id for workflow '{workflow_id}'"))]
    MissingRunId { workflow_id: String },
}

pub type Result<T> = std::result::Result<T, Error>;

/// One request to start a race workflow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartRequest {
    pub workflow_id: String,
    pub parameters: LaunchParameters,
}

/// Identifies a started workflow execution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowHandle {
    pub workflow_id: String,
    pub run_id: String,
}

#[async_trait]
pub trait WorkflowStarter: Send + Sync + std::fmt::Debug {
    async fn start_execution(&self, request: &StartRequest) -> Result<WorkflowHandle>;
}
