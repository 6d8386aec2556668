//! Race launcher
//!
//! [`RaceLauncher`] validates race parameters and hands them to a
//! [`WorkflowStarter`] exactly once. It keeps no state between launches and
//! never retries; retry and timeout behaviour belongs to the starter's SDK.

use crate::race::LaunchParameters;
use crate::starter::{StartRequest, WorkflowHandle, WorkflowStarter};
use snafu::prelude::*;
use std::sync::Arc;

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("Invalid launch parameters: {source}"))]
    InvalidParameters { source: crate::race::Error },

    #[snafu(display("Failed to dispatch race workflow: {source}"))]
    RemoteDispatch { source: crate::starter::Error },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Starts race workflows through an injected [`WorkflowStarter`]
///
/// # Examples
///
/// ```
/// use horserace::launcher::RaceLauncher;
/// use horserace::providers::starter::InMemoryStarter;
/// use std::sync::Arc;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let starter = Arc::new(InMemoryStarter::new());
/// let launcher = RaceLauncher::new(starter.clone());
///
/// let handle = launcher.launch(vec!["Alpha".into(), "Beta".into()], 3).await?;
/// assert_eq!(starter.call_count(), 1);
/// println!("Started {} ({})", handle.workflow_id, handle.run_id);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RaceLauncher {
    starter: Arc<dyn WorkflowStarter>,
    workflow_id: Option<String>,
}

impl RaceLauncher {
    #[must_use]
    pub fn new(starter: Arc<dyn WorkflowStarter>) -> Self {
        Self {
            starter,
            workflow_id: None,
        }
    }

    /// Use a fixed workflow id instead of generating one per launch
    ///
    /// SWF rejects a start request whose workflow id is already running in
    /// the domain, so reusing a launcher with a fixed id only works once the
    /// previous execution has closed.
    #[must_use]
    pub fn with_workflow_id(mut self, workflow_id: impl Into<String>) -> Self {
        self.workflow_id = Some(workflow_id.into());
        self
    }

    /// Validate `participants` and `laps`, then start one race workflow
    ///
    /// # Errors
    /// Returns [`Error::InvalidParameters`] without contacting the service if
    /// validation fails, or [`Error::RemoteDispatch`] if the start call fails.
    pub async fn launch(&self, participants: Vec<String>, laps: i64) -> Result<WorkflowHandle> {
        let params = LaunchParameters::new(participants, laps).context(InvalidParametersSnafu)?;
        self.dispatch(&params).await
    }

    /// Start one race workflow with already validated parameters
    ///
    /// # Errors
    /// Returns [`Error::RemoteDispatch`] if the start call fails.
    pub async fn dispatch(&self, params: &LaunchParameters) -> Result<WorkflowHandle> {
        let request = StartRequest {
            workflow_id: self.next_workflow_id(),
            parameters: params.clone(),
        };

        tracing::info!(
            workflow_id = %request.workflow_id,
            horses = params.participants().len(),
            laps = params.laps(),
            "Starting race workflow"
        );

        let handle = self
            .starter
            .start_execution(&request)
            .await
            .context(RemoteDispatchSnafu)?;

        tracing::info!(
            workflow_id = %handle.workflow_id,
            run_id = %handle.run_id,
            "Race workflow started"
        );

        Ok(handle)
    }

    fn next_workflow_id(&self) -> String {
        self.workflow_id
            .clone()
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
    }
}
