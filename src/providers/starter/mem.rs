use crate::starter::{Error, Result, StartRequest, WorkflowHandle, WorkflowStarter};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Starter that records requests instead of contacting a service
///
/// Every call is recorded, including calls that are answered with the
/// configured failure.
#[derive(Debug, Default)]
pub struct InMemoryStarter {
    requests: Arc<Mutex<Vec<StartRequest>>>,
    failure: Option<String>,
}

impl InMemoryStarter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A starter whose every call fails with `message`
    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            failure: Some(message.into()),
        }
    }

    /// Requests received so far, in call order
    #[must_use]
    pub fn requests(&self) -> Vec<StartRequest> {
        self.requests
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn call_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .len()
    }
}

#[async_trait]
impl WorkflowStarter for InMemoryStarter {
    async fn start_execution(&self, request: &StartRequest) -> Result<WorkflowHandle> {
        self.requests
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(request.clone());

        if let Some(message) = &self.failure {
            return Err(Error::Dispatch {
                message: message.clone(),
            });
        }

        Ok(WorkflowHandle {
            workflow_id: request.workflow_id.clone(),
            run_id: uuid::Uuid::new_v4().to_string(),
        })
    }
}
