//! Workflow dispatch task.

use serde::Deserialize;

use crate::errors::TaskError;
use crate::ports::RepoOps;

/// Triggers a `workflow_dispatch` event for a GitHub Actions workflow.
///
/// The dispatch API acknowledges without returning a run identifier, so
/// this task produces no output.
#[derive(Debug, Clone, Deserialize)]
pub struct Dispatch {
    /// Target repository as `owner/name`.
    pub repository: String,
    /// Workflow file name or numeric id.
    pub workflow_id: String,
    /// Branch or tag to run the workflow on.
    pub r#ref: String,
    /// Workflow inputs, forwarded verbatim.
    #[serde(default)]
    pub inputs: serde_json::Map<String, serde_json::Value>,
}

impl Dispatch {
    /// Dispatches the workflow.
    pub async fn run(&self, ops: &dyn RepoOps) -> Result<(), TaskError> {
        ops.dispatch_workflow(&self.repository, &self.workflow_id, &self.r#ref, &self.inputs)
            .await?;
        tracing::info!(
            repository = %self.repository,
            workflow = %self.workflow_id,
            git_ref = %self.r#ref,
            "dispatched workflow"
        );
        Ok(())
    }
}
