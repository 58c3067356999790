use async_trait::async_trait;

use crate::error::ExecutionError;

/// Runs a free-text administrative command on the switch.
///
/// Implementations return the command's output one line per element. An
/// administrative error reported by the switch is still `Ok`: callers read
/// it from the text. Only a transport failure is an [`ExecutionError`].
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    async fn execute(&self, command: &str) -> Result<Vec<String>, ExecutionError>;
}
