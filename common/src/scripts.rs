use std::path::Path;

use async_trait::async_trait;

use crate::error::ExternalCommandError;

/// Runs an external executable to completion.
///
/// A nonzero exit is an error; the deployment does not continue past it.
#[async_trait]
pub trait ScriptRunner: Send + Sync {
    async fn run(&self, script: &Path, args: &[&str]) -> Result<(), ExternalCommandError>;
}
