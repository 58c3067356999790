//! Process-backed implementations of the outbound ports.

mod scripts;
mod switch_cli;

pub use scripts::ProcessScriptRunner;
pub use switch_cli::SwitchCli;
