//! # EFA Deploy Common
//!
//! Shared building blocks for the `efa-deploy` workspace.
//!
//! * **[`tpvm`]**: models for the text the switch returns about its TPVM.
//! * **[`config`]**: runtime configuration assembled by the CLI.
//! * **[`error`]**: typed errors crossing crate boundaries.
//! * **[`executor`]**, **[`scripts`]**, **[`reporter`]**: outbound ports.
//!   Implementations live in `efa-deploy-core` (processes) and
//!   `efa-deploy-cli` (terminal).

pub mod config;
pub mod error;
pub mod executor;
pub mod reporter;
pub mod scripts;
pub mod tpvm;

#[doc(hidden)]
pub use tracing as __tracing;

/// Target used for operator-facing success lines.
pub const SUCCESS_TARGET: &str = "efa_deploy::success";

/// Target used for raw terminal output that should bypass the log symbols.
pub const PRINT_TARGET: &str = "efa_deploy::print";

/// Target used for the switch CLI transcript written to the log file.
pub const TRANSCRIPT_TARGET: &str = "efa_deploy::transcript";

/// Logs a success line. Rendered with a distinct symbol on the terminal.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: $crate::SUCCESS_TARGET, $($arg)*)
    };
}
