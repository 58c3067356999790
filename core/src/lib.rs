//! # EFA Deploy Core
//!
//! Use cases and infrastructure adapters.
//!
//! * **[`deployment`]**: the deployment use case ([`deployment::DeploymentService`]).
//! * **[`status`]**: read-only TPVM inspection.
//! * **[`tpvm`]**: typed wrapper over the switch CLI port.
//! * **[`wait`]**: settle strategies between steps.
//! * **[`system`]**: process-backed implementations of the outbound ports.

pub mod deployment;
pub mod status;
pub mod system;
pub mod tpvm;
pub mod wait;
