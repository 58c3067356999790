//! # TPVM Models
//!
//! The switch only ever answers in text. This module turns that text into
//! the few facts a deployment cares about:
//! * [`status`]: installed/running state from `show tpvm status`.
//! * [`address`]: assigned addresses from `show tpvm ip-address`.
//! * [`command`]: the administrative commands that are issued.

pub mod address;
pub mod command;
pub mod status;

pub use address::TpvmAddresses;
pub use command::TpvmCommand;
pub use status::TpvmStatus;
