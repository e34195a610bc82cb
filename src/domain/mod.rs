//! Domain model of the service requirement intake workflow.

pub mod intake;
pub mod options;
pub mod types;
