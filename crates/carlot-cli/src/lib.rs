//! CLI library components for the carlot toolkit.

pub mod logging;
pub mod pipeline;
pub mod types;
