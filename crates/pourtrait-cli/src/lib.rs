//! CLI library components for the pourtrait resolver.

pub mod logging;
pub mod pipeline;
