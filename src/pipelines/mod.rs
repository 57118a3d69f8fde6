//! Pipelines.
//!
//! Various pipelines are implemented here, and the module
//! provides a light [pipeline::Pipeline] trait that enables easy and flexible pipeline creation.
pub mod generate;
#[allow(clippy::module_inception)]
pub mod pipeline;
pub mod prepare;

pub use generate::{DocumentExamples, GenerateExamples, GenerateStats};
pub use pipeline::Pipeline;
pub use prepare::{Prepare, PrepareStats, PreparedDocument};
