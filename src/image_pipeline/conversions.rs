//! Pipeline conversions module
//!
//! Orchestrates decoding, filtering and encoding of PPM images.

mod filter_pipeline;
pub mod types;


pub use filter_pipeline::FilterPipeline;
pub use types::{PipelineConfig, PipelineConfigBuilder};
