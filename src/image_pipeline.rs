//! Image processing pipeline module
//!
//! This module provides a structured approach to PPM filtering, with separate
//! modules for the codec, the parallel filter engine, and run orchestration.

pub mod ppm;
pub mod filters;
pub mod conversions;
pub mod common;

pub use common::{
    PipelineError,
    PipelineTimings,
    Result,
};

pub use ppm::{
    Rgb,
    RgbImage,
    PpmReader,
    PpmWriter,
    BinaryPpmReader,
    BinaryPpmWriter,
};

pub use filters::{
    convolve,
    gaussian_blur,
    mirror,
    negate,
    Filter,
    FilterOp,
    GaussianKernel,
    Schedule,
};

pub use conversions::{
    FilterPipeline,
    PipelineConfig,
    PipelineConfigBuilder,
};
