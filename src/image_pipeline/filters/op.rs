//! Filter selection and dispatch

use std::fmt;
use std::str::FromStr;

use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::filters::convolve::convolve;
use crate::image_pipeline::filters::kernel::GaussianKernel;
use crate::image_pipeline::filters::mirror::mirror;
use crate::image_pipeline::filters::negate::negate;
use crate::image_pipeline::filters::schedule::Schedule;
use crate::image_pipeline::ppm::types::RgbImage;

/// A filter as requested by the caller, before its parameters are checked
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterOp {
    Negate,
    Mirror,
    Blur { radius: u32, sigma: f64 },
}

impl FilterOp {
    pub fn name(&self) -> &'static str {
        match self {
            FilterOp::Negate => "negate",
            FilterOp::Mirror => "mirror",
            FilterOp::Blur { .. } => "blur",
        }
    }

    /// Checks parameters and builds whatever shared data the filter needs.
    pub fn prepare(&self) -> Result<Filter> {
        Ok(match *self {
            FilterOp::Negate => Filter::Negate,
            FilterOp::Mirror => Filter::Mirror,
            FilterOp::Blur { radius, sigma } => Filter::Blur(GaussianKernel::build(radius, sigma)?),
        })
    }
}

impl fmt::Display for FilterOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterOp::Blur { radius, sigma } => write!(f, "blur:{}:{}", radius, sigma),
            other => f.write_str(other.name()),
        }
    }
}

/// Parses `negate`, `mirror` or `blur:<radius>:<sigma>`.
impl FromStr for FilterOp {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split(':');
        let op = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some("negate"), None, None, None) => FilterOp::Negate,
            (Some("mirror"), None, None, None) => FilterOp::Mirror,
            (Some("blur"), Some(radius), Some(sigma), None) => FilterOp::Blur {
                radius: radius.parse::<u32>().map_err(|e| PipelineError::InvalidParameter {
                    name: "radius",
                    reason: format!("{:?}: {}", radius, e),
                })?,
                sigma: sigma.parse::<f64>().map_err(|e| PipelineError::InvalidParameter {
                    name: "sigma",
                    reason: format!("{:?}: {}", sigma, e),
                })?,
            },
            _ => {
                return Err(PipelineError::InvalidParameter {
                    name: "filter",
                    reason: format!("unknown filter {:?}, expected negate, mirror or blur:<radius>:<sigma>", s),
                });
            }
        };
        Ok(op)
    }
}

/// A validated filter ready to run
#[derive(Debug, Clone)]
pub enum Filter {
    Negate,
    Mirror,
    Blur(GaussianKernel),
}

impl Filter {
    pub fn name(&self) -> &'static str {
        match self {
            Filter::Negate => "negate",
            Filter::Mirror => "mirror",
            Filter::Blur(_) => "blur",
        }
    }

    pub fn apply(&self, image: RgbImage, schedule: Schedule) -> RgbImage {
        match self {
            Filter::Negate => negate(&image, schedule),
            Filter::Mirror => mirror(image, schedule),
            Filter::Blur(kernel) => convolve(&image, kernel, schedule),
        }
    }
}
