//! Parallel filter engine
//!
//! Negate is a pointwise map, mirror reverses whole rows in place, and blur
//! is a Gaussian stencil with clamped borders. All of them run on the
//! current rayon pool and return only once every output pixel is written.

pub mod convolve;
pub mod kernel;
pub mod mirror;
pub mod negate;
pub mod op;
pub mod schedule;

#[cfg(test)]
pub(crate) mod test_support;

pub use convolve::{convolve, gaussian_blur};
pub use kernel::GaussianKernel;
pub use mirror::mirror;
pub use negate::negate;
pub use op::{Filter, FilterOp};
pub use schedule::Schedule;
