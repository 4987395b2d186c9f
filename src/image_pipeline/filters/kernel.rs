//! Gaussian kernel construction

use tracing::debug;

use crate::image_pipeline::common::error::{PipelineError, Result};

/// Normalized square Gaussian weight matrix of side `2 * radius + 1`,
/// stored row-major. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianKernel {
    radius: u32,
    sigma: f64,
    side: usize,
    weights: Vec<f64>,
}

impl GaussianKernel {
    /// Builds the outer product of the 1-D profile
    /// `h[i] = exp(-((i - radius) / sigma)^2 / 2)` with itself, divided by
    /// the sum of all entries.
    ///
    /// `sigma` must be finite and positive. Radius 0 gives the single weight
    /// 1.0 for any valid sigma.
    pub fn build(radius: u32, sigma: f64) -> Result<Self> {
        if !(sigma.is_finite() && sigma > 0.0) {
            return Err(PipelineError::InvalidParameter {
                name: "sigma",
                reason: format!("expected a finite value > 0, got {}", sigma),
            });
        }

        let too_large = || PipelineError::InvalidParameter {
            name: "radius",
            reason: format!("kernel of radius {} is too large", radius),
        };
        let side = (radius as usize)
            .checked_mul(2)
            .and_then(|d| d.checked_add(1))
            .ok_or_else(too_large)?;
        let len = side.checked_mul(side).ok_or_else(too_large)?;

        let mut weights = Vec::new();
        weights.try_reserve_exact(len).map_err(|_| too_large())?;

        let center = radius as f64;
        let profile: Vec<f64> = (0..side)
            .map(|i| {
                let d = (i as f64 - center) / sigma;
                (-(d * d) / 2.0).exp()
            })
            .collect();

        let mut sum = 0.0;
        for &hi in &profile {
            for &hj in &profile {
                let w = hi * hj;
                sum += w;
                weights.push(w);
            }
        }
        for w in &mut weights {
            *w /= sum;
        }

        debug!("Built Gaussian kernel: radius={}, sigma={}, side={}", radius, sigma, side);

        Ok(Self {
            radius,
            sigma,
            side,
            weights,
        })
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Number of taps along each axis
    pub fn side(&self) -> usize {
        self.side
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn row(&self, j: usize) -> &[f64] {
        &self.weights[j * self.side..(j + 1) * self.side]
    }

    pub fn weight(&self, row: usize, col: usize) -> f64 {
        self.weights[row * self.side + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one() {
        for radius in [0, 1, 2, 5, 12] {
            for sigma in [0.1, 0.5, 1.0, 3.0, 40.0] {
                let kernel = GaussianKernel::build(radius, sigma).unwrap();
                let sum: f64 = kernel.weights().iter().sum();
                assert!((sum - 1.0).abs() < 1e-9, "radius={} sigma={} sum={}", radius, sigma, sum);
                assert_eq!(kernel.weights().len(), kernel.side() * kernel.side());
            }
        }
    }

    #[test]
    fn test_radius_zero_is_identity() {
        for sigma in [0.01, 1.0, 1e6] {
            let kernel = GaussianKernel::build(0, sigma).unwrap();
            assert_eq!(kernel.side(), 1);
            assert_eq!(kernel.weights(), &[1.0]);
        }
    }

    #[test]
    fn test_kernel_is_symmetric_and_peaks_at_center() {
        let kernel = GaussianKernel::build(3, 1.5).unwrap();
        let side = kernel.side();
        for row in 0..side {
            for col in 0..side {
                assert_eq!(kernel.weight(row, col), kernel.weight(col, row));
                assert_eq!(kernel.weight(row, col), kernel.weight(side - 1 - row, col));
                assert!(kernel.weight(row, col) <= kernel.weight(3, 3));
            }
        }
        assert_eq!(kernel.row(3)[3], kernel.weight(3, 3));
    }

    #[test]
    fn test_non_positive_sigma_is_rejected() {
        for sigma in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = GaussianKernel::build(2, sigma);
            assert!(matches!(
                result,
                Err(PipelineError::InvalidParameter { name: "sigma", .. })
            ));
        }
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_unaddressable_radius_is_rejected() {
        let result = GaussianKernel::build(u32::MAX, 1.0);
        assert!(matches!(
            result,
            Err(PipelineError::InvalidParameter { name: "radius", .. })
        ));
    }
}
