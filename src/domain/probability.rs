//! Normal-distribution probability model.
//!
//! The projection provider supplies a projected mean and standard deviation
//! per prop; these helpers turn that into P(outcome <= line) and its
//! complement. The CDF uses a rational approximation of the error function
//! (Abramowitz & Stegun 7.1.26, maximum absolute error ~1.5e-7), so no
//! statistics crate is needed.

use serde::Deserialize;

const A1: f64 = 0.254_829_592;
const A2: f64 = -0.284_496_736;
const A3: f64 = 1.421_413_741;
const A4: f64 = -1.453_152_027;
const A5: f64 = 1.061_405_429;
const P: f64 = 0.327_591_1;

/// Error function approximation via Horner's method.
fn erf(x: f64) -> f64 {
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();
    let t = 1.0 / (1.0 + P * x);
    let poly = t * (A1 + t * (A2 + t * (A3 + t * (A4 + t * A5))));
    sign * (1.0 - poly * (-x * x).exp())
}

/// Standard normal CDF: P(Z <= x) for Z ~ N(0, 1).
#[must_use]
pub fn standard_normal_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf(x / std::f64::consts::SQRT_2))
}

/// Normal CDF for an arbitrary mean and standard deviation.
///
/// A non-positive standard deviation denotes a point mass at `mean`: the
/// result steps from 0 to 1 there.
#[must_use]
pub fn normal_cdf(x: f64, mean: f64, std_dev: f64) -> f64 {
    if std_dev <= 0.0 {
        if x < mean {
            0.0
        } else {
            1.0
        }
    } else {
        standard_normal_cdf((x - mean) / std_dev)
    }
}

/// A projected outcome distribution for a prop, as delivered by the
/// projection provider's JSON payload.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Projection {
    /// Projected mean outcome.
    #[serde(alias = "projectedMean")]
    pub mean: f64,
    /// Projected standard deviation.
    #[serde(alias = "projectedStdDev")]
    pub std_dev: f64,
}

impl Projection {
    /// Create a projection from a mean and standard deviation.
    #[must_use]
    pub const fn new(mean: f64, std_dev: f64) -> Self {
        Self { mean, std_dev }
    }

    /// P(outcome <= line).
    #[must_use]
    pub fn prob_under(&self, line: f64) -> f64 {
        normal_cdf(line, self.mean, self.std_dev)
    }

    /// P(outcome > line).
    #[must_use]
    pub fn prob_over(&self, line: f64) -> f64 {
        1.0 - self.prob_under(line)
    }
}
