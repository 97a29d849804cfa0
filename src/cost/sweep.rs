use serde::Serialize;

use crate::cost::calculator::compute_cps;
use crate::cost::models::PlatformCost;
use crate::error::CpsError;

/// Inclusive arithmetic range of search volumes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SweepRange {
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Check the range invariants: finite bounds, min < max, step > 0
    ///
    /// The minimum must itself be a valid search volume, so a range starting
    /// at or below zero is rejected here instead of failing midway through
    /// the series.
    pub fn validate(&self) -> Result<(), CpsError> {
        if !self.min.is_finite() || !self.max.is_finite() || !self.step.is_finite() {
            return Err(CpsError::InvalidRange(format!(
                "bounds must be finite, got min={} max={} step={}",
                self.min, self.max, self.step
            )));
        }
        if self.step <= 0.0 {
            return Err(CpsError::InvalidRange(format!(
                "step must be positive, got {}",
                self.step
            )));
        }
        if self.min >= self.max {
            return Err(CpsError::InvalidRange(format!(
                "min must be less than max, got min={} max={}",
                self.min, self.max
            )));
        }
        if self.min <= 0.0 {
            return Err(CpsError::InvalidRange(format!(
                "min must be a positive search volume, got {}",
                self.min
            )));
        }
        Ok(())
    }
}

/// One evaluated point of a sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepPoint {
    pub searches: f64,
    pub cps: f64,
}

/// Evaluate the CPS formula across a range of search volumes
///
/// Volumes are generated by index (`min + i * step`) rather than by repeated
/// addition, so accumulated float error cannot drop an endpoint that lands on
/// a step boundary. The output is strictly increasing in `searches`.
pub fn evaluate_range(
    platforms: &[PlatformCost],
    range: &SweepRange,
) -> Result<Vec<SweepPoint>, CpsError> {
    range.validate()?;

    let mut points = Vec::new();
    let mut index: u64 = 0;

    loop {
        let searches = range.min + index as f64 * range.step;
        if searches > range.max * (1.0 + 1e-12) {
            break;
        }

        let breakdown = compute_cps(platforms, searches)?;
        points.push(SweepPoint {
            searches,
            cps: breakdown.total,
        });
        index += 1;
    }

    Ok(points)
}
