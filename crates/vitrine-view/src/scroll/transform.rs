//! Atomic: breakpoint tables mapping scroll progress to visual values

use std::cmp::Ordering;

use vitrine_core::{Error, Result};

use super::timing::lerp;

/// One control point of a piecewise-linear mapping
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    pub input: f64,
    pub output: f64,
}

/// A named output (opacity, scale, blur, parallax offset, ...) defined by
/// breakpoints sorted by input
///
/// Evaluation interpolates linearly between the two breakpoints around the
/// input and clamps to the first/last output outside the covered domain.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformChannel {
    name: String,
    breakpoints: Vec<Breakpoint>,
}

impl TransformChannel {
    /// Build a channel from parallel domain/range lists
    pub fn new(name: impl Into<String>, domain: &[f64], range: &[f64]) -> Result<Self> {
        let name = name.into();

        if domain.is_empty() {
            return Err(Error::InvalidChannel(format!("'{}' has no breakpoints", name)));
        }
        if domain.len() != range.len() {
            return Err(Error::InvalidChannel(format!(
                "'{}' has {} domain values but {} range values",
                name,
                domain.len(),
                range.len()
            )));
        }
        if domain.iter().chain(range).any(|v| !v.is_finite()) {
            return Err(Error::InvalidChannel(format!(
                "'{}' has a non-finite breakpoint",
                name
            )));
        }

        let mut breakpoints: Vec<Breakpoint> = domain
            .iter()
            .zip(range)
            .map(|(&input, &output)| Breakpoint { input, output })
            .collect();
        // Stable, so duplicate inputs keep their declared order
        breakpoints.sort_by(|a, b| a.input.total_cmp(&b.input));

        Ok(Self { name, breakpoints })
    }

    /// Two-point channel: `from` at `start`, `to` at `end`
    pub fn linear(
        name: impl Into<String>,
        (start, end): (f64, f64),
        (from, to): (f64, f64),
    ) -> Result<Self> {
        Self::new(name, &[start, end], &[from, to])
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn breakpoints(&self) -> &[Breakpoint] {
        &self.breakpoints
    }

    /// Evaluate the channel at `x`
    pub fn evaluate(&self, x: f64) -> f64 {
        // Non-empty by construction
        let first = self.breakpoints[0];
        let last = self.breakpoints[self.breakpoints.len() - 1];

        if x.is_nan() || x <= first.input {
            return first.output;
        }
        if x >= last.input {
            return last.output;
        }

        let upper = self
            .breakpoints
            .partition_point(|bp| bp.input.total_cmp(&x) != Ordering::Greater);
        let lo = self.breakpoints[upper - 1];
        let hi = self.breakpoints[upper];

        // lo.input <= x < hi.input, so the span is positive
        lerp(lo.output, hi.output, (x - lo.input) / (hi.input - lo.input))
    }
}
