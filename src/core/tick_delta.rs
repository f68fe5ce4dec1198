use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};

/// Mantissas allowed for major-tick spacing.
pub const NICE_TICK_BASES: [f64; 3] = [1.0, 2.0, 5.0];

/// A "nice" major-tick spacing: `base * 10^magnitude`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickDelta {
    pub delta: f64,
    pub magnitude: i32,
}

impl TickDelta {
    /// Smallest spacing `base * 10^m` that is not below `target_delta`.
    fn fitting(target_delta: f64, base: f64) -> Self {
        let ratio = target_delta / base;
        let mut magnitude = 0_i32;
        while 10f64.powi(magnitude) < ratio {
            magnitude += 1;
        }
        while 10f64.powi(magnitude - 1) >= ratio {
            magnitude -= 1;
        }
        Self {
            delta: base * 10f64.powi(magnitude),
            magnitude,
        }
    }
}

/// Picks the tightest `{1, 2, 5} * 10^k` spacing covering `target_delta`.
///
/// `select_tick_delta(37.0)` yields `delta = 50, magnitude = 1`: the base-1
/// and base-2 candidates would need `100` and `200`.
pub fn select_tick_delta(target_delta: f64) -> ChartResult<TickDelta> {
    if !target_delta.is_finite() || target_delta <= 0.0 {
        return Err(ChartError::InvalidData(format!(
            "target tick delta must be finite and > 0, got {target_delta}"
        )));
    }

    let candidates: SmallVec<[TickDelta; 3]> = NICE_TICK_BASES
        .iter()
        .map(|&base| TickDelta::fitting(target_delta, base))
        .collect();

    candidates
        .into_iter()
        .min_by(|left, right| left.delta.total_cmp(&right.delta))
        .ok_or_else(|| ChartError::InvalidData("no tick delta candidates".to_owned()))
}

/// Returns `true` when `delta` is `1`, `2` or `5` times a power of ten.
#[must_use]
pub fn is_nice_delta(delta: f64) -> bool {
    if !delta.is_finite() || delta <= 0.0 {
        return false;
    }
    let magnitude = delta.log10().floor() as i32;
    let mantissa = delta / 10f64.powi(magnitude);
    NICE_TICK_BASES
        .iter()
        .chain(std::iter::once(&10.0))
        .any(|base| (mantissa - base).abs() <= 1e-9 * base)
}
