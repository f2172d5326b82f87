//! Interpolation between two stops.
//!
//! Callers are expected to pass `x` within `[x0, x1]`; the stops table clamps
//! inputs outside the range to the end stops before interpolating, so these
//! functions never extrapolate in practice.

use crate::values::Color;
use crate::values::color::to_channel;

/// How values between two stops are blended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Interpolation {
    Linear,
    Exponential { base: f64 },
}

impl Interpolation {
    /// The interpolation law for `base`; a base of exactly 1 is linear.
    pub fn with_base(base: f64) -> Self {
        if base == 1.0 {
            Interpolation::Linear
        } else {
            Interpolation::Exponential { base }
        }
    }

    /// Fraction of the way from `x0` to `x1` that `x` lies, under this law.
    pub fn factor(&self, x: f64, x0: f64, x1: f64) -> f64 {
        let span = x1 - x0;
        if span == 0.0 {
            return 0.0;
        }
        let t = match *self {
            Interpolation::Linear => (x - x0) / span,
            Interpolation::Exponential { base } => exponential_factor(base, x - x0, span),
        };
        t.clamp(0.0, 1.0)
    }

    pub fn number(&self, x: f64, x0: f64, y0: f64, x1: f64, y1: f64) -> f64 {
        mix(y0, y1, self.factor(x, x0, x1))
    }

    /// Interpolate each RGBA channel independently.
    pub fn color(&self, x: f64, x0: f64, c0: Color, x1: f64, c1: Color) -> Color {
        let t = self.factor(x, x0, x1);
        let (from, to) = (c0.channels(), c1.channels());
        Color::from_channels(std::array::from_fn(|i| {
            to_channel(mix(f64::from(from[i]), f64::from(to[i]), t))
        }))
    }
}

/// `(base^offset - 1) / (base^span - 1)`, computed in log space.
///
/// When `base^span` overflows, both terms are scaled by `base^-span`:
/// `base^(offset - span) * (1 - base^-offset) / (1 - base^-span)`.
fn exponential_factor(base: f64, offset: f64, span: f64) -> f64 {
    let ln_base = base.ln();
    let whole = (span * ln_base).exp_m1();
    if whole.is_finite() {
        return (offset * ln_base).exp_m1() / whole;
    }
    let scale = ((offset - span) * ln_base).exp();
    scale * (-offset * ln_base).exp_m1() / (-span * ln_base).exp_m1()
}

fn mix(y0: f64, y1: f64, t: f64) -> f64 {
    y0 + t * (y1 - y0)
}

/// Linear interpolation. Returns `y0` when `x0 == x1`.
pub fn linear(x: f64, x0: f64, y0: f64, x1: f64, y1: f64) -> f64 {
    Interpolation::Linear.number(x, x0, y0, x1, y1)
}

/// Exponential interpolation with the given `base`; `base == 1` is linear.
pub fn exponential(x: f64, base: f64, x0: f64, y0: f64, x1: f64, y1: f64) -> f64 {
    Interpolation::with_base(base).number(x, x0, y0, x1, y1)
}
