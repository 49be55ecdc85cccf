//! Choosing the value a range field displays

use std::fmt;
use tracing::debug;

use crate::formatting::{decimal_places, display_number, parse_number, round_half_up, Format};

pub const DEFAULT_MIN: f64 = 0.0;
pub const DEFAULT_MAX: f64 = 100.0;
pub const DEFAULT_STEP: f64 = 1.0;

/// Numeric bounds of a range input. The step is always positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            step: DEFAULT_STEP,
        }
    }
}

impl Bounds {
    pub fn new(min: f64, max: f64, step: f64) -> Bounds {
        Bounds {
            min,
            max,
            step: usable_step(step),
        }
    }

    /// Read bounds from settings, substituting the defaults for any that
    /// aren't numbers.
    pub fn parse(min: &str, max: &str, step: &str) -> Bounds {
        let min = parse_number(min).unwrap_or_else(|| {
            debug!(min, "Minimum not numeric, using {}", DEFAULT_MIN);
            DEFAULT_MIN
        });
        let max = parse_number(max).unwrap_or_else(|| {
            debug!(max, "Maximum not numeric, using {}", DEFAULT_MAX);
            DEFAULT_MAX
        });
        let step = parse_number(step).unwrap_or(0.0);

        Bounds::new(min, max, step)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// The value halfway between min and max, so a slider's label isn't
    /// left alone at one end. A midpoint that is already a whole number on
    /// the step grid is used as is; otherwise it snaps to the nearest
    /// multiple of the step.
    pub fn midpoint(&self) -> f64 {
        let mid = (self.max - self.min) / 2.0 + self.min;
        let steps = mid / self.step;

        if mid.fract() == 0.0 && steps.fract() == 0.0 {
            return mid;
        }

        let snapped = steps.round() * self.step;

        // keep float noise from the multiplication out of the display
        round_half_up(snapped, decimal_places(self.step))
    }
}

fn usable_step(step: f64) -> f64 {
    if step.is_finite() && step > 0.0 {
        step
    } else {
        debug!(step, "Step not usable, using {}", DEFAULT_STEP);
        DEFAULT_STEP
    }
}

/// Where the displayed value of a range came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Starting<'i> {
    Explicit(&'i str),
    Default(&'i str),
    Midpoint(f64),
}

impl<'i> fmt::Display for Starting<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Starting::Explicit(value) => f.write_str(value),
            Starting::Default(value) => f.write_str(value),
            Starting::Midpoint(value) => f.write_str(&display_number(*value)),
        }
    }
}

/// Pick the value to display: the explicit value if there is one, else the
/// default, else the midpoint of the bounds. A numeric default outside the
/// bounds is not shown.
pub fn resolve<'i>(explicit: &'i str, default: &'i str, bounds: &Bounds) -> Starting<'i> {
    if !explicit.is_empty() {
        return Starting::Explicit(explicit);
    }

    let default = within_range(default, bounds);
    if !default.is_empty() {
        return Starting::Default(default);
    }

    Starting::Midpoint(bounds.midpoint())
}

/// The default value, or nothing if it is a number outside the bounds.
/// Defaults that aren't numbers (shortcodes, say) are left for the caller.
pub fn within_range<'i>(default: &'i str, bounds: &Bounds) -> &'i str {
    match parse_number(default) {
        Some(value) if !bounds.contains(value) => {
            debug!(default, "Default value out of range, ignoring");
            ""
        }
        _ => default,
    }
}

/// Per-field state of a range input, as read from its settings.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeState<'i> {
    pub bounds: Bounds,
    pub value: &'i str,
    pub default: &'i str,
    pub format: Format,
}

impl<'i> RangeState<'i> {
    pub fn is_currency(&self) -> bool {
        self.format
            .is_currency()
    }

    pub fn starting(&self) -> Starting<'i> {
        resolve(self.value, self.default, &self.bounds)
    }
}
