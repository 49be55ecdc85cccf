//! Labels shown around a slider: the selected value, and the minimum and
//! maximum beneath the track.

use serde::Serialize;
use tracing::debug;

use crate::field::FieldSettings;
use crate::formatting::{self, Currency, FormatConfig};

/// Where the selected value sits relative to the slider track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopLeft,
    TopCenter,
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Position {
    pub fn parse(setting: &str) -> Option<Position> {
        match setting.trim() {
            "top-left" => Some(Position::TopLeft),
            "top-center" => Some(Position::TopCenter),
            "top-right" => Some(Position::TopRight),
            "bottom-left" => Some(Position::BottomLeft),
            "bottom-center" => Some(Position::BottomCenter),
            "bottom-right" => Some(Position::BottomRight),
            _ => None,
        }
    }

    pub fn is_bottom(&self) -> bool {
        matches!(self, Position::BottomLeft | Position::BottomCenter | Position::BottomRight)
    }

    /// Horizontal text alignment of the value.
    pub fn alignment(&self) -> &'static str {
        match self {
            Position::TopLeft | Position::BottomLeft => "left",
            Position::TopCenter | Position::BottomCenter => "center",
            Position::TopRight | Position::BottomRight => "right",
        }
    }
}

/// Position of the value label. Without a setting, fields that show a unit
/// put it top left; others keep the older bottom center placement.
pub fn value_position(settings: &FieldSettings) -> Position {
    let fallback = if settings.has_unit() {
        Position::TopLeft
    } else {
        Position::BottomCenter
    };

    match settings
        .value_position
        .trim()
    {
        "" => fallback,
        setting => Position::parse(setting).unwrap_or_else(|| {
            debug!(setting, "Unknown value position");
            fallback
        }),
    }
}

/// Whether the min and max are shown under the slider. Without a setting
/// they are shown whenever the field has a unit.
pub fn shows_range(settings: &FieldSettings) -> bool {
    match settings
        .show_slider_range
        .trim()
    {
        "" => settings.has_unit(),
        "0" | "false" => false,
        _ => true,
    }
}

/// Everything displayed around a slider, ready for a caller to place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SliderDisplay {
    pub value: String,
    pub min: Option<String>,
    pub max: Option<String>,
    pub position: Position,
    pub alignment: &'static str,
}

pub fn display(settings: &FieldSettings, currency: &Currency) -> SliderDisplay {
    let config = settings.format_config(currency);
    let state = settings.range_state(currency);

    let starting = state
        .starting()
        .to_string();
    let value = label(settings, &config, &starting);

    let (min, max) = if shows_range(settings) {
        (
            Some(bound_label(settings, &config, &settings.minnum)),
            Some(bound_label(settings, &config, &settings.maxnum)),
        )
    } else {
        (None, None)
    };

    let position = value_position(settings);

    SliderDisplay {
        value,
        min,
        max,
        position,
        alignment: position.alignment(),
    }
}

fn bound_label(settings: &FieldSettings, config: &FormatConfig, bound: &str) -> String {
    if settings
        .format_kind()
        .is_currency()
    {
        label(settings, config, &config.unformat(bound))
    } else {
        label(settings, config, bound)
    }
}

fn label(settings: &FieldSettings, config: &FormatConfig, value: &str) -> String {
    let formatted = formatting::format(value, config, &settings.format_kind());

    let mut result = String::with_capacity(
        settings
            .prepend
            .len()
            + formatted.len()
            + settings
                .append
                .len(),
    );
    result.push_str(&settings.prepend);
    result.push_str(&formatted);
    result.push_str(&settings.append);
    result
}
