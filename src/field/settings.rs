//! Stored configuration of a single form field, as the field store holds it.

use serde::Deserialize;
use tracing::debug;

use crate::formatting::{Currency, Format, FormatConfig};
use crate::range::{Bounds, RangeState};

/// Settings of one field. Numeric settings stay as the strings the store
/// holds so that the fallbacks for unusable values apply where they are
/// used. The `custom_*` settings override the global currency when present;
/// an explicitly empty one still overrides (an empty thousand separator
/// turns grouping off).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldSettings {
    pub format: Format,
    /// Legacy checkbox predating the format setting.
    pub is_currency: bool,
    pub use_global_currency: bool,
    pub custom_decimals: Option<String>,
    pub custom_decimal_separator: Option<String>,
    pub custom_thousand_separator: Option<String>,
    pub custom_symbol_left: Option<String>,
    pub custom_symbol_right: Option<String>,
    pub minnum: String,
    pub maxnum: String,
    pub step: String,
    pub value: String,
    pub default_value: String,
    pub prepend: String,
    pub append: String,
    pub show_slider_range: String,
    pub value_position: String,
}

impl Default for FieldSettings {
    fn default() -> Self {
        FieldSettings {
            format: Format::Plain,
            is_currency: false,
            use_global_currency: false,
            custom_decimals: None,
            custom_decimal_separator: None,
            custom_thousand_separator: None,
            custom_symbol_left: None,
            custom_symbol_right: None,
            minnum: "0".to_string(),
            maxnum: "100".to_string(),
            step: "1".to_string(),
            value: String::new(),
            default_value: String::new(),
            prepend: String::new(),
            append: String::new(),
            show_slider_range: String::new(),
            value_position: String::new(),
        }
    }
}

impl FieldSettings {
    /// The effective format, honouring the legacy currency checkbox.
    pub fn format_kind(&self) -> Format {
        if self.is_currency
            && !self
                .format
                .is_currency()
        {
            Format::Currency
        } else {
            self.format
                .clone()
        }
    }

    /// Build the configuration for one formatting call. Plain number
    /// formats carry no currency symbols unless the field sets its own.
    pub fn format_config(&self, currency: &Currency) -> FormatConfig {
        let mut config = FormatConfig::from(currency);
        let format = self.format_kind();

        if format == Format::Number {
            config
                .symbol_left
                .clear();
            config
                .symbol_right
                .clear();
        }

        if format == Format::Currency && self.use_global_currency {
            return config;
        }

        if let Some(decimals) = &self.custom_decimals {
            config.decimals = FormatConfig::decimals_from(decimals);
        }
        if let Some(separator) = &self.custom_decimal_separator {
            config.decimal_separator = separator.clone();
        }
        if let Some(separator) = &self.custom_thousand_separator {
            config.thousand_separator = separator.clone();
        }
        if let Some(symbol) = &self.custom_symbol_left {
            config.symbol_left = symbol.clone();
        }
        if let Some(symbol) = &self.custom_symbol_right {
            config.symbol_right = symbol.clone();
        }

        config
    }

    /// Put the custom format settings back to those of the global currency,
    /// as happens when the format of a field is changed.
    pub fn reset_format(&mut self, currency: &Currency) {
        let number = self.format_kind() == Format::Number;

        self.custom_decimals = Some(
            currency
                .decimals
                .to_string(),
        );
        self.custom_decimal_separator = Some(
            currency
                .decimal_separator
                .clone(),
        );
        self.custom_thousand_separator = Some(
            currency
                .thousand_separator
                .clone(),
        );
        self.custom_symbol_left = Some(if number {
            String::new()
        } else {
            currency
                .symbol_left
                .clone()
        });
        self.custom_symbol_right = Some(if number {
            String::new()
        } else {
            currency
                .symbol_right
                .clone()
        });
        self.use_global_currency = true;

        debug!(format = %self.format, "Format settings reset to global currency");
    }

    /// Numeric bounds of the field. Currency-like fields may have their
    /// bounds stored in display form, which is undone first.
    pub fn bounds(&self, config: &FormatConfig) -> Bounds {
        if self
            .format_kind()
            .is_currency()
        {
            Bounds::parse(
                &config.unformat(&self.minnum),
                &config.unformat(&self.maxnum),
                &self.step,
            )
        } else {
            Bounds::parse(&self.minnum, &self.maxnum, &self.step)
        }
    }

    pub fn range_state(&self, currency: &Currency) -> RangeState<'_> {
        let config = self.format_config(currency);

        RangeState {
            bounds: self.bounds(&config),
            value: &self.value,
            default: &self.default_value,
            format: self.format_kind(),
        }
    }

    /// Whether a unit is shown before or after the value.
    pub fn has_unit(&self) -> bool {
        !self
            .prepend
            .is_empty()
            || !self
                .append
                .is_empty()
    }
}

/// A settings document: the site-wide currency alongside one field.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub currency: Currency,
    pub field: FieldSettings,
}
