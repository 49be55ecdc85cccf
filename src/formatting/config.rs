//! Format settings: which kind of display a field asks for, the site-wide
//! currency, and the per-call formatting configuration derived from them.

use serde::{Deserialize, Deserializer};
use std::fmt;
use tracing::debug;

/// Decimal count used when the configured one can't be read as a number.
pub const DEFAULT_DECIMALS: u32 = 2;

/// The format setting of a field. Only the currency-like kinds change how
/// numbers are displayed; any other mask passes values through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Format {
    #[default]
    Plain,
    Currency,
    Number,
    Other(String),
}

impl Format {
    pub fn is_currency(&self) -> bool {
        matches!(self, Format::Currency | Format::Number)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Format::Plain => "",
            Format::Currency => "currency",
            Format::Number => "number",
            Format::Other(mask) => mask,
        }
    }
}

impl From<&str> for Format {
    fn from(setting: &str) -> Self {
        match setting.trim() {
            "" => Format::Plain,
            "currency" => Format::Currency,
            "number" => Format::Number,
            other => Format::Other(other.to_string()),
        }
    }
}

impl From<String> for Format {
    fn from(setting: String) -> Self {
        Format::from(setting.as_str())
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Global currency profile, the source of every setting a field doesn't
/// override.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Currency {
    pub name: String,
    pub symbol_left: String,
    pub symbol_right: String,
    pub symbol_padding: String,
    pub thousand_separator: String,
    pub decimal_separator: String,
    #[serde(deserialize_with = "decimals_setting")]
    pub decimals: u32,
}

impl Default for Currency {
    fn default() -> Self {
        Currency {
            name: "U.S. Dollar".to_string(),
            symbol_left: "$".to_string(),
            symbol_right: String::new(),
            symbol_padding: String::new(),
            thousand_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
            decimals: DEFAULT_DECIMALS,
        }
    }
}

/// Decimal counts arrive as numbers or as whatever was typed into a text
/// input; either way an unusable one falls back to DEFAULT_DECIMALS.
fn decimals_setting<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;

    Ok(match value {
        serde_json::Value::Number(number) => FormatConfig::decimals_from(&number.to_string()),
        serde_json::Value::String(text) => FormatConfig::decimals_from(&text),
        _ => FormatConfig::decimals_from(""),
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    pub decimals: u32,
    pub decimal_separator: String,
    pub thousand_separator: String,
    pub symbol_left: String,
    pub symbol_right: String,
    pub symbol_padding: String,
}

impl From<&Currency> for FormatConfig {
    fn from(currency: &Currency) -> Self {
        FormatConfig {
            decimals: currency.decimals,
            decimal_separator: currency
                .decimal_separator
                .clone(),
            thousand_separator: currency
                .thousand_separator
                .clone(),
            symbol_left: currency
                .symbol_left
                .clone(),
            symbol_right: currency
                .symbol_right
                .clone(),
            symbol_padding: currency
                .symbol_padding
                .clone(),
        }
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        FormatConfig::from(&Currency::default())
    }
}

impl FormatConfig {
    /// Read a decimal count as typed into a setting, falling back to
    /// DEFAULT_DECIMALS for anything that isn't a non-negative integer.
    pub fn decimals_from(setting: &str) -> u32 {
        match setting
            .trim()
            .parse::<u32>()
        {
            Ok(decimals) => decimals,
            Err(_) => {
                debug!(setting, "Decimal count not numeric, using {}", DEFAULT_DECIMALS);
                DEFAULT_DECIMALS
            }
        }
    }

    /// Undo display formatting on a stored number so it can be parsed:
    /// thousand separators are dropped and the decimal separator becomes a
    /// period.
    pub fn unformat(&self, text: &str) -> String {
        let mut result = text
            .trim()
            .to_string();

        if !self
            .thousand_separator
            .is_empty()
            && self.thousand_separator != self.decimal_separator
        {
            result = result.replace(&self.thousand_separator, "");
        }

        if !self
            .decimal_separator
            .is_empty()
            && self.decimal_separator != "."
        {
            result = result.replace(&self.decimal_separator, ".");
        }

        result
    }
}
