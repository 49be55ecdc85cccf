//! Currency and number display formatting

use tracing::debug;

use crate::formatting::*;

/// Format a raw number for display: round it to the configured precision,
/// then decorate it with separators and symbols. Non currency-like formats
/// get the raw value back untouched, as does anything that isn't a number.
pub fn format(raw: &str, config: &FormatConfig, format: &Format) -> String {
    if !format.is_currency() {
        return raw.to_string();
    }

    match normalized(raw, config) {
        Some(total) => decorate(&total, config, format),
        None => raw.to_string(),
    }
}

/// Round the raw number to the configured precision and pad it to at least
/// two fractional digits, using the configured decimal separator.
///
/// With a positive decimal count halves round up; with zero decimals the
/// value is always rounded up to the next whole number, so that a whole
/// currency amount is never displayed lower than it is.
pub fn normalize(raw: &str, config: &FormatConfig, format: &Format) -> String {
    if !format.is_currency() {
        return raw.to_string();
    }

    normalized(raw, config).unwrap_or_else(|| raw.to_string())
}

fn normalized(raw: &str, config: &FormatConfig) -> Option<String> {
    let value = match parse_number(raw) {
        Some(value) => value,
        None => {
            debug!(raw, "Not a number, leaving unformatted");
            return None;
        }
    };

    let value = if config.decimals > 0 {
        round_half_up(value, config.decimals)
    } else {
        value.ceil()
    };

    Some(add_trailing_zeros(value, config))
}

/// Apply precision, grouping and symbols to an already normalized total.
/// This is display-only; running it twice over the same text is not
/// expected to give the same answer.
pub fn decorate(total: &str, config: &FormatConfig, format: &Format) -> String {
    if !format.is_currency() {
        return total.to_string();
    }

    let total = truncate_fraction(total, config);
    let total = add_thousands_separator(&total, config);

    let mut result = String::with_capacity(
        total.len()
            + config
                .symbol_left
                .len()
            + config
                .symbol_right
                .len()
            + 2 * config
                .symbol_padding
                .len(),
    );
    result.push_str(&config.symbol_left);
    result.push_str(&config.symbol_padding);
    result.push_str(&total);
    result.push_str(&config.symbol_padding);
    result.push_str(&config.symbol_right);
    result
}

fn add_trailing_zeros(value: f64, config: &FormatConfig) -> String {
    let mut price = display_number(value);

    match price.find('.') {
        None => price.push_str(".00"),
        Some(position) if price.len() - position - 1 < 2 => price.push('0'),
        Some(_) => {}
    }

    price.replacen('.', &config.decimal_separator, 1)
}

fn truncate_fraction(total: &str, config: &FormatConfig) -> String {
    let separator = config
        .decimal_separator
        .as_str();

    if separator.is_empty() {
        return total.to_string();
    }

    let parts: Vec<&str> = total
        .split(separator)
        .collect();

    let decimals = config.decimals as usize;

    if parts.len() != 2
        || parts[1]
            .chars()
            .count()
            <= decimals
    {
        return total.to_string();
    }

    if decimals == 0 {
        return parts[0].to_string();
    }

    let fraction: String = parts[1]
        .chars()
        .take(decimals)
        .collect();

    format!("{}{}{}", parts[0], separator, fraction)
}

fn add_thousands_separator(total: &str, config: &FormatConfig) -> String {
    let separator = config
        .thousand_separator
        .as_str();

    if separator.is_empty() {
        return total.to_string();
    }

    // only the whole part is grouped; the fraction is left alone
    let (whole, fraction) = match config
        .decimal_separator
        .as_str()
    {
        "" => (total, ""),
        decimal => match total.find(decimal) {
            Some(position) => total.split_at(position),
            None => (total, ""),
        },
    };

    let re = regex!(r"[0-9]{4,}");
    let grouped = re.replace_all(whole, |caps: &::regex::Captures| group_digits(&caps[0], separator));

    let mut result = grouped.into_owned();
    result.push_str(fraction);
    result
}

fn group_digits(digits: &str, separator: &str) -> String {
    let length = digits.len();
    let mut result = String::with_capacity(length + length / 3 * separator.len());

    for (i, c) in digits
        .chars()
        .enumerate()
    {
        if i > 0 && (length - i) % 3 == 0 {
            result.push_str(separator);
        }
        result.push(c);
    }

    result
}
