//! Parsing and rounding of the plain numbers that field settings hold

/// Parse a setting as a number. Accepts an optional sign, digits with an
/// optional fractional part, and an optional exponent, surrounded by
/// whitespace. Spellings that `f64::from_str` would otherwise take, such as
/// "inf" or "NaN", are not numbers here.
pub fn parse_number(input: &str) -> Option<f64> {
    let re = regex!(r"^\s*[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?\s*$");

    if !re.is_match(input) {
        return None;
    }

    let value: f64 = input
        .trim()
        .parse()
        .ok()?;

    if value.is_finite() {
        Some(value)
    } else {
        None
    }
}

/// Round to the given number of decimal places, halves going towards
/// positive infinity. The shift is done through the decimal exponent rather
/// than by multiplying, so that 1.005 rounds to 1.01 and not 1.00.
pub fn round_half_up(value: f64, decimals: u32) -> f64 {
    let shifted: f64 = format!("{}e{}", value, decimals)
        .parse()
        .unwrap_or(value);

    // too many decimals to shift; there is nothing left to round
    if !shifted.is_finite() {
        return value;
    }

    let rounded = (shifted + 0.5).floor();

    let result: f64 = format!("{}e-{}", rounded, decimals)
        .parse()
        .unwrap_or(rounded);

    if !result.is_finite() {
        return value;
    }

    without_negative_zero(result)
}

/// Number of digits after the decimal point in the shortest representation
/// of the value.
pub fn decimal_places(value: f64) -> u32 {
    let text = value.to_string();
    match text.find('.') {
        Some(position) => (text.len() - position - 1) as u32,
        None => 0,
    }
}

/// Shortest representation of the value, never "-0".
pub fn display_number(value: f64) -> String {
    without_negative_zero(value).to_string()
}

fn without_negative_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}
