//! Formatting of the numbers embedded in free text, such as a default value
//! that mixes literal amounts with shortcodes.

use std::iter;

use super::formatter;
use crate::formatting::*;

/// Format every standalone number in the text, leaving alone any number that
/// sits inside a bracketed shortcode. Offsets used to detect shortcodes are
/// those of the original text; replacements are never re-scanned.
pub fn scan_and_format(text: &str, config: &FormatConfig, format: &Format) -> String {
    if text.is_empty() || !format.is_currency() {
        return text.to_string();
    }

    let mut result = String::with_capacity(text.len());
    let mut last = 0;

    for (start, end) in find_numbers(text) {
        if within_shortcode(text, start) {
            continue;
        }

        result.push_str(&text[last..start]);
        result.push_str(&formatter::format(&text[start..end], config, format));
        last = end;
    }

    result.push_str(&text[last..]);
    result
}

/// Locate the isolated numbers in a text: a run of digits, optionally
/// followed by more digits after each '.' or ',', with neither a word
/// character nor a hyphen touching it on either side. When the longest run
/// is followed by a word character, shorter runs ending at an earlier
/// separator are tried, so "1.5a" still yields "1".
pub fn find_numbers(text: &str) -> Vec<(usize, usize)> {
    let bytes = text.as_bytes();
    let run = regex!(r"^[0-9]+(?:[.,][0-9]+)*");

    let mut found = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() || (i > 0 && is_word(bytes[i - 1])) {
            i += 1;
            continue;
        }

        let candidate = match run.find(&text[i..]) {
            Some(m) => m.as_str(),
            None => {
                i += 1;
                continue;
            }
        };

        let accepted = candidate
            .match_indices(['.', ','])
            .map(|(position, _)| position)
            .chain(iter::once(candidate.len()))
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .find(|&end| {
                !bytes
                    .get(i + end)
                    .is_some_and(|&b| is_word(b))
            });

        match accepted {
            Some(end) => {
                found.push((i, i + end));
                i += end;
            }
            None => i += 1,
        }
    }

    found
}

fn is_word(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'-'
}

/// A number is inside a shortcode if the nearest '[' before it is closed by
/// a ']' that comes after the number starts.
fn within_shortcode(text: &str, offset: usize) -> bool {
    let open = match text[..offset].rfind('[') {
        Some(open) => open,
        None => return false,
    };

    match text[open..].find(']') {
        Some(close) => offset < open + close,
        None => false,
    }
}
