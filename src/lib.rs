//! Display formatting for numeric form fields: resolving what value a field
//! shows, rendering it as currency or number, and formatting the standalone
//! numbers inside free text while leaving shortcodes alone.

#[macro_use]
mod regex;

pub mod builder;
pub mod error;
pub mod field;
pub mod formatting;
pub mod range;
