//! Currency and number formatting of field values

mod config;
mod formatter;
mod number;
mod scanner;

// Re-export all public symbols
pub use config::*;
pub use formatter::*;
pub use number::*;
pub use scanner::*;
