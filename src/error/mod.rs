// Errors surfaced when reading settings from outside the formatting core

mod display;

// Re-export all public symbols
pub use display::*;
