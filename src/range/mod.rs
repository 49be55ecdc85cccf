//! Range (slider) fields: the value they show and how it's laid out

mod resolver;
mod slider;

// Re-export all public symbols
pub use resolver::*;
pub use slider::*;
