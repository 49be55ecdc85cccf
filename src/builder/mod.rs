//! Binding between the builder's inputs and the formatting core

mod preview;

// Re-export all public symbols
pub use preview::*;
