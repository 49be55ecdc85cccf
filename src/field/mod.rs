//! Field settings, and loading them from a settings document

use std::path::Path;
use tracing::debug;

use crate::error::LoadingError;

mod settings;

// Re-export all public symbols
pub use settings::*;

/// Read a file and return an owned String. Ownership goes back to the caller
/// so that errors from parse() below can borrow the filename.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Parse a JSON settings document. Anything the document leaves out takes
/// its default.
pub fn parse<'i>(filename: &'i Path, content: &str) -> Result<Settings, LoadingError<'i>> {
    match serde_json::from_str::<Settings>(content) {
        Ok(settings) => {
            debug!(format = %settings.field.format, "Loaded field settings");
            Ok(settings)
        }
        Err(error) => Err(LoadingError {
            problem: "Invalid settings".to_string(),
            details: error.to_string(),
            filename,
        }),
    }
}
