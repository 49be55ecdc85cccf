use std::{fmt, path::Path};

use owo_colors::OwoColorize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingError<'i> {
    pub problem: String,
    pub details: String,
    pub filename: &'i Path,
}

// Verbose detailed explanation
impl<'i> LoadingError<'i> {
    pub fn full_details(&self) -> String {
        let details = if self
            .details
            .is_empty()
        {
            String::new()
        } else {
            format!(
                "\n\n{:3} {} {}",
                ' ',
                '|'.bright_blue(),
                self.details
            )
        };

        format!(
            "{}: {}\n{}{}",
            "error".bright_red(),
            self.problem
                .bold(),
            self.filename
                .to_string_lossy(),
            details
        )
    }
}

// Concise version for internal use
impl<'i> fmt::Display for LoadingError<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self
            .details
            .is_empty()
        {
            write!(
                f,
                "error: {}: {}",
                self.filename
                    .display(),
                self.problem
            )
        } else {
            write!(
                f,
                "error: {}: {}: {}",
                self.filename
                    .display(),
                self.problem,
                self.details
            )
        }
    }
}
