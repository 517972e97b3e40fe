//! Error adapter for converting [`CliError`] to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use regrid::TransposeError;

use crate::error::CliError;

/// Adapter giving a [`CliError`] a diagnostic code and help text.
pub struct ErrorAdapter<'a>(pub &'a CliError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl ErrorAdapter<'_> {
    fn code_str(&self) -> &'static str {
        match self.0 {
            CliError::Io(_) => "regrid::io",
            CliError::Config(_) => "regrid::config",
            CliError::SceneParse { .. } | CliError::SceneEncode(_) => "regrid::scene",
            CliError::Preview(_) => "regrid::preview",
            CliError::Transpose(err) => match err {
                TransposeError::Input { .. } => "regrid::input",
                TransposeError::SingleCell => "regrid::single_cell",
                TransposeError::DegenerateGrid { .. } => "regrid::degenerate_grid",
                TransposeError::Collision { .. } => "regrid::collision",
                TransposeError::InvalidTolerance { .. } => "regrid::tolerance",
                TransposeError::Item { .. } => "regrid::item",
            },
        }
    }

    fn help_str(&self) -> Option<&'static str> {
        let CliError::Transpose(err) = self.0 else {
            return None;
        };

        let help = match err {
            TransposeError::Input { .. } => "Select at least two shapes",
            TransposeError::SingleCell => {
                "All shapes snap to one cell; lower the tolerances or spread the shapes out"
            }
            TransposeError::DegenerateGrid { .. } => {
                "A single row or column needs at least two distinct lines to measure spacing"
            }
            TransposeError::Collision { .. } => {
                "Two shapes snap to the same cell; lower the tolerances or move one of them"
            }
            TransposeError::InvalidTolerance { .. } => {
                "Set horizontal_tolerance and vertical_tolerance to positive numbers"
            }
            TransposeError::Item { .. } => return None,
        };
        Some(help)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.code_str()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.help_str()
            .map(|help| Box::new(help) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collision_has_code_and_help() {
        let err = CliError::Transpose(TransposeError::Collision {
            row: 0,
            col: 1,
            first: 2,
            second: 3,
        });
        let adapter = ErrorAdapter(&err);

        assert_eq!(adapter.code_str(), "regrid::collision");
        assert!(adapter.help_str().is_some());
    }

    #[test]
    fn test_io_error_has_no_help() {
        let err = CliError::Io(std::io::Error::other("disk on fire"));
        let adapter = ErrorAdapter(&err);

        assert_eq!(adapter.code_str(), "regrid::io");
        assert!(adapter.help_str().is_none());
        assert!(adapter.to_string().contains("disk on fire"));
    }

    #[test]
    fn test_renders_with_graphical_handler() {
        let err = CliError::Transpose(TransposeError::SingleCell);
        let mut out = String::new();

        miette::GraphicalReportHandler::new()
            .render_report(&mut out, &ErrorAdapter(&err))
            .unwrap();

        assert!(out.contains("regrid::single_cell"));
    }
}
