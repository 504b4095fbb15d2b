use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProjectileError {
    #[error("Invalid {label}: '{value}'. Expected a number.")]
    InvalidInput { label: &'static str, value: String },

    #[error("I/O failure: {0}")]
    Io(#[from] io::Error),

    #[error("Rendering failed: {0}")]
    Render(String),
}

impl ProjectileError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

/// Plotters errors are generic over the backend, so they are flattened to text.
pub(crate) fn render_error(err: impl std::fmt::Display) -> ProjectileError {
    ProjectileError::Render(err.to_string())
}

pub fn parse_f64(value: &str, label: &'static str) -> Result<f64, ProjectileError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| ProjectileError::InvalidInput {
            label,
            value: value.trim().to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::{ProjectileError, parse_f64};

    #[test]
    fn parses_padded_numbers() {
        assert_eq!(parse_f64(" 12.5\n", "velocity").unwrap(), 12.5);
        assert_eq!(parse_f64("-3", "angle").unwrap(), -3.0);
    }

    #[test]
    fn rejects_non_numeric_text() {
        let err = parse_f64("abc", "velocity").expect_err("parse should fail");

        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("Invalid velocity: 'abc'"));
    }

    #[test]
    fn io_errors_are_not_invalid_input() {
        let err = ProjectileError::from(std::io::Error::other("disk full"));
        assert!(!err.is_invalid_input());
    }
}
