#![deny(missing_docs)]

//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the crate.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors (unreadable input, unwritable sink).
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// A remote document could not be fetched. Carries the URL for context.
    #[from(ignore)]
    #[display("Fetch Error: {_0}")]
    Fetch(String),

    /// The input could not be deserialized into an API description.
    #[from(ignore)]
    #[display("Parse Error: {_0}")]
    Parse(String),

    /// A required top-level field the traversal assumes is missing.
    #[from(ignore)]
    #[display("Structure Error: {_0}")]
    Structure(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
///
/// We implement this manually (instead of `derive(Error)`) because the `String`
/// variants do not implement `std::error::Error`, causing auto-derived
/// `source()` implementations to fail compilation.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_io_conversion() {
        let io_err = Error::new(ErrorKind::Other, "test");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
    }

    #[test]
    fn test_string_conversion() {
        // Test that String defaults to General, not one of the tagged variants
        let msg = String::from("something wrong");
        let app_err: AppError = msg.into();
        match app_err {
            AppError::General(s) => assert_eq!(s, "something wrong"),
            _ => panic!("String should convert to AppError::General"),
        }
    }

    #[test]
    fn test_tagged_variants_display() {
        let err = AppError::Fetch("https://example.com unreachable".into());
        assert_eq!(
            format!("{}", err),
            "Fetch Error: https://example.com unreachable"
        );

        let err = AppError::Structure("missing 'info'".into());
        assert_eq!(format!("{}", err), "Structure Error: missing 'info'");
    }
}
