//! # Error Types
//!
//! This module defines the error type for the fretboard crate.
//!
//! The music-theory core never fails: an unresolvable degree comes back as the
//! original token, a missing chord is `None`, and every shape gets a diagram.
//! Errors only arise while building catalogs from YAML, loading a config file,
//! or when the command line asks for something that is not there.
//!
//! ## Error Types
//! - `CatalogError` - Catalog YAML could not be parsed
//! - `InvalidShape` - A chord record breaks the six-string invariants
//! - `InvalidStyle` - A style has no usable patterns
//! - `DuplicateEntry` - Two catalog records share a symbol or id
//! - `UnknownStyle` / `UnknownChord` - Lookup misses reported to the user
//! - `ConfigError` - Config file could not be read or parsed

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FretboardError {
    /// Catalog YAML was malformed.
    ///
    /// # Example
    /// ```
    /// # use fretboard::FretboardError;
    /// let err = FretboardError::CatalogError("expected a sequence".to_string());
    /// assert_eq!(err.to_string(), "Invalid catalog: expected a sequence");
    /// ```
    #[error("Invalid catalog: {0}")]
    CatalogError(String),

    /// A chord shape record is structurally invalid.
    ///
    /// # Example
    /// ```
    /// # use fretboard::FretboardError;
    /// let err = FretboardError::InvalidShape {
    ///     id: "c-major".to_string(),
    ///     message: "expected 6 strings, found 5".to_string(),
    /// };
    /// assert_eq!(err.to_string(), "Invalid chord shape 'c-major': expected 6 strings, found 5");
    /// ```
    #[error("Invalid chord shape '{id}': {message}")]
    InvalidShape { id: String, message: String },

    #[error("Invalid progression style '{id}': {message}")]
    InvalidStyle { id: String, message: String },

    #[error("Duplicate catalog entry: {0}")]
    DuplicateEntry(String),

    #[error("Unknown progression style: {0}")]
    UnknownStyle(String),

    #[error("No chord shape named {0}")]
    UnknownChord(String),

    #[error("Invalid config: {0}")]
    ConfigError(String),
}
