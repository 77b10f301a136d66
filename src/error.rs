//! Error types for enum metadata, conversion, parsing and formatting.
//!
//! Every failure in this crate is immediate and synchronous; there is no
//! transient-failure or retry concept in the domain. The fallible entry
//! points return [`Result`], and the non-throwing counterparts
//! (`try_to_value`, `Option`-returning lookups) swallow exactly the same
//! failure conditions without raising.
//!
//! ## Error Categories
//!
//! - **NotAnEnum**: a hand-built [`Descriptor`](crate::Descriptor) does not
//!   describe a well-formed enum type
//! - **Overflow**: a numeric input does not fit the underlying integral type
//! - **InvalidValue**: a value fails membership or flag-combination validity
//! - **Parse**: no resolution strategy matched an input string or sub-token
//! - **UnknownFormat**: an unregistered custom format specifier was requested
//!
//! ## Examples
//!
//! ```rust
//! use fastenum::{fastenum, Error};
//!
//! fastenum! {
//!     pub enum Color: u8 {
//!         Red = 0,
//!         Green = 1,
//!         Blue = 2,
//!     }
//! }
//!
//! let result: Result<Color, Error> = fastenum::parse("Purple");
//! assert!(matches!(result, Err(Error::Parse { .. })));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised by enum metadata operations.
///
/// Each variant carries the type name and the offending value, token or
/// specifier so diagnostics can name exactly what failed.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// A descriptor does not describe a well-formed enum type
    #[error("`{type_name}` is not usable as an enum type: {reason}")]
    NotAnEnum { type_name: String, reason: String },

    /// A numeric input is outside the representable range of the underlying type
    #[error("value {value} does not fit the underlying type of `{type_name}`")]
    Overflow { type_name: String, value: String },

    /// A value failed membership or flag-combination validity
    #[error("invalid value {value} for enum `{type_name}`{label}")]
    InvalidValue {
        type_name: String,
        value: String,
        label: String,
    },

    /// An input string (or flag sub-token) matched no resolution strategy
    #[error("cannot parse {token:?} as `{type_name}`")]
    Parse { type_name: String, token: String },

    /// An unrecognized format specifier was requested
    #[error("unknown format specifier: {spec}")]
    UnknownFormat { spec: String },
}

impl Error {
    /// Creates a [`Error::NotAnEnum`] for a malformed descriptor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fastenum::Error;
    ///
    /// let err = Error::not_an_enum("3D", "type name is not an identifier");
    /// assert!(err.to_string().contains("not usable as an enum type"));
    /// ```
    pub fn not_an_enum(type_name: &str, reason: &str) -> Self {
        Error::NotAnEnum {
            type_name: type_name.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Creates an [`Error::Overflow`] for a value outside the underlying range.
    pub fn overflow<V: fmt::Display>(type_name: &str, value: V) -> Self {
        Error::Overflow {
            type_name: type_name.to_string(),
            value: value.to_string(),
        }
    }

    /// Creates an [`Error::InvalidValue`], optionally carrying a caller-supplied
    /// label (typically a parameter name) for diagnostics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fastenum::Error;
    ///
    /// let err = Error::invalid_value("Perm", 8, Some("mode"));
    /// assert!(err.to_string().contains("(parameter: mode)"));
    /// ```
    pub fn invalid_value<V: fmt::Display>(type_name: &str, value: V, label: Option<&str>) -> Self {
        Error::InvalidValue {
            type_name: type_name.to_string(),
            value: value.to_string(),
            label: label
                .map(|l| format!(" (parameter: {})", l))
                .unwrap_or_default(),
        }
    }

    /// Creates an [`Error::Parse`] naming the unresolved token.
    pub fn parse(type_name: &str, token: &str) -> Self {
        Error::Parse {
            type_name: type_name.to_string(),
            token: token.to_string(),
        }
    }

    /// Creates an [`Error::UnknownFormat`] for an unregistered specifier.
    pub fn unknown_format(spec: &str) -> Self {
        Error::UnknownFormat {
            spec: spec.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
