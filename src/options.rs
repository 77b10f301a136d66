//! Configuration options for formatting and parsing.
//!
//! This module provides types to customize how flag combinations are joined
//! and split, and which format chain is attempted:
//!
//! - [`Delimiter`]: the separator between flag tokens (comma, pipe, or custom)
//! - [`FormatOptions`]: format chain plus delimiter for rendering
//! - [`ParseOptions`]: format chain, delimiter and case sensitivity for parsing
//!
//! ## Examples
//!
//! ```rust
//! use fastenum::{fastenum, Delimiter, FormatOptions, ParseOptions};
//!
//! fastenum! {
//!     pub flags Perm: u8 {
//!         Read = 1,
//!         Write = 2,
//!         Exec = 4,
//!     }
//! }
//!
//! let options = FormatOptions::new().with_delimiter(Delimiter::Pipe);
//! let rendered = fastenum::format_with(Perm::Read | Perm::Exec, &options).unwrap();
//! assert_eq!(rendered, "Read | Exec");
//!
//! let options = ParseOptions::new().with_delimiter(Delimiter::Pipe);
//! assert_eq!(fastenum::parse_with::<Perm>("Read | Exec", &options).unwrap(), 5);
//! ```

use crate::format::{EnumFormat, DEFAULT_FORMATS};

/// Delimiter between flag tokens.
///
/// The separator is what parsing splits on (tokens are trimmed, so
/// `"Read, Write"` and `"Read,Write"` both parse); the joiner is what
/// formatting emits between decomposed flags.
///
/// # Examples
///
/// ```rust
/// use fastenum::Delimiter;
///
/// assert_eq!(Delimiter::Comma.separator(), ",");
/// assert_eq!(Delimiter::Comma.joiner(), ", ");
/// assert_eq!(Delimiter::Pipe.joiner(), " | ");
/// assert_eq!(Delimiter::Custom("+".to_string()).separator(), "+");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Pipe,
    /// An arbitrary separator; used verbatim for both splitting and joining.
    Custom(String),
}

impl Delimiter {
    /// The string parsing splits flag input on.
    #[must_use]
    pub fn separator(&self) -> &str {
        match self {
            Delimiter::Comma => ",",
            Delimiter::Pipe => "|",
            Delimiter::Custom(separator) => separator,
        }
    }

    /// The string formatting joins decomposed flags with.
    #[must_use]
    pub fn joiner(&self) -> &str {
        match self {
            Delimiter::Comma => ", ",
            Delimiter::Pipe => " | ",
            Delimiter::Custom(separator) => separator,
        }
    }
}

/// Options for rendering a value to text.
///
/// The format chain is evaluated in order; the first format yielding a
/// non-empty string wins, and exhaustion falls back to the decimal value.
///
/// # Examples
///
/// ```rust
/// use fastenum::{EnumFormat, FormatOptions};
///
/// // Default: name (with flag decomposition), then decimal
/// let options = FormatOptions::new();
///
/// // Description first, then hex
/// let options = FormatOptions::new()
///     .with_formats(vec![EnumFormat::Description, EnumFormat::Hex]);
/// ```
#[derive(Clone, Debug)]
pub struct FormatOptions {
    pub formats: Vec<EnumFormat>,
    pub delimiter: Delimiter,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            formats: DEFAULT_FORMATS.to_vec(),
            delimiter: Delimiter::default(),
        }
    }
}

impl FormatOptions {
    /// Creates the default options (name then decimal, comma delimiter).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the format chain.
    #[must_use]
    pub fn with_formats(mut self, formats: Vec<EnumFormat>) -> Self {
        self.formats = formats;
        self
    }

    /// Sets the delimiter used to join decomposed flags.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// Options for parsing text into a value.
///
/// # Examples
///
/// ```rust
/// use fastenum::{Delimiter, EnumFormat, ParseOptions};
///
/// let options = ParseOptions::new()
///     .with_ignore_case(true)
///     .with_delimiter(Delimiter::Pipe)
///     .with_formats(vec![EnumFormat::Name, EnumFormat::Hex]);
/// assert!(options.ignore_case);
/// ```
#[derive(Clone, Debug)]
pub struct ParseOptions {
    pub ignore_case: bool,
    pub formats: Vec<EnumFormat>,
    pub delimiter: Delimiter,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            ignore_case: false,
            formats: DEFAULT_FORMATS.to_vec(),
            delimiter: Delimiter::default(),
        }
    }
}

impl ParseOptions {
    /// Creates the default options (case-sensitive, name then decimal,
    /// comma delimiter).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets case-insensitive matching for names, descriptions and custom
    /// format output.
    #[must_use]
    pub fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    /// Replaces the per-token format chain.
    #[must_use]
    pub fn with_formats(mut self, formats: Vec<EnumFormat>) -> Self {
        self.formats = formats;
        self
    }

    /// Sets the delimiter flag input is split on.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }
}
