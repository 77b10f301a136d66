//! String parsing.
//!
//! Parsing resolves text back into an underlying value. Flags-style types
//! split the input on the delimiter (tokens trimmed) and OR-combine the
//! resolved tokens; plain types treat the whole trimmed input as one token.
//!
//! Per token, the format chain is attempted in order (default: name, then
//! decimal literal). A bare numeric literal parses as the raw underlying
//! value — range-checked against the underlying type, but not required to
//! be a defined member. An empty or whitespace-only input is always an
//! error, and a token no strategy resolves raises [`Error::Parse`] naming
//! the offending substring.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use fastenum::fastenum;
//!
//! fastenum! {
//!     pub flags Perm: u8 {
//!         Read = 1,
//!         Write = 2,
//!         Exec = 4,
//!     }
//! }
//!
//! let perm: Perm = fastenum::parse("Read, Exec").unwrap();
//! assert_eq!(perm.bits(), 5);
//! ```

use crate::cache::EnumCache;
use crate::error::{Error, Result};
use crate::format::{custom_format, view, EnumFormat};
use crate::options::ParseOptions;
use crate::repr::{self, EnumRepr, Numeric};

impl<T: EnumRepr> EnumCache<T> {
    /// Parses text into an underlying value.
    ///
    /// # Errors
    ///
    /// [`Error::Parse`] for empty input or an unresolvable token;
    /// [`Error::Overflow`] for a numeric token outside the underlying range;
    /// [`Error::UnknownFormat`] when the chain names an unregistered custom
    /// format.
    pub fn parse(&self, input: &str, options: &ParseOptions) -> Result<T> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(Error::parse(self.type_name(), input));
        }

        if self.is_flags() {
            let mut combined = T::ZERO;
            for token in trimmed.split(options.delimiter.separator()) {
                let token = token.trim();
                if token.is_empty() {
                    return Err(Error::parse(self.type_name(), token));
                }
                combined = combined | self.resolve_token(token, options)?;
            }
            Ok(combined)
        } else {
            self.resolve_token(trimmed, options)
        }
    }

    /// Resolves one token through the format chain.
    fn resolve_token(&self, token: &str, options: &ParseOptions) -> Result<T> {
        for format in &options.formats {
            match format {
                EnumFormat::Name => {
                    if let Some(member) = self.member_by_name(token, options.ignore_case) {
                        return Ok(member.value());
                    }
                }
                EnumFormat::Description => {
                    if let Some(member) = self.unique_members().find(|member| {
                        member
                            .description()
                            .is_some_and(|text| text_matches(text, token, options.ignore_case))
                    }) {
                        return Ok(member.value());
                    }
                }
                EnumFormat::Custom(id) => {
                    let format = custom_format(*id)
                        .ok_or_else(|| Error::unknown_format(&format!("custom #{}", id.0)))?;
                    if let Some(member) = self.unique_members().find(|member| {
                        format(&view(member))
                            .is_some_and(|text| text_matches(&text, token, options.ignore_case))
                    }) {
                        return Ok(member.value());
                    }
                }
                EnumFormat::Decimal => match repr::parse_decimal::<T>(token) {
                    Numeric::Value(value) => return Ok(value),
                    Numeric::Overflow => return Err(Error::overflow(self.type_name(), token)),
                    Numeric::Malformed => {}
                },
                EnumFormat::Hex => match repr::parse_hex::<T>(token) {
                    Numeric::Value(value) => return Ok(value),
                    Numeric::Overflow => return Err(Error::overflow(self.type_name(), token)),
                    Numeric::Malformed => {}
                },
            }
        }
        Err(Error::parse(self.type_name(), token))
    }
}

fn text_matches(candidate: &str, token: &str, ignore_case: bool) -> bool {
    if ignore_case {
        candidate.to_lowercase() == token.to_lowercase()
    } else {
        candidate == token
    }
}
