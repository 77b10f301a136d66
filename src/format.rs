//! Value formatting.
//!
//! Rendering walks an ordered chain of [`EnumFormat`] specifiers; the first
//! format yielding a non-empty string wins, and an exhausted chain falls
//! back to the decimal value. For a structurally valid value formatting
//! never fails — the only error is requesting an unregistered custom
//! specifier.
//!
//! ## Flag rendering
//!
//! The name format on a flags-style type always yields: the exact declared
//! name if the value itself is a member, otherwise the greedy
//! largest-to-smallest decomposition joined by the delimiter, otherwise the
//! raw decimal text.
//!
//! ## Custom formats
//!
//! Custom formats are process-wide: [`register_custom_format`] appends a
//! renderer to an append-only registry and returns its stable
//! [`CustomFormatId`]. Registration is safe from any thread; ids never
//! expire.
//!
//! ```rust
//! use fastenum::{fastenum, EnumFormat};
//!
//! fastenum! {
//!     pub enum Axis: u8 {
//!         X = 0,
//!         Y = 1,
//!         Z = 2,
//!     }
//! }
//!
//! let lower = fastenum::register_custom_format(|member| Some(member.name.to_lowercase()));
//! let rendered = fastenum::format(Axis::Y, &[EnumFormat::Custom(lower)]).unwrap();
//! assert_eq!(rendered, "y");
//! ```

use crate::cache::EnumCache;
use crate::descriptor::EnumMember;
use crate::error::{Error, Result};
use crate::options::{Delimiter, FormatOptions};
use crate::repr::EnumRepr;

/// Identifier of a registered custom format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CustomFormatId(pub(crate) usize);

/// Width-erased view of one member handed to custom format functions.
#[derive(Clone, Copy, Debug)]
pub struct MemberView<'a> {
    /// The declared member identifier.
    pub name: &'a str,
    /// The underlying value, widened to `i128`.
    pub value: i128,
    /// Attribute tags in declaration order.
    pub attributes: &'a [(&'a str, &'a str)],
}

impl<'a> MemberView<'a> {
    /// The human-readable description, if one was attached.
    #[must_use]
    pub fn description(&self) -> Option<&'a str> {
        self.attributes
            .iter()
            .find(|(key, _)| *key == "description")
            .map(|(_, text)| *text)
    }
}

pub(crate) fn view<T: EnumRepr>(member: &EnumMember<T>) -> MemberView<'static> {
    MemberView {
        name: member.name(),
        value: member.value().to_wide(),
        attributes: member.attributes(),
    }
}

type CustomFormatFn = dyn Fn(&MemberView<'_>) -> Option<String> + Send + Sync;

/// Append-only: ids are push indices, so concurrent registration needs no
/// locks and lookups are O(1).
static CUSTOM_FORMATS: boxcar::Vec<Box<CustomFormatFn>> = boxcar::Vec::new();

/// Registers a process-wide custom format and returns its id.
///
/// The function receives a member view and returns its rendering, or `None`
/// when it has no rendering for that member (the format chain then
/// continues). Registered formats are never removed.
pub fn register_custom_format<F>(format: F) -> CustomFormatId
where
    F: Fn(&MemberView<'_>) -> Option<String> + Send + Sync + 'static,
{
    CustomFormatId(CUSTOM_FORMATS.push(Box::new(format)))
}

pub(crate) fn custom_format(id: CustomFormatId) -> Option<&'static CustomFormatFn> {
    CUSTOM_FORMATS.get(id.0).map(|boxed| &**boxed)
}

/// A format specifier: one step of a rendering (or parsing) chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnumFormat {
    /// The declared name; on flags-style types, the flag decomposition.
    Name,
    /// The underlying value in decimal.
    Decimal,
    /// The underlying bit pattern in uppercase hex, zero-padded to the width.
    Hex,
    /// The attached description.
    Description,
    /// A registered custom format.
    Custom(CustomFormatId),
}

/// The chain used when no explicit formats are given: name resolution with
/// the decimal fallback.
pub const DEFAULT_FORMATS: &[EnumFormat] = &[EnumFormat::Name, EnumFormat::Decimal];

impl<T: EnumRepr> EnumCache<T> {
    /// Renders a value through an ordered format chain.
    ///
    /// The first format yielding a non-empty string wins; an exhausted chain
    /// falls back to the decimal value, so the result is total for any value
    /// of the underlying type.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownFormat`] when the chain names an unregistered custom
    /// format.
    pub fn format(&self, value: T, options: &FormatOptions) -> Result<String> {
        for format in &options.formats {
            if let Some(rendered) = self.apply_format(value, *format, &options.delimiter)? {
                if !rendered.is_empty() {
                    return Ok(rendered);
                }
            }
        }
        Ok(value.to_string())
    }

    /// Renders with the default chain: name (flag decomposition for
    /// flags-style types), falling back to decimal. Never fails.
    #[must_use]
    pub fn display(&self, value: T) -> String {
        match self.render_name(value, &Delimiter::Comma) {
            Some(rendered) if !rendered.is_empty() => rendered,
            _ => value.to_string(),
        }
    }

    fn apply_format(
        &self,
        value: T,
        format: EnumFormat,
        delimiter: &Delimiter,
    ) -> Result<Option<String>> {
        match format {
            EnumFormat::Decimal => Ok(Some(value.to_string())),
            EnumFormat::Hex => Ok(Some(value.hex())),
            EnumFormat::Name => Ok(self.render_name(value, delimiter)),
            EnumFormat::Description => Ok(self
                .member_of(value)
                .and_then(EnumMember::description)
                .map(str::to_owned)),
            EnumFormat::Custom(id) => {
                let format = custom_format(id)
                    .ok_or_else(|| Error::unknown_format(&format!("custom #{}", id.0)))?;
                Ok(self.member_of(value).and_then(|member| format(&view(member))))
            }
        }
    }

    fn render_name(&self, value: T, delimiter: &Delimiter) -> Option<String> {
        if let Some(name) = self.name_of(value) {
            return Some(name.to_owned());
        }
        if !self.is_flags() {
            return None;
        }
        match self.decompose(value) {
            Some(parts) if !parts.is_empty() => Some(
                parts
                    .iter()
                    .map(|member| member.name())
                    .collect::<Vec<_>>()
                    .join(delimiter.joiner()),
            ),
            // Flags name format always yields; undecomposable values render
            // as their decimal text.
            _ => Some(value.to_string()),
        }
    }
}
