//! # fastenum
//!
//! Fast, allocation-light metadata, validation, parsing and formatting for
//! enumerated types.
//!
//! ## What does it do?
//!
//! Rust gives an enum its variants and nothing else. This crate adds the
//! operations that fall out of a per-type metadata cache: name and value
//! lookups, flag-combination validation, string parsing (including
//! comma-separated flag input), formatting through pluggable format chains,
//! and checked conversion between an enum and its underlying integer.
//!
//! ## Key Features
//!
//! - **One cache per type**: a sorted value table, a name index, and a
//!   contiguous-range flag are built once, lazily, on first use; every query
//!   afterwards is a binary search, a range check, or a map hit
//! - **Flags semantics**: validity, decomposition and round-trippable
//!   rendering for bit-set types (`"Read, Exec"` ⇄ `5`)
//! - **Generic over the underlying integer**: one implementation covers all
//!   eight fixed-width representations via [`EnumRepr`]
//! - **Allocation-light**: member tables are `&'static`, queries allocate
//!   only when they produce a `String`
//! - **Thread-safe by construction**: caches are immutable after an atomic
//!   publish; concurrent first use never observes a partial cache
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! fastenum = "0.1"
//! ```
//!
//! ### Declaring and querying a plain enum
//!
//! ```rust
//! use fastenum::fastenum;
//!
//! fastenum! {
//!     pub enum Color: u8 {
//!         Red = 0,
//!         Green = 1 => "the green channel",
//!         Blue = 2,
//!     }
//! }
//!
//! let green: Color = fastenum::parse("Green").unwrap();
//! assert_eq!(green, Color::Green);
//!
//! assert_eq!(fastenum::to_string(Color::Blue), "Blue");
//! assert!(fastenum::is_defined::<Color>(2));
//! assert!(!fastenum::is_defined::<Color>(7));
//! assert_eq!(fastenum::names::<Color>().collect::<Vec<_>>(), ["Red", "Green", "Blue"]);
//! ```
//!
//! ### Flags types
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
//! let set = Perm::Read | Perm::Exec;
//! assert_eq!(fastenum::to_string(set), "Read, Exec");
//! assert_eq!(fastenum::parse::<Perm>("Read, Exec").unwrap(), set);
//!
//! // Any OR of defined flags is valid; stray bits are not.
//! assert!(fastenum::is_valid::<Perm>(7));
//! assert!(!fastenum::is_valid::<Perm>(8));
//! ```
//!
//! ### Checked conversion
//!
//! ```rust
//! use fastenum::{fastenum, EnumValidation};
//!
//! fastenum! {
//!     pub enum Color: u8 {
//!         Red = 0,
//!         Green = 1,
//!         Blue = 2,
//!     }
//! }
//!
//! // Range-checked only (the documented default policy):
//! assert_eq!(fastenum::to_value::<Color>(5, EnumValidation::None).unwrap(), 5);
//! // Membership enforced on request:
//! assert!(fastenum::to_value::<Color>(5, EnumValidation::Default).is_err());
//! assert!(fastenum::to_value::<Color>(300, EnumValidation::None).is_err());
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Cache construction**: O(n log n) once per type, on first use
//! - **Value membership**: O(1) for contiguous types, O(log n) otherwise
//! - **Name lookup**: O(1) map hit; the case-insensitive index is built on
//!   the first case-insensitive query
//! - **Flag validity**: two bitwise operations against a precomputed mask
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - No panics in the public API (except for logic errors that indicate bugs)
//! - Proper error propagation with `Result` types

pub mod cache;
pub mod descriptor;
pub mod error;
pub mod format;
pub mod macros;
pub mod options;
pub mod parse;
pub mod repr;

pub use cache::{metadata, EnumCache, EnumValidation};
pub use descriptor::{Descriptor, EnumMember, Enumeration};
pub use error::{Error, Result};
pub use format::{register_custom_format, CustomFormatId, EnumFormat, MemberView};
pub use options::{Delimiter, FormatOptions, ParseOptions};
pub use repr::EnumRepr;

/// Number of declared members of `E`, duplicates included.
#[must_use]
pub fn member_count<E: Enumeration>() -> usize {
    metadata::<E>().member_count()
}

/// All declared members of `E`, sorted ascending by value.
#[must_use]
pub fn members<E: Enumeration>() -> &'static [EnumMember<E::Repr>] {
    metadata::<E>().members()
}

/// Member names of `E` in declaration order.
pub fn names<E: Enumeration>() -> impl Iterator<Item = &'static str> {
    metadata::<E>().names()
}

/// Member values of `E` in ascending order, duplicates included.
pub fn values<E: Enumeration>() -> impl Iterator<Item = E::Repr> {
    metadata::<E>().values()
}

/// Whether the exact value is a declared member of `E`.
///
/// O(1) for contiguous types, binary search otherwise.
#[must_use]
pub fn is_defined<E: Enumeration>(value: E::Repr) -> bool {
    metadata::<E>().is_defined(value)
}

/// Whether the name is a declared member of `E`.
#[must_use]
pub fn is_defined_name<E: Enumeration>(name: &str, ignore_case: bool) -> bool {
    metadata::<E>().is_defined_name(name, ignore_case)
}

/// Whether the value is valid for `E`: exact membership for plain types,
/// any combination of defined flags for flags types (zero included).
#[must_use]
pub fn is_valid<E: Enumeration>(value: E::Repr) -> bool {
    metadata::<E>().is_valid(value)
}

/// Checks [`is_valid`], raising [`Error::InvalidValue`] carrying the value
/// and `label` on failure.
///
/// # Errors
///
/// Returns [`Error::InvalidValue`] when the value fails validity.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn validate<E: Enumeration>(value: E::Repr, label: &str) -> Result<()> {
    metadata::<E>().validate(value, label)
}

/// Converts any supported integral value into `E`'s underlying type under a
/// validity policy.
///
/// String sources go through [`parse`]/[`parse_value`] instead.
///
/// # Errors
///
/// Returns [`Error::Overflow`] when the source does not fit the underlying
/// type, or [`Error::InvalidValue`] when the requested policy rejects it.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<E: Enumeration>(
    value: impl Into<i128>,
    validation: EnumValidation,
) -> Result<E::Repr> {
    metadata::<E>().to_value(value.into(), validation)
}

/// Non-throwing variant of [`to_value`]: `None` under exactly the same
/// failure conditions.
#[must_use]
pub fn try_to_value<E: Enumeration>(
    value: impl Into<i128>,
    validation: EnumValidation,
) -> Option<E::Repr> {
    metadata::<E>().try_to_value(value.into(), validation)
}

/// Renders a value with the default chain: declared name (flag decomposition
/// for flags types), falling back to the decimal value. Never fails.
///
/// # Examples
///
/// ```rust
/// use fastenum::fastenum;
///
/// fastenum! {
///     pub enum Color: u8 {
///         Red = 0,
///         Green = 1,
///         Blue = 2,
///     }
/// }
///
/// assert_eq!(fastenum::to_string(Color::Red), "Red");
/// ```
#[must_use]
pub fn to_string<E: Enumeration>(value: E) -> String {
    metadata::<E>().display(value.to_repr())
}

/// Renders a value through an explicit format chain.
///
/// # Errors
///
/// Returns [`Error::UnknownFormat`] when the chain names an unregistered
/// custom format.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn format<E: Enumeration>(value: E, formats: &[EnumFormat]) -> Result<String> {
    let options = FormatOptions::new().with_formats(formats.to_vec());
    metadata::<E>().format(value.to_repr(), &options)
}

/// Renders a value with full formatting options.
///
/// # Errors
///
/// Returns [`Error::UnknownFormat`] when the chain names an unregistered
/// custom format.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn format_with<E: Enumeration>(value: E, options: &FormatOptions) -> Result<String> {
    metadata::<E>().format(value.to_repr(), options)
}

/// Renders a raw underlying value with full formatting options, without
/// requiring a typed instance.
///
/// # Errors
///
/// Returns [`Error::UnknownFormat`] when the chain names an unregistered
/// custom format.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn format_value<E: Enumeration>(value: E::Repr, options: &FormatOptions) -> Result<String> {
    metadata::<E>().format(value, options)
}

/// Parses text into a typed instance of `E` (case-sensitive, default
/// formats).
///
/// # Errors
///
/// Returns [`Error::Parse`] for empty input or an unresolvable token,
/// [`Error::Overflow`] for an out-of-range numeric token, and
/// [`Error::InvalidValue`] when the parsed value is not representable as a
/// typed instance (plain enums only; flag newtypes are total).
///
/// # Examples
///
/// ```rust
/// use fastenum::fastenum;
///
/// fastenum! {
///     pub enum Color: u8 {
///         Red = 0,
///         Green = 1,
///         Blue = 2,
///     }
/// }
///
/// let color: Color = fastenum::parse("Blue").unwrap();
/// assert_eq!(color, Color::Blue);
/// ```
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse<E: Enumeration>(input: &str) -> Result<E> {
    typed::<E>(parse_value::<E>(input)?)
}

/// Case-insensitive variant of [`parse`].
///
/// # Errors
///
/// Same conditions as [`parse`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_ignore_case<E: Enumeration>(input: &str) -> Result<E> {
    let options = ParseOptions::new().with_ignore_case(true);
    typed::<E>(parse_with::<E>(input, &options)?)
}

/// Parses text into `E`'s underlying value (case-sensitive, default
/// formats). A bare numeric literal is range-checked but not required to be
/// a defined member.
///
/// # Errors
///
/// Returns [`Error::Parse`] or [`Error::Overflow`] as for [`parse`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_value<E: Enumeration>(input: &str) -> Result<E::Repr> {
    metadata::<E>().parse(input, &ParseOptions::default())
}

/// Parses text into `E`'s underlying value with full parsing options.
///
/// # Errors
///
/// Returns [`Error::Parse`], [`Error::Overflow`], or
/// [`Error::UnknownFormat`] when the option chain names an unregistered
/// custom format.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_with<E: Enumeration>(input: &str, options: &ParseOptions) -> Result<E::Repr> {
    metadata::<E>().parse(input, options)
}

/// Decomposes a value into declared flags whose OR reconstructs it exactly.
///
/// `None` when no exact decomposition exists. See
/// [`EnumCache::decompose`].
#[must_use]
pub fn decompose<E: Enumeration>(value: E) -> Option<Vec<&'static EnumMember<E::Repr>>> {
    metadata::<E>().decompose(value.to_repr())
}

fn typed<E: Enumeration>(repr: E::Repr) -> Result<E> {
    E::from_repr(repr)
        .ok_or_else(|| Error::invalid_value(metadata::<E>().type_name(), repr, None))
}
