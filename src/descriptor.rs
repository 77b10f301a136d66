//! Enum type descriptors.
//!
//! The metadata cache never discovers members by itself; it is handed a
//! [`Descriptor`] listing `(name, value, attributes)` triples in declaration
//! order, plus the flags-style marking. For types declared through the
//! [`fastenum!`](crate::fastenum) macro the descriptor is generated; dynamic
//! callers can build one by hand and feed it to
//! [`EnumCache::from_descriptor`](crate::EnumCache::from_descriptor).
//!
//! ## Examples
//!
//! ```rust
//! use fastenum::{Descriptor, EnumCache};
//!
//! let descriptor = Descriptor::new("Signal")
//!     .member("Hup", 1u8)
//!     .member_with("Int", 2u8, &[("description", "interrupt from keyboard")]);
//!
//! let cache = EnumCache::from_descriptor(descriptor).unwrap();
//! assert_eq!(cache.name_of(2), Some("Int"));
//! ```

use crate::repr::EnumRepr;

/// One declared enum member: identifier, underlying value and attached
/// attribute tags.
///
/// Attributes are ordered opaque key/value pairs; the `"description"` key
/// carries the optional human-readable description.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnumMember<T> {
    name: &'static str,
    value: T,
    attributes: &'static [(&'static str, &'static str)],
}

impl<T: EnumRepr> EnumMember<T> {
    pub(crate) const fn new(
        name: &'static str,
        value: T,
        attributes: &'static [(&'static str, &'static str)],
    ) -> Self {
        EnumMember {
            name,
            value,
            attributes,
        }
    }

    /// The declared member identifier.
    #[inline]
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The underlying value.
    #[inline]
    #[must_use]
    pub fn value(&self) -> T {
        self.value
    }

    /// All attribute tags in declaration order.
    #[inline]
    #[must_use]
    pub const fn attributes(&self) -> &'static [(&'static str, &'static str)] {
        self.attributes
    }

    /// The human-readable description, if one was attached.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fastenum::fastenum;
    /// use fastenum::Enumeration;
    ///
    /// fastenum! {
    ///     pub enum Level: u8 {
    ///         Low = 0 => "below the threshold",
    ///         High = 1,
    ///     }
    /// }
    ///
    /// assert_eq!(Level::Low.description(), Some("below the threshold"));
    /// assert_eq!(Level::High.description(), None);
    /// ```
    #[must_use]
    pub fn description(&self) -> Option<&'static str> {
        self.attributes
            .iter()
            .find(|(key, _)| *key == "description")
            .map(|(_, text)| *text)
    }
}

/// Declared shape of an enum type: name, flags marking, members in
/// declaration order.
///
/// Built with a chain of [`member`](Descriptor::member) /
/// [`member_with`](Descriptor::member_with) calls. Declaration order matters:
/// when two members share a value, the first declared is primary for
/// value-to-name resolution.
#[derive(Clone, Debug)]
pub struct Descriptor<T> {
    type_name: &'static str,
    flags: bool,
    members: Vec<EnumMember<T>>,
}

impl<T: EnumRepr> Descriptor<T> {
    /// Starts a descriptor for the named type.
    #[must_use]
    pub fn new(type_name: &'static str) -> Self {
        Descriptor {
            type_name,
            flags: false,
            members: Vec::new(),
        }
    }

    /// Marks the type as flags-style, switching validity from exact
    /// membership to bit-combination semantics.
    #[must_use]
    pub fn flags(mut self, flags: bool) -> Self {
        self.flags = flags;
        self
    }

    /// Appends a member with no attributes.
    #[must_use]
    pub fn member(self, name: &'static str, value: T) -> Self {
        self.member_with(name, value, &[])
    }

    /// Appends a member with attribute tags.
    #[must_use]
    pub fn member_with(
        mut self,
        name: &'static str,
        value: T,
        attributes: &'static [(&'static str, &'static str)],
    ) -> Self {
        self.members.push(EnumMember::new(name, value, attributes));
        self
    }

    /// The declared type name.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Whether the type is marked flags-style.
    #[must_use]
    pub const fn is_flags(&self) -> bool {
        self.flags
    }

    /// Members in declaration order.
    #[must_use]
    pub fn members(&self) -> &[EnumMember<T>] {
        &self.members
    }

    pub(crate) fn into_parts(self) -> (&'static str, bool, Vec<EnumMember<T>>) {
        (self.type_name, self.flags, self.members)
    }
}

/// An enumerated type with cached metadata.
///
/// Implementations supply the descriptor and the conversions between the
/// typed value and its underlying representation; everything else is served
/// from the per-type [`EnumCache`](crate::EnumCache). Implement this through
/// the [`fastenum!`](crate::fastenum) macro — hand-written impls must
/// guarantee the descriptor is well-formed (non-empty identifier names,
/// unique per type).
pub trait Enumeration: Copy + Sized + 'static {
    /// The underlying fixed-width integer type.
    type Repr: EnumRepr;

    /// The declared shape of this type, in declaration order.
    fn descriptor() -> Descriptor<Self::Repr>;

    /// Converts to the underlying representation.
    fn to_repr(self) -> Self::Repr;

    /// Converts from the underlying representation.
    ///
    /// `None` when the value is not representable as a typed instance. Flag
    /// newtypes are total and always return `Some`.
    fn from_repr(repr: Self::Repr) -> Option<Self>;

    /// The declared name of this value, if the exact value is defined.
    fn name(self) -> Option<&'static str> {
        crate::cache::metadata::<Self>().name_of(self.to_repr())
    }

    /// The attached description of this value, if the exact value is defined
    /// and carries one.
    fn description(self) -> Option<&'static str> {
        crate::cache::metadata::<Self>()
            .member_of(self.to_repr())
            .and_then(EnumMember::description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_keeps_declaration_order() {
        let descriptor = Descriptor::new("Signal")
            .member("Hup", 1u8)
            .member("Int", 2u8)
            .member("Quit", 3u8);

        assert_eq!(descriptor.type_name(), "Signal");
        assert!(!descriptor.is_flags());
        let names: Vec<_> = descriptor.members().iter().map(EnumMember::name).collect();
        assert_eq!(names, ["Hup", "Int", "Quit"]);
    }

    #[test]
    fn test_description_is_found_among_attributes() {
        let member = EnumMember::new(
            "Int",
            2u8,
            &[("origin", "posix"), ("description", "interrupt")],
        );
        assert_eq!(member.description(), Some("interrupt"));
        assert_eq!(member.attributes().len(), 2);

        let bare = EnumMember::new("Hup", 1u8, &[]);
        assert_eq!(bare.description(), None);
    }

    #[test]
    fn test_flags_marking() {
        let descriptor = Descriptor::new("Caps").flags(true).member("Seek", 1u32);
        assert!(descriptor.is_flags());
    }
}
