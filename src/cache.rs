//! The per-type enum metadata cache.
//!
//! An [`EnumCache`] is built once per enum type from its [`Descriptor`] and
//! holds everything the query, validation, parsing and formatting paths
//! need: the value-sorted member table, the name index, the contiguity flag
//! with min/max bounds, and the combined flag mask.
//!
//! ## Overview
//!
//! - **Sorted member table**: value lookups are a binary search, or an O(1)
//!   range check when the distinct values are contiguous
//! - **Name index**: case-sensitive lookups are a map hit; the
//!   case-insensitive variant is built lazily on first use
//! - **Flag mask**: `all_flags` is the OR of every member value, precomputed
//!   so flag validity is two bitwise operations
//! - **Publish-once registry**: each type's cache is built lazily on first
//!   use and lives for the process; concurrent first use races build, one
//!   instance is published, the rest are discarded
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root; the
//! cache handle is for repeated queries on a hot path:
//!
//! ```rust
//! use fastenum::fastenum;
//!
//! fastenum! {
//!     pub enum Direction: u8 {
//!         North = 0,
//!         East = 1,
//!         South = 2,
//!         West = 3,
//!     }
//! }
//!
//! let cache = fastenum::metadata::<Direction>();
//! assert!(cache.is_defined(2));
//! assert_eq!(cache.name_of(1), Some("East"));
//! assert_eq!(cache.member_count(), 4);
//! ```

use std::any::{Any, TypeId};

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use indexmap::{IndexMap, IndexSet};
use once_cell::sync::{Lazy, OnceCell};

use crate::descriptor::{Descriptor, EnumMember, Enumeration};
use crate::error::{Error, Result};
use crate::repr::EnumRepr;

/// Validity policy applied by the conversion entry points.
///
/// The documented default is [`None`](EnumValidation::None): conversions and
/// numeric parsing are range-checked only, and validation is always an
/// explicit opt-in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EnumValidation {
    /// Range check against the underlying type only.
    #[default]
    None,
    /// [`is_valid`](EnumCache::is_valid): exact membership, or any
    /// combination of defined flags for flags-style types.
    Default,
    /// Exact declared membership, even for flags-style types.
    Strict,
}

/// Cached metadata for one enum type.
///
/// Immutable once built; safe for any number of concurrent readers.
pub struct EnumCache<T: EnumRepr> {
    type_name: &'static str,
    flags: bool,
    /// Sorted ascending by value, stable with respect to declaration order.
    members: Vec<EnumMember<T>>,
    /// Name to sorted-table index, in declaration order.
    by_name: IndexMap<&'static str, u32>,
    /// Lowercase-folded name index, built on first case-insensitive query.
    folded: OnceCell<IndexMap<String, u32>>,
    contiguous: bool,
    bounds: Option<(T, T)>,
    all_flags: T,
}

fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

impl<T: EnumRepr> EnumCache<T> {
    /// Builds a cache from a hand-constructed descriptor, validating that it
    /// describes a well-formed enum type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAnEnum`] when the type name or a member name is
    /// not an identifier, or when a member name is declared twice.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fastenum::{Descriptor, EnumCache, Error};
    ///
    /// let bad = Descriptor::new("State").member("", 0u8);
    /// assert!(matches!(
    ///     EnumCache::from_descriptor(bad),
    ///     Err(Error::NotAnEnum { .. })
    /// ));
    /// ```
    pub fn from_descriptor(descriptor: Descriptor<T>) -> Result<Self> {
        let type_name = descriptor.type_name();
        if !is_identifier(type_name) {
            return Err(Error::not_an_enum(type_name, "type name is not an identifier"));
        }
        let mut seen = IndexSet::with_capacity(descriptor.members().len());
        for member in descriptor.members() {
            if !is_identifier(member.name()) {
                return Err(Error::not_an_enum(
                    type_name,
                    &format!("member name {:?} is not an identifier", member.name()),
                ));
            }
            if !seen.insert(member.name()) {
                return Err(Error::not_an_enum(
                    type_name,
                    &format!("duplicate member name {:?}", member.name()),
                ));
            }
        }
        Ok(Self::build(descriptor))
    }

    /// Builds without validation. The typed path trusts descriptors produced
    /// by the `fastenum!` macro, which are well-formed by construction.
    pub(crate) fn build(descriptor: Descriptor<T>) -> Self {
        let (type_name, flags, declared) = descriptor.into_parts();

        let mut order: Vec<u32> = (0..declared.len() as u32).collect();
        order.sort_by_key(|&index| declared[index as usize].value());

        let members: Vec<EnumMember<T>> = order
            .iter()
            .map(|&index| declared[index as usize])
            .collect();

        // Position of each declared member in the sorted table, so the name
        // index can be built in declaration order.
        let mut positions = vec![0u32; declared.len()];
        for (sorted_index, &declared_index) in order.iter().enumerate() {
            positions[declared_index as usize] = sorted_index as u32;
        }

        let mut by_name = IndexMap::with_capacity(declared.len());
        for (declared_index, member) in declared.iter().enumerate() {
            by_name
                .entry(member.name())
                .or_insert(positions[declared_index]);
        }

        let all_flags = members
            .iter()
            .fold(T::ZERO, |mask, member| mask | member.value());

        let mut contiguous = !members.is_empty();
        let mut previous: Option<i128> = None;
        for member in &members {
            let wide = member.value().to_wide();
            if let Some(prev) = previous {
                if wide != prev && wide != prev + 1 {
                    contiguous = false;
                    break;
                }
            }
            previous = Some(wide);
        }

        let bounds = match (members.first(), members.last()) {
            (Some(first), Some(last)) => Some((first.value(), last.value())),
            _ => None,
        };

        EnumCache {
            type_name,
            flags,
            members,
            by_name,
            folded: OnceCell::new(),
            contiguous,
            bounds,
            all_flags,
        }
    }

    /// The declared type name.
    #[inline]
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Whether the type is flags-style.
    #[inline]
    #[must_use]
    pub const fn is_flags(&self) -> bool {
        self.flags
    }

    /// Whether the distinct values form an unbroken run of consecutive
    /// integers (enables O(1) membership checks).
    #[inline]
    #[must_use]
    pub const fn is_contiguous(&self) -> bool {
        self.contiguous
    }

    /// The smallest and largest declared values, `None` for an empty type.
    #[inline]
    #[must_use]
    pub fn bounds(&self) -> Option<(T, T)> {
        self.bounds
    }

    /// The bitwise OR of every declared value.
    #[inline]
    #[must_use]
    pub fn all_flags(&self) -> T {
        self.all_flags
    }

    /// All members, sorted ascending by value (duplicates included).
    #[must_use]
    pub fn members(&self) -> &[EnumMember<T>] {
        &self.members
    }

    /// Number of declared members, duplicates included.
    #[must_use]
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Member names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.by_name.keys().copied()
    }

    /// Member values in ascending order (duplicates included).
    pub fn values(&self) -> impl Iterator<Item = T> + '_ {
        self.members.iter().map(EnumMember::value)
    }

    /// Members collapsed to distinct values: for duplicate-valued members
    /// only the primary (first declared) is yielded.
    pub fn unique_members(&self) -> impl Iterator<Item = &EnumMember<T>> + '_ {
        self.members.iter().enumerate().filter_map(move |(i, member)| {
            if i == 0 || self.members[i - 1].value() != member.value() {
                Some(member)
            } else {
                None
            }
        })
    }

    /// Index of the primary member for a value, if defined.
    fn primary_index(&self, value: T) -> Option<usize> {
        let index = self.members.partition_point(|member| member.value() < value);
        (index < self.members.len() && self.members[index].value() == value).then_some(index)
    }

    /// The primary member declaring this exact value, if any.
    #[must_use]
    pub fn member_of(&self, value: T) -> Option<&EnumMember<T>> {
        self.primary_index(value).map(|index| &self.members[index])
    }

    /// The primary declared name for this exact value, if any.
    #[must_use]
    pub fn name_of(&self, value: T) -> Option<&'static str> {
        self.member_of(value).map(EnumMember::name)
    }

    /// The member declared under this name, if any.
    #[must_use]
    pub fn member_by_name(&self, name: &str, ignore_case: bool) -> Option<&EnumMember<T>> {
        let index = if ignore_case {
            *self.folded().get(name.to_lowercase().as_str())?
        } else {
            *self.by_name.get(name)?
        };
        self.members.get(index as usize)
    }

    fn folded(&self) -> &IndexMap<String, u32> {
        self.folded.get_or_init(|| {
            let mut folded = IndexMap::with_capacity(self.by_name.len());
            for (name, &index) in &self.by_name {
                // First declared wins on fold collisions.
                folded.entry(name.to_lowercase()).or_insert(index);
            }
            folded
        })
    }

    /// Whether the exact value is declared.
    ///
    /// Contiguous types answer with a range check; others binary-search the
    /// sorted table.
    #[must_use]
    pub fn is_defined(&self, value: T) -> bool {
        if self.contiguous {
            match self.bounds {
                Some((min, max)) => min <= value && value <= max,
                None => false,
            }
        } else {
            self.members
                .binary_search_by(|member| member.value().cmp(&value))
                .is_ok()
        }
    }

    /// Whether the name is declared.
    #[must_use]
    pub fn is_defined_name(&self, name: &str, ignore_case: bool) -> bool {
        self.member_by_name(name, ignore_case).is_some()
    }

    /// Whether the value is valid for this type.
    ///
    /// Exact membership for plain types; for flags-style types, any value
    /// whose set bits are all covered by declared flags (zero included).
    #[must_use]
    pub fn is_valid(&self, value: T) -> bool {
        if self.flags {
            (value & !self.all_flags) == T::ZERO
        } else {
            self.is_defined(value)
        }
    }

    /// Checks [`is_valid`](EnumCache::is_valid), raising
    /// [`Error::InvalidValue`] carrying the value and the caller-supplied
    /// label on failure.
    pub fn validate(&self, value: T, label: &str) -> Result<()> {
        if self.is_valid(value) {
            Ok(())
        } else {
            Err(Error::invalid_value(self.type_name, value, Some(label)))
        }
    }

    /// Converts a wide integral value into the underlying type under a
    /// validity policy.
    ///
    /// # Errors
    ///
    /// [`Error::Overflow`] when the value does not fit the underlying type;
    /// [`Error::InvalidValue`] when the requested policy rejects it.
    pub fn to_value(&self, wide: i128, validation: EnumValidation) -> Result<T> {
        let value = T::from_wide(wide).ok_or_else(|| Error::overflow(self.type_name, wide))?;
        match validation {
            EnumValidation::None => Ok(value),
            EnumValidation::Default => {
                if self.is_valid(value) {
                    Ok(value)
                } else {
                    Err(Error::invalid_value(self.type_name, value, None))
                }
            }
            EnumValidation::Strict => {
                if self.is_defined(value) {
                    Ok(value)
                } else {
                    Err(Error::invalid_value(self.type_name, value, None))
                }
            }
        }
    }

    /// Non-throwing variant of [`to_value`](EnumCache::to_value).
    #[must_use]
    pub fn try_to_value(&self, wide: i128, validation: EnumValidation) -> Option<T> {
        self.to_value(wide, validation).ok()
    }

    /// Decomposes a value into declared flags whose OR reconstructs it
    /// exactly, greedily matching largest to smallest.
    ///
    /// Returns the matched primary members in ascending value order. Zero
    /// decomposes to its declared member if one exists, otherwise to an
    /// empty list. `None` when no exact decomposition exists.
    #[must_use]
    pub fn decompose(&self, value: T) -> Option<Vec<&EnumMember<T>>> {
        if value == T::ZERO {
            return Some(self.member_of(value).into_iter().collect());
        }

        let mut remaining = value;
        let mut picked: Vec<&EnumMember<T>> = Vec::new();
        for index in (0..self.members.len()).rev() {
            let member = &self.members[index];
            // Skip aliases; the primary is reached later in the walk.
            if index > 0 && self.members[index - 1].value() == member.value() {
                continue;
            }
            let flag = member.value();
            if flag == T::ZERO {
                continue;
            }
            if (remaining & flag) == flag {
                picked.push(member);
                remaining = remaining & !flag;
                if remaining == T::ZERO {
                    break;
                }
            }
        }

        if remaining != T::ZERO {
            return None;
        }
        picked.reverse();
        Some(picked)
    }
}

/// Process-wide, type-keyed cache registry.
///
/// Entries are leaked into the process lifetime: one build per type, never
/// invalidated, never mutated after publish.
static REGISTRY: Lazy<DashMap<TypeId, &'static (dyn Any + Send + Sync)>> =
    Lazy::new(DashMap::new);

/// The process-lifetime metadata cache for `E`, built lazily on first use.
///
/// Concurrent first use from multiple threads may each build an instance;
/// exactly one is published and the rest are discarded, so every caller
/// observes the same fully constructed cache.
///
/// # Examples
///
/// ```rust
/// use fastenum::fastenum;
///
/// fastenum! {
///     pub enum Suit: u8 {
///         Clubs = 0,
///         Diamonds = 1,
///         Hearts = 2,
///         Spades = 3,
///     }
/// }
///
/// let cache = fastenum::metadata::<Suit>();
/// assert!(cache.is_contiguous());
/// assert!(std::ptr::eq(cache, fastenum::metadata::<Suit>()));
/// ```
pub fn metadata<E: Enumeration>() -> &'static EnumCache<E::Repr> {
    let key = TypeId::of::<E>();
    if let Some(entry) = REGISTRY.get(&key) {
        let slot: &'static (dyn Any + Send + Sync) = *entry.value();
        if let Some(cache) = slot.downcast_ref::<EnumCache<E::Repr>>() {
            return cache;
        }
    }

    // Built outside the map lock; a racing builder's instance is dropped.
    let built = EnumCache::build(E::descriptor());
    let slot: &'static (dyn Any + Send + Sync) = match REGISTRY.entry(key) {
        Entry::Occupied(occupied) => *occupied.get(),
        Entry::Vacant(vacant) => {
            let leaked: &'static EnumCache<E::Repr> = Box::leak(Box::new(built));
            *vacant.insert(leaked)
        }
    };
    slot.downcast_ref::<EnumCache<E::Repr>>()
        .expect("enum cache registered under a mismatched TypeId")
}
