/// Declares an enumerated type with cached metadata.
///
/// Two forms. The `enum` form declares a plain `#[repr]` enum; the `flags`
/// form declares a bit-set newtype with one associated constant per flag and
/// the usual bit operators. Both implement
/// [`Enumeration`](crate::Enumeration), `From<Self>` for the underlying
/// type, and `Display`. A member may carry a description after `=>`.
///
/// ```rust
/// use fastenum::fastenum;
///
/// fastenum! {
///     pub enum Color: u8 {
///         Red = 0,
///         Green = 1 => "the green channel",
///         Blue = 2,
///     }
/// }
///
/// fastenum! {
///     pub flags Perm: u8 {
///         Read = 1,
///         Write = 2,
///         Exec = 4,
///     }
/// }
///
/// assert_eq!(Color::Green.to_string(), "Green");
/// assert_eq!((Perm::Read | Perm::Write).to_string(), "Read, Write");
/// ```
#[macro_export]
macro_rules! fastenum {
    // Plain enum form
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $repr:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $value:expr $(=> $desc:literal)?
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[repr($repr)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant = $value ),+
        }

        impl $crate::Enumeration for $name {
            type Repr = $repr;

            fn descriptor() -> $crate::Descriptor<$repr> {
                $crate::Descriptor::new(stringify!($name))
                    $( .member_with(
                        stringify!($variant),
                        $value,
                        &[ $( ("description", $desc) )? ],
                    ) )+
            }

            fn to_repr(self) -> $repr {
                self as $repr
            }

            fn from_repr(repr: $repr) -> ::core::option::Option<Self> {
                $(
                    if repr == ($value) {
                        return ::core::option::Option::Some($name::$variant);
                    }
                )+
                ::core::option::Option::None
            }
        }

        impl ::core::convert::From<$name> for $repr {
            fn from(value: $name) -> $repr {
                value as $repr
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&$crate::to_string(*self))
            }
        }
    };

    // Flags form
    (
        $(#[$meta:meta])*
        $vis:vis flags $name:ident : $repr:ident {
            $(
                $(#[$fmeta:meta])*
                $flag:ident = $value:expr $(=> $desc:literal)?
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name($repr);

        #[allow(non_upper_case_globals)]
        impl $name {
            $( $(#[$fmeta])* $vis const $flag: $name = $name($value); )+

            /// The raw bit pattern of this set.
            #[must_use]
            $vis const fn bits(self) -> $repr {
                self.0
            }

            /// Builds a set from a raw bit pattern, undefined bits included.
            #[must_use]
            $vis const fn from_bits(bits: $repr) -> $name {
                $name(bits)
            }

            /// The empty set.
            #[must_use]
            $vis const fn empty() -> $name {
                $name(0)
            }

            #[must_use]
            $vis const fn is_empty(self) -> bool {
                self.0 == 0
            }

            /// Whether every bit of `other` is set in `self`.
            #[must_use]
            $vis const fn contains(self, other: $name) -> bool {
                self.0 & other.0 == other.0
            }
        }

        impl ::core::ops::BitOr for $name {
            type Output = $name;
            fn bitor(self, rhs: $name) -> $name {
                $name(self.0 | rhs.0)
            }
        }

        impl ::core::ops::BitOrAssign for $name {
            fn bitor_assign(&mut self, rhs: $name) {
                self.0 |= rhs.0;
            }
        }

        impl ::core::ops::BitAnd for $name {
            type Output = $name;
            fn bitand(self, rhs: $name) -> $name {
                $name(self.0 & rhs.0)
            }
        }

        impl ::core::ops::BitXor for $name {
            type Output = $name;
            fn bitxor(self, rhs: $name) -> $name {
                $name(self.0 ^ rhs.0)
            }
        }

        impl ::core::ops::Not for $name {
            type Output = $name;
            fn not(self) -> $name {
                $name(!self.0)
            }
        }

        impl $crate::Enumeration for $name {
            type Repr = $repr;

            fn descriptor() -> $crate::Descriptor<$repr> {
                $crate::Descriptor::new(stringify!($name))
                    .flags(true)
                    $( .member_with(
                        stringify!($flag),
                        $value,
                        &[ $( ("description", $desc) )? ],
                    ) )+
            }

            fn to_repr(self) -> $repr {
                self.0
            }

            fn from_repr(repr: $repr) -> ::core::option::Option<Self> {
                ::core::option::Option::Some($name(repr))
            }
        }

        impl ::core::convert::From<$name> for $repr {
            fn from(value: $name) -> $repr {
                value.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&$crate::to_string(*self))
            }
        }

        impl ::core::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}({})", stringify!($name), $crate::to_string(*self))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::Enumeration;

    fastenum! {
        enum Weekend: u8 {
            Saturday = 0,
            Sunday = 1 => "day of rest",
        }
    }

    fastenum! {
        flags Caps: u16 {
            Seek = 1,
            Tell = 2,
            Size = 4,
        }
    }

    #[test]
    fn test_enum_form_implements_enumeration() {
        assert_eq!(Weekend::Sunday.to_repr(), 1);
        assert_eq!(Weekend::from_repr(0), Some(Weekend::Saturday));
        assert_eq!(Weekend::from_repr(9), None);
        assert_eq!(u8::from(Weekend::Sunday), 1);
        assert_eq!(Weekend::Sunday.name(), Some("Sunday"));
        assert_eq!(Weekend::Sunday.description(), Some("day of rest"));
        assert_eq!(Weekend::Saturday.description(), None);
    }

    #[test]
    fn test_flags_form_consts_and_ops() {
        let rw = Caps::Seek | Caps::Tell;
        assert_eq!(rw.bits(), 3);
        assert!(rw.contains(Caps::Seek));
        assert!(!rw.contains(Caps::Size));
        assert!(Caps::empty().is_empty());
        assert_eq!((rw & Caps::Seek).bits(), 1);
        assert_eq!((rw ^ Caps::Seek).bits(), 2);
        assert_eq!((!Caps::empty()).bits(), u16::MAX);

        let mut set = Caps::Seek;
        set |= Caps::Size;
        assert_eq!(set.bits(), 5);
    }

    #[test]
    fn test_flags_form_is_total_over_repr() {
        assert_eq!(Caps::from_repr(1234).map(Caps::bits), Some(1234));
        let descriptor = Caps::descriptor();
        assert!(descriptor.is_flags());
        assert_eq!(descriptor.members().len(), 3);
    }
}
