use fastenum::{fastenum, Enumeration};

fastenum! {
    /// Cardinal directions, clockwise from north.
    pub enum Direction: u8 {
        North = 0,
        East = 1,
        South = 2 => "toward the equator",
        West = 3,
    }
}

fastenum! {
    pub flags Caps: u32 {
        Seek = 1,
        Tell = 2,
        Size = 4,
        Resize = 8 => "grow or shrink",
    }
}

fastenum! {
    enum Signed: i16 {
        Negative = -100,
        Zero = 0,
        Positive = 100,
    }
}

#[test]
fn test_enum_descriptor_shape() {
    let descriptor = Direction::descriptor();
    assert_eq!(descriptor.type_name(), "Direction");
    assert!(!descriptor.is_flags());
    let names: Vec<_> = descriptor.members().iter().map(|m| m.name()).collect();
    assert_eq!(names, ["North", "East", "South", "West"]);
}

#[test]
fn test_enum_repr_conversions() {
    assert_eq!(Direction::East.to_repr(), 1);
    assert_eq!(u8::from(Direction::West), 3);
    assert_eq!(Direction::from_repr(2), Some(Direction::South));
    assert_eq!(Direction::from_repr(4), None);
}

#[test]
fn test_enum_descriptions() {
    assert_eq!(Direction::South.description(), Some("toward the equator"));
    assert_eq!(Direction::North.description(), None);
    assert_eq!(Caps::Resize.description(), Some("grow or shrink"));
}

#[test]
fn test_enum_display_uses_names() {
    assert_eq!(Direction::North.to_string(), "North");
    assert_eq!(format!("{}", Direction::West), "West");
}

#[test]
fn test_signed_reprs() {
    assert_eq!(Signed::Negative.to_repr(), -100);
    assert_eq!(Signed::from_repr(-100), Some(Signed::Negative));
    assert_eq!(fastenum::parse::<Signed>("-100").unwrap(), Signed::Negative);
    assert_eq!(fastenum::to_string(Signed::Negative), "Negative");
    assert!(!fastenum::metadata::<Signed>().is_contiguous());
}

#[test]
fn test_flags_constants_and_bits() {
    assert_eq!(Caps::Seek.bits(), 1);
    assert_eq!(Caps::from_bits(6), Caps::Tell | Caps::Size);
    assert_eq!(u32::from(Caps::Tell), 2);
    assert_eq!(Caps::Tell.name(), Some("Tell"));
}

#[test]
fn test_flags_set_operations() {
    let set = Caps::Seek | Caps::Resize;
    assert!(set.contains(Caps::Seek));
    assert!(!set.contains(Caps::Tell));
    assert!(!set.is_empty());
    assert!(Caps::empty().is_empty());
    assert_eq!((set & Caps::Seek).bits(), 1);
    assert_eq!((set ^ Caps::Seek), Caps::Resize);

    let mut accumulated = Caps::empty();
    for flag in [Caps::Seek, Caps::Tell, Caps::Size, Caps::Resize] {
        accumulated |= flag;
    }
    assert_eq!(accumulated.bits(), 15);
}

#[test]
fn test_flags_debug_shows_decomposition() {
    assert_eq!(format!("{:?}", Caps::Seek | Caps::Tell), "Caps(Seek, Tell)");
    assert_eq!(format!("{:?}", Caps::from_bits(32)), "Caps(32)");
}

#[test]
fn test_combination_name_is_none_unless_declared() {
    let set = Caps::Seek | Caps::Tell;
    assert_eq!(set.name(), None);
    assert_eq!(fastenum::to_string(set), "Seek, Tell");
}

#[test]
fn test_trailing_comma_and_attributes_accepted() {
    fastenum! {
        /// A tiny enum exercising the optional trailing comma.
        enum Tiny: u8 {
            Only = 1,
        }
    }
    assert_eq!(fastenum::member_count::<Tiny>(), 1);
    assert_eq!(Tiny::Only.name(), Some("Only"));
}
