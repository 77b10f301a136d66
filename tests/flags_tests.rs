use fastenum::{fastenum, Delimiter, EnumFormat, Error, FormatOptions, ParseOptions};

fastenum! {
    pub flags Perm: u8 {
        Read = 1,
        Write = 2,
        Exec = 4,
    }
}

fastenum! {
    pub flags Style: u8 {
        Bold = 1,
        Italic = 2,
        Emphasis = 3,
        Underline = 4,
    }
}

fastenum! {
    pub flags Mode: u8 {
        None = 0,
        Append = 1,
        Create = 2,
        Truncate = 8 => "drop existing content",
    }
}

fastenum! {
    pub flags Odd: u8 {
        Three = 3,
        Five = 5,
    }
}

#[test]
fn test_mask_covers_only_declared_bits() {
    let cache = fastenum::metadata::<Perm>();
    assert_eq!(cache.all_flags(), 7);
    for value in 0u8..=255 {
        assert_eq!(cache.is_valid(value), value & !7 == 0, "value {}", value);
    }
}

#[test]
fn test_exact_name_wins_over_decomposition() {
    // 3 is declared as Emphasis, so decomposition into Bold | Italic never runs.
    assert_eq!(fastenum::to_string(Style::Emphasis), "Emphasis");
    assert_eq!(fastenum::to_string(Style::Bold | Style::Italic), "Emphasis");
}

#[test]
fn test_greedy_decomposition_prefers_larger_values() {
    // 7 = Emphasis(3) | Underline(4); greedy picks 4 then 3, rendered ascending.
    let set = Style::Bold | Style::Italic | Style::Underline;
    assert_eq!(fastenum::to_string(set), "Emphasis, Underline");

    let parts = fastenum::decompose(set).unwrap();
    let names: Vec<_> = parts.iter().map(|member| member.name()).collect();
    assert_eq!(names, ["Emphasis", "Underline"]);
}

#[test]
fn test_undecomposable_value_renders_decimal() {
    // 6 = 0b110: Five covers bit 0b101, Three 0b011; neither subset-matches.
    assert_eq!(fastenum::to_string(Odd::from_bits(6)), "6");
    assert!(fastenum::decompose(Odd::from_bits(6)).is_none());
}

#[test]
fn test_zero_renders_declared_name_or_zero() {
    assert_eq!(fastenum::to_string(Mode::None), "None");
    assert_eq!(fastenum::to_string(Perm::empty()), "0");
    assert_eq!(fastenum::parse::<Perm>("0").unwrap(), Perm::empty());
}

#[test]
fn test_zero_member_does_not_join_decompositions() {
    let set = Mode::Append | Mode::Create;
    assert_eq!(fastenum::to_string(set), "Append, Create");
}

#[test]
fn test_delimiters_round_trip() {
    let set = Perm::Read | Perm::Exec;

    let pipe = FormatOptions::new().with_delimiter(Delimiter::Pipe);
    let rendered = fastenum::format_with(set, &pipe).unwrap();
    assert_eq!(rendered, "Read | Exec");
    let parsed = fastenum::parse_with::<Perm>(
        &rendered,
        &ParseOptions::new().with_delimiter(Delimiter::Pipe),
    )
    .unwrap();
    assert_eq!(parsed, set.bits());

    let plus = Delimiter::Custom("+".to_string());
    let rendered = fastenum::format_with(set, &FormatOptions::new().with_delimiter(plus.clone()))
        .unwrap();
    assert_eq!(rendered, "Read+Exec");
    let parsed = fastenum::parse_with::<Perm>(
        &rendered,
        &ParseOptions::new().with_delimiter(plus),
    )
    .unwrap();
    assert_eq!(parsed, set.bits());
}

#[test]
fn test_aliased_flag_values() {
    fastenum! {
        pub flags Io: u8 {
            Input = 1,
            Stdin = 1,
            Output = 2,
        }
    }

    // First declared is primary for rendering; the alias still parses.
    assert_eq!(fastenum::to_string(Io::Stdin), "Input");
    assert_eq!(fastenum::parse::<Io>("Stdin").unwrap().bits(), 1);
    assert_eq!(fastenum::member_count::<Io>(), 3);
    assert_eq!(fastenum::metadata::<Io>().unique_members().count(), 2);
}

#[test]
fn test_strict_conversion_rejects_combinations() {
    use fastenum::EnumValidation;

    assert_eq!(
        fastenum::to_value::<Perm>(3, EnumValidation::Default).unwrap(),
        3
    );
    assert!(matches!(
        fastenum::to_value::<Perm>(3, EnumValidation::Strict),
        Err(Error::InvalidValue { .. })
    ));
    assert_eq!(
        fastenum::to_value::<Perm>(4, EnumValidation::Strict).unwrap(),
        4
    );
}

#[test]
fn test_description_format_on_flags() {
    let rendered = fastenum::format(Mode::Truncate, &[EnumFormat::Description]).unwrap();
    assert_eq!(rendered, "drop existing content");
    // A combination has no single member, so description yields nothing and
    // the chain falls back to decimal.
    let rendered =
        fastenum::format(Mode::Append | Mode::Create, &[EnumFormat::Description]).unwrap();
    assert_eq!(rendered, "3");
}

#[test]
fn test_hex_format_round_trip() {
    let rendered = fastenum::format(Perm::Read | Perm::Exec, &[EnumFormat::Hex]).unwrap();
    assert_eq!(rendered, "05");
    let options = ParseOptions::new().with_formats(vec![EnumFormat::Hex]);
    assert_eq!(fastenum::parse_with::<Perm>("05", &options).unwrap(), 5);
}

#[test]
fn test_flag_token_errors_name_offender() {
    let err = fastenum::parse::<Perm>("Read, Sleep").unwrap_err();
    match err {
        Error::Parse { token, .. } => assert_eq!(token, "Sleep"),
        other => panic!("expected Parse error, got {:?}", other),
    }
}
