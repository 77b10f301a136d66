//! Registering and using a custom format.
//!
//! Run with: cargo run --example custom_formats

use fastenum::{fastenum, EnumFormat, ParseOptions};
use std::error::Error;

fastenum! {
    pub enum Level: u8 {
        Debug = 10,
        Info = 20,
        Warn = 30,
        Error = 40,
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    // A custom format renders members as lowercase, syslog style.
    let lower = fastenum::register_custom_format(|member| Some(member.name.to_lowercase()));

    let rendered = fastenum::format(Level::Warn, &[EnumFormat::Custom(lower)])?;
    println!("rendered: {}", rendered);
    assert_eq!(rendered, "warn");

    // The same format also drives parsing.
    let options = ParseOptions::new()
        .with_formats(vec![EnumFormat::Name, EnumFormat::Custom(lower)]);
    let parsed = fastenum::parse_with::<Level>("error", &options)?;
    assert_eq!(parsed, 40);
    println!("parsed \"error\" -> {}", parsed);

    // Chains fall back in order: description, then custom, then decimal.
    let chain = [
        EnumFormat::Description,
        EnumFormat::Custom(lower),
        EnumFormat::Decimal,
    ];
    println!("chained: {}", fastenum::format(Level::Info, &chain)?);

    Ok(())
}
