//! Basic enum metadata queries, parsing and formatting.
//!
//! Run with: cargo run --example basic

use fastenum::{fastenum, EnumValidation};
use std::error::Error;

fastenum! {
    pub enum Color: u8 {
        Red = 0,
        Green = 1 => "the green channel",
        Blue = 2,
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    // Parse by name, case-sensitive and not
    let green: Color = fastenum::parse("Green")?;
    println!("parsed: {:?}", green);
    let also_green: Color = fastenum::parse_ignore_case("GREEN")?;
    assert_eq!(green, also_green);

    // Format back to text
    println!("display: {}", fastenum::to_string(Color::Blue));

    // Walk the declared members
    for member in fastenum::members::<Color>() {
        println!(
            "{} = {} ({})",
            member.name(),
            member.value(),
            member.description().unwrap_or("no description")
        );
    }

    // Checked conversion from a wider integer
    let value = fastenum::to_value::<Color>(2i64, EnumValidation::Default)?;
    println!("converted: {}", value);

    // Membership queries
    assert!(fastenum::is_defined::<Color>(1));
    assert!(!fastenum::is_defined::<Color>(7));
    println!("✓ All queries answered from one cached metadata table");

    Ok(())
}
