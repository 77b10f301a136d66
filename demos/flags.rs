//! Flag sets: validity, decomposition and delimiter round-trips.
//!
//! Run with: cargo run --example flags

use fastenum::{fastenum, Delimiter, FormatOptions, ParseOptions};
use std::error::Error;

fastenum! {
    pub flags Perm: u8 {
        Read = 1,
        Write = 2,
        Exec = 4,
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let set = Perm::Read | Perm::Exec;
    println!("set: {} (bits {})", set, set.bits());

    // Any OR of declared flags is valid; stray bits are not
    assert!(fastenum::is_valid::<Perm>(7));
    assert!(!fastenum::is_valid::<Perm>(8));

    // Decompose into declared flags
    if let Some(parts) = fastenum::decompose(set) {
        let names: Vec<_> = parts.iter().map(|member| member.name()).collect();
        println!("decomposed: {:?}", names);
    }

    // Round-trip through a pipe-delimited rendering
    let rendered = fastenum::format_with(
        set,
        &FormatOptions::new().with_delimiter(Delimiter::Pipe),
    )?;
    println!("pipe form: {}", rendered);
    let parsed = fastenum::parse_with::<Perm>(
        &rendered,
        &ParseOptions::new().with_delimiter(Delimiter::Pipe),
    )?;
    assert_eq!(parsed, set.bits());
    println!("✓ Round-trip successful");

    Ok(())
}
