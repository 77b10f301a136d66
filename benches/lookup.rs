use criterion::{black_box, criterion_group, criterion_main, Criterion};

use fastenum::{fastenum, EnumValidation};

fastenum! {
    pub enum Weekday: u8 {
        Monday = 0,
        Tuesday = 1,
        Wednesday = 2,
        Thursday = 3,
        Friday = 4,
        Saturday = 5,
        Sunday = 6,
    }
}

fastenum! {
    pub enum Opcode: u16 {
        Nop = 0,
        Load = 10,
        Store = 20,
        Add = 35,
        Jump = 80,
        Call = 200,
        Ret = 450,
        Halt = 1000,
    }
}

fastenum! {
    pub flags Caps: u32 {
        Seek = 1,
        Tell = 2,
        Size = 4,
        Resize = 8,
        Lock = 16,
        Sync = 32,
        Map = 64,
        Direct = 128,
    }
}

fn benchmark_membership(c: &mut Criterion) {
    // Warm the caches so construction cost stays out of the measurements.
    fastenum::metadata::<Weekday>();
    fastenum::metadata::<Opcode>();

    c.bench_function("is_defined_contiguous", |b| {
        b.iter(|| fastenum::is_defined::<Weekday>(black_box(4)))
    });

    c.bench_function("is_defined_sparse", |b| {
        b.iter(|| fastenum::is_defined::<Opcode>(black_box(450)))
    });

    c.bench_function("is_valid_flags", |b| {
        b.iter(|| fastenum::is_valid::<Caps>(black_box(0b1010_1010)))
    });
}

fn benchmark_parse(c: &mut Criterion) {
    c.bench_function("parse_name", |b| {
        b.iter(|| fastenum::parse::<Weekday>(black_box("Thursday")))
    });

    c.bench_function("parse_name_ignore_case", |b| {
        b.iter(|| fastenum::parse_ignore_case::<Weekday>(black_box("tHuRsDaY")))
    });

    c.bench_function("parse_numeric_literal", |b| {
        b.iter(|| fastenum::parse_value::<Opcode>(black_box("450")))
    });

    c.bench_function("parse_flag_combination", |b| {
        b.iter(|| fastenum::parse::<Caps>(black_box("Seek, Lock, Direct")))
    });
}

fn benchmark_format(c: &mut Criterion) {
    c.bench_function("to_string_name", |b| {
        b.iter(|| fastenum::to_string(black_box(Weekday::Friday)))
    });

    c.bench_function("to_string_flag_decomposition", |b| {
        let set = Caps::Seek | Caps::Lock | Caps::Direct;
        b.iter(|| fastenum::to_string(black_box(set)))
    });
}

fn benchmark_conversion(c: &mut Criterion) {
    c.bench_function("to_value_validated", |b| {
        b.iter(|| fastenum::to_value::<Opcode>(black_box(200i64), EnumValidation::Default))
    });
}

criterion_group!(
    benches,
    benchmark_membership,
    benchmark_parse,
    benchmark_format,
    benchmark_conversion
);
criterion_main!(benches);
