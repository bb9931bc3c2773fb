use criterion::{criterion_group, criterion_main, Criterion};
use unicode_database::Decomposed;
use unicode_database::UnicodeDatabase;

mod group;

#[inline(never)]
fn properties(database: &UnicodeDatabase, codes: &[u32]) -> u32
{
    codes.iter().fold(0, |acc, &code| {
        let properties = database.properties(code);
        acc ^ u8::from(properties.general_category) as u32 ^ u8::from(properties.script) as u32
    })
}

#[inline(never)]
fn decompose(database: &UnicodeDatabase, codes: &[u32]) -> u32
{
    codes.iter().fold(0, |acc, &code| match database.decompose(code) {
        Some(Decomposed::Pair(a, b)) => acc ^ a ^ b,
        Some(Decomposed::Singleton(a)) => acc ^ a,
        None => acc,
    })
}

#[inline(never)]
fn compose(database: &UnicodeDatabase, codes: &[u32]) -> u32
{
    codes
        .chunks_exact(2)
        .fold(0, |acc, pair| acc ^ database.compose(pair[0], pair[1]).unwrap_or(0))
}

#[inline(never)]
fn linebreak(database: &UnicodeDatabase, codes: &[u32]) -> u32
{
    codes.iter().fold(0, |acc, &code| {
        acc ^ u8::from(database.resolved_linebreak_class(code)) as u32 ^ database.mirror(code)
    })
}

group!(
    bench_properties,
    "properties",
    "database",
    UnicodeDatabase::try_new().unwrap(),
    properties
);

group!(
    bench_decompose,
    "decompose",
    "database",
    UnicodeDatabase::try_new().unwrap(),
    decompose
);

group!(
    bench_compose,
    "compose",
    "database",
    UnicodeDatabase::try_new().unwrap(),
    compose
);

group!(
    bench_linebreak,
    "linebreak",
    "database",
    UnicodeDatabase::try_new().unwrap(),
    linebreak
);

criterion_group!(benches, bench_properties, bench_decompose, bench_compose, bench_linebreak);
criterion_main!(benches);
