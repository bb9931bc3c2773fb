use criterion::{criterion_group, criterion_main, Criterion};
use icu_normalizer::properties::CanonicalComposition;
use icu_normalizer::properties::CanonicalDecomposition;
use icu_normalizer::properties::Decomposed;

mod group;

#[inline(never)]
fn decompose(decomposition: &CanonicalDecomposition, codes: &[u32]) -> u32
{
    codes.iter().filter_map(|&code| char::from_u32(code)).fold(0, |acc, c| {
        match decomposition.decompose(c) {
            Decomposed::Expansion(a, b) => acc ^ a as u32 ^ b as u32,
            Decomposed::Singleton(a) => acc ^ a as u32,
            Decomposed::Default => acc,
        }
    })
}

#[inline(never)]
fn compose(composition: &CanonicalComposition, codes: &[u32]) -> u32
{
    codes.chunks_exact(2).fold(0, |acc, pair| {
        match (char::from_u32(pair[0]), char::from_u32(pair[1])) {
            (Some(a), Some(b)) => acc ^ composition.compose(a, b).map_or(0, u32::from),
            _ => acc,
        }
    })
}

group!(
    bench_decompose,
    "decompose",
    "icu",
    CanonicalDecomposition::new(),
    decompose
);

group!(
    bench_compose,
    "compose",
    "icu",
    CanonicalComposition::new(),
    compose
);

criterion_group!(benches, bench_decompose, bench_compose);
criterion_main!(benches);
