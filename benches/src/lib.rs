use unicode_database::Decomposed;

/// наборы кодпоинтов для бенчмарков: название и кодпоинты
pub fn samples() -> Vec<(&'static str, Vec<u32>)>
{
    vec![
        ("latin", (0x0000 .. 0x0250).collect()),
        ("cyrillic", (0x0400 .. 0x0530).collect()),
        ("cjk", (0x4E00 .. 0xA000).collect()),
        ("hangul", (0xAC00 .. 0xD7A4).collect()),
        ("astral", (0x10000 .. 0x30000).step_by(7).collect()),
    ]
}

/// пары кодпоинтов, полученные канонической декомпозицией, подряд: a0, b0, a1, b1, ..
pub fn composition_pairs() -> Vec<u32>
{
    (0 .. 0x110000)
        .filter_map(|code| match unicode_database::decompose(code) {
            Some(Decomposed::Pair(a, b)) => Some([a, b]),
            _ => None,
        })
        .flatten()
        .collect()
}
