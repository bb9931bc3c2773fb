use icu_normalizer::properties::CanonicalComposition;
use icu_normalizer::properties::CanonicalDecomposition;
use icu_normalizer::properties::Decomposed as IcuDecomposed;
use unicode_database::Decomposed;

/// символы с канонической декомпозицией, появившиеся в Unicode 16.0 -
/// данных ICU для них ещё нет
const NEW_IN_16: &[(u32, u32)] = &[
    (0x105C9, 0x105C9),
    (0x105E4, 0x105E4),
    (0x11383, 0x113C8),
    (0x16121, 0x16128),
    (0x16D68, 0x16D6A),
];

fn is_new(code: u32) -> bool
{
    NEW_IN_16.iter().any(|&(first, last)| (first ..= last).contains(&code))
}

/// декомпозиция ICU. None - ICU не даёт ответа: для нестартеров ICU возвращает
/// Singleton(U+FFFD), отсылая к полным данным декомпозиции
fn icu_decompose(decomposition: &CanonicalDecomposition, c: char) -> Option<Option<Decomposed>>
{
    match decomposition.decompose(c) {
        IcuDecomposed::Default => Some(None),
        IcuDecomposed::Singleton(char::REPLACEMENT_CHARACTER) => None,
        IcuDecomposed::Singleton(a) => Some(Some(Decomposed::Singleton(a as u32))),
        IcuDecomposed::Expansion(a, b) => Some(Some(Decomposed::Pair(a as u32, b as u32))),
    }
}

/// декомпозиция начинается с нестартера (U+0344, U+0F73 ...)
fn starts_with_non_starter(decomposed: Option<Decomposed>) -> bool
{
    match decomposed {
        Some(decomposed) => unicode_database::combining_class(decomposed.first()) != 0,
        None => false,
    }
}

/// сравниваем каноническую декомпозицию с ICU
#[test]
fn decompose()
{
    let decomposition = CanonicalDecomposition::new();
    let mut compared = 0;

    for c in (0 .. 0x110000).filter_map(char::from_u32) {
        let code = c as u32;

        let Some(expected) = icu_decompose(&decomposition, c) else {
            continue;
        };

        let decomposed = unicode_database::decompose(code);

        match expected {
            Some(_) => assert_eq!(decomposed, expected, "U+{:04X}", code),
            None => assert!(
                decomposed.is_none() || is_new(code) || starts_with_non_starter(decomposed),
                "U+{:04X}",
                code
            ),
        }

        compared += 1;
    }

    assert!(compared > 0x100000);
}

/// нестартеры: там, где ICU отвечает маркером U+FFFD, проверяем значения напрямую
#[test]
fn decompose_non_starters()
{
    let decomposition = CanonicalDecomposition::new();

    assert_eq!(unicode_database::combining_class(0x300), 230);
    assert_eq!(unicode_database::decompose(0x300), None);
    assert_eq!(unicode_database::decompose(0x340), Some(Decomposed::Singleton(0x300)));
    assert_eq!(unicode_database::decompose(0x344), Some(Decomposed::Pair(0x308, 0x301)));

    for code in 0x300 .. 0x370 {
        let Some(c) = char::from_u32(code) else {
            continue;
        };

        if let Some(Some(expected)) = icu_decompose(&decomposition, c) {
            assert_eq!(unicode_database::decompose(code), Some(expected), "U+{:04X}", code);
        }
    }
}

/// сравниваем композицию пар, полученных декомпозицией, с ICU
#[test]
fn compose()
{
    let composition = CanonicalComposition::new();
    let mut compared = 0;

    for code in 0 .. 0x110000 {
        let (a, b) = match unicode_database::decompose(code) {
            Some(Decomposed::Pair(a, b)) => (a, b),
            _ => continue,
        };

        let (Some(first), Some(second)) = (char::from_u32(a), char::from_u32(b)) else {
            panic!("U+{:04X}", code);
        };

        let expected = composition.compose(first, second).map(u32::from);
        let composed = unicode_database::compose(a, b);

        match expected {
            Some(_) => assert_eq!(composed, expected, "U+{:04X}", code),
            None => assert!(composed.is_none() || is_new(code), "U+{:04X}", code),
        }

        compared += 1;
    }

    assert!(compared > 11172);
}

/// все пары чамо L + V, слоги LV + все T и чамо, не являющиеся T
#[test]
fn compose_hangul()
{
    let composition = CanonicalComposition::new();

    let jamo = (0x1100 .. 0x1200).filter_map(char::from_u32);
    let starters = (0x1100 .. 0x1113).chain((0xAC00 .. 0xD7A4).step_by(28 * 7));

    for a in starters.filter_map(char::from_u32) {
        for b in jamo.clone() {
            assert_eq!(
                unicode_database::compose(a as u32, b as u32),
                composition.compose(a, b).map(u32::from),
                "U+{:04X} U+{:04X}",
                a as u32,
                b as u32
            );
        }
    }
}
