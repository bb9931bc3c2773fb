use crate::data::UnicodeData;
use crate::data::CODESPACE;
use crate::error::TableError;
use crate::hangul;
use crate::trie::Trie;

/// максимальная длина декомпозиции (U+FDFA)
pub const MAX_DECOMPOSITION_LENGTH: usize = 18;

/// один шаг канонической декомпозиции
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decomposed
{
    /// синглтон - кодпоинт канонически эквивалентен другому кодпоинту
    Singleton(u32),
    /// пара - стартер и следующий за ним кодпоинт
    Pair(u32, u32),
}

impl Decomposed
{
    /// первый кодпоинт декомпозиции
    #[inline]
    pub fn first(self) -> u32
    {
        match self {
            Self::Singleton(code) | Self::Pair(code, _) => code,
        }
    }

    /// второй кодпоинт декомпозиции, если есть
    #[inline]
    pub fn second(self) -> Option<u32>
    {
        match self {
            Self::Singleton(_) => None,
            Self::Pair(_, code) => Some(code),
        }
    }
}

/// таблица декомпозиций
#[derive(Debug, Clone, Copy)]
pub struct Decompositions<'a>
{
    /// кодпоинт -> смещение записи
    index: Trie<'a, u16>,
    /// записи декомпозиций
    data: &'a [u32],
}

impl<'a> Decompositions<'a>
{
    pub fn from_baked(source: &UnicodeData<'a>) -> Self
    {
        Self {
            index: Trie::from(source.decomposition_index),
            data: source.decompositions,
        }
    }

    /// запись декомпозиции кодпоинта: признак декомпозиции совместимости и кодпоинты
    ///
    /// формат записи:
    ///     заголовок: длина << 8 | признак совместимости (0 или 1)
    ///     кодпоинты декомпозиции
    ///
    #[inline]
    fn record(&self, code: u32) -> (bool, &'a [u32])
    {
        if code >= CODESPACE {
            return (false, &[]);
        }

        let offset = self.index.lookup(code) as usize;

        let header = match self.data.get(offset) {
            Some(header) => *header,
            None => return (false, &[]),
        };

        let len = (header >> 8) as usize;

        match self.data.get(offset + 1 .. offset + 1 + len) {
            Some(codes) => (header as u8 != 0, codes),
            None => (false, &[]),
        }
    }

    /// каноническая декомпозиция на один шаг; декомпозиции совместимости не возвращаются
    #[inline]
    pub fn canonical(&self, code: u32) -> Option<Decomposed>
    {
        // слог LVT раскладывается на LV и T, слог LV - на L и V
        if let Some((l, v, t)) = hangul::decompose_syllable(code) {
            return match t {
                Some(t) => Some(Decomposed::Pair(hangul::compose_syllable(l, v, None)?, t)),
                None => Some(Decomposed::Pair(l, v)),
            };
        }

        match self.record(code) {
            (false, [single]) => Some(Decomposed::Singleton(*single)),
            (false, [first, second, ..]) => Some(Decomposed::Pair(*first, *second)),
            _ => None,
        }
    }

    /// декомпозиция совместимости (или каноническая, если другой нет) - как в UnicodeData.txt,
    /// без рекурсии и без алгоритмической декомпозиции хангыль
    #[inline]
    pub fn compatibility(&self, code: u32) -> &'a [u32]
    {
        self.record(code).1
    }

    /// все смещения индекса указывают на полные записи, запись по смещению 0 - пустая
    pub fn validate(&self) -> Result<(), TableError>
    {
        self.index.validate("decomposition", CODESPACE as usize)?;

        if self.data.first() != Some(&0) {
            return Err(TableError::InvalidDecomposition { offset: 0 });
        }

        for &offset in self.index.values() {
            let offset = offset as usize;
            let header = self.data.get(offset).copied().unwrap_or(u32::MAX);

            let len = (header >> 8) as usize;
            let flag = header & 0xFF;

            let malformed = flag > 1
                || len > MAX_DECOMPOSITION_LENGTH
                || (flag == 0 && len > 2)
                || offset + 1 + len > self.data.len();

            if malformed {
                return Err(TableError::InvalidDecomposition { offset });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::data::TrieData;

    /// Ä (U+00C4) -> A + U+0308, Å (U+212B) -> Å (U+00C5), ﬁ (U+FB01) -> f + i (совместимость)
    struct Fixture
    {
        index: Vec<u16>,
        offsets: Vec<u16>,
        data: Vec<u32>,
    }

    impl Fixture
    {
        fn new() -> Self
        {
            let mut index = vec![0; 0x110000 >> 8];
            let mut offsets = vec![0; 4 << 8];

            index[0x00] = 1;
            index[0x21] = 2;
            index[0xFB] = 3;

            offsets[(1 << 8) + 0xC4] = 1;
            offsets[(2 << 8) + 0x2B] = 7;
            offsets[(3 << 8) + 0x01] = 4;

            let data = vec![0, 0x200, 0x41, 0x308, 0x201, 0x66, 0x69, 0x100, 0xC5];

            Self { index, offsets, data }
        }

        fn decompositions(&self) -> Decompositions<'_>
        {
            Decompositions {
                index: Trie::from(TrieData {
                    shift: 8,
                    index: &self.index,
                    data: &self.offsets,
                }),
                data: &self.data,
            }
        }
    }

    #[test]
    fn records()
    {
        let fixture = Fixture::new();
        let decompositions = fixture.decompositions();

        assert_eq!(decompositions.validate(), Ok(()));

        assert_eq!(decompositions.canonical(0xC4), Some(Decomposed::Pair(0x41, 0x308)));
        assert_eq!(decompositions.canonical(0x212B), Some(Decomposed::Singleton(0xC5)));
        assert_eq!(decompositions.canonical(0xFB01), None);
        assert_eq!(decompositions.canonical(0x41), None);

        assert_eq!(decompositions.compatibility(0xC4), [0x41, 0x308]);
        assert_eq!(decompositions.compatibility(0xFB01), [0x66, 0x69]);
        assert!(decompositions.compatibility(0x41).is_empty());
        assert!(decompositions.compatibility(0x110000).is_empty());
    }

    #[test]
    fn hangul()
    {
        let fixture = Fixture::new();
        let decompositions = fixture.decompositions();

        assert_eq!(decompositions.canonical(0xAC00), Some(Decomposed::Pair(0x1100, 0x1161)));
        assert_eq!(decompositions.canonical(0xAC01), Some(Decomposed::Pair(0xAC00, 0x11A8)));
        assert!(decompositions.compatibility(0xAC01).is_empty());
    }

    #[test]
    fn malformed()
    {
        let mut fixture = Fixture::new();
        fixture.data[4] = 0x202;

        assert_eq!(
            fixture.decompositions().validate(),
            Err(TableError::InvalidDecomposition { offset: 4 })
        );

        let mut fixture = Fixture::new();
        fixture.data.truncate(8);

        assert_eq!(
            fixture.decompositions().validate(),
            Err(TableError::InvalidDecomposition { offset: 7 })
        );
    }

    #[test]
    fn decomposed()
    {
        assert_eq!(Decomposed::Pair(0x41, 0x308).first(), 0x41);
        assert_eq!(Decomposed::Pair(0x41, 0x308).second(), Some(0x308));
        assert_eq!(Decomposed::Singleton(0xC5).second(), None);
    }
}
