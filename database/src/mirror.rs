use crate::data::UnicodeData;
use crate::error::TableError;
use crate::properties::BracketType;

/// зеркальные символы и парные скобки двунаправленного текста.
/// все такие символы находятся в BMP, поэтому пары хранятся как u16
#[derive(Debug, Clone, Copy)]
pub struct Mirrors<'a>
{
    /// BidiMirroring.txt
    mirror_pairs: &'a [(u16, u16)],
    /// BidiBrackets.txt
    bracket_pairs: &'a [(u16, u16, u8)],
}

impl<'a> Mirrors<'a>
{
    pub fn from_baked(source: &UnicodeData<'a>) -> Self
    {
        Self {
            mirror_pairs: source.mirror_pairs,
            bracket_pairs: source.bracket_pairs,
        }
    }

    /// зеркальный кодпоинт, если он есть в таблице
    #[inline]
    pub fn mirror(&self, code: u32) -> Option<u32>
    {
        let key = u16::try_from(code).ok()?;

        match self.mirror_pairs.binary_search_by_key(&key, |&(from, _)| from) {
            Ok(position) => Some(self.mirror_pairs[position].1 as u32),
            Err(_) => None,
        }
    }

    /// парная скобка и тип скобки
    #[inline]
    pub fn bracket(&self, code: u32) -> Option<(u32, BracketType)>
    {
        let key = u16::try_from(code).ok()?;
        let position = self.bracket_pairs.binary_search_by_key(&key, |&(from, ..)| from).ok()?;

        let (_, pair, kind) = self.bracket_pairs[position];

        match BracketType::try_from(kind) {
            Ok(BracketType::None) | Err(_) => None,
            Ok(kind) => Some((pair as u32, kind)),
        }
    }

    /// обе таблицы строго отсортированы по исходному кодпоинту, у скобок корректный тип
    pub fn validate(&self) -> Result<(), TableError>
    {
        let mirrors = self.mirror_pairs.iter().map(|&(from, _)| from);
        check_sorted("mirror pairs", mirrors)?;

        let brackets = self.bracket_pairs.iter().map(|&(from, ..)| from);
        check_sorted("bracket pairs", brackets)?;

        for (position, &(_, _, value)) in self.bracket_pairs.iter().enumerate() {
            if value > 1 {
                return Err(TableError::InvalidBracketType { position, value });
            }
        }

        Ok(())
    }
}

fn check_sorted(table: &'static str, keys: impl Iterator<Item = u16>) -> Result<(), TableError>
{
    let mut previous = None;

    for (position, key) in keys.enumerate() {
        if previous.map_or(false, |previous| previous >= key) {
            return Err(TableError::Unsorted { table, position });
        }

        previous = Some(key);
    }

    Ok(())
}
