use thiserror::Error;

/// ошибка разбора значения свойства
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError
{
    #[error("unknown {property} abbreviation `{abbr}`")]
    UnknownAbbreviation { property: &'static str, abbr: String },
    #[error("unknown {property} value {value}")]
    UnknownValue { property: &'static str, value: u8 },
}

/// нарушение инвариантов запечённых таблиц
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError
{
    #[error("{table}: trie shift {shift} is out of range")]
    InvalidShift { table: &'static str, shift: u32 },
    #[error("{table}: trie index covers {covered} keys, {required} required")]
    IndexTooShort { table: &'static str, covered: usize, required: usize },
    #[error("{table}: block {block} at index {position} is out of data bounds")]
    BlockOutOfBounds { table: &'static str, position: usize, block: u16 },
    #[error("property slot {slot} at {position} points past {records} records")]
    SlotOutOfBounds { position: usize, slot: u16, records: usize },
    #[error("property record {index} is invalid")]
    InvalidRecord
    {
        index: usize,
        #[source]
        source: PropertyError,
    },
    #[error("property record 0 is not the default record")]
    DefaultRecord,
    #[error("decomposition record at offset {offset} is malformed")]
    InvalidDecomposition { offset: usize },
    #[error("{table}: reindex entry {position} is unsorted, overlapping or out of range")]
    InvalidReindex { table: &'static str, position: usize },
    #[error("{table}: entry {position} breaks the sort order")]
    Unsorted { table: &'static str, position: usize },
    #[error("bracket pair {position} has invalid type {value}")]
    InvalidBracketType { position: usize, value: u8 },
}
