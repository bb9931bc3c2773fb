use crate::data::Reindex;
use crate::data::CODESPACE;
use crate::data::UnicodeData;
use crate::error::TableError;
use crate::hangul;
use crate::trie::Trie;

/// таблицы канонической композиции
///
/// кодпоинты, встречающиеся в парах композиции первыми / вторыми, отображаются на плотные индексы -
/// строки и столбцы матрицы, в ячейках которой - результат композиции или 0.
/// исключения композиции в матрицу не попадают
#[derive(Debug, Clone, Copy)]
pub struct Compositions<'a>
{
    first: &'a [Reindex],
    last: &'a [Reindex],
    total_first: u32,
    total_last: u32,
    matrix: Trie<'a, u32>,
}

impl<'a> Compositions<'a>
{
    pub fn from_baked(source: &UnicodeData<'a>) -> Self
    {
        Self {
            first: source.composition_first,
            last: source.composition_last,
            total_first: source.total_first,
            total_last: source.total_last,
            matrix: Trie::from(source.compositions),
        }
    }

    /// композиция пары кодпоинтов
    #[inline]
    pub fn compose(&self, a: u32, b: u32) -> Option<u32>
    {
        if hangul::is_trailing_jamo(b) {
            return compose_hangul(a, b);
        }

        let first = reindex(a, self.first)?;
        let last = reindex(b, self.last)?;

        let coordinate = first.checked_mul(self.total_last)?.checked_add(last)?;

        match self.matrix.lookup(coordinate) {
            0 => None,
            code => Some(code),
        }
    }

    /// отрезки отсортированы, не пересекаются и лежат в пределах плотных индексов,
    /// матрица покрывает все пары индексов
    pub fn validate(&self) -> Result<(), TableError>
    {
        validate_reindex("composition first", self.first, self.total_first)?;
        validate_reindex("composition last", self.last, self.total_last)?;

        let required = self.total_first as usize * self.total_last as usize;

        self.matrix.validate("composition", required)
    }
}

/// L + V -> LV, LV + T -> LVT. остальные комбинации - композиции нет
#[inline]
fn compose_hangul(a: u32, b: u32) -> Option<u32>
{
    match hangul::decompose_syllable(a) {
        Some((l, v, None)) => hangul::compose_syllable(l, v, Some(b)),
        Some(_) => None,
        None => hangul::compose_syllable(a, b, None),
    }
}

/// плотный индекс кодпоинта
#[inline]
fn reindex(code: u32, table: &[Reindex]) -> Option<u32>
{
    let position = table.partition_point(|entry| entry.start <= code).checked_sub(1)?;
    let entry = table.get(position)?;

    let offset = code - entry.start;

    match offset < entry.count as u32 {
        true => Some(entry.index as u32 + offset),
        false => None,
    }
}

fn validate_reindex(table: &'static str, entries: &[Reindex], total: u32) -> Result<(), TableError>
{
    let mut next_start = 0;

    for (position, entry) in entries.iter().enumerate() {
        let end = entry.start.checked_add(entry.count as u32);
        let last_index = (entry.index as u32).checked_add(entry.count as u32);

        let end = match (end, last_index) {
            (Some(end), Some(last_index))
                if entry.count != 0
                    && entry.start >= next_start
                    && end <= CODESPACE
                    && last_index <= total =>
            {
                end
            }
            _ => return Err(TableError::InvalidReindex { table, position }),
        };

        next_start = end;
    }

    Ok(())
}
