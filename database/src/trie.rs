use crate::data::TrieData;
use crate::error::TableError;

/// двухэтапный поиск в разреженной таблице:
///     блок = index[key >> shift]
///     значение = data[(блок << shift) + (key & mask)]
///
/// ключи за пределами индекса дают значение по умолчанию (нулевой слот)
#[derive(Debug, Clone, Copy)]
pub struct Trie<'a, T>
{
    shift: u32,
    index: &'a [u16],
    data: &'a [T],
}

impl<'a, T: Copy + Default> Trie<'a, T>
{
    #[inline]
    pub fn lookup(&self, key: u32) -> T
    {
        let block = match key.checked_shr(self.shift).and_then(|i| self.index.get(i as usize)) {
            Some(block) => *block as usize,
            None => return T::default(),
        };

        let offset = match block.checked_shl(self.shift) {
            Some(start) => start | (key & self.mask()) as usize,
            None => return T::default(),
        };

        match self.data.get(offset) {
            Some(value) => *value,
            None => T::default(),
        }
    }

    /// маска младших бит ключа - смещения внутри блока
    #[inline(always)]
    fn mask(&self) -> u32
    {
        match 1u32.checked_shl(self.shift) {
            Some(size) => size - 1,
            None => u32::MAX,
        }
    }

    /// количество ключей, которые покрывает индекс
    pub fn covered(&self) -> usize
    {
        match self.index.len().checked_shl(self.shift) {
            Some(covered) => covered,
            None => usize::MAX,
        }
    }

    /// все значения, на которые может указывать индекс
    pub fn values(&self) -> &'a [T]
    {
        self.data
    }

    /// проверка: сдвиг разумен, индекс покрывает required ключей, все блоки лежат внутри data
    pub fn validate(&self, table: &'static str, required: usize) -> Result<(), TableError>
    {
        if self.shift == 0 || self.shift > 16 {
            return Err(TableError::InvalidShift { table, shift: self.shift });
        }

        if self.covered() < required {
            return Err(TableError::IndexTooShort {
                table,
                covered: self.covered(),
                required,
            });
        }

        let block_size = 1usize << self.shift;

        for (position, &block) in self.index.iter().enumerate() {
            if ((block as usize) + 1) * block_size > self.data.len() {
                return Err(TableError::BlockOutOfBounds { table, position, block });
            }
        }

        Ok(())
    }
}

impl<'a, T> From<TrieData<'a, T>> for Trie<'a, T>
{
    fn from(source: TrieData<'a, T>) -> Self
    {
        Self {
            shift: source.shift,
            index: source.index,
            data: source.data,
        }
    }
}
