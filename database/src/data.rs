/// количество кодпоинтов Unicode, ключи таблиц кодпоинтов лежат в 0 .. CODESPACE
pub const CODESPACE: u32 = 0x110000;

/// двухуровневый индекс: блоки по 1 << shift значений
#[derive(Debug, Clone, Copy)]
pub struct TrieData<'a, T>
{
    /// log2 размера блока
    pub shift: u32,
    /// номер блока в data для старших бит ключа
    pub index: &'a [u16],
    /// значения, сгруппированные в блоки
    pub data: &'a [T],
}

/// отрезок последовательных кодпоинтов, отображаемый на последовательные плотные индексы
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reindex
{
    /// первый кодпоинт отрезка
    pub start: u32,
    /// количество кодпоинтов в отрезке
    pub count: u16,
    /// плотный индекс первого кодпоинта
    pub index: u16,
}

/// запечённые таблицы UCD
pub struct UnicodeData<'a>
{
    /// версия Unicode, из которой получены таблицы
    pub version: &'a str,
    /// уникальные записи свойств, формат - см. Properties
    pub records: &'a [u64],
    /// кодпоинт -> номер записи свойств
    pub properties: TrieData<'a, u16>,
    /// кодпоинт -> смещение записи декомпозиции в decompositions
    pub decomposition_index: TrieData<'a, u16>,
    /// записи декомпозиции:
    ///     заголовок - длина << 8 | признак декомпозиции совместимости,
    ///     затем кодпоинты декомпозиции
    /// по смещению 0 - пустая запись
    pub decompositions: &'a [u32],
    /// первые кодпоинты пар композиции -> плотные индексы (строки матрицы)
    pub composition_first: &'a [Reindex],
    /// вторые кодпоинты пар композиции -> плотные индексы (столбцы матрицы)
    pub composition_last: &'a [Reindex],
    /// количество строк матрицы композиции
    pub total_first: u32,
    /// количество столбцов матрицы композиции
    pub total_last: u32,
    /// матрица композиции: first * total_last + last -> кодпоинт или 0
    pub compositions: TrieData<'a, u32>,
    /// зеркальные пары (from, to), отсортированы по from
    pub mirror_pairs: &'a [(u16, u16)],
    /// парные скобки (from, to, тип), отсортированы по from, тип: 0 - открывающая, 1 - закрывающая
    pub bracket_pairs: &'a [(u16, u16, u8)],
}

/// таблицы, запечённые в библиотеку
pub fn baked<'a>() -> UnicodeData<'a>
{
    include!("./../../data/ucd.rs.txt")
}
