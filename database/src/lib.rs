//! база данных символов Unicode (UCD): свойства кодпоинтов, декомпозиция и композиция на один шаг,
//! зеркальные символы и парные скобки, классы переноса строк
//!
//! функции верхнего уровня работают с таблицами, запечёнными в библиотеку. они загружаются
//! и проверяются один раз, при первом обращении

#[macro_use]
extern crate lazy_static;

pub use data::Reindex;
pub use data::TrieData;
pub use data::UnicodeData;
pub use database::UnicodeDatabase;
pub use decomposition::Decomposed;
pub use decomposition::MAX_DECOMPOSITION_LENGTH;
pub use error::PropertyError;
pub use error::TableError;
pub use properties::*;

pub mod hangul;

mod composition;
mod data;
mod database;
mod decomposition;
mod error;
mod mirror;
mod properties;
mod trie;

lazy_static! {
    /// таблицы, запечённые в библиотеку
    static ref DATABASE: UnicodeDatabase<'static> = load();
}

/// загрузка запечённых таблиц; повреждённые таблицы - фатальная ошибка
fn load() -> UnicodeDatabase<'static>
{
    match UnicodeDatabase::try_new() {
        Ok(database) => database,
        Err(error) => {
            log::error!("baked Unicode tables are corrupted: {}", error);
            panic!("baked Unicode tables are corrupted: {}", error);
        }
    }
}

/// версия Unicode, из которой получены таблицы
pub fn unicode_version() -> &'static str
{
    DATABASE.unicode_version()
}

/// все свойства кодпоинта
#[inline]
pub fn properties(code: u32) -> Properties
{
    DATABASE.properties(code)
}

/// основная категория (general category)
#[inline]
pub fn general_category(code: u32) -> GeneralCategory
{
    DATABASE.general_category(code)
}

/// письменность (script)
#[inline]
pub fn script(code: u32) -> Script
{
    DATABASE.script(code)
}

/// класс направления (bidi class)
#[inline]
pub fn bidi_class(code: u32) -> BidiClass
{
    DATABASE.bidi_class(code)
}

/// класс канонического комбинирования (canonical combining class)
#[inline]
pub fn combining_class(code: u32) -> u8
{
    DATABASE.combining_class(code)
}

/// ширина в восточноазиатском контексте (east asian width)
#[inline]
pub fn east_asian_width(code: u32) -> EastAsianWidth
{
    DATABASE.east_asian_width(code)
}

/// зеркальный символ двунаправленного текста (bidi mirrored)
#[inline]
pub fn is_mirrored(code: u32) -> bool
{
    DATABASE.is_mirrored(code)
}

/// быстрая проверка NFC (NFC_Quick_Check)
#[inline]
pub fn quick_check(code: u32) -> QuickCheck
{
    DATABASE.quick_check(code)
}

/// каноническая декомпозиция на один шаг
#[inline]
pub fn decompose(code: u32) -> Option<Decomposed>
{
    DATABASE.decompose(code)
}

/// декомпозиция совместимости на один шаг
#[inline]
pub fn compat_decompose(code: u32) -> &'static [u32]
{
    DATABASE.compat_decompose(code)
}

/// каноническая композиция пары кодпоинтов
#[inline]
pub fn compose(a: u32, b: u32) -> Option<u32>
{
    DATABASE.compose(a, b)
}

/// зеркальный символ (bidi mirroring glyph), или сам кодпоинт
#[inline]
pub fn mirror(code: u32) -> u32
{
    DATABASE.mirror(code)
}

/// парная скобка (bidi paired bracket), или сам кодпоинт
#[inline]
pub fn paired_bracket(code: u32) -> u32
{
    DATABASE.paired_bracket(code)
}

/// тип парной скобки (bidi paired bracket type)
#[inline]
pub fn paired_bracket_type(code: u32) -> BracketType
{
    DATABASE.paired_bracket_type(code)
}

/// класс переноса строк (line break)
#[inline]
pub fn linebreak_class(code: u32) -> LineBreak
{
    DATABASE.linebreak_class(code)
}

/// разрешённый класс переноса строк
#[inline]
pub fn resolved_linebreak_class(code: u32) -> LineBreak
{
    DATABASE.resolved_linebreak_class(code)
}
