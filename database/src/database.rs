use crate::composition::Compositions;
use crate::data;
use crate::data::UnicodeData;
use crate::data::CODESPACE;
use crate::decomposition::Decomposed;
use crate::decomposition::Decompositions;
use crate::error::TableError;
use crate::mirror::Mirrors;
use crate::properties::*;
use crate::trie::Trie;

/// база данных символов Unicode, загруженная из запечённых таблиц
///
/// все запросы определены для любого u32: кодпоинты за пределами Unicode (>= 0x110000)
/// получают свойства по умолчанию, не имеют декомпозиций, композиций и зеркальных пар
#[derive(Debug, Clone)]
pub struct UnicodeDatabase<'a>
{
    /// версия Unicode
    version: &'a str,
    /// уникальные записи свойств, запись 0 - по умолчанию
    records: Vec<Properties>,
    /// кодпоинт -> номер записи
    properties: Trie<'a, u16>,
    /// декомпозиции
    decompositions: Decompositions<'a>,
    /// композиции
    compositions: Compositions<'a>,
    /// зеркальные символы и парные скобки
    mirrors: Mirrors<'a>,
}

impl UnicodeDatabase<'static>
{
    /// таблицы, запечённые в библиотеку
    pub fn try_new() -> Result<Self, TableError>
    {
        Self::try_from_baked(data::baked())
    }
}

impl<'a> UnicodeDatabase<'a>
{
    /// заранее подготовленные данные. записи свойств раскладываются и проверяются всегда,
    /// остальные инварианты таблиц - при включенной фиче validate
    pub fn try_from_baked(source: UnicodeData<'a>) -> Result<Self, TableError>
    {
        let records = source
            .records
            .iter()
            .enumerate()
            .map(|(index, &packed)| {
                Properties::try_from(packed)
                    .map_err(|source| TableError::InvalidRecord { index, source })
            })
            .collect::<Result<Vec<Properties>, TableError>>()?;

        if records.first() != Some(&Properties::DEFAULT) {
            return Err(TableError::DefaultRecord);
        }

        let database = Self {
            version: source.version,
            records,
            properties: Trie::from(source.properties),
            decompositions: Decompositions::from_baked(&source),
            compositions: Compositions::from_baked(&source),
            mirrors: Mirrors::from_baked(&source),
        };

        if cfg!(feature = "validate") {
            database.validate()?;
        }

        log::debug!(
            "Unicode {}: {} property records, {} decomposition words, {}x{} composition matrix",
            source.version,
            database.records.len(),
            source.decompositions.len(),
            source.total_first,
            source.total_last,
        );

        Ok(database)
    }

    fn validate(&self) -> Result<(), TableError>
    {
        self.properties.validate("properties", CODESPACE as usize)?;

        let records = self.records.len();

        for (position, &slot) in self.properties.values().iter().enumerate() {
            if slot as usize >= records {
                return Err(TableError::SlotOutOfBounds { position, slot, records });
            }
        }

        self.decompositions.validate()?;
        self.compositions.validate()?;
        self.mirrors.validate()
    }

    /// версия Unicode, из которой получены таблицы
    pub fn unicode_version(&self) -> &'a str
    {
        self.version
    }

    /// запись свойств кодпоинта
    #[inline]
    pub fn properties(&self, code: u32) -> Properties
    {
        if code >= CODESPACE {
            return Properties::DEFAULT;
        }

        let slot = self.properties.lookup(code) as usize;

        match self.records.get(slot) {
            Some(properties) => *properties,
            None => Properties::DEFAULT,
        }
    }

    #[inline]
    pub fn general_category(&self, code: u32) -> GeneralCategory
    {
        self.properties(code).general_category
    }

    #[inline]
    pub fn script(&self, code: u32) -> Script
    {
        self.properties(code).script
    }

    #[inline]
    pub fn bidi_class(&self, code: u32) -> BidiClass
    {
        self.properties(code).bidi_class
    }

    #[inline]
    pub fn combining_class(&self, code: u32) -> u8
    {
        self.properties(code).combining_class
    }

    #[inline]
    pub fn east_asian_width(&self, code: u32) -> EastAsianWidth
    {
        self.properties(code).east_asian_width
    }

    #[inline]
    pub fn is_mirrored(&self, code: u32) -> bool
    {
        self.properties(code).mirrored
    }

    /// быстрая проверка NFC
    #[inline]
    pub fn quick_check(&self, code: u32) -> QuickCheck
    {
        self.properties(code).quick_check
    }

    /// класс переноса строк, как он указан в LineBreak.txt
    #[inline]
    pub fn linebreak_class(&self, code: u32) -> LineBreak
    {
        self.properties(code).linebreak_class
    }

    /// класс переноса строк после разрешения классов, не участвующих в алгоритме напрямую
    #[inline]
    pub fn resolved_linebreak_class(&self, code: u32) -> LineBreak
    {
        let properties = self.properties(code);

        properties.linebreak_class.resolve(properties.general_category)
    }

    /// каноническая декомпозиция на один шаг
    #[inline]
    pub fn decompose(&self, code: u32) -> Option<Decomposed>
    {
        self.decompositions.canonical(code)
    }

    /// декомпозиция совместимости на один шаг, до 18 кодпоинтов
    #[inline]
    pub fn compat_decompose(&self, code: u32) -> &'a [u32]
    {
        self.decompositions.compatibility(code)
    }

    /// каноническая композиция пары кодпоинтов
    #[inline]
    pub fn compose(&self, a: u32, b: u32) -> Option<u32>
    {
        self.compositions.compose(a, b)
    }

    /// зеркальный символ; если его нет - сам кодпоинт
    #[inline]
    pub fn mirror(&self, code: u32) -> u32
    {
        if !self.is_mirrored(code) {
            return code;
        }

        self.mirrors.mirror(code).unwrap_or(code)
    }

    /// парная скобка; если кодпоинт не является парной скобкой - сам кодпоинт
    #[inline]
    pub fn paired_bracket(&self, code: u32) -> u32
    {
        match self.mirrors.bracket(code) {
            Some((pair, _)) => pair,
            None => code,
        }
    }

    #[inline]
    pub fn paired_bracket_type(&self, code: u32) -> BracketType
    {
        match self.mirrors.bracket(code) {
            Some((_, kind)) => kind,
            None => BracketType::None,
        }
    }
}
