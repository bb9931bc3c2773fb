use crate::error::PropertyError;

/// перечисление значений свойства Unicode со стабильными числовыми идентификаторами:
/// значения нумеруются подряд с нуля, в порядке объявления, как в запечённых данных
macro_rules! property_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($property:literal)
        {
            $($(#[$variant_meta:meta])* $variant:ident = $alias:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
        #[repr(u8)]
        pub enum $name
        {
            $($(#[$variant_meta])* $variant,)+
        }

        impl $name
        {
            /// все значения в порядке числовых идентификаторов
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// обозначение значения в UCD (PropertyValueAliases.txt)
            pub fn alias(self) -> &'static str
            {
                match self {
                    $(Self::$variant => $alias,)+
                }
            }
        }

        impl TryFrom<&str> for $name
        {
            type Error = $crate::error::PropertyError;

            fn try_from(alias: &str) -> Result<Self, Self::Error>
            {
                match alias {
                    $($alias => Ok(Self::$variant),)+
                    _ => Err($crate::error::PropertyError::UnknownAbbreviation {
                        property: $property,
                        abbr: alias.to_owned(),
                    }),
                }
            }
        }

        impl TryFrom<u8> for $name
        {
            type Error = $crate::error::PropertyError;

            #[inline]
            fn try_from(value: u8) -> Result<Self, Self::Error>
            {
                match Self::ALL.get(value as usize) {
                    Some(value) => Ok(*value),
                    None => Err($crate::error::PropertyError::UnknownValue {
                        property: $property,
                        value,
                    }),
                }
            }
        }

        impl From<$name> for u8
        {
            #[inline]
            fn from(value: $name) -> Self
            {
                value as u8
            }
        }

        impl core::fmt::Display for $name
        {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
            {
                f.write_str(self.alias())
            }
        }
    };
}

mod bidi_class;
mod bracket_type;
mod east_asian_width;
mod general_category;
mod line_break;
mod quick_check;
mod script;

pub use bidi_class::BidiClass;
pub use bracket_type::BracketType;
pub use east_asian_width::EastAsianWidth;
pub use general_category::GeneralCategory;
pub use line_break::LineBreak;
pub use quick_check::QuickCheck;
pub use script::Script;

/// свойства кодпоинта - одна запись таблицы свойств
///
/// формат запечённой записи (u64, по байту на поле, начиная с младшего):
///     0 - основная категория
///     1 - класс канонического комбинирования
///     2 - класс направления
///     3 - признак зеркального отображения
///     4 - ширина в восточноазиатском контексте
///     5 - письменность
///     6 - класс переноса строк
///     7 - быстрая проверка NFC
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Properties
{
    /// основная категория (general category)
    pub general_category: GeneralCategory,
    /// класс канонического комбинирования (canonical combining class)
    pub combining_class: u8,
    /// класс направления (bidi class)
    pub bidi_class: BidiClass,
    /// зеркальный символ двунаправленного текста (bidi mirrored)
    pub mirrored: bool,
    /// ширина (east asian width)
    pub east_asian_width: EastAsianWidth,
    /// письменность (script)
    pub script: Script,
    /// класс переноса строк (line break), без разрешения
    pub linebreak_class: LineBreak,
    /// быстрая проверка NFC
    pub quick_check: QuickCheck,
}

impl Properties
{
    /// запись по умолчанию: не назначенный кодпоинт или кодпоинт за пределами Unicode
    pub const DEFAULT: Self = Self {
        general_category: GeneralCategory::Unassigned,
        combining_class: 0,
        bidi_class: BidiClass::LeftToRight,
        mirrored: false,
        east_asian_width: EastAsianWidth::Neutral,
        script: Script::Unknown,
        linebreak_class: LineBreak::Unknown,
        quick_check: QuickCheck::Yes,
    };
}

impl Default for Properties
{
    fn default() -> Self
    {
        Self::DEFAULT
    }
}

impl TryFrom<u64> for Properties
{
    type Error = PropertyError;

    fn try_from(packed: u64) -> Result<Self, Self::Error>
    {
        let field = |n: u32| (packed >> (n * 8)) as u8;

        let mirrored = match field(3) {
            0 => false,
            1 => true,
            value => {
                return Err(PropertyError::UnknownValue {
                    property: "bidi mirrored",
                    value,
                })
            }
        };

        Ok(Self {
            general_category: GeneralCategory::try_from(field(0))?,
            combining_class: field(1),
            bidi_class: BidiClass::try_from(field(2))?,
            mirrored,
            east_asian_width: EastAsianWidth::try_from(field(4))?,
            script: Script::try_from(field(5))?,
            linebreak_class: LineBreak::try_from(field(6))?,
            quick_check: QuickCheck::try_from(field(7))?,
        })
    }
}

impl From<Properties> for u64
{
    fn from(value: Properties) -> Self
    {
        [
            u8::from(value.general_category),
            value.combining_class,
            u8::from(value.bidi_class),
            value.mirrored as u8,
            u8::from(value.east_asian_width),
            u8::from(value.script),
            u8::from(value.linebreak_class),
            u8::from(value.quick_check),
        ]
        .iter()
        .enumerate()
        .fold(0, |packed, (n, &field)| packed | (field as u64) << (n * 8))
    }
}
