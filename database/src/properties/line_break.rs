use super::GeneralCategory;

property_enum! {
    /// класс переноса строк (line break, UAX #14)
    pub enum LineBreak ("line break")
    {
        OpenPunctuation = "OP",
        ClosePunctuation = "CL",
        CloseParenthesis = "CP",
        Quotation = "QU",
        Glue = "GL",
        Nonstarter = "NS",
        Exclamation = "EX",
        BreakSymbols = "SY",
        InfixNumericSeparator = "IS",
        PrefixNumeric = "PR",
        PostfixNumeric = "PO",
        Numeric = "NU",
        Alphabetic = "AL",
        HebrewLetter = "HL",
        Ideographic = "ID",
        Inseparable = "IN",
        Hyphen = "HY",
        BreakAfter = "BA",
        BreakBefore = "BB",
        BreakBoth = "B2",
        ZeroWidthSpace = "ZW",
        CombiningMark = "CM",
        WordJoiner = "WJ",
        /// H2 - слог хангыль LV
        HangulLvSyllable = "H2",
        /// H3 - слог хангыль LVT
        HangulLvtSyllable = "H3",
        /// JL - ведущая согласная чамо
        HangulLJamo = "JL",
        /// JT - завершающая согласная чамо
        HangulTJamo = "JT",
        /// JV - гласная чамо
        HangulVJamo = "JV",
        /// CB - разрыв зависит от контекста
        ContingentBreak = "CB",
        /// AI - неоднозначный, зависит от контекста
        Ambiguous = "AI",
        /// BK - обязательный перенос
        MandatoryBreak = "BK",
        /// CJ - японский нестартер, зависит от строгости переноса
        ConditionalJapaneseStarter = "CJ",
        CarriageReturn = "CR",
        LineFeed = "LF",
        /// NL - U+0085
        NextLine = "NL",
        /// SA - сложные письменности (тайская и т.д.), перенос требует словаря
        ComplexContext = "SA",
        Surrogate = "SG",
        Space = "SP",
        /// XX - неизвестный класс, дефолтный вариант
        Unknown = "XX",
        RegionalIndicator = "RI",
        EmojiBase = "EB",
        EmojiModifier = "EM",
        ZeroWidthJoiner = "ZWJ",
        Aksara = "AK",
        AksaraPrebase = "AP",
        AksaraStart = "AS",
        ViramaFinal = "VF",
        Virama = "VI",
    }
}

impl LineBreak
{
    /// разрешение класса по правилам LB1: классы, которые алгоритм переноса строк
    /// не обрабатывает напрямую, заменяются на обрабатываемые
    ///     AI, SG, XX -> AL
    ///     CJ -> NS
    ///     SA -> CM для Mn и Mc, иначе AL
    ///     NL -> BK
    ///     CB -> B2
    #[inline]
    pub fn resolve(self, gc: GeneralCategory) -> Self
    {
        match self {
            Self::Ambiguous | Self::Surrogate | Self::Unknown => Self::Alphabetic,
            Self::ConditionalJapaneseStarter => Self::Nonstarter,
            Self::ComplexContext => match gc {
                GeneralCategory::NonspacingMark | GeneralCategory::SpacingMark => {
                    Self::CombiningMark
                }
                _ => Self::Alphabetic,
            },
            Self::NextLine => Self::MandatoryBreak,
            Self::ContingentBreak => Self::BreakBoth,
            other => other,
        }
    }
}
