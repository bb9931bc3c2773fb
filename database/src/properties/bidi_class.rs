property_enum! {
    /// класс направления текста (bidi class)
    /// 23 варианта, нумерация повторяет порядок исторически сложившихся идентификаторов
    ///
    /// группы классов:
    ///     strong (L, R, AL) - символы, которые имеют явно заданное направление
    ///     weak (EN, ES, ET, AN, CS, NSM, BN) - символы, направление которых зависит от контекста
    ///     neutral (B, S, WS, ON) - символы, не имеющие определенного направления
    ///     explicit (LRE, LRO, RLE, RLO, PDF, LRI, RLI, FSI, PDI) - символы явного управления направлением
    ///
    pub enum BidiClass ("bidi class")
    {
        /// L - любой сильный LTR-символ
        LeftToRight = "L",
        /// LRE - U+202A - символ вставки слева направо
        LeftToRightEmbedding = "LRE",
        /// LRO - U+202D - символ переопределения слева направо
        LeftToRightOverride = "LRO",
        /// R - любой сильный (не арабский) RTL-символ
        RightToLeft = "R",
        /// AL - любой сильный (арабский) RTL-символ
        ArabicLetter = "AL",
        /// RLE - U+202B - символ вставки справа налево
        RightToLeftEmbedding = "RLE",
        /// RLO - U+202E - символ переопределения справа налево
        RightToLeftOverride = "RLO",
        /// PDF - U+202C - окончание направляющего форматирования
        PopDirectionalFormat = "PDF",
        /// EN - любая цифра ASCII или восточно-арабская индийская цифра
        EuropeanNumber = "EN",
        /// ES - знаки плюса и минуса
        EuropeanSeparator = "ES",
        /// ET - терминатор в контексте числового формата, включает символы валюты
        EuropeanTerminator = "ET",
        /// AN - любая арабско-индийская цифра
        ArabicNumber = "AN",
        /// CS - запятые, двоеточия и слеши
        CommonSeparator = "CS",
        /// NSM - не занимающий места символ, не оказывающий влияния на направление текста
        NonspacingMark = "NSM",
        /// BN - большинство символов форматирования, управляющие коды или недопустимые символы
        BoundaryNeutral = "BN",
        /// B - различные символы новой строки, которые разделяют абзацы
        ParagraphSeparator = "B",
        /// S - различные управляющие коды, связанные с сегментами текста
        SegmentSeparator = "S",
        /// WS - пробельные символы, такие как пробелы и табуляции
        Whitespace = "WS",
        /// ON - прочие нейтральные символы
        OtherNeutral = "ON",
        /// LRI - U+2066 - символ изоляции слева направо
        LeftToRightIsolate = "LRI",
        /// RLI - U+2067 - символ изоляции справа налево
        RightToLeftIsolate = "RLI",
        /// FSI - U+2068 - символ первой сильной изоляции
        FirstStrongIsolate = "FSI",
        /// PDI - U+2069 - окончание изоляции направления
        PopDirectionalIsolate = "PDI",
    }
}

impl BidiClass
{
    /// является-ли сильным типом направления
    #[inline]
    pub fn is_strong(self) -> bool
    {
        matches!(self, Self::LeftToRight | Self::RightToLeft | Self::ArabicLetter)
    }

    /// является-ли слабым типом направления
    #[inline]
    pub fn is_weak(self) -> bool
    {
        matches!(u8::from(self), 8 ..= 14)
    }

    /// является-ли нейтральным типом
    #[inline]
    pub fn is_neutral(self) -> bool
    {
        matches!(u8::from(self), 15 ..= 18)
    }

    /// является-ли явным типом
    #[inline]
    pub fn is_explicit(self) -> bool
    {
        !self.is_strong() && !self.is_weak() && !self.is_neutral()
    }
}
