property_enum! {
    /// основная категория символа (General Category, GC)
    /// 30 вариантов, пронумерованы в алфавитном порядке сокращений
    ///
    /// общие категории:
    ///     LC (Lu, Ll, Lt) - буквы, имеющие регистр
    ///     L (Lu, Ll, Lt, Lm, Lo) - буквы
    ///     M (Mn, Mc, Me) - комбинирующие символы
    ///     N (Nd, Nl, No) - цифры, числовые символы
    ///     P (Pc, Pd, Ps, Pe, Pi, Pf, Po) - знаки препинания
    ///     S (Sm, Sc, Sk, So) - различные символы (математические, валюты и т.д.)
    ///     Z (Zs, Zl, Zp) - разделители
    ///     C (Cc, Cf, Cs, Co, Cn) - системные символы
    ///
    pub enum GeneralCategory ("general category")
    {
        /// Cc - управляющий символ, относится к C0 или C1
        Control = "Cc",
        /// Cf - управляющий символ форматирования
        Format = "Cf",
        /// Cn - место под символ зарезервировано или не назначено, или же элемент не является символом
        Unassigned = "Cn",
        /// Co - символ для приватного использования
        PrivateUse = "Co",
        /// Cs - символ-суррогат
        Surrogate = "Cs",
        /// Ll - строчная буква
        LowercaseLetter = "Ll",
        /// Lm - буква-модификатор
        ModifierLetter = "Lm",
        /// Lo - прочие буквы, включая слоги и иероглифы
        OtherLetter = "Lo",
        /// Lt - диграфический символ, первая часть - заглавная буква
        TitlecaseLetter = "Lt",
        /// Lu - прописная буква
        UppercaseLetter = "Lu",
        /// Mc - комбинирующий маркер, занимающий пространство
        SpacingMark = "Mc",
        /// Me - охватывающий комбинирующий маркер
        EnclosingMark = "Me",
        /// Mn - неразрывный комбинирующий маркер (не занимающий пространства)
        NonspacingMark = "Mn",
        /// Nd - десятичная цифра
        DecimalNumber = "Nd",
        /// Nl - буквоподобный числовой символ
        LetterNumber = "Nl",
        /// No - прочие числовые символы
        OtherNumber = "No",
        /// Pc - объединяющая пунктуация, например _
        ConnectorPunctuation = "Pc",
        /// Pd - тире или дефис как знак препинания
        DashPunctuation = "Pd",
        /// Pe - закрывающий знак пунктуации (из пары)
        ClosePunctuation = "Pe",
        /// Pf - конечный знак цитаты
        FinalPunctuation = "Pf",
        /// Pi - начальный знак цитаты
        InitialPunctuation = "Pi",
        /// Po - знак препинания другого типа
        OtherPunctuation = "Po",
        /// Ps - открывающий знак пунктуации (из пары)
        OpenPunctuation = "Ps",
        /// Sc - символ валюты
        CurrencySymbol = "Sc",
        /// Sk - символ модификатора, не похожий на букву
        ModifierSymbol = "Sk",
        /// Sm - математический символ
        MathSymbol = "Sm",
        /// So - прочие символы
        OtherSymbol = "So",
        /// Zl - разделитель строки
        LineSeparator = "Zl",
        /// Zp - разделитель параграфов
        ParagraphSeparator = "Zp",
        /// Zs - разделитель-пробел
        SpaceSeparator = "Zs",
    }
}

impl GeneralCategory
{
    /// относится-ли категория к буквам с регистром (LC)
    #[inline]
    pub fn is_cased_letter(self) -> bool
    {
        matches!(
            self,
            Self::LowercaseLetter | Self::TitlecaseLetter | Self::UppercaseLetter
        )
    }

    /// относится-ли категория к буквам (L)
    #[inline]
    pub fn is_letter(self) -> bool
    {
        matches!(u8::from(self), 5 ..= 9)
    }

    /// относится-ли категория к комбинирующим символам (M)
    #[inline]
    pub fn is_mark(self) -> bool
    {
        matches!(u8::from(self), 10 ..= 12)
    }

    /// относится-ли категория к цифрам и числовым символам (N)
    #[inline]
    pub fn is_number(self) -> bool
    {
        matches!(u8::from(self), 13 ..= 15)
    }

    /// относится-ли категория к пунктуации (P)
    #[inline]
    pub fn is_punctuation(self) -> bool
    {
        matches!(u8::from(self), 16 ..= 22)
    }

    /// относится-ли категория к символам (S)
    #[inline]
    pub fn is_symbol(self) -> bool
    {
        matches!(u8::from(self), 23 ..= 26)
    }

    /// относится-ли категория к разделителям (Z)
    #[inline]
    pub fn is_separator(self) -> bool
    {
        matches!(u8::from(self), 27 ..= 29)
    }

    /// относится-ли категория к системным символам (или не назначена) (C)
    #[inline]
    pub fn is_other(self) -> bool
    {
        u8::from(self) < 5
    }
}
