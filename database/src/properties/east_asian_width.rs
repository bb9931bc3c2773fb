property_enum! {
    /// ширина символа в восточноазиатском контексте (east asian width)
    pub enum EastAsianWidth ("east asian width")
    {
        /// F - полноширинный
        Fullwidth = "F",
        /// H - полуширинный
        Halfwidth = "H",
        /// W - широкий
        Wide = "W",
        /// Na - узкий
        Narrow = "Na",
        /// A - неоднозначный, ширина зависит от контекста
        Ambiguous = "A",
        /// N - нейтральный, не встречается в восточноазиатской типографике
        Neutral = "N",
    }
}

impl EastAsianWidth
{
    /// занимает-ли символ две ячейки в моноширинном выводе (F, W)
    #[inline]
    pub fn is_wide(self) -> bool
    {
        matches!(self, Self::Fullwidth | Self::Wide)
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn numbering()
    {
        let aliases: Vec<&str> = EastAsianWidth::ALL.iter().map(|w| w.alias()).collect();

        assert_eq!(aliases, ["F", "H", "W", "Na", "A", "N"]);
        assert_eq!(EastAsianWidth::try_from(4_u8), Ok(EastAsianWidth::Ambiguous));
        assert!(EastAsianWidth::try_from(6_u8).is_err());
    }
}
