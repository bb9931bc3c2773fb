property_enum! {
    /// быстрая проверка NFC (NFC_Quick_Check)
    pub enum QuickCheck ("NFC quick check")
    {
        /// Y - кодпоинт не меняется при нормализации
        Yes = "Y",
        /// N - кодпоинт не может встречаться в NFC
        No = "N",
        /// M - кодпоинт может быть скомбинирован с предыдущим
        Maybe = "M",
    }
}
