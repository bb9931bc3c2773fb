property_enum! {
    /// тип парной скобки в алгоритме двунаправленного текста (bidi paired bracket type)
    pub enum BracketType ("bidi paired bracket type")
    {
        /// o - открывающая скобка
        Open = "o",
        /// c - закрывающая скобка
        Close = "c",
        /// n - не является парной скобкой
        None = "n",
    }
}
