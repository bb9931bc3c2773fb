property_enum! {
    /// письменность (script), значения из Scripts.txt
    /// нумерация исторически сложилась по мере добавления письменностей в Unicode и не сортирована
    pub enum Script ("script")
    {
        /// Zyyy - символы, общие для нескольких письменностей
        Common = "Common",
        Latin = "Latin",
        Greek = "Greek",
        Cyrillic = "Cyrillic",
        Armenian = "Armenian",
        Hebrew = "Hebrew",
        Arabic = "Arabic",
        Syriac = "Syriac",
        Thaana = "Thaana",
        Devanagari = "Devanagari",
        Bengali = "Bengali",
        Gurmukhi = "Gurmukhi",
        Gujarati = "Gujarati",
        Oriya = "Oriya",
        Tamil = "Tamil",
        Telugu = "Telugu",
        Kannada = "Kannada",
        Malayalam = "Malayalam",
        Sinhala = "Sinhala",
        Thai = "Thai",
        Lao = "Lao",
        Tibetan = "Tibetan",
        Myanmar = "Myanmar",
        Georgian = "Georgian",
        Hangul = "Hangul",
        Ethiopic = "Ethiopic",
        Cherokee = "Cherokee",
        CanadianAboriginal = "Canadian_Aboriginal",
        Ogham = "Ogham",
        Runic = "Runic",
        Khmer = "Khmer",
        Mongolian = "Mongolian",
        Hiragana = "Hiragana",
        Katakana = "Katakana",
        Bopomofo = "Bopomofo",
        Han = "Han",
        Yi = "Yi",
        OldItalic = "Old_Italic",
        Gothic = "Gothic",
        Deseret = "Deseret",
        /// Zinh - комбинирующие символы, наследующие письменность предыдущего символа
        Inherited = "Inherited",
        Tagalog = "Tagalog",
        Hanunoo = "Hanunoo",
        Buhid = "Buhid",
        Tagbanwa = "Tagbanwa",
        Limbu = "Limbu",
        TaiLe = "Tai_Le",
        LinearB = "Linear_B",
        Ugaritic = "Ugaritic",
        Shavian = "Shavian",
        Osmanya = "Osmanya",
        Cypriot = "Cypriot",
        Braille = "Braille",
        Buginese = "Buginese",
        Coptic = "Coptic",
        NewTaiLue = "New_Tai_Lue",
        Glagolitic = "Glagolitic",
        Tifinagh = "Tifinagh",
        SylotiNagri = "Syloti_Nagri",
        OldPersian = "Old_Persian",
        Kharoshthi = "Kharoshthi",
        Balinese = "Balinese",
        Cuneiform = "Cuneiform",
        Phoenician = "Phoenician",
        PhagsPa = "Phags_Pa",
        Nko = "Nko",
        Sundanese = "Sundanese",
        Lepcha = "Lepcha",
        OlChiki = "Ol_Chiki",
        Vai = "Vai",
        Saurashtra = "Saurashtra",
        KayahLi = "Kayah_Li",
        Rejang = "Rejang",
        Lycian = "Lycian",
        Carian = "Carian",
        Lydian = "Lydian",
        Cham = "Cham",
        TaiTham = "Tai_Tham",
        TaiViet = "Tai_Viet",
        Avestan = "Avestan",
        EgyptianHieroglyphs = "Egyptian_Hieroglyphs",
        Samaritan = "Samaritan",
        Lisu = "Lisu",
        Bamum = "Bamum",
        Javanese = "Javanese",
        MeeteiMayek = "Meetei_Mayek",
        ImperialAramaic = "Imperial_Aramaic",
        OldSouthArabian = "Old_South_Arabian",
        InscriptionalParthian = "Inscriptional_Parthian",
        InscriptionalPahlavi = "Inscriptional_Pahlavi",
        OldTurkic = "Old_Turkic",
        Kaithi = "Kaithi",
        Batak = "Batak",
        Brahmi = "Brahmi",
        Mandaic = "Mandaic",
        Chakma = "Chakma",
        MeroiticCursive = "Meroitic_Cursive",
        MeroiticHieroglyphs = "Meroitic_Hieroglyphs",
        Miao = "Miao",
        Sharada = "Sharada",
        SoraSompeng = "Sora_Sompeng",
        Takri = "Takri",
        /// Zzzz - не назначенные кодпоинты, приватное использование, суррогаты
        Unknown = "Unknown",
        BassaVah = "Bassa_Vah",
        CaucasianAlbanian = "Caucasian_Albanian",
        Duployan = "Duployan",
        Elbasan = "Elbasan",
        Grantha = "Grantha",
        Khojki = "Khojki",
        Khudawadi = "Khudawadi",
        LinearA = "Linear_A",
        Mahajani = "Mahajani",
        Manichaean = "Manichaean",
        MendeKikakui = "Mende_Kikakui",
        Modi = "Modi",
        Mro = "Mro",
        Nabataean = "Nabataean",
        OldNorthArabian = "Old_North_Arabian",
        OldPermic = "Old_Permic",
        PahawhHmong = "Pahawh_Hmong",
        Palmyrene = "Palmyrene",
        PauCinHau = "Pau_Cin_Hau",
        PsalterPahlavi = "Psalter_Pahlavi",
        Siddham = "Siddham",
        Tirhuta = "Tirhuta",
        WarangCiti = "Warang_Citi",
        Ahom = "Ahom",
        AnatolianHieroglyphs = "Anatolian_Hieroglyphs",
        Hatran = "Hatran",
        Multani = "Multani",
        OldHungarian = "Old_Hungarian",
        SignWriting = "SignWriting",
        Adlam = "Adlam",
        Bhaiksuki = "Bhaiksuki",
        Marchen = "Marchen",
        Newa = "Newa",
        Osage = "Osage",
        Tangut = "Tangut",
        MasaramGondi = "Masaram_Gondi",
        Nushu = "Nushu",
        Soyombo = "Soyombo",
        ZanabazarSquare = "Zanabazar_Square",
        Dogra = "Dogra",
        GunjalaGondi = "Gunjala_Gondi",
        HanifiRohingya = "Hanifi_Rohingya",
        Makasar = "Makasar",
        Medefaidrin = "Medefaidrin",
        OldSogdian = "Old_Sogdian",
        Sogdian = "Sogdian",
        Elymaic = "Elymaic",
        Nandinagari = "Nandinagari",
        NyiakengPuachueHmong = "Nyiakeng_Puachue_Hmong",
        Wancho = "Wancho",
        Chorasmian = "Chorasmian",
        DivesAkuru = "Dives_Akuru",
        KhitanSmallScript = "Khitan_Small_Script",
        Yezidi = "Yezidi",
        CyproMinoan = "Cypro_Minoan",
        OldUyghur = "Old_Uyghur",
        Tangsa = "Tangsa",
        Toto = "Toto",
        Vithkuqi = "Vithkuqi",
        Kawi = "Kawi",
        NagMundari = "Nag_Mundari",
        Garay = "Garay",
        GurungKhema = "Gurung_Khema",
        KiratRai = "Kirat_Rai",
        OlOnal = "Ol_Onal",
        Sunuwar = "Sunuwar",
        Todhri = "Todhri",
        TuluTigalari = "Tulu_Tigalari",
    }
}
