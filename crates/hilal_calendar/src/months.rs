//! Month and weekday names for both calendars.

/// The twelve months of the Hijri calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum HijriMonth {
    Muharram,
    Safar,
    RabiAlAwwal,
    RabiAlThani,
    JumadaAlUla,
    JumadaAlAkhirah,
    Rajab,
    Shaban,
    Ramadan,
    Shawwal,
    DhuAlQadah,
    DhuAlHijjah,
}

/// All Hijri months in order (index 0 = Muharram).
pub const ALL_HIJRI_MONTHS: [HijriMonth; 12] = [
    HijriMonth::Muharram,
    HijriMonth::Safar,
    HijriMonth::RabiAlAwwal,
    HijriMonth::RabiAlThani,
    HijriMonth::JumadaAlUla,
    HijriMonth::JumadaAlAkhirah,
    HijriMonth::Rajab,
    HijriMonth::Shaban,
    HijriMonth::Ramadan,
    HijriMonth::Shawwal,
    HijriMonth::DhuAlQadah,
    HijriMonth::DhuAlHijjah,
];

const HIJRI_NAMES_EN: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi' al-Awwal",
    "Rabi' al-Thani",
    "Jumada al-Ula",
    "Jumada al-Akhirah",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qi'dah",
    "Dhu al-Hijjah",
];

const HIJRI_NAMES_AR: [&str; 12] = [
    "محرم",
    "صفر",
    "ربيع الأول",
    "ربيع الآخر",
    "جمادى الأولى",
    "جمادى الآخرة",
    "رجب",
    "شعبان",
    "رمضان",
    "شوال",
    "ذو القعدة",
    "ذو الحجة",
];

impl HijriMonth {
    /// Month for a 1-based month number.
    pub fn from_number(month: u32) -> Option<Self> {
        let idx = usize::try_from(month).ok()?.checked_sub(1)?;
        ALL_HIJRI_MONTHS.get(idx).copied()
    }

    /// 1-based month number (Muharram = 1).
    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    /// Transliterated English name.
    pub fn name(self) -> &'static str {
        HIJRI_NAMES_EN[self as usize]
    }

    /// Arabic name.
    pub fn arabic_name(self) -> &'static str {
        HIJRI_NAMES_AR[self as usize]
    }
}

/// The twelve months of the Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum GregorianMonth {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

/// All Gregorian months in order (index 0 = January).
pub const ALL_GREGORIAN_MONTHS: [GregorianMonth; 12] = [
    GregorianMonth::January,
    GregorianMonth::February,
    GregorianMonth::March,
    GregorianMonth::April,
    GregorianMonth::May,
    GregorianMonth::June,
    GregorianMonth::July,
    GregorianMonth::August,
    GregorianMonth::September,
    GregorianMonth::October,
    GregorianMonth::November,
    GregorianMonth::December,
];

const GREGORIAN_NAMES_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const GREGORIAN_NAMES_AR: [&str; 12] = [
    "يناير",
    "فبراير",
    "مارس",
    "أبريل",
    "مايو",
    "يونيو",
    "يوليو",
    "أغسطس",
    "سبتمبر",
    "أكتوبر",
    "نوفمبر",
    "ديسمبر",
];

impl GregorianMonth {
    /// Month for a 1-based month number.
    pub fn from_number(month: u32) -> Option<Self> {
        let idx = usize::try_from(month).ok()?.checked_sub(1)?;
        ALL_GREGORIAN_MONTHS.get(idx).copied()
    }

    /// 1-based month number (January = 1).
    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    /// English name.
    pub fn name(self) -> &'static str {
        GREGORIAN_NAMES_EN[self as usize]
    }

    /// Arabic name.
    pub fn arabic_name(self) -> &'static str {
        GREGORIAN_NAMES_AR[self as usize]
    }
}

const WEEKDAY_NAMES_EN: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const WEEKDAY_NAMES_AR: [&str; 7] = [
    "الأحد",
    "الاثنين",
    "الثلاثاء",
    "الأربعاء",
    "الخميس",
    "الجمعة",
    "السبت",
];

/// English weekday name, 0 = Sunday.
pub fn weekday_name(weekday: u32) -> &'static str {
    WEEKDAY_NAMES_EN[weekday as usize % 7]
}

/// Arabic weekday name, 0 = Sunday.
pub fn weekday_arabic_name(weekday: u32) -> &'static str {
    WEEKDAY_NAMES_AR[weekday as usize % 7]
}
