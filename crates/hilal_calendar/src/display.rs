//! Human-readable rendering of converted dates.
//!
//! Each rendering carries exactly one canonical era suffix: "هـ"/"AH" for
//! Hijri dates, "م"/"CE" for Gregorian ones. Arabic output uses Arabic-Indic
//! digits.

use crate::date::{CalendarDate, HijriDate};
use crate::locale::Locale;
use crate::months::{GregorianMonth, HijriMonth, weekday_arabic_name, weekday_name};
use crate::numerals::to_arabic_indic_digits;

/// Canonical Hijri era suffix.
pub fn hijri_era_suffix(locale: Locale) -> &'static str {
    match locale {
        Locale::Arabic => "هـ",
        Locale::English => "AH",
    }
}

/// Canonical Gregorian era suffix.
pub fn gregorian_era_suffix(locale: Locale) -> &'static str {
    match locale {
        Locale::Arabic => "م",
        Locale::English => "CE",
    }
}

fn localize_digits(s: String, locale: Locale) -> String {
    match locale {
        Locale::Arabic => to_arabic_indic_digits(&s),
        Locale::English => s,
    }
}

/// `"١ رمضان ١٤٤٥ هـ"` / `"1 Ramadan 1445 AH"`.
pub fn format_hijri(date: &HijriDate, locale: Locale) -> String {
    let month = match (HijriMonth::from_number(date.month), locale) {
        (Some(m), Locale::Arabic) => m.arabic_name().to_owned(),
        (Some(m), Locale::English) => m.name().to_owned(),
        (None, _) => date.month.to_string(),
    };
    let text = format!(
        "{} {} {} {}",
        date.day,
        month,
        date.year,
        hijri_era_suffix(locale)
    );
    localize_digits(text, locale)
}

/// `"الاثنين، ١١ مارس ٢٠٢٤ م"` / `"Monday, 11 March 2024 CE"`.
pub fn format_gregorian(date: &CalendarDate, locale: Locale) -> String {
    let weekday = date.weekday();
    let text = match (GregorianMonth::from_number(date.month), locale) {
        (Some(m), Locale::Arabic) => format!(
            "{}، {} {} {} {}",
            weekday_arabic_name(weekday),
            date.day,
            m.arabic_name(),
            date.year,
            gregorian_era_suffix(locale)
        ),
        (Some(m), Locale::English) => format!(
            "{}, {} {} {} {}",
            weekday_name(weekday),
            date.day,
            m.name(),
            date.year,
            gregorian_era_suffix(locale)
        ),
        (None, _) => format!(
            "{} {} {} {}",
            date.day,
            date.month,
            date.year,
            gregorian_era_suffix(locale)
        ),
    };
    localize_digits(text, locale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hijri_english() {
        let d = HijriDate::new(1445, 9, 1).unwrap();
        assert_eq!(format_hijri(&d, Locale::English), "1 Ramadan 1445 AH");
    }

    #[test]
    fn hijri_arabic() {
        let d = HijriDate::new(1445, 9, 1).unwrap();
        assert_eq!(format_hijri(&d, Locale::Arabic), "١ رمضان ١٤٤٥ هـ");
    }

    #[test]
    fn hijri_suffix_appears_once() {
        let d = HijriDate::new(1445, 12, 10).unwrap();
        let s = format_hijri(&d, Locale::Arabic);
        assert_eq!(s.matches("هـ").count(), 1);
        assert!(s.ends_with("هـ"));
    }

    #[test]
    fn gregorian_english() {
        let d = CalendarDate::new(2024, 3, 11).unwrap();
        assert_eq!(format_gregorian(&d, Locale::English), "Monday, 11 March 2024 CE");
    }

    #[test]
    fn gregorian_arabic() {
        let d = CalendarDate::new(2024, 3, 11).unwrap();
        assert_eq!(format_gregorian(&d, Locale::Arabic), "الاثنين، ١١ مارس ٢٠٢٤ م");
    }

    #[test]
    fn gregorian_has_no_separators() {
        let d = CalendarDate::new(2024, 3, 11).unwrap();
        for locale in [Locale::Arabic, Locale::English] {
            let s = format_gregorian(&d, locale);
            assert!(!s.contains('/') && !s.contains('-'), "{s}");
            assert!(s.ends_with(gregorian_era_suffix(locale)));
        }
    }
}
