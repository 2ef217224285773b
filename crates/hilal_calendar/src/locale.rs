//! Display locale.

use std::str::FromStr;

/// Language used for month names, era suffixes, digits and messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// Arabic names with Arabic-Indic digits.
    #[default]
    Arabic,
    /// English names with ASCII digits.
    English,
}

impl Locale {
    /// BCP 47 language tag.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Arabic => "ar",
            Self::English => "en",
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ar" | "ar-sa" | "arabic" => Ok(Self::Arabic),
            "en" | "en-us" | "en-gb" | "english" => Ok(Self::English),
            other => Err(format!("unknown locale: {other} (ar or en)")),
        }
    }
}
