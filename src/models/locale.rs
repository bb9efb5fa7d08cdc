//! Display language selection

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::TuniCampError;

/// Languages the application renders text in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
    Ar,
}

impl FromStr for Locale {
    type Err = TuniCampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "fr" => Ok(Locale::Fr),
            "ar" => Ok(Locale::Ar),
            other => Err(TuniCampError::validation(format!(
                "Unsupported locale '{other}'. Must be one of: en, fr, ar"
            ))),
        }
    }
}

/// A piece of text with one rendition per supported locale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub en: String,
    pub fr: String,
    pub ar: String,
}

impl LocalizedText {
    #[must_use]
    pub fn new(en: &str, fr: &str, ar: &str) -> Self {
        Self {
            en: en.to_string(),
            fr: fr.to_string(),
            ar: ar.to_string(),
        }
    }

    #[must_use]
    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.en,
            Locale::Fr => &self.fr,
            Locale::Ar => &self.ar,
        }
    }

    /// Case-insensitive substring match against every rendition
    #[must_use]
    pub fn contains_ignore_case(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        [&self.en, &self.fr, &self.ar]
            .iter()
            .any(|text| text.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_parsing() {
        assert_eq!("fr".parse::<Locale>().unwrap(), Locale::Fr);
        assert_eq!(" AR ".parse::<Locale>().unwrap(), Locale::Ar);
        assert!("de".parse::<Locale>().is_err());
    }

    #[test]
    fn test_localized_lookup() {
        let text = LocalizedText::new("Beach", "Plage", "شاطئ");
        assert_eq!(text.get(Locale::En), "Beach");
        assert_eq!(text.get(Locale::Fr), "Plage");
        assert_eq!(text.get(Locale::Ar), "شاطئ");
        assert!(text.contains_ignore_case("plage"));
        assert!(!text.contains_ignore_case("desert"));
    }
}
