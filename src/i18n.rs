//! Constellation name translations.

use std::collections::BTreeMap;

use crate::error::{Result, StarWheelError};

const BUNDLED_TRANSLATIONS: &str = include_str!("../data/translations.toml");

/// language code -> constellation name -> translated name
#[derive(Debug, Clone, Default)]
pub struct Translations {
    languages: BTreeMap<String, BTreeMap<String, String>>,
}

impl Translations {
    pub fn from_toml(text: &str) -> Result<Self> {
        let languages: BTreeMap<String, BTreeMap<String, String>> = toml::from_str(text)?;
        Ok(Self { languages })
    }

    pub fn bundled() -> Result<Self> {
        Self::from_toml(BUNDLED_TRANSLATIONS)
    }

    pub fn language<'a>(&'a self, code: &'a str) -> Result<Language<'a>> {
        self.languages
            .get(code)
            .map(|names| Language { code, names })
            .ok_or_else(|| StarWheelError::UnknownLanguage(code.to_string()))
    }
}

/// Lookup for one language.
#[derive(Debug, Clone, Copy)]
pub struct Language<'a> {
    pub code: &'a str,
    names: &'a BTreeMap<String, String>,
}

impl Language<'_> {
    /// Display name for a catalogue constellation name.
    pub fn constellation(&self, name: &str) -> String {
        self.names
            .get(name)
            .map(String::as_str)
            .unwrap_or(name)
            .replace('_', " ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_falls_back_to_catalogue_name() {
        let t = Translations::bundled().unwrap();
        let en = t.language("en").unwrap();
        assert_eq!(en.constellation("Ursa_Major"), "Ursa Major");
        assert_eq!(en.constellation("Leo"), "Leo");
    }

    #[test]
    fn translated_names_are_used() {
        let t = Translations::bundled().unwrap();
        assert_eq!(t.language("fr").unwrap().constellation("Ursa_Major"), "Grande Ourse");
        assert_eq!(t.language("de").unwrap().constellation("Andromeda"), "Andromeda");
    }

    #[test]
    fn unknown_language_is_a_configuration_error() {
        let t = Translations::bundled().unwrap();
        assert!(matches!(t.language("xx"), Err(StarWheelError::UnknownLanguage(_))));
    }

    #[test]
    fn malformed_table_is_rejected() {
        assert!(Translations::from_toml("[en]\nLeo = 3\n").is_err());
    }
}
