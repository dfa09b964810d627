use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::{Arc, OnceLock};

mod en;
mod vi;

/// Display language of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Vi,
    En,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::Vi, Locale::En];

    pub fn tag(self) -> &'static str {
        match self {
            Locale::Vi => "vi",
            Locale::En => "en",
        }
    }

    /// Label shown by the language switcher.
    pub fn native_name(self) -> &'static str {
        match self {
            Locale::Vi => "🇻🇳 Tiếng Việt",
            Locale::En => "🇺🇸 English",
        }
    }

    pub fn other(self) -> Locale {
        match self {
            Locale::Vi => Locale::En,
            Locale::En => Locale::Vi,
        }
    }

    /// Lenient tag parsing: accepts `vi`, `vi_VN`, `vi-VN.UTF-8`, `vietnamese`, `en_US`, `english`...
    pub fn from_tag(tag: &str) -> Option<Locale> {
        let lang = tag.trim().to_lowercase();
        if lang.starts_with("vi") || lang == "tieng-viet" || lang == "tiếng việt" {
            Some(Locale::Vi)
        } else if lang.starts_with("en") {
            Some(Locale::En)
        } else {
            None
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::Vi
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Static translation tables, one flat `key -> text` map per locale.
///
/// Keys are opaque: `services.items.0.title` is a single key, not a path.
#[derive(Debug, Default)]
pub struct Dictionary {
    tables: HashMap<Locale, HashMap<&'static str, &'static str>>,
}

impl Dictionary {
    pub fn from_entries<'e, I>(tables: I) -> Self
    where
        I: IntoIterator<Item = (Locale, &'e [(&'static str, &'static str)])>,
    {
        let mut dictionary = Dictionary::default();
        for (locale, entries) in tables {
            let table = dictionary.tables.entry(locale).or_default();
            for (key, value) in entries {
                table.insert(*key, *value);
            }
        }
        dictionary
    }

    /// The site's built-in Vietnamese and English tables, built once per process.
    pub fn builtin() -> Arc<Dictionary> {
        static BUILTIN: OnceLock<Arc<Dictionary>> = OnceLock::new();
        BUILTIN
            .get_or_init(|| {
                Arc::new(Dictionary::from_entries([
                    (Locale::Vi, vi::ENTRIES),
                    (Locale::En, en::ENTRIES),
                ]))
            })
            .clone()
    }

    /// Stored text for `key`; an empty stored string counts as absent.
    pub fn get(&self, locale: Locale, key: &str) -> Option<&'static str> {
        self.tables
            .get(&locale)
            .and_then(|table| table.get(key))
            .copied()
            .filter(|value| !value.is_empty())
    }

    pub fn contains(&self, locale: Locale, key: &str) -> bool {
        self.get(locale, key).is_some()
    }

    pub fn len(&self, locale: Locale) -> usize {
        self.tables.get(&locale).map_or(0, HashMap::len)
    }

    pub fn keys(&self, locale: Locale) -> Vec<&'static str> {
        let mut keys: Vec<&'static str> = self
            .tables
            .get(&locale)
            .map(|table| table.keys().copied().collect())
            .unwrap_or_default();
        keys.sort_unstable();
        keys
    }

    /// Sorted view of one table, used for export.
    pub fn entries(&self, locale: Locale) -> BTreeMap<&'static str, &'static str> {
        self.tables
            .get(&locale)
            .map(|table| table.iter().map(|(k, v)| (*k, *v)).collect())
            .unwrap_or_default()
    }

    /// Keys defined in `present_in` that `absent_from` lacks, sorted.
    pub fn missing_keys(&self, present_in: Locale, absent_from: Locale) -> Vec<&'static str> {
        self.keys(present_in)
            .into_iter()
            .filter(|key| !self.contains(absent_from, key))
            .collect()
    }
}

/// Locale store and translator handed to every view.
///
/// There is one active locale at a time; `set_locale` and `toggle` are the
/// only writers.
#[derive(Debug, Clone)]
pub struct I18n {
    dictionary: Arc<Dictionary>,
    current: Locale,
}

impl I18n {
    /// Built-in tables with the language picked from a loose tag. Unknown tags
    /// start in Vietnamese, the site's default.
    pub fn new(lang: &str) -> Self {
        let current = Locale::from_tag(lang).unwrap_or_default();
        Self::with_dictionary(Dictionary::builtin(), current)
    }

    pub fn with_dictionary(dictionary: Arc<Dictionary>, locale: Locale) -> Self {
        Self {
            dictionary,
            current: locale,
        }
    }

    pub fn locale(&self) -> Locale {
        self.current
    }

    pub fn set_locale(&mut self, locale: Locale) {
        if locale != self.current {
            tracing::debug!(from = %self.current, to = %locale, "locale changed");
        }
        self.current = locale;
    }

    /// String entry point for the CLI and config. An unknown tag leaves the
    /// active locale untouched and returns `false`.
    pub fn set_locale_tag(&mut self, tag: &str) -> bool {
        match Locale::from_tag(tag) {
            Some(locale) => {
                self.set_locale(locale);
                true
            }
            None => {
                tracing::warn!(tag, keeping = %self.current, "ignoring unknown locale");
                false
            }
        }
    }

    pub fn toggle(&mut self) -> Locale {
        self.set_locale(self.current.other());
        self.current
    }

    pub fn lookup(&self, key: &str) -> Option<&'static str> {
        self.dictionary.get(self.current, key)
    }

    /// Text for `key` in the active locale, or `key` itself when the active
    /// table has no entry. Never consults the other locale.
    pub fn t(&self, key: &str) -> String {
        match self.lookup(key) {
            Some(value) => value.to_string(),
            None => {
                tracing::debug!(key, locale = %self.current, "missing translation, returning key");
                key.to_string()
            }
        }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_EN: &[(&str, &str)] = &[("nav.home", "Home"), ("only.en", "English only")];
    const SAMPLE_VI: &[(&str, &str)] = &[("nav.home", "Trang chủ"), ("blank", "")];

    fn sample() -> I18n {
        let dictionary = Dictionary::from_entries([(Locale::En, SAMPLE_EN), (Locale::Vi, SAMPLE_VI)]);
        I18n::with_dictionary(Arc::new(dictionary), Locale::Vi)
    }

    #[test]
    fn translates_and_switches_locale() {
        let mut i18n = sample();
        assert_eq!(i18n.t("nav.home"), "Trang chủ");
        i18n.set_locale(Locale::En);
        assert_eq!(i18n.t("nav.home"), "Home");
    }

    #[test]
    fn missing_key_returns_key_in_both_locales() {
        let mut i18n = sample();
        assert_eq!(i18n.t("nav.missing"), "nav.missing");
        i18n.set_locale(Locale::En);
        assert_eq!(i18n.t("nav.missing"), "nav.missing");
        assert_eq!(i18n.t(""), "");
    }

    #[test]
    fn no_fallback_to_other_locale() {
        let i18n = sample();
        assert_eq!(i18n.locale(), Locale::Vi);
        assert_eq!(i18n.t("only.en"), "only.en");
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let i18n = sample();
        assert_eq!(i18n.t("blank"), "blank");
    }

    #[test]
    fn dotted_keys_are_not_paths() {
        let i18n = sample();
        assert_eq!(i18n.t("nav"), "nav");
        assert_eq!(i18n.t("nav.home.extra"), "nav.home.extra");
    }

    #[test]
    fn round_trip_restores_translations() {
        let mut i18n = I18n::new("vi");
        let keys = ["nav.home", "hero.title", "cta.form.submit", "portfolio.items.3.title", "nope"];
        let before: Vec<String> = keys.iter().map(|k| i18n.t(k)).collect();

        i18n.set_locale(Locale::En);
        i18n.set_locale(Locale::Vi);
        let after: Vec<String> = keys.iter().map(|k| i18n.t(k)).collect();
        assert_eq!(before, after);

        i18n.toggle();
        assert_eq!(i18n.locale(), Locale::En);
        i18n.toggle();
        assert_eq!(keys.iter().map(|k| i18n.t(k)).collect::<Vec<_>>(), before);
    }

    #[test]
    fn invalid_tag_keeps_previous_locale() {
        let mut i18n = I18n::new("en_US.UTF-8");
        assert_eq!(i18n.locale(), Locale::En);
        assert!(!i18n.set_locale_tag("klingon"));
        assert_eq!(i18n.locale(), Locale::En);
        assert!(i18n.set_locale_tag("vi-VN"));
        assert_eq!(i18n.locale(), Locale::Vi);
    }

    #[test]
    fn unknown_startup_language_defaults_to_vietnamese() {
        assert_eq!(I18n::new("fr_FR").locale(), Locale::Vi);
        assert_eq!(I18n::new("english").locale(), Locale::En);
    }

    #[test]
    fn every_cli_key_is_referenced() {
        let sources = [
            include_str!("../main.rs"),
            include_str!("../preview.rs"),
            include_str!("../render.rs"),
        ];
        let dictionary = Dictionary::builtin();
        for key in dictionary.keys(Locale::Vi).into_iter().filter(|k| k.starts_with("cli.")) {
            let quoted = format!("\"{}\"", key);
            assert!(sources.iter().any(|src| src.contains(&quoted)), "unused key {}", key);
        }
        assert!(!dictionary.contains(Locale::En, "cli.error_save_config"));
    }

    #[test]
    fn builtin_tables_are_not_symmetric() {
        let mut i18n = I18n::new("vi");
        assert_eq!(i18n.t("portfolio.items.0.title"), "E-commerce Fashion Brand");
        i18n.set_locale(Locale::En);
        assert_eq!(i18n.t("portfolio.items.0.title"), "portfolio.items.0.title");

        let dictionary = Dictionary::builtin();
        let gap = dictionary.missing_keys(Locale::Vi, Locale::En);
        assert!(gap.contains(&"portfolio.items.5.results.2"));
        assert!(dictionary.missing_keys(Locale::En, Locale::Vi).is_empty());
    }

    #[test]
    fn every_stored_key_translates_to_its_value() {
        let dictionary = Dictionary::builtin();
        for locale in Locale::ALL {
            let i18n = I18n::with_dictionary(dictionary.clone(), locale);
            for (key, value) in dictionary.entries(locale) {
                assert_eq!(i18n.t(key), value, "{locale}: {key}");
            }
        }
    }

    #[test]
    fn locale_tags() {
        assert_eq!(Locale::from_tag("VI"), Some(Locale::Vi));
        assert_eq!(Locale::from_tag("vietnamese"), Some(Locale::Vi));
        assert_eq!(Locale::from_tag("en-GB"), Some(Locale::En));
        assert_eq!(Locale::from_tag("zh"), None);
        assert_eq!(Locale::Vi.other(), Locale::En);
        assert_eq!(Locale::En.to_string(), "en");
    }
}
