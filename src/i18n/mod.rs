//! Translation catalogs.
//!
//! Two locales are bundled as JSON and parsed on first use. Keys are dotted
//! paths into the catalog such as `simulator.results.premiumRaise`. A key
//! missing from the active locale falls back to `en-US`, and a key missing
//! from both resolves to itself.

use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

static EN_US: Lazy<Value> = Lazy::new(|| parse_catalog("en-US", include_str!("locales/en-US.json")));
static PT_BR: Lazy<Value> = Lazy::new(|| parse_catalog("pt-BR", include_str!("locales/pt-BR.json")));

fn parse_catalog(code: &str, raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|err| {
        warn!(code, %err, "Unable to parse locale catalog");
        Value::Null
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "pt-BR")]
    PtBr,
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
}

impl Locale {
    pub const fn all() -> [Self; 2] {
        [Self::PtBr, Self::EnUs]
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::PtBr => "pt-BR",
            Self::EnUs => "en-US",
        }
    }

    /// Parse an exact locale code.
    ///
    /// ```
    /// use hand_advisor::i18n::Locale;
    ///
    /// assert_eq!(Locale::from_code("pt-BR"), Some(Locale::PtBr));
    /// assert_eq!(Locale::from_code("fr-FR"), None);
    /// ```
    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|l| l.code() == code.trim())
    }

    /// The other locale.
    pub fn toggle(self) -> Self {
        match self {
            Self::PtBr => Self::EnUs,
            Self::EnUs => Self::PtBr,
        }
    }

    /// Pick the starting locale.
    ///
    /// A valid stored preference wins. Otherwise a system language starting
    /// with `pt` selects `pt-BR`, and anything else selects `en-US`.
    ///
    /// ```
    /// use hand_advisor::i18n::Locale;
    ///
    /// assert_eq!(Locale::detect(Some("en-US"), Some("pt_BR.UTF-8")), Locale::EnUs);
    /// assert_eq!(Locale::detect(None, Some("pt_BR.UTF-8")), Locale::PtBr);
    /// assert_eq!(Locale::detect(Some("garbage"), Some("de_DE")), Locale::EnUs);
    /// ```
    pub fn detect(stored: Option<&str>, system_language: Option<&str>) -> Self {
        if let Some(locale) = stored.and_then(Self::from_code) {
            return locale;
        }
        match system_language {
            Some(lang) if lang.trim().to_ascii_lowercase().starts_with("pt") => Self::PtBr,
            _ => Self::EnUs,
        }
    }

    /// The system language from the usual environment variables, most
    /// specific first.
    pub fn system_language() -> Option<String> {
        ["LC_ALL", "LC_MESSAGES", "LANG"]
            .into_iter()
            .filter_map(|name| std::env::var(name).ok())
            .find(|value| !value.trim().is_empty())
    }

    fn catalog(self) -> &'static Value {
        match self {
            Self::PtBr => &PT_BR,
            Self::EnUs => &EN_US,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Resolves translation keys for one active locale.
///
/// ```
/// use hand_advisor::i18n::{Locale, Translator};
///
/// let translator = Translator::new(Locale::PtBr);
/// assert_eq!(translator.t("calculator.results.call"), "PAGAR");
/// assert_eq!(translator.t("no.such.key"), "no.such.key");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Translator {
    locale: Locale,
}

impl Translator {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    /// Translate a dotted key. Never fails.
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        translate_in(self.locale.catalog(), Locale::EnUs.catalog(), key)
    }

    /// Whether the active locale, or the fallback, has the key.
    pub fn contains(&self, key: &str) -> bool {
        resolve(self.locale.catalog(), key).is_some() || resolve(Locale::EnUs.catalog(), key).is_some()
    }
}

fn translate_in<'a>(primary: &'static Value, fallback: &'static Value, key: &'a str) -> &'a str {
    if let Some(text) = resolve(primary, key) {
        return text;
    }
    if let Some(text) = resolve(fallback, key) {
        debug!(key, "Translation missing from active locale");
        return text;
    }
    debug!(key, "Translation missing, using key");
    key
}

fn resolve<'v>(catalog: &'v Value, key: &str) -> Option<&'v str> {
    key.split('.')
        .try_fold(catalog, |node, part| node.get(part))
        .and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use serde_json::json;

    use super::*;

    fn leaf_keys(value: &Value, prefix: &str, out: &mut BTreeSet<String>) {
        match value {
            Value::Object(map) => {
                for (k, v) in map {
                    let path = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    leaf_keys(v, &path, out);
                }
            }
            _ => {
                out.insert(prefix.to_string());
            }
        }
    }

    #[test]
    fn test_catalogs_parse() {
        assert!(EN_US.is_object());
        assert!(PT_BR.is_object());
    }

    #[test]
    fn test_catalogs_have_same_keys() {
        let mut en = BTreeSet::new();
        let mut pt = BTreeSet::new();
        leaf_keys(&EN_US, "", &mut en);
        leaf_keys(&PT_BR, "", &mut pt);
        assert_eq!(en, pt);
    }

    #[test_log::test]
    fn test_fallback_chain() {
        static PRIMARY: Lazy<Value> = Lazy::new(|| json!({"a": {"b": "primary"}}));
        static FALLBACK: Lazy<Value> =
            Lazy::new(|| json!({"a": {"b": "fallback", "c": "only fallback"}}));

        assert_eq!(translate_in(&PRIMARY, &FALLBACK, "a.b"), "primary");
        assert_eq!(translate_in(&PRIMARY, &FALLBACK, "a.c"), "only fallback");
        assert_eq!(translate_in(&PRIMARY, &FALLBACK, "a.d"), "a.d");
        // Objects are not translations
        assert_eq!(translate_in(&PRIMARY, &FALLBACK, "a"), "a");
    }

    #[test]
    fn test_translate() {
        let en = Translator::new(Locale::EnUs);
        let pt = Translator::new(Locale::PtBr);
        assert_eq!(en.t("handModal.categories.premium"), "Premium");
        assert_eq!(pt.t("handModal.positions.latePosition"), "Posição Final");
        assert_eq!(en.t("simulator.positions.BTN"), "BTN (Button)");
        assert!(en.contains("accessGate.errorMessage"));
        assert!(!en.contains("accessGate"));
        assert_eq!(en.t(""), "");
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Locale::PtBr.toggle(), Locale::EnUs);
        assert_eq!(Locale::EnUs.toggle().toggle(), Locale::EnUs);

        let mut translator = Translator::default();
        assert_eq!(translator.locale(), Locale::EnUs);
        translator.set_locale(translator.locale().toggle());
        assert_eq!(translator.t("calculator.results.fold"), "DESISTIR");
    }

    #[test]
    fn test_detect() {
        assert_eq!(Locale::detect(Some("pt-BR"), None), Locale::PtBr);
        assert_eq!(Locale::detect(None, Some("PT-pt")), Locale::PtBr);
        assert_eq!(Locale::detect(None, Some("en_GB.UTF-8")), Locale::EnUs);
        assert_eq!(Locale::detect(None, None), Locale::EnUs);
        assert_eq!(Locale::detect(Some(""), Some("pt")), Locale::PtBr);
    }

    #[test]
    fn test_serde_codes() {
        assert_eq!(serde_json::to_string(&Locale::PtBr).unwrap(), "\"pt-BR\"");
        let locale: Locale = serde_json::from_str("\"en-US\"").unwrap();
        assert_eq!(locale, Locale::EnUs);
        assert!(serde_json::from_str::<Locale>("\"es-ES\"").is_err());
    }
}
