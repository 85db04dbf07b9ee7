use serde::Serialize;

use crate::i18n::Translator;

/// Catalog keys under `glossary.terms`.
pub const TERM_KEYS: [&str; 21] = [
    "check",
    "bet",
    "call",
    "raise",
    "fold",
    "allin",
    "pot",
    "chips",
    "stack",
    "kicker",
    "showdown",
    "bankroll",
    "blinds",
    "smallBlind",
    "bigBlind",
    "button",
    "utg",
    "preFlop",
    "flop",
    "turn",
    "river",
];

/// One localized glossary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GlossaryEntry {
    pub key: &'static str,
    pub term: String,
    pub description: String,
}

/// All glossary entries in the translator's locale, sorted by the localized
/// term ignoring case.
///
/// ```
/// use hand_advisor::glossary;
/// use hand_advisor::i18n::{Locale, Translator};
///
/// let entries = glossary::entries(&Translator::new(Locale::EnUs));
/// assert_eq!(entries.len(), 21);
/// assert_eq!(entries[0].term, "All-in");
/// ```
pub fn entries(translator: &Translator) -> Vec<GlossaryEntry> {
    let mut entries: Vec<GlossaryEntry> = TERM_KEYS
        .iter()
        .map(|&key| GlossaryEntry {
            key,
            term: translator.t(&format!("glossary.terms.{key}.term")).to_string(),
            description: translator
                .t(&format!("glossary.terms.{key}.description"))
                .to_string(),
        })
        .collect();
    entries.sort_by_cached_key(|e| e.term.to_lowercase());
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;

    #[test]
    fn test_sorted_in_each_locale() {
        for locale in Locale::all() {
            let entries = entries(&Translator::new(locale));
            assert_eq!(entries.len(), TERM_KEYS.len());
            let terms: Vec<_> = entries.iter().map(|e| e.term.to_lowercase()).collect();
            let mut sorted = terms.clone();
            sorted.sort();
            assert_eq!(terms, sorted);
        }
    }

    #[test]
    fn test_every_term_translated() {
        for locale in Locale::all() {
            let translator = Translator::new(locale);
            for entry in entries(&translator) {
                assert!(!entry.term.starts_with("glossary."), "{}", entry.key);
                assert!(!entry.description.starts_with("glossary."), "{}", entry.key);
            }
        }
    }

    #[test]
    fn test_order_follows_locale() {
        let en = entries(&Translator::new(Locale::EnUs));
        let pt = entries(&Translator::new(Locale::PtBr));
        // "Bet" is "Aposta" in Portuguese, which moves it up
        assert_eq!(en[0].key, "allin");
        assert_eq!(en[2].key, "bet");
        assert_eq!(pt[0].key, "allin");
        assert_eq!(pt[1].key, "bet");
        assert_eq!(en.last().map(|e| e.key), Some("utg"));
    }
}
