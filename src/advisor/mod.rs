use serde::Serialize;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::access::{AccessError, AccessGate, AccessPolicy};
use crate::config::AdvisorConfig;
use crate::glossary::{self, GlossaryEntry};
use crate::holdem::{
    calculate_from_input, recommend, suggest_hands, Category, HandEntry, HandGrid, HandInsight,
    HandTable, PotOdds, PotOddsError, Recommendation, Situation,
};
use crate::i18n::{Locale, Translator};
use crate::storage::{JsonFileStore, KeyValueStore, MemoryStore, Preferences, StorageError};

/// A calculator input problem, carrying the localized warning to show.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct CalculatorWarning {
    pub message: String,
    #[source]
    pub cause: PotOddsError,
}

/// Everything the hand details view shows, already localized.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HandDetails {
    pub entry: &'static HandEntry,
    pub insight: HandInsight,
    pub category: String,
    pub positions: Vec<String>,
    pub strength: String,
    pub frequency: String,
    pub stack: Option<String>,
}

/// The simulator's answer with its explanation in the active locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationResult {
    pub recommendation: Recommendation,
    pub explanation: String,
}

/// A pot odds result with the verdict in the active locale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PotOddsReport {
    pub odds: PotOdds,
    pub verdict: String,
}

/// The advisor as a front end sees it.
///
/// The access flag and the language preference are read from the store
/// once, on construction, and written back only when they change.
///
/// ```
/// use hand_advisor::access::AccessPolicy;
/// use hand_advisor::advisor::Advisor;
/// use hand_advisor::i18n::Locale;
/// use hand_advisor::storage::MemoryStore;
///
/// let mut advisor =
///     Advisor::new(MemoryStore::new(), AccessPolicy::Acknowledge, Some(Locale::EnUs)).unwrap();
/// assert!(!advisor.is_unlocked());
/// advisor.unlock("let me in").unwrap();
/// assert!(advisor.is_unlocked());
///
/// let details = advisor.hand_details("AKs");
/// assert_eq!(details.category, "Premium");
/// ```
#[derive(Debug)]
pub struct Advisor<S: KeyValueStore> {
    table: &'static HandTable,
    store: S,
    gate: AccessGate,
    translator: Translator,
    unlocked: bool,
}

impl<S: KeyValueStore> Advisor<S> {
    /// Build an advisor over `store`.
    ///
    /// With no `locale` given the stored preference is used, then the
    /// system language.
    #[instrument(level = "debug", skip(store))]
    pub fn new(mut store: S, policy: AccessPolicy, locale: Option<Locale>) -> Result<Self, StorageError> {
        let gate = AccessGate::new(policy);
        let unlocked = gate.is_granted(&mut store)?;
        let locale = match locale {
            Some(locale) => locale,
            None => {
                let stored = Preferences::new(&mut store).stored_locale()?;
                Locale::detect(stored.as_deref(), Locale::system_language().as_deref())
            }
        };
        debug!(unlocked, %locale, "Advisor ready");

        Ok(Self {
            table: HandTable::standard(),
            store,
            gate,
            translator: Translator::new(locale),
            unlocked,
        })
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    /// Try to pass the access gate. A rejection carries the localized error
    /// message.
    pub fn unlock(&mut self, input: &str) -> Result<(), AccessError> {
        if self.unlocked {
            return Ok(());
        }
        let rejected = self.translator.t("accessGate.errorMessage");
        self.gate.attempt(&mut self.store, input, rejected)?;
        self.unlocked = true;
        Ok(())
    }

    pub fn locale(&self) -> Locale {
        self.translator.locale()
    }

    /// Switch to the other language and remember the choice.
    pub fn toggle_language(&mut self) -> Result<Locale, StorageError> {
        self.set_locale(self.locale().toggle())?;
        Ok(self.locale())
    }

    pub fn set_locale(&mut self, locale: Locale) -> Result<(), StorageError> {
        Preferences::new(&mut self.store).set_locale(locale)?;
        self.translator.set_locale(locale);
        Ok(())
    }

    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        self.translator.t(key)
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    pub fn table(&self) -> &'static HandTable {
        self.table
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn hand_details(&self, hand: &str) -> HandDetails {
        let entry = self.table.lookup(hand);
        let insight = HandInsight::new(entry);
        let t = |key: &str| self.translator.t(key).to_string();

        HandDetails {
            entry,
            insight,
            category: t(entry.category.translation_key().as_str()),
            positions: entry
                .positions
                .iter()
                .map(|group| t(group.translation_key()))
                .collect(),
            strength: t(insight.strength.translation_key()),
            frequency: t(insight.frequency.frequency_key()),
            stack: insight.stack.map(|advice| t(advice.translation_key())),
        }
    }

    pub fn simulate(&self, situation: &Situation) -> SimulationResult {
        let recommendation = recommend(self.table, situation);
        SimulationResult {
            recommendation,
            explanation: self
                .translator
                .t(recommendation.explanation.translation_key())
                .to_string(),
        }
    }

    /// Run the pot odds calculator on raw form input.
    pub fn calculate_pot_odds(
        &self,
        outs: &str,
        pot_size: &str,
        bet_size: &str,
    ) -> Result<PotOddsReport, CalculatorWarning> {
        match calculate_from_input(outs, pot_size, bet_size) {
            Ok(odds) => Ok(PotOddsReport {
                odds,
                verdict: self.translator.t(odds.verdict.translation_key()).to_string(),
            }),
            Err(cause) => {
                debug!(%cause, "Rejected calculator input");
                Err(CalculatorWarning {
                    message: self.translator.t("calculator.results.warning").to_string(),
                    cause,
                })
            }
        }
    }

    pub fn glossary(&self) -> Vec<GlossaryEntry> {
        glossary::entries(&self.translator)
    }

    pub fn grid(&self, filter: Option<Category>) -> HandGrid<'static> {
        HandGrid::new(self.table).with_filter(filter)
    }

    pub fn suggestions(&self, prefix: &str) -> Vec<&'static str> {
        suggest_hands(prefix)
    }
}

impl Advisor<MemoryStore> {
    /// An advisor that remembers nothing between runs.
    pub fn in_memory(policy: AccessPolicy, locale: Option<Locale>) -> Result<Self, StorageError> {
        Self::new(MemoryStore::new(), policy, locale)
    }
}

impl Advisor<Box<dyn KeyValueStore>> {
    /// Build from configuration, opening the file store when a path is set.
    pub fn from_config(config: &AdvisorConfig) -> Result<Self, StorageError> {
        let store: Box<dyn KeyValueStore> = match &config.store_path {
            Some(path) => Box::new(JsonFileStore::open(path)?),
            None => Box::new(MemoryStore::new()),
        };
        Self::new(store, config.access.clone(), config.locale)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::holdem::{Action, Position, Verdict};
    use crate::storage::{ACCESS_GRANTED, ACCESS_KEY, LOCALE_KEY};

    fn english() -> Advisor<MemoryStore> {
        Advisor::in_memory(AccessPolicy::Acknowledge, Some(Locale::EnUs)).unwrap()
    }

    #[test_log::test]
    fn test_unlock_persists() {
        let mut advisor = english();
        assert!(matches!(advisor.unlock(""), Err(AccessError::Blank)));
        assert!(!advisor.is_unlocked());

        advisor.unlock("ok").unwrap();
        assert!(advisor.is_unlocked());
        assert_eq!(
            advisor.store().get(ACCESS_KEY).unwrap().as_deref(),
            Some(ACCESS_GRANTED)
        );
    }

    #[test]
    fn test_rejection_is_localized() {
        let mut advisor = Advisor::in_memory(
            AccessPolicy::Passphrase {
                phrase: "nuts".to_string(),
            },
            Some(Locale::PtBr),
        )
        .unwrap();
        let err = advisor.unlock("air").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Acesso negado. Verifique sua entrada e tente novamente."
        );
    }

    #[test]
    fn test_flags_read_at_startup() {
        let mut store = MemoryStore::new();
        store.set(ACCESS_KEY, ACCESS_GRANTED).unwrap();
        store.set(LOCALE_KEY, "pt-BR").unwrap();

        let advisor = Advisor::new(store, AccessPolicy::Acknowledge, None).unwrap();
        assert!(advisor.is_unlocked());
        assert_eq!(advisor.locale(), Locale::PtBr);
    }

    #[test]
    fn test_toggle_language_persists() {
        let mut advisor = english();
        assert_eq!(advisor.toggle_language().unwrap(), Locale::PtBr);
        assert_eq!(
            advisor.store().get(LOCALE_KEY).unwrap().as_deref(),
            Some("pt-BR")
        );
        assert_eq!(advisor.t("handModal.categories.strong"), "Forte");
        assert_eq!(advisor.toggle_language().unwrap(), Locale::EnUs);
    }

    #[test]
    fn test_hand_details() {
        let advisor = english();
        let details = advisor.hand_details("aks");
        assert_eq!(details.entry.hand.to_notation(), "AKs");
        assert_eq!(details.category, "Premium");
        assert_eq!(details.strength, "Very Strong");
        assert_eq!(details.frequency, "Always play aggressively");
        assert_eq!(details.stack.as_deref(), Some("Any stack size"));
        assert!(!details.positions.is_empty());

        let details = advisor.hand_details("nonsense");
        assert_eq!(details.entry.hand.to_notation(), "72o");
        assert!(details.positions.is_empty());
        assert_eq!(details.stack, None);
    }

    #[test]
    fn test_simulate() {
        let advisor = english();
        let situation = Situation::builder()
            .hand("AA")
            .position(Position::UnderTheGun)
            .stack_depth(50)
            .build()
            .unwrap();
        let result = advisor.simulate(&situation);
        assert_eq!(result.recommendation.action, Action::Raise);
        assert!(result.explanation.starts_with("Premium hand"));
    }

    #[test]
    fn test_pot_odds() {
        let advisor = english();
        let report = advisor.calculate_pot_odds("8", "100", "25").unwrap();
        assert_eq!(report.odds.verdict, Verdict::Fold);
        assert_eq!(report.verdict, "FOLD");

        let warning = advisor.calculate_pot_odds("0", "100", "25").unwrap_err();
        assert_eq!(warning.cause, PotOddsError::OutsOutOfRange(0));
        assert_eq!(warning.to_string(), advisor.t("calculator.results.warning"));
    }

    #[test]
    fn test_glossary_and_grid() {
        let advisor = english();
        assert_eq!(advisor.glossary().len(), 21);
        assert_eq!(advisor.grid(Some(Category::Premium)).cells().count(), 6);
        assert!(advisor.suggestions("A").contains(&"AKs"));
    }

    #[test_log::test]
    fn test_from_config_file_store() {
        let temp_dir = TempDir::new().unwrap();
        let config = AdvisorConfig {
            access: AccessPolicy::Acknowledge,
            store_path: Some(temp_dir.path().join("prefs").join("advisor.json")),
            locale: None,
        };

        let mut advisor = Advisor::from_config(&config).unwrap();
        advisor.unlock("ok").unwrap();
        advisor.set_locale(Locale::PtBr).unwrap();

        let advisor = Advisor::from_config(&config).unwrap();
        assert!(advisor.is_unlocked());
        assert_eq!(advisor.locale(), Locale::PtBr);
    }
}
