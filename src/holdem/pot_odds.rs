//! Pot odds against the rule of 4 and 2.
//!
//! The required equity to call is `bet / (pot + bet)`. Drawing odds use the
//! rule of thumb of `outs * 4` percent with two cards to come and
//! `outs * 2` with one. Neither figure is clamped, so large out counts can
//! read above 100%. The call or fold verdict compares against the one card
//! figure.

use std::fmt;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

pub const MIN_OUTS: u8 = 1;
pub const MAX_OUTS: u8 = 20;

/// Rejected calculator input. No figures are produced for any of these.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum PotOddsError {
    #[error("Outs must be a whole number, got `{0}`")]
    OutsNotANumber(String),
    #[error("Outs must be between 1 and 20, got {0}")]
    OutsOutOfRange(i64),
    #[error("Pot size must be a number, got `{0}`")]
    PotNotANumber(String),
    #[error("Pot size must be positive, got {0}")]
    PotNotPositive(f64),
    #[error("Bet size must be a number, got `{0}`")]
    BetNotANumber(String),
    #[error("Bet size must be positive, got {0}")]
    BetNotPositive(f64),
    #[error("Pot plus bet is too large to price, got {pot_size} + {bet_size}")]
    TotalTooLarge { pot_size: f64, bet_size: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Verdict {
    Call,
    Fold,
}

impl Verdict {
    pub fn translation_key(self) -> &'static str {
        match self {
            Self::Call => "calculator.results.call",
            Self::Fold => "calculator.results.fold",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Call => f.write_str("CALL"),
            Self::Fold => f.write_str("FOLD"),
        }
    }
}

/// Result of a pot odds calculation. Percentages are in the 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PotOdds {
    pub outs: u8,
    pub pot_size: f64,
    pub bet_size: f64,
    pub total_pot_after_call: f64,
    pub equity_required: f64,
    /// Two cards to come, `outs * 4`.
    pub hit_odds_flop_to_river: f64,
    /// One card to come, `outs * 2`.
    pub hit_odds_turn_to_river: f64,
    pub verdict: Verdict,
}

impl PotOdds {
    /// The price as `bet:pot`, both rounded to whole chips, e.g. `"25:100"`.
    pub fn pot_odds_ratio(&self) -> String {
        format!("{:.0}:{:.0}", self.bet_size, self.pot_size)
    }

    pub fn equity_required_display(&self) -> String {
        format_percent(self.equity_required)
    }

    pub fn hit_odds_flop_display(&self) -> String {
        format_percent(self.hit_odds_flop_to_river)
    }

    pub fn hit_odds_turn_display(&self) -> String {
        format_percent(self.hit_odds_turn_to_river)
    }
}

impl fmt::Display for PotOdds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Recommendation: {}", self.verdict)?;
        writeln!(f, "Outs: {}", self.outs)?;
        writeln!(f, "Pot odds: {}", self.pot_odds_ratio())?;
        writeln!(f, "Equity required: {}", self.equity_required_display())?;
        writeln!(f, "Hit odds (flop to river): {}", self.hit_odds_flop_display())?;
        write!(f, "Hit odds (turn to river): {}", self.hit_odds_turn_display())
    }
}

fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Compute pot odds from already parsed values.
///
/// # Errors
///
/// Returns a `PotOddsError` when `outs` is outside 1-20, when either amount
/// is not a positive finite number, or when their sum overflows.
///
/// # Examples
///
/// ```
/// use hand_advisor::holdem::{calculate_pot_odds, Verdict};
///
/// let odds = calculate_pot_odds(8, 100.0, 25.0).unwrap();
/// assert_eq!(odds.equity_required_display(), "20.00%");
/// assert_eq!(odds.hit_odds_turn_display(), "16.00%");
/// assert_eq!(odds.verdict, Verdict::Fold);
///
/// assert!(calculate_pot_odds(0, 100.0, 25.0).is_err());
/// ```
pub fn calculate_pot_odds(outs: i64, pot_size: f64, bet_size: f64) -> Result<PotOdds, PotOddsError> {
    if !(i64::from(MIN_OUTS)..=i64::from(MAX_OUTS)).contains(&outs) {
        return Err(PotOddsError::OutsOutOfRange(outs));
    }
    if !pot_size.is_finite() || pot_size <= 0.0 {
        return Err(PotOddsError::PotNotPositive(pot_size));
    }
    if !bet_size.is_finite() || bet_size <= 0.0 {
        return Err(PotOddsError::BetNotPositive(bet_size));
    }
    let outs = outs as u8;

    let total_pot_after_call = pot_size + bet_size;
    if !total_pot_after_call.is_finite() {
        return Err(PotOddsError::TotalTooLarge { pot_size, bet_size });
    }
    let equity_required = bet_size / total_pot_after_call * 100.0;
    let hit_odds_flop_to_river = f64::from(outs) * 4.0;
    let hit_odds_turn_to_river = f64::from(outs) * 2.0;

    let verdict = if hit_odds_turn_to_river >= equity_required {
        Verdict::Call
    } else {
        Verdict::Fold
    };

    debug!(
        outs,
        pot_size,
        bet_size,
        equity_required,
        ?verdict,
        "Calculated pot odds"
    );

    Ok(PotOdds {
        outs,
        pot_size,
        bet_size,
        total_pot_after_call,
        equity_required,
        hit_odds_flop_to_river,
        hit_odds_turn_to_river,
        verdict,
    })
}

/// Compute pot odds from raw form input.
///
/// Surrounding whitespace is ignored. Outs must be a whole number, the
/// amounts may have decimals.
///
/// ```
/// use hand_advisor::holdem::{calculate_from_input, Verdict};
///
/// let odds = calculate_from_input("15", "100", "25").unwrap();
/// assert_eq!(odds.verdict, Verdict::Call);
///
/// assert!(calculate_from_input("eight", "100", "25").is_err());
/// ```
pub fn calculate_from_input(outs: &str, pot_size: &str, bet_size: &str) -> Result<PotOdds, PotOddsError> {
    let outs_value: i64 = outs
        .trim()
        .parse()
        .map_err(|_| PotOddsError::OutsNotANumber(outs.to_string()))?;
    let pot_value: f64 = pot_size
        .trim()
        .parse()
        .map_err(|_| PotOddsError::PotNotANumber(pot_size.to_string()))?;
    let bet_value: f64 = bet_size
        .trim()
        .parse()
        .map_err(|_| PotOddsError::BetNotANumber(bet_size.to_string()))?;

    calculate_pot_odds(outs_value, pot_value, bet_value)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_eight_outs_fold() {
        let odds = calculate_pot_odds(8, 100.0, 25.0).unwrap();
        assert_relative_eq!(odds.total_pot_after_call, 125.0);
        assert_relative_eq!(odds.equity_required, 20.0);
        assert_relative_eq!(odds.hit_odds_flop_to_river, 32.0);
        assert_relative_eq!(odds.hit_odds_turn_to_river, 16.0);
        assert_eq!(odds.verdict, Verdict::Fold);
    }

    #[test]
    fn test_fifteen_outs_call() {
        let odds = calculate_pot_odds(15, 100.0, 25.0).unwrap();
        assert_relative_eq!(odds.hit_odds_turn_to_river, 30.0);
        assert_relative_eq!(odds.equity_required, 20.0);
        assert_eq!(odds.verdict, Verdict::Call);
    }

    #[test]
    fn test_equal_odds_call() {
        // 10 outs gives 20% against a 20% price
        let odds = calculate_pot_odds(10, 100.0, 25.0).unwrap();
        assert_eq!(odds.verdict, Verdict::Call);
    }

    #[test]
    fn test_flop_odds_not_used_for_verdict() {
        // 6 outs: 24% with two cards, 12% with one, price 20%
        let odds = calculate_pot_odds(6, 100.0, 25.0).unwrap();
        assert!(odds.hit_odds_flop_to_river > odds.equity_required);
        assert_eq!(odds.verdict, Verdict::Fold);
    }

    #[test]
    fn test_not_clamped() {
        let odds = calculate_pot_odds(20, 10.0, 1.0).unwrap();
        assert_relative_eq!(odds.hit_odds_flop_to_river, 80.0);

        let odds = calculate_pot_odds(20, 1.0, 1000.0).unwrap();
        assert!(odds.equity_required < 100.0);
        assert_eq!(odds.verdict, Verdict::Fold);
    }

    #[test]
    fn test_outs_range() {
        assert_eq!(
            calculate_pot_odds(0, 100.0, 25.0),
            Err(PotOddsError::OutsOutOfRange(0))
        );
        assert_eq!(
            calculate_pot_odds(21, 100.0, 25.0),
            Err(PotOddsError::OutsOutOfRange(21))
        );
        assert!(calculate_pot_odds(-3, 100.0, 25.0).is_err());
        assert!(calculate_pot_odds(1, 100.0, 25.0).is_ok());
        assert!(calculate_pot_odds(20, 100.0, 25.0).is_ok());
    }

    #[test]
    fn test_amounts_must_be_positive() {
        assert_eq!(
            calculate_pot_odds(8, 0.0, 25.0),
            Err(PotOddsError::PotNotPositive(0.0))
        );
        assert_eq!(
            calculate_pot_odds(8, 100.0, -5.0),
            Err(PotOddsError::BetNotPositive(-5.0))
        );
        assert!(calculate_pot_odds(8, f64::NAN, 25.0).is_err());
        assert!(calculate_pot_odds(8, 100.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_overflowing_total_rejected() {
        assert_eq!(
            calculate_pot_odds(1, 1e308, 1e308),
            Err(PotOddsError::TotalTooLarge {
                pot_size: 1e308,
                bet_size: 1e308,
            })
        );
        assert!(calculate_from_input("1", "1e308", "1e308").is_err());

        let odds = calculate_pot_odds(1, 1e307, 1e307).unwrap();
        assert_relative_eq!(odds.equity_required, 50.0);
        assert_eq!(odds.verdict, Verdict::Fold);
    }

    #[test]
    fn test_input_parsing() {
        let odds = calculate_from_input(" 8 ", "100.5", "25").unwrap();
        assert_eq!(odds.outs, 8);
        assert_relative_eq!(odds.pot_size, 100.5);

        assert_eq!(
            calculate_from_input("", "100", "25"),
            Err(PotOddsError::OutsNotANumber(String::new()))
        );
        assert_eq!(
            calculate_from_input("8.5", "100", "25"),
            Err(PotOddsError::OutsNotANumber("8.5".to_string()))
        );
        assert_eq!(
            calculate_from_input("8", "lots", "25"),
            Err(PotOddsError::PotNotANumber("lots".to_string()))
        );
        assert_eq!(
            calculate_from_input("8", "100", ""),
            Err(PotOddsError::BetNotANumber(String::new()))
        );
        assert_eq!(
            calculate_from_input("0", "100", "25"),
            Err(PotOddsError::OutsOutOfRange(0))
        );
    }

    #[test]
    fn test_display_formatting() {
        let odds = calculate_pot_odds(8, 100.0, 25.0).unwrap();
        assert_eq!(odds.pot_odds_ratio(), "25:100");
        assert_eq!(odds.equity_required_display(), "20.00%");
        assert_eq!(odds.hit_odds_flop_display(), "32.00%");
        assert_eq!(odds.hit_odds_turn_display(), "16.00%");

        let rendered = odds.to_string();
        assert!(rendered.starts_with("Recommendation: FOLD"));
        assert!(rendered.contains("Pot odds: 25:100"));

        let odds = calculate_pot_odds(9, 60.0, 30.0).unwrap();
        assert_eq!(odds.equity_required_display(), "33.33%");
    }
}
