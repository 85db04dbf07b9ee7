use serde::Serialize;

use super::hand_table::{Action, Category, HandEntry};

/// How strong a win rate reads in the hand details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StrengthLevel {
    ExtremelyStrong,
    VeryStrong,
    Moderate,
    Weak,
    VeryWeak,
}

impl StrengthLevel {
    pub fn from_win_rate(win_rate: f32) -> Self {
        if win_rate >= 85.0 {
            Self::ExtremelyStrong
        } else if win_rate >= 70.0 {
            Self::VeryStrong
        } else if win_rate >= 55.0 {
            Self::Moderate
        } else if win_rate >= 40.0 {
            Self::Weak
        } else {
            Self::VeryWeak
        }
    }

    pub fn translation_key(self) -> &'static str {
        match self {
            Self::ExtremelyStrong => "handModal.strategicInfo.strengthLevels.extremelyStrong",
            Self::VeryStrong => "handModal.strategicInfo.strengthLevels.veryStrong",
            Self::Moderate => "handModal.strategicInfo.strengthLevels.moderate",
            Self::Weak => "handModal.strategicInfo.strengthLevels.weak",
            Self::VeryWeak => "handModal.strategicInfo.strengthLevels.veryWeak",
        }
    }
}

/// Stack depth a playable hand wants behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StackAdvice {
    AnyStack,
    MediumToDeep,
    DeepForImpliedOdds,
}

impl StackAdvice {
    pub fn translation_key(self) -> &'static str {
        match self {
            Self::AnyStack => "handModal.strategicInfo.stackSizeAdvice.premium",
            Self::MediumToDeep => "handModal.strategicInfo.stackSizeAdvice.strong",
            Self::DeepForImpliedOdds => "handModal.strategicInfo.stackSizeAdvice.situational",
        }
    }
}

/// The derived "strategic information" shown alongside a hand.
///
/// ```
/// use hand_advisor::holdem::{HandInsight, HandTable, StackAdvice, StrengthLevel};
///
/// let insight = HandInsight::new(HandTable::standard().lookup("AA"));
/// assert_eq!(insight.strength, StrengthLevel::ExtremelyStrong);
/// assert_eq!(insight.stack, Some(StackAdvice::AnyStack));
///
/// // Unplayable hands get no stack advice.
/// let insight = HandInsight::new(HandTable::standard().lookup("72o"));
/// assert_eq!(insight.stack, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HandInsight {
    pub strength: StrengthLevel,
    pub frequency: Action,
    pub stack: Option<StackAdvice>,
}

impl HandInsight {
    pub fn new(entry: &HandEntry) -> Self {
        let stack = if entry.positions.is_empty() {
            None
        } else {
            Some(match entry.category {
                Category::Premium => StackAdvice::AnyStack,
                Category::Strong => StackAdvice::MediumToDeep,
                _ => StackAdvice::DeepForImpliedOdds,
            })
        };

        Self {
            strength: StrengthLevel::from_win_rate(entry.win_rate),
            frequency: entry.recommendation,
            stack,
        }
    }
}
