use std::fmt;

/// Card rank ordered from `Two` up to `Ace`.
///
/// Only the rank matters for starting-hand notation; suits collapse into
/// the suited/offsuit flag of [`crate::core::StartingHand`].
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Value {
    Two = 0,
    Three = 1,
    Four = 2,
    Five = 3,
    Six = 4,
    Seven = 5,
    Eight = 6,
    Nine = 7,
    Ten = 8,
    Jack = 9,
    Queen = 10,
    King = 11,
    Ace = 12,
}

/// Constant of all the values, lowest first.
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Get all of the `Value`'s that are possible, lowest first.
    ///
    /// # Examples
    ///
    /// ```
    /// use hand_advisor::core::Value;
    ///
    /// let values = Value::values();
    /// assert_eq!(values.len(), 13);
    /// assert_eq!(values[0], Value::Two);
    /// assert_eq!(values[12], Value::Ace);
    /// ```
    pub const fn values() -> [Self; 13] {
        VALUES
    }

    /// Parse a rank character. Case does not matter, so `t` and `T` are
    /// both `Ten`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hand_advisor::core::Value;
    ///
    /// assert_eq!(Some(Value::Ace), Value::from_char('A'));
    /// assert_eq!(Some(Value::Ten), Value::from_char('t'));
    /// assert_eq!(None, Value::from_char('1'));
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Self::Ace),
            'K' => Some(Self::King),
            'Q' => Some(Self::Queen),
            'J' => Some(Self::Jack),
            'T' => Some(Self::Ten),
            '9' => Some(Self::Nine),
            '8' => Some(Self::Eight),
            '7' => Some(Self::Seven),
            '6' => Some(Self::Six),
            '5' => Some(Self::Five),
            '4' => Some(Self::Four),
            '3' => Some(Self::Three),
            '2' => Some(Self::Two),
            _ => None,
        }
    }

    /// The canonical upper case character for this rank.
    pub fn to_char(self) -> char {
        match self {
            Self::Ace => 'A',
            Self::King => 'K',
            Self::Queen => 'Q',
            Self::Jack => 'J',
            Self::Ten => 'T',
            Self::Nine => '9',
            Self::Eight => '8',
            Self::Seven => '7',
            Self::Six => '6',
            Self::Five => '5',
            Self::Four => '4',
            Self::Three => '3',
            Self::Two => '2',
        }
    }

    /// Position of this rank in the hand grid, where the Ace is the first
    /// row/column (0) and the Two is the last (12).
    ///
    /// ```
    /// use hand_advisor::core::Value;
    ///
    /// assert_eq!(0, Value::Ace.grid_index());
    /// assert_eq!(4, Value::Ten.grid_index());
    /// assert_eq!(12, Value::Two.grid_index());
    /// ```
    pub fn grid_index(self) -> usize {
        12 - self as usize
    }

    /// Inverse of [`Value::grid_index`]. Returns `None` past the last row.
    pub fn from_grid_index(idx: usize) -> Option<Self> {
        if idx > 12 {
            return None;
        }
        Some(VALUES[12 - idx])
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_roundtrip() {
        for v in Value::values() {
            assert_eq!(Some(v), Value::from_char(v.to_char()));
            assert_eq!(Some(v), Value::from_char(v.to_char().to_ascii_lowercase()));
        }
    }

    #[test]
    fn test_grid_index_roundtrip() {
        for idx in 0..13 {
            let v = Value::from_grid_index(idx).unwrap();
            assert_eq!(idx, v.grid_index());
        }
        assert_eq!(None, Value::from_grid_index(13));
    }

    #[test]
    fn test_ordering() {
        assert!(Value::Ace > Value::King);
        assert!(Value::Three > Value::Two);
        assert!(Value::Ten > Value::Nine);
    }
}
