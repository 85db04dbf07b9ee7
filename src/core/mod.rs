/// Card ranks.
mod value;
/// Export `Value`
pub use self::value::Value;

/// Canonical starting-hand notation.
mod starting_hand;
/// Export `StartingHand`
pub use self::starting_hand::StartingHand;

mod errors;
/// Export the parsing error type.
pub use self::errors::AdvisorError;
