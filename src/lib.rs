//! Hand Advisor is a library for Texas Hold'em pre-flop decisions.
//!
//! It carries a table of all 169 starting hands with win rates, categories
//! and recommended positions, a rule based recommendation for a given seat
//! and stack, and a pot odds calculator using the rule of 4 and 2.
//!
//! Around that sits the presentation support a front end needs: the 13x13
//! chart layout, a localized glossary, persisted preferences and a simple
//! access gate.
//!
//! ```
//! use hand_advisor::holdem::{recommend, Action, HandTable, Position, Situation};
//!
//! let situation = Situation::builder()
//!     .hand("AA")
//!     .position(Position::UnderTheGun)
//!     .stack_depth(50)
//!     .build()
//!     .unwrap();
//! let rec = recommend(HandTable::standard(), &situation);
//! assert_eq!(rec.action, Action::Raise);
//! ```
#![deny(clippy::all)]

/// Ranks and starting hand notation. Nothing in here knows about win rates
/// or strategy.
pub mod core;

/// The hand table, recommendation rules and pot odds.
pub mod holdem;

/// Translation catalogs for the supported locales.
pub mod i18n;

/// Localized poker glossary.
pub mod glossary;

/// Key value persistence for user preferences.
pub mod storage;

/// Entry gate in front of the advisor.
pub mod access;

/// JSON configuration.
pub mod config;

/// The advisor facade tying the pieces together.
pub mod advisor;
