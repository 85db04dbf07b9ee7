use thiserror::Error;

/// Errors raised while parsing starting-hand notation or reading the chart.
#[derive(Error, Debug, PartialEq, Eq, Clone, Hash)]
pub enum AdvisorError {
    #[error("Invalid starting hand notation: {0}")]
    InvalidHandNotation(String),
    #[error("Grid coordinates ({row}, {col}) are outside the 13x13 chart")]
    GridOutOfBounds { row: usize, col: usize },
}
