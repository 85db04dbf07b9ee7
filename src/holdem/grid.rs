//! The 13x13 starting hand chart.
//!
//! Rows and columns both run Ace down to Two. The diagonal holds the pairs,
//! cells above it the suited hands and cells below it the offsuit hands.

use std::fmt;

use crate::core::{AdvisorError, StartingHand, Value};

use super::hand_table::{Category, HandEntry, HandTable};

pub const GRID_SIZE: usize = 13;

/// A chart cell and the entry it resolves to.
#[derive(Debug, Clone, Copy)]
pub struct GridCell<'a> {
    pub row: usize,
    pub col: usize,
    pub entry: &'a HandEntry,
}

/// A view of a [`HandTable`] laid out as the classic hand chart.
///
/// # Examples
///
/// ```
/// use hand_advisor::holdem::{HandGrid, HandTable};
///
/// let grid = HandGrid::new(HandTable::standard());
/// assert_eq!(grid.hand_at(0, 0).unwrap().to_notation(), "AA");
/// assert_eq!(grid.hand_at(0, 1).unwrap().to_notation(), "AKs");
/// assert_eq!(grid.hand_at(1, 0).unwrap().to_notation(), "AKo");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HandGrid<'a> {
    table: &'a HandTable,
    filter: Option<Category>,
}

impl<'a> HandGrid<'a> {
    pub fn new(table: &'a HandTable) -> Self {
        Self {
            table,
            filter: None,
        }
    }

    /// Only show cells whose category matches. `None` shows everything.
    pub fn with_filter(mut self, filter: Option<Category>) -> Self {
        self.filter = filter;
        self
    }

    /// The hand at a chart coordinate.
    pub fn hand_at(&self, row: usize, col: usize) -> Result<StartingHand, AdvisorError> {
        let out_of_bounds = || AdvisorError::GridOutOfBounds { row, col };
        let row_value = Value::from_grid_index(row).ok_or_else(out_of_bounds)?;
        let col_value = Value::from_grid_index(col).ok_or_else(out_of_bounds)?;
        Ok(StartingHand::new(row_value, col_value, row < col))
    }

    /// The entry at a chart coordinate.
    pub fn cell(&self, row: usize, col: usize) -> Result<GridCell<'a>, AdvisorError> {
        let hand = self.hand_at(row, col)?;
        let entry = self
            .table
            .get(&hand)
            .unwrap_or_else(|| HandTable::worst_hand());
        Ok(GridCell { row, col, entry })
    }

    /// Where a hand sits on the chart.
    pub fn coordinates(hand: &StartingHand) -> (usize, usize) {
        let high = hand.high().grid_index();
        let low = hand.low().grid_index();
        if hand.suited() {
            (high, low)
        } else {
            (low, high)
        }
    }

    /// Cells in row major order, honouring the category filter.
    pub fn cells(&self) -> impl Iterator<Item = GridCell<'a>> + '_ {
        (0..GRID_SIZE)
            .flat_map(|row| (0..GRID_SIZE).map(move |col| (row, col)))
            .filter_map(move |(row, col)| self.cell(row, col).ok())
            .filter(move |cell| self.visible(cell.entry))
    }

    /// One row of the chart. Filtered out cells are `None`.
    pub fn row(&self, row: usize) -> Vec<Option<GridCell<'a>>> {
        (0..GRID_SIZE)
            .map(|col| {
                self.cell(row, col)
                    .ok()
                    .filter(|cell| self.visible(cell.entry))
            })
            .collect()
    }

    fn visible(&self, entry: &HandEntry) -> bool {
        match self.filter {
            Some(category) => entry.category == category,
            None => true,
        }
    }
}

/// Text rendering: one line per row, each cell showing the notation and the
/// win rate with one decimal.
impl fmt::Display for HandGrid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..GRID_SIZE {
            let line: Vec<String> = self
                .row(row)
                .into_iter()
                .map(|cell| match cell {
                    Some(cell) => format!(
                        "{:>3} {:>4.1}%",
                        cell.entry.hand.to_notation(),
                        cell.entry.win_rate
                    ),
                    None => " ".repeat(9),
                })
                .collect();
            writeln!(f, "{}", line.join(" | ").trim_end())?;
        }
        Ok(())
    }
}
