//! Генерация схемы зала.
//!
//! Схема детерминирована: ряды и места строятся из вместимости рядов,
//! занятость берётся из внешнего набора, доступные места определяет
//! отдельное правило (`AccessibilityRule`), чтобы смена формы зала не
//! трогала отрисовку.

use serde::Serialize;
use std::collections::HashSet;

use super::seat::{row_label, MAX_ROWS};
use super::{Pricing, Seat, SeatId};

/// Вместимость рядов A..H: приближение изогнутого зала.
pub const DEFAULT_ROW_CAPACITIES: [u16; 8] = [10, 12, 14, 16, 16, 18, 18, 20];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("venue must have between 1 and 26 rows, got {0}")]
    RowCount(usize),
    #[error("row {0} has zero seats")]
    EmptyRow(char),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueLayout {
    row_capacities: Vec<u16>,
}

impl VenueLayout {
    pub fn new(row_capacities: Vec<u16>) -> Result<Self, LayoutError> {
        if row_capacities.is_empty() || row_capacities.len() > MAX_ROWS {
            return Err(LayoutError::RowCount(row_capacities.len()));
        }
        if let Some(row) = row_capacities.iter().position(|&c| c == 0) {
            return Err(LayoutError::EmptyRow(row_label(row)));
        }
        Ok(Self { row_capacities })
    }

    pub fn rows(&self) -> usize {
        self.row_capacities.len()
    }

    pub fn capacity(&self, row: usize) -> Option<u16> {
        self.row_capacities.get(row).copied()
    }

    pub fn row_capacities(&self) -> &[u16] {
        &self.row_capacities
    }

    pub fn total_seats(&self) -> usize {
        self.row_capacities.iter().map(|&c| c as usize).sum()
    }

    pub fn is_last_row(&self, row: usize) -> bool {
        row + 1 == self.rows()
    }

    pub fn contains(&self, id: SeatId) -> bool {
        self.capacity(id.row())
            .is_some_and(|cap| id.number() <= cap)
    }

    /// Полностью строит схему заново. Повторный вызов даёт тот же результат.
    pub fn generate(
        &self,
        occupied: &HashSet<SeatId>,
        rule: &dyn AccessibilityRule,
        pricing: &Pricing,
    ) -> Vec<SeatRow> {
        self.row_capacities
            .iter()
            .enumerate()
            .map(|(r, &count)| SeatRow {
                label: row_label(r),
                seats: (1..=count)
                    .filter_map(|s| SeatId::new(r, s))
                    .map(|id| Seat {
                        id,
                        occupied: occupied.contains(&id),
                        accessible: rule.is_accessible(self, id.row(), id.number()),
                        price: pricing.price_for(id),
                    })
                    .collect(),
            })
            .collect()
    }
}

impl Default for VenueLayout {
    fn default() -> Self {
        Self { row_capacities: DEFAULT_ROW_CAPACITIES.to_vec() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatRow {
    pub label: char,
    pub seats: Vec<Seat>,
}

/// Правило, по которому место помечается как место для колясок.
pub trait AccessibilityRule: Send + Sync {
    /// `row` с нуля, `seat` с единицы.
    fn is_accessible(&self, layout: &VenueLayout, row: usize, seat: u16) -> bool;
}

/// Крайние места последнего ряда.
#[derive(Debug, Clone, Copy, Default)]
pub struct LastRowEnds;

impl AccessibilityRule for LastRowEnds {
    fn is_accessible(&self, layout: &VenueLayout, row: usize, seat: u16) -> bool {
        layout.is_last_row(row) && (seat == 1 || Some(seat) == layout.capacity(row))
    }
}

impl<F> AccessibilityRule for F
where
    F: Fn(&VenueLayout, usize, u16) -> bool + Send + Sync,
{
    fn is_accessible(&self, layout: &VenueLayout, row: usize, seat: u16) -> bool {
        self(layout, row, seat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_shapes() {
        assert_eq!(VenueLayout::new(vec![]), Err(LayoutError::RowCount(0)));
        assert_eq!(VenueLayout::new(vec![1; 27]), Err(LayoutError::RowCount(27)));
        assert_eq!(VenueLayout::new(vec![4, 0, 4]), Err(LayoutError::EmptyRow('B')));
    }

    #[test]
    fn contains_checks_row_capacity() {
        let layout = VenueLayout::default();
        assert!(layout.contains("A-10".parse().unwrap()));
        assert!(!layout.contains("A-11".parse().unwrap()));
        assert!(layout.contains("H-20".parse().unwrap()));
        assert!(!layout.contains("I-1".parse().unwrap()));
    }

    #[test]
    fn closure_works_as_rule() {
        let layout = VenueLayout::new(vec![3, 3]).unwrap();
        let front_row = |_: &VenueLayout, row: usize, _: u16| row == 0;
        let rows = layout.generate(&HashSet::new(), &front_row, &Pricing::default());
        assert!(rows[0].seats.iter().all(|s| s.accessible));
        assert!(rows[1].seats.iter().all(|s| !s.accessible));
    }
}
