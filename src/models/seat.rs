use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Money;

/// Максимум рядов: буквы A..Z.
pub const MAX_ROWS: usize = 26;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeatIdError {
    #[error("seat id must look like \"C-7\", got {0:?}")]
    Malformed(String),
    #[error("row letter must be A-Z, got {0:?}")]
    BadRow(String),
    #[error("seat number must be a positive integer, got {0:?}")]
    BadNumber(String),
}

/// Идентификатор места: буква ряда + номер места ("C-7").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SeatId {
    row: u8,
    number: u16,
}

impl SeatId {
    /// `row` считается с нуля, `number` с единицы.
    pub fn new(row: usize, number: u16) -> Option<Self> {
        if row >= MAX_ROWS || number == 0 {
            return None;
        }
        Some(Self { row: row as u8, number })
    }

    pub fn row(&self) -> usize {
        self.row as usize
    }

    pub fn number(&self) -> u16 {
        self.number
    }

    pub fn row_label(&self) -> char {
        row_label(self.row as usize)
    }
}

/// Буква ряда по смещению от 'A'. `row` обязан быть меньше `MAX_ROWS`.
pub(crate) fn row_label(row: usize) -> char {
    debug_assert!(row < MAX_ROWS, "row {row} out of A..Z");
    (b'A' + row as u8) as char
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row_label(), self.number)
    }
}

impl FromStr for SeatId {
    type Err = SeatIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, number) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| SeatIdError::Malformed(s.to_string()))?;

        let mut letters = row.chars();
        let letter = match (letters.next(), letters.next()) {
            (Some(c), None) if c.is_ascii_uppercase() => c,
            _ => return Err(SeatIdError::BadRow(row.to_string())),
        };

        let number: u16 = number
            .parse()
            .map_err(|_| SeatIdError::BadNumber(number.to_string()))?;

        SeatId::new((letter as u8 - b'A') as usize, number)
            .ok_or_else(|| SeatIdError::BadNumber(number.to_string()))
    }
}

impl TryFrom<String> for SeatId {
    type Error = SeatIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SeatId> for String {
    fn from(id: SeatId) -> Self {
        id.to_string()
    }
}

/// Место в зале. Не хранится: генерируется заново при каждой отрисовке.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Seat {
    pub id: SeatId,
    pub occupied: bool,
    pub accessible: bool,
    pub price: Money,
}

impl Seat {
    pub fn tooltip(&self) -> String {
        format!(
            "Row {} Seat {} \u{2013} {}",
            self.id.row_label(),
            self.id.number(),
            self.price
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_prints_textual_form() {
        let id: SeatId = "C-7".parse().unwrap();
        assert_eq!(id.row(), 2);
        assert_eq!(id.number(), 7);
        assert_eq!(id.to_string(), "C-7");
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!("C7".parse::<SeatId>(), Err(SeatIdError::Malformed(_))));
        assert!(matches!("c-7".parse::<SeatId>(), Err(SeatIdError::BadRow(_))));
        assert!(matches!("AB-1".parse::<SeatId>(), Err(SeatIdError::BadRow(_))));
        assert!(matches!("C-0".parse::<SeatId>(), Err(SeatIdError::BadNumber(_))));
        assert!(matches!("C-x".parse::<SeatId>(), Err(SeatIdError::BadNumber(_))));
    }

    #[test]
    fn row_labels_cover_a_to_z() {
        assert_eq!(row_label(0), 'A');
        assert_eq!(row_label(MAX_ROWS - 1), 'Z');
        assert_eq!(SeatId::new(MAX_ROWS - 1, 1).map(|id| id.row_label()), Some('Z'));
        assert_eq!(SeatId::new(MAX_ROWS, 1), None);
    }

    #[test]
    #[should_panic(expected = "out of A..Z")]
    #[cfg(debug_assertions)]
    fn row_label_past_z_is_a_bug() {
        row_label(MAX_ROWS);
    }

    #[test]
    fn serializes_as_string() {
        let id = SeatId::new(1, 3).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"B-3\"");
        let back: SeatId = serde_json::from_str("\"B-3\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn tooltip_mentions_row_seat_and_price() {
        let seat = Seat {
            id: SeatId::new(7, 20).unwrap(),
            occupied: false,
            accessible: true,
            price: Money::from_cents(1500),
        };
        assert_eq!(seat.tooltip(), "Row H Seat 20 \u{2013} $15.00");
    }
}
