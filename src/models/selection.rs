use serde::Serialize;

use super::{Money, SeatId};

/// Максимальный размер компании по умолчанию.
pub const DEFAULT_MAX_SEATS: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("You can only select up to {limit} seats.")]
    LimitReached { limit: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectedSeat {
    pub id: SeatId,
    /// Цена, зафиксированная в момент выбора.
    pub price: Money,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Toggle {
    Selected,
    Deselected,
}

/// Выбранные места в порядке выбора. Каждый id встречается не больше одного раза.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    seats: Vec<SelectedSeat>,
    limit: usize,
}

impl Selection {
    pub fn new(limit: usize) -> Self {
        Self { seats: Vec::new(), limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.seats.len() >= self.limit
    }

    pub fn contains(&self, id: SeatId) -> bool {
        self.position(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SelectedSeat> {
        self.seats.iter()
    }

    pub fn ids(&self) -> Vec<SeatId> {
        self.seats.iter().map(|s| s.id).collect()
    }

    pub fn subtotal(&self) -> Money {
        self.seats.iter().map(|s| s.price).sum()
    }

    /// Единственный мутатор выбора. При ошибке состояние не меняется.
    pub fn toggle(&mut self, id: SeatId, price: Money) -> Result<Toggle, SelectionError> {
        if let Some(index) = self.position(id) {
            self.seats.remove(index);
            return Ok(Toggle::Deselected);
        }

        if self.is_full() {
            return Err(SelectionError::LimitReached { limit: self.limit });
        }

        self.seats.push(SelectedSeat { id, price });
        Ok(Toggle::Selected)
    }

    /// Чистый вариант `toggle`: исходный выбор не трогается.
    pub fn toggled(&self, id: SeatId, price: Money) -> Result<(Selection, Toggle), SelectionError> {
        let mut next = self.clone();
        let toggle = next.toggle(id, price)?;
        Ok((next, toggle))
    }

    fn position(&self, id: SeatId) -> Option<usize> {
        self.seats.iter().position(|s| s.id == id)
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SEATS)
    }
}
