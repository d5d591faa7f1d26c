//! Проекция состояния в модель отрисовки.
//!
//! Здесь только чистые функции: схема + выбор -> `GridView`,
//! сводка -> `SummaryView`. Применение к конкретной разметке живёт в `html`.

pub mod html;

use serde::{Deserialize, Serialize};

use crate::models::{Seat, SeatId, SeatRow, Selection, Summary};

pub const SEAT_BASE_CLASS: &str = "w-8 h-8 rounded-t-lg rounded-b-md text-[10px] font-medium transition-all duration-200 transform hover:scale-110 flex items-center justify-center relative group";
pub const SEAT_AVAILABLE_CLASS: &str = "bg-slate-200 dark:bg-slate-700 hover:bg-slate-300 dark:hover:bg-slate-600 text-transparent hover:text-slate-500";
pub const SEAT_ACCESSIBLE_CLASS: &str = "bg-blue-100 hover:bg-blue-300 dark:bg-blue-900/50 dark:hover:bg-blue-800 text-blue-600 dark:text-blue-200";
pub const SEAT_OCCUPIED_CLASS: &str = "bg-slate-300 dark:bg-slate-700 text-slate-500 cursor-not-allowed cursor-default";
pub const SEAT_SELECTED_CLASS: &str = "bg-secondary text-white shadow-lg shadow-secondary/50 hover:bg-secondary";
pub const CHECKOUT_DISABLED_CLASS: &str = "opacity-50 cursor-not-allowed";

pub const ACCESSIBLE_ICON: &str = "wheelchair";
pub const EMPTY_SUMMARY_PLACEHOLDER: &str = "No seats selected";

/// Состояние элемента места. `Occupied` задаётся при генерации и не меняется.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatState {
    Available,
    Selected,
    Occupied,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatView {
    pub id: SeatId,
    pub number: u16,
    pub state: SeatState,
    pub accessible: bool,
    /// Занятые места отрисовываются без обработчика клика.
    pub disabled: bool,
    pub icon: Option<&'static str>,
    pub class: String,
    pub tooltip: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    pub label: char,
    pub seats: Vec<SeatView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridView {
    pub rows: Vec<RowView>,
}

impl GridView {
    pub fn seat_count(&self) -> usize {
        self.rows.iter().map(|r| r.seats.len()).sum()
    }

    pub fn seat(&self, id: SeatId) -> Option<&SeatView> {
        self.rows
            .iter()
            .find(|r| r.label == id.row_label())
            .and_then(|r| r.seats.iter().find(|s| s.id == id))
    }
}

pub fn seat_view(seat: &Seat, selected: bool) -> SeatView {
    let state = if seat.occupied {
        SeatState::Occupied
    } else if selected {
        SeatState::Selected
    } else {
        SeatState::Available
    };

    // снятие выбора возвращает вариант для колясок, если он был
    let variant = match state {
        SeatState::Occupied => SEAT_OCCUPIED_CLASS,
        SeatState::Selected => SEAT_SELECTED_CLASS,
        SeatState::Available if seat.accessible => SEAT_ACCESSIBLE_CLASS,
        SeatState::Available => SEAT_AVAILABLE_CLASS,
    };

    SeatView {
        id: seat.id,
        number: seat.id.number(),
        state,
        accessible: seat.accessible,
        disabled: seat.occupied,
        icon: (seat.accessible && !seat.occupied).then_some(ACCESSIBLE_ICON),
        class: format!("{} {}", SEAT_BASE_CLASS, variant),
        tooltip: seat.tooltip(),
    }
}

pub fn project_grid(rows: &[SeatRow], selection: &Selection) -> GridView {
    GridView {
        rows: rows
            .iter()
            .map(|row| RowView {
                label: row.label,
                seats: row
                    .seats
                    .iter()
                    .map(|seat| seat_view(seat, selection.contains(seat.id)))
                    .collect(),
            })
            .collect(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItemView {
    pub seat_id: SeatId,
    pub title: String,
    pub category: &'static str,
    pub price: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryView {
    pub items: Vec<LineItemView>,
    pub placeholder: Option<&'static str>,
    pub checkout_enabled: bool,
    pub checkout_class: &'static str,
    pub subtotal: String,
    pub tax: String,
    pub total: String,
}

/// Полная замена отрисованной сводки: никаких дописываний к прошлому выводу.
pub fn project_summary(summary: &Summary) -> SummaryView {
    let empty = summary.is_empty();

    SummaryView {
        items: summary
            .items
            .iter()
            .map(|item| LineItemView {
                seat_id: item.seat_id,
                title: format!("Seat {}", item.seat_id),
                category: item.category,
                price: item.price.to_string(),
            })
            .collect(),
        placeholder: empty.then_some(EMPTY_SUMMARY_PLACEHOLDER),
        checkout_enabled: !empty,
        checkout_class: if empty { CHECKOUT_DISABLED_CLASS } else { "" },
        subtotal: summary.totals.subtotal.to_string(),
        tax: summary.totals.tax.to_string(),
        total: summary.totals.total.to_string(),
    }
}
