//! selector.rs
//!
//! Виджет выбора мест. Владеет схемой зала, выбором пользователя и
//! расчётом итогов. Никакого общего состояния: один экземпляр на страницу
//! (сессию), переключение и отрисовка являются его методами.

use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::config::Config;
use crate::models::{
    AccessibilityRule, LastRowEnds, LayoutError, Pricing, Seat, SeatId, SeatRow, Selection,
    SelectionError, Summary, Toggle, VenueLayout,
};
use crate::models::selection::DEFAULT_MAX_SEATS;
use crate::render::{self, GridView, SeatView, SummaryView};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    #[error("seat {0} does not exist in this venue")]
    UnknownSeat(SeatId),
    #[error("seat {0} is already taken")]
    SeatOccupied(SeatId),
    #[error(transparent)]
    Selection(#[from] SelectionError),
}

/// Всё, что нужно для построения виджета: форма зала, занятые места,
/// правило доступных мест и цены. Общая для всех сессий.
#[derive(Clone)]
pub struct VenueSetup {
    pub layout: VenueLayout,
    pub occupied: HashSet<SeatId>,
    pub rule: Arc<dyn AccessibilityRule>,
    pub pricing: Pricing,
    pub max_seats: usize,
}

impl VenueSetup {
    pub fn from_config(config: &Config) -> Result<Self, LayoutError> {
        let layout = VenueLayout::new(config.venue.row_capacities.clone())?;

        let mut occupied = HashSet::new();
        for id in &config.venue.occupied_seats {
            if layout.contains(*id) {
                occupied.insert(*id);
            } else {
                warn!("Occupied seat {} is outside the venue layout, ignoring", id);
            }
        }

        Ok(Self {
            layout,
            occupied,
            rule: Arc::new(LastRowEnds),
            pricing: Pricing::new(
                config.pricing.standard,
                config.pricing.vip,
                config.pricing.tax_rate,
            ),
            max_seats: config.pricing.max_seats,
        })
    }

    pub fn with_rule(mut self, rule: impl AccessibilityRule + 'static) -> Self {
        self.rule = Arc::new(rule);
        self
    }
}

impl Default for VenueSetup {
    fn default() -> Self {
        let occupied: HashSet<SeatId> = ["A-5", "A-6", "C-10", "C-11", "D-4"]
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();

        Self {
            layout: VenueLayout::default(),
            occupied,
            rule: Arc::new(LastRowEnds),
            pricing: Pricing::default(),
            max_seats: DEFAULT_MAX_SEATS,
        }
    }
}

impl fmt::Debug for VenueSetup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VenueSetup")
            .field("layout", &self.layout)
            .field("occupied", &self.occupied)
            .field("pricing", &self.pricing)
            .field("max_seats", &self.max_seats)
            .finish_non_exhaustive()
    }
}

/// Результат успешного переключения: новое состояние места и свежая сводка.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToggleOutcome {
    pub action: Toggle,
    pub seat: SeatView,
    pub summary: SummaryView,
}

#[derive(Debug)]
pub struct SeatSelector {
    setup: VenueSetup,
    rows: Vec<SeatRow>,
    selection: Selection,
}

impl SeatSelector {
    pub fn new(setup: VenueSetup) -> Self {
        let rows = setup.layout.generate(&setup.occupied, setup.rule.as_ref(), &setup.pricing);
        let selection = Selection::new(setup.max_seats);
        Self { setup, rows, selection }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn pricing(&self) -> &Pricing {
        &self.setup.pricing
    }

    pub fn layout(&self) -> &VenueLayout {
        &self.setup.layout
    }

    pub fn seat(&self, id: SeatId) -> Option<&Seat> {
        self.rows
            .get(id.row())
            .and_then(|row| row.seats.get(id.number() as usize - 1))
    }

    /// Строит схему заново (полная замена) и проецирует её с учётом выбора.
    pub fn render_grid(&mut self) -> GridView {
        self.rows = self.setup.layout.generate(
            &self.setup.occupied,
            self.setup.rule.as_ref(),
            &self.setup.pricing,
        );
        render::project_grid(&self.rows, &self.selection)
    }

    pub fn summary(&self) -> Summary {
        Summary::of(&self.selection, &self.setup.pricing)
    }

    pub fn summary_view(&self) -> SummaryView {
        render::project_summary(&self.summary())
    }

    /// Единственная точка изменения выбора. После каждого успешного
    /// изменения сводка пересчитывается целиком.
    pub fn toggle(&mut self, id: SeatId) -> Result<ToggleOutcome, SelectorError> {
        let seat = self
            .seat(id)
            .cloned()
            .ok_or(SelectorError::UnknownSeat(id))?;

        if seat.occupied {
            return Err(SelectorError::SeatOccupied(id));
        }

        let action = self.selection.toggle(id, seat.price)?;
        debug!(seat = %id, ?action, selected = self.selection.len(), "Seat toggled");

        Ok(ToggleOutcome {
            action,
            seat: render::seat_view(&seat, action == Toggle::Selected),
            summary: self.summary_view(),
        })
    }
}
