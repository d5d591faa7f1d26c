pub mod seat;
pub mod money;
pub mod pricing;
pub mod layout;
pub mod selection;
pub mod summary;

pub use seat::{Seat, SeatId, SeatIdError, MAX_ROWS};
pub use money::{Money, MoneyError, TaxRate};
pub use pricing::Pricing;
pub use layout::{AccessibilityRule, LastRowEnds, LayoutError, SeatRow, VenueLayout};
pub use selection::{SelectedSeat, Selection, SelectionError, Toggle};
pub use summary::{LineItem, Summary, Totals};
