use proptest::prelude::*;

use seat_booking::models::{Money, SeatId, Selection, SelectionError, Toggle};
use seat_booking::render::{SeatState, EMPTY_SUMMARY_PLACEHOLDER};
use seat_booking::services::selector::{SeatSelector, SelectorError, VenueSetup};

fn id(s: &str) -> SeatId {
    s.parse().unwrap()
}

const FREE_SEATS: [&str; 9] = ["B-1", "B-2", "B-3", "B-4", "B-5", "B-6", "B-7", "B-8", "B-9"];

#[test]
fn select_b3_totals() {
    let mut selector = SeatSelector::new(VenueSetup::default());
    let outcome = selector.toggle(id("B-3")).unwrap();

    assert_eq!(outcome.action, Toggle::Selected);
    assert_eq!(outcome.seat.state, SeatState::Selected);
    assert_eq!(outcome.summary.subtotal, "$15.00");
    assert_eq!(outcome.summary.tax, "$1.20");
    assert_eq!(outcome.summary.total, "$16.20");
    assert!(outcome.summary.checkout_enabled);
    assert_eq!(outcome.summary.items.len(), 1);
    assert_eq!(outcome.summary.items[0].title, "Seat B-3");
    assert_eq!(outcome.summary.items[0].category, "General Admission");
    assert_eq!(outcome.summary.items[0].price, "$15.00");
}

#[test]
fn eight_seats_then_ninth_rejected() {
    let mut selector = SeatSelector::new(VenueSetup::default());
    for seat in &FREE_SEATS[..8] {
        selector.toggle(id(seat)).unwrap();
    }

    let summary = selector.summary_view();
    assert_eq!(summary.subtotal, "$120.00");
    assert_eq!(summary.tax, "$9.60");
    assert_eq!(summary.total, "$129.60");

    let err = selector.toggle(id(FREE_SEATS[8])).unwrap_err();
    assert_eq!(err, SelectorError::Selection(SelectionError::LimitReached { limit: 8 }));
    assert_eq!(err.to_string(), "You can only select up to 8 seats.");
    assert_eq!(selector.selection().len(), 8);
    assert!(!selector.selection().contains(id(FREE_SEATS[8])));
}

#[test]
fn occupied_seat_does_not_change_state() {
    let mut selector = SeatSelector::new(VenueSetup::default());
    selector.toggle(id("B-3")).unwrap();
    let before = selector.selection().clone();

    assert_eq!(selector.toggle(id("A-5")), Err(SelectorError::SeatOccupied(id("A-5"))));
    assert_eq!(selector.selection(), &before);
}

#[test]
fn deselecting_only_seat_shows_placeholder() {
    let mut selector = SeatSelector::new(VenueSetup::default());
    selector.toggle(id("E-8")).unwrap();
    let outcome = selector.toggle(id("E-8")).unwrap();

    assert_eq!(outcome.action, Toggle::Deselected);
    assert_eq!(outcome.seat.state, SeatState::Available);
    assert_eq!(outcome.summary.placeholder, Some(EMPTY_SUMMARY_PLACEHOLDER));
    assert!(!outcome.summary.checkout_enabled);
    assert!(outcome.summary.items.is_empty());
    assert_eq!(outcome.summary.total, "$0.00");
}

#[test]
fn line_items_follow_insertion_order() {
    let mut selector = SeatSelector::new(VenueSetup::default());
    for seat in ["G-3", "A-1", "D-9"] {
        selector.toggle(id(seat)).unwrap();
    }
    let titles: Vec<String> = selector.summary_view().items.into_iter().map(|i| i.title).collect();
    assert_eq!(titles, vec!["Seat G-3", "Seat A-1", "Seat D-9"]);
}

#[test]
fn wheelchair_seat_keeps_its_variant_after_deselect() {
    let mut selector = SeatSelector::new(VenueSetup::default());
    let before = selector.render_grid().seat(id("H-1")).cloned().unwrap();

    selector.toggle(id("H-1")).unwrap();
    let released = selector.toggle(id("H-1")).unwrap().seat;
    assert_eq!(released, before);
}

fn seat_strategy() -> impl Strategy<Value = SeatId> {
    (0usize..8, 1u16..=10).prop_map(|(row, number)| SeatId::new(row, number).unwrap())
}

proptest! {
    #[test]
    fn selection_never_exceeds_limit(seats in prop::collection::vec(seat_strategy(), 0..40)) {
        let mut selection = Selection::default();
        for seat in seats {
            let before = selection.clone();
            match selection.toggle(seat, Money::from_cents(1500)) {
                Ok(_) => {}
                Err(SelectionError::LimitReached { limit }) => {
                    prop_assert_eq!(limit, 8);
                    prop_assert_eq!(&selection, &before);
                }
            }
            prop_assert!(selection.len() <= 8);
            let mut ids = selection.ids();
            ids.sort();
            ids.dedup();
            prop_assert_eq!(ids.len(), selection.len());
        }
    }

    #[test]
    fn toggle_twice_restores_selection(
        seats in prop::collection::vec(seat_strategy(), 0..7),
        extra in seat_strategy(),
    ) {
        let mut selection = Selection::default();
        for seat in seats {
            let _ = selection.toggle(seat, Money::from_cents(1500));
        }
        prop_assume!(!selection.contains(extra));
        let before = selection.clone();

        prop_assert_eq!(selection.toggle(extra, Money::from_cents(1500)), Ok(Toggle::Selected));
        prop_assert_eq!(selection.toggle(extra, Money::from_cents(1500)), Ok(Toggle::Deselected));
        prop_assert_eq!(selection, before);
    }
}
