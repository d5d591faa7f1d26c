use std::collections::HashSet;

use seat_booking::models::{LastRowEnds, Pricing, SeatId, VenueLayout};
use seat_booking::render::{project_grid, SeatState};
use seat_booking::models::Selection;
use seat_booking::services::selector::{SeatSelector, VenueSetup};

fn occupied() -> HashSet<SeatId> {
    ["A-5", "A-6", "C-10", "C-11", "D-4"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect()
}

#[test]
fn rows_match_configured_capacities() {
    let layout = VenueLayout::default();
    let rows = layout.generate(&occupied(), &LastRowEnds, &Pricing::default());

    assert_eq!(rows.len(), 8);
    for (row, expected) in rows.iter().zip([10, 12, 14, 16, 16, 18, 18, 20]) {
        assert_eq!(row.seats.len(), expected, "row {}", row.label);
    }
    assert_eq!(rows.iter().map(|r| r.seats.len()).sum::<usize>(), 124);
    assert_eq!(layout.total_seats(), 124);
}

#[test]
fn ids_are_letter_dash_number() {
    let rows = VenueLayout::default().generate(&HashSet::new(), &LastRowEnds, &Pricing::default());
    assert_eq!(rows[0].label, 'A');
    assert_eq!(rows[0].seats[0].id.to_string(), "A-1");
    assert_eq!(rows[2].seats[6].id.to_string(), "C-7");
    assert_eq!(rows[7].seats[19].id.to_string(), "H-20");
}

#[test]
fn accessible_iff_last_row_end() {
    let layout = VenueLayout::default();
    let rows = layout.generate(&occupied(), &LastRowEnds, &Pricing::default());

    let accessible: Vec<String> = rows
        .iter()
        .flat_map(|r| r.seats.iter())
        .filter(|s| s.accessible)
        .map(|s| s.id.to_string())
        .collect();

    assert_eq!(accessible, vec!["H-1", "H-20"]);
}

#[test]
fn occupancy_comes_from_external_set() {
    let rows = VenueLayout::default().generate(&occupied(), &LastRowEnds, &Pricing::default());
    let taken: HashSet<SeatId> = rows
        .iter()
        .flat_map(|r| r.seats.iter())
        .filter(|s| s.occupied)
        .map(|s| s.id)
        .collect();
    assert_eq!(taken, occupied());
}

#[test]
fn every_seat_gets_the_standard_rate() {
    let pricing = Pricing::default();
    let rows = VenueLayout::default().generate(&occupied(), &LastRowEnds, &pricing);
    assert!(rows
        .iter()
        .flat_map(|r| r.seats.iter())
        .all(|s| s.price == pricing.standard));
    // VIP тариф пока никому не назначен
    assert_ne!(pricing.vip, pricing.standard);
}

#[test]
fn regenerating_is_idempotent() {
    let mut selector = SeatSelector::new(VenueSetup::default());
    selector.toggle("B-3".parse().unwrap()).unwrap();

    let first = selector.render_grid();
    let second = selector.render_grid();
    assert_eq!(first, second);
    assert_eq!(first.seat_count(), 124);
    assert_eq!(first.seat("B-3".parse().unwrap()).unwrap().state, SeatState::Selected);
}

#[test]
fn occupied_seats_render_disabled_with_tooltips_everywhere() {
    let rows = VenueLayout::default().generate(&occupied(), &LastRowEnds, &Pricing::default());
    let grid = project_grid(&rows, &Selection::default());

    for seat in grid.rows.iter().flat_map(|r| r.seats.iter()) {
        assert_eq!(seat.disabled, seat.state == SeatState::Occupied);
        assert!(seat.tooltip.starts_with(&format!("Row {} Seat {} ", seat.id.row_label(), seat.number)));
        assert!(seat.tooltip.ends_with("$15.00"));
    }
}

#[test]
fn custom_venue_and_rule() {
    let layout = VenueLayout::new(vec![4, 6, 6]).unwrap();
    let setup = VenueSetup {
        layout,
        occupied: HashSet::new(),
        ..VenueSetup::default()
    }
    .with_rule(|layout: &VenueLayout, row: usize, seat: u16| row == 0 && seat <= 2 && layout.rows() == 3);

    let mut selector = SeatSelector::new(setup);
    let grid = selector.render_grid();
    assert_eq!(grid.seat_count(), 16);

    let accessible: Vec<String> = grid
        .rows
        .iter()
        .flat_map(|r| r.seats.iter())
        .filter(|s| s.accessible)
        .map(|s| s.id.to_string())
        .collect();
    assert_eq!(accessible, vec!["A-1", "A-2"]);
}
