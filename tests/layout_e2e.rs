use std::collections::BTreeSet;

use garden_planner::models::bed::GardenBed;
use garden_planner::models::garden::{Garden, MAX_BEDS};
use garden_planner::models::plant::Plant;

fn loam_bed(length: usize, width: usize) -> GardenBed {
    GardenBed::new(
        length,
        width,
        6.5,
        BTreeSet::from(["loam".to_string()]),
        "full",
    )
}

fn loam_plant(symbol: char, size: usize) -> Plant {
    Plant::new(
        format!("plant-{symbol}"),
        symbol,
        size,
        6.5,
        BTreeSet::from(["loam".to_string()]),
        "full",
    )
}

// ---------------------------------------------------------------------------
// Scenario 1: bed placement on the occupancy grid
// ---------------------------------------------------------------------------
#[test]
fn scenario_two_beds_and_one_overlap() {
    let mut garden = Garden::new(10, 10);

    assert_eq!(garden.add_bed(loam_bed(5, 5), 0, 0), Ok(0));

    // The second bed would cover cells (3..5, 3..5) of the first.
    let rejected = garden.add_bed(loam_bed(5, 5), 3, 3);
    assert!(rejected.is_err(), "Overlapping placement must be rejected");
    assert_eq!(garden.beds().len(), 1, "A rejected bed must not be appended");

    assert_eq!(garden.add_bed(loam_bed(5, 5), 5, 0), Ok(1));
    assert_eq!(garden.beds()[1].id(), Some(1));

    // No cell may be claimed by more than one footprint.
    let mut claimed = [0usize; 2];
    for row in garden.spots() {
        for spot in row.iter().flatten() {
            claimed[*spot] += 1;
        }
    }
    assert_eq!(claimed, [25, 25], "Each 5x5 bed must claim exactly 25 cells");
}

// ---------------------------------------------------------------------------
// Scenario 2: greedy shelf packing inside one bed
// ---------------------------------------------------------------------------
#[test]
fn scenario_row_fills_then_bed_runs_out() {
    // A 10x3 bed takes three size-3 plants into its first row (9/10 length
    // used). The fourth finds neither length in the open row nor unclaimed
    // width for a fresh one.
    let mut bed = loam_bed(10, 3);
    assert!(bed.add_plant(loam_plant('a', 3)).is_ok());
    assert!(bed.add_plant(loam_plant('b', 3)).is_ok());
    assert!(bed.add_plant(loam_plant('c', 3)).is_ok());
    assert_eq!(bed.rows_of_plants().len(), 1);
    assert_eq!(bed.rows_of_plants()[0].current_length(), 9);

    let snapshot = bed.clone();
    assert!(bed.add_plant(loam_plant('d', 3)).is_err());
    assert_eq!(bed, snapshot, "A rejected plant must leave the bed untouched");
}

#[test]
fn scenario_packing_is_order_dependent() {
    // The shelf packer is greedy and never reconsiders earlier gaps, so the
    // same plant set can succeed or fail depending on insertion order.
    let sizes_ok = [2, 2, 1, 1];
    let sizes_stuck = [1, 2, 2, 1];

    let mut bed = loam_bed(4, 3);
    let placed = sizes_ok
        .iter()
        .enumerate()
        .filter(|(i, size)| {
            bed.add_plant(loam_plant((b'a' + *i as u8) as char, **size)).is_ok()
        })
        .count();
    assert_eq!(placed, 4, "Order [2, 2, 1, 1] must pack completely into 4x3");

    let mut bed = loam_bed(4, 3);
    let placed = sizes_stuck
        .iter()
        .enumerate()
        .filter(|(i, size)| {
            bed.add_plant(loam_plant((b'a' + *i as u8) as char, **size)).is_ok()
        })
        .count();
    assert!(
        placed < 4,
        "Order [1, 2, 2, 1] must strand at least one plant in the same bed"
    );
}

// ---------------------------------------------------------------------------
// Scenario 3: environmental gate before any room considerations
// ---------------------------------------------------------------------------
#[test]
fn scenario_incompatible_sun_rejected_regardless_of_room() {
    let mut bed = loam_bed(10, 10);
    let mut plant = loam_plant('s', 1);
    plant.sun_requirement = "shade".to_string();
    assert!(!bed.can_be_planted_here(&plant));
    assert!(bed.add_plant(plant).is_err());
    assert!(bed.rows_of_plants()[0].plants().is_empty());
}

// ---------------------------------------------------------------------------
// Scenario 4: full lifecycle with rendering
// ---------------------------------------------------------------------------
#[test]
fn scenario_full_garden_lifecycle() {
    let mut garden = Garden::new(8, 4);
    let id = garden.add_bed(loam_bed(4, 2), 1, 1).expect("bed must fit at (1, 1)");

    let bed = garden.bed_mut(id).expect("bed 0 must exist");
    assert!(bed.add_plant(loam_plant('t', 2)).is_ok());
    assert!(bed.add_plant(loam_plant('c', 2)).is_ok());

    assert_eq!(
        garden.bed(id).map(|b| b.to_string()).as_deref(),
        Some("+----+\n|ttcc|\n|ttcc|\n+----+")
    );
    assert_eq!(
        garden.to_string(),
        "+--------+\n|        |\n| 0000   |\n| 0000   |\n|        |\n+--------+"
    );
}

// ---------------------------------------------------------------------------
// Scenario 5: the bed cap
// ---------------------------------------------------------------------------
#[test]
fn scenario_bed_cap_is_enforced_at_the_single_mutation_point() {
    let mut garden = Garden::new(30, 30);
    for i in 0..MAX_BEDS {
        let x = (i as i64 % 5) * 3;
        let y = (i as i64 / 5) * 3;
        assert_eq!(garden.add_bed(loam_bed(2, 2), x, y), Ok(i));
    }
    // Plenty of free cells remain, but the cap wins.
    assert!(garden.add_bed(loam_bed(2, 2), 20, 20).is_err());
    assert_eq!(garden.next_bed_id(), MAX_BEDS);
}
