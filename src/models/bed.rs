use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::logic::compatibility::environment_suits;
use crate::models::plant::Plant;
use crate::models::row::GardenRow;
use crate::models::BedId;

/// A rectangular planting region with fixed environmental attributes.
///
/// A bed owns an append-only stack of [`GardenRow`] shelves along its width
/// axis. The bottom-most row is the only open one; when it fills up along the
/// length axis it is finalized and a fresh row claims the remaining width.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GardenBed {
    length: usize,
    width: usize,
    ph: f64,
    soil_type: BTreeSet<String>,
    sun_amount: String,
    /// Assigned by the garden on placement; `None` for an unplaced bed.
    id: Option<BedId>,
    rows_of_plants: Vec<GardenRow>,
}

impl GardenBed {
    pub fn new(
        length: usize,
        width: usize,
        ph: f64,
        soil_type: BTreeSet<String>,
        sun_amount: impl Into<String>,
    ) -> Self {
        Self {
            length,
            width,
            ph,
            soil_type,
            sun_amount: sun_amount.into(),
            id: None,
            rows_of_plants: vec![GardenRow::new(length, width)],
        }
    }

    /// Environment and room check, short-circuited in this order: sun match,
    /// soil overlap, pH tolerance, then [`Self::is_enough_room`].
    pub fn can_be_planted_here(&self, plant: &Plant) -> bool {
        environment_suits(&self.sun_amount, &self.soil_type, self.ph, plant)
            && self.is_enough_room(plant)
    }

    /// Coarse room check: the open row fits the plant, or the unclaimed width
    /// below the rows could hold a row of the plant's height.
    ///
    /// Deliberately coarse: it does not ask whether a fresh row would also fit
    /// the plant along the length axis. [`Self::add_plant`] re-checks both
    /// axes before opening a row, so the coarse positive can still end in a
    /// rejection.
    pub fn is_enough_room(&self, plant: &Plant) -> bool {
        if let Some(row) = self.rows_of_plants.last() {
            if row.can_add_plant(plant) {
                return true;
            }
        }
        plant.size <= self.remaining_width()
    }

    /// Places the plant greedily: into the open row if it fits, otherwise
    /// into a freshly opened row spanning the unclaimed width. A rejected
    /// plant is handed back and the bed is left exactly as it was.
    pub fn add_plant(&mut self, plant: Plant) -> Result<(), Plant> {
        if !self.can_be_planted_here(&plant) {
            return Err(plant);
        }

        // A bed always holds at least one row.
        let plant = match self.rows_of_plants.last_mut() {
            Some(row) => match row.add_plant(plant) {
                Ok(()) => return Ok(()),
                Err(plant) => plant,
            },
            None => plant,
        };

        // The open row is full along its length. A fresh row gets whatever
        // width is still unclaimed, so the plant must fit that height and the
        // bed's length. The second check closes a gap in the coarse
        // `is_enough_room`: without it a plant wider than the bed is long
        // would be reported placeable and then silently dropped.
        let remaining = self.remaining_width();
        if plant.size > remaining || plant.size > self.length {
            return Err(plant);
        }

        let mut row = GardenRow::new(self.length, remaining);
        match row.add_plant(plant) {
            Ok(()) => {
                if let Some(last) = self.rows_of_plants.last_mut() {
                    last.finalize();
                }
                self.rows_of_plants.push(row);
                Ok(())
            }
            Err(plant) => Err(plant),
        }
    }

    /// Width not yet claimed by any row.
    fn remaining_width(&self) -> usize {
        let used: usize = self.rows_of_plants.iter().map(|r| r.current_width()).sum();
        self.width.saturating_sub(used)
    }

    pub(crate) fn assign_id(&mut self, id: BedId) {
        self.id = Some(id);
    }

    pub fn id(&self) -> Option<BedId> {
        self.id
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn ph(&self) -> f64 {
        self.ph
    }

    pub fn soil_type(&self) -> &BTreeSet<String> {
        &self.soil_type
    }

    pub fn sun_amount(&self) -> &str {
        &self.sun_amount
    }

    /// Rows in top-to-bottom order; all but the last are finalized.
    pub fn rows_of_plants(&self) -> &[GardenRow] {
        &self.rows_of_plants
    }
}

/// Renders the bed as a framed stack of row renderings with a dotted
/// separator line between consecutive rows.
impl fmt::Display for GardenBed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = Vec::new();
        lines.push(format!("+{}+", "-".repeat(self.length)));
        for (i, row) in self.rows_of_plants.iter().enumerate() {
            let rendered = row.to_string();
            lines.extend(
                rendered
                    .lines()
                    .filter(|l| !l.trim().is_empty())
                    .map(str::to_string),
            );
            if i < self.rows_of_plants.len() - 1 {
                lines.push(format!("|{}|", ".".repeat(self.length)));
            }
        }
        lines.push(format!("+{}+", "-".repeat(self.length)));
        write!(f, "{}", lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn test_sun_mismatch_always_rejected() {
        let bed = loam_bed(10, 10);
        let mut plant = loam_plant('a', 1);
        plant.sun_requirement = "partial".to_string();
        assert!(
            !bed.can_be_planted_here(&plant),
            "Sun mismatch must reject regardless of room"
        );
    }

    #[test]
    fn test_soil_must_intersect() {
        let bed = loam_bed(10, 10);
        let mut plant = loam_plant('a', 1);
        plant.preferred_soil = BTreeSet::from(["clay".to_string()]);
        assert!(!bed.can_be_planted_here(&plant));
        plant.preferred_soil = BTreeSet::from(["clay".to_string(), "loam".to_string()]);
        assert!(
            bed.can_be_planted_here(&plant),
            "One shared soil tag must be enough"
        );
    }

    #[test]
    fn test_ph_tolerance_boundary() {
        let bed = loam_bed(10, 10);
        let mut plant = loam_plant('a', 1);
        plant.preferred_ph = 8.0;
        assert!(bed.can_be_planted_here(&plant), "|6.5 - 8.0| = 1.5 is still in tolerance");
        plant.preferred_ph = 8.01;
        assert!(!bed.can_be_planted_here(&plant));
    }

    #[test]
    fn test_plants_fill_row_then_open_next() {
        let mut bed = loam_bed(5, 5);
        assert!(bed.add_plant(loam_plant('a', 3)).is_ok());
        assert!(bed.add_plant(loam_plant('b', 2)).is_ok());
        assert_eq!(bed.rows_of_plants().len(), 1);
        // 3 + 2 fills the first row; the next plant opens a second one.
        assert!(bed.add_plant(loam_plant('c', 2)).is_ok());
        assert_eq!(bed.rows_of_plants().len(), 2);
        assert!(bed.rows_of_plants()[0].is_finalized());
        assert_eq!(
            bed.rows_of_plants()[0].max_width(),
            3,
            "The superseded row's capacity must freeze at its actual height"
        );
        assert_eq!(bed.rows_of_plants()[1].max_width(), 2, "5 - 3 leaves width 2");
    }

    #[test]
    fn test_row_widths_never_exceed_bed_width() {
        let mut bed = loam_bed(4, 6);
        for symbol in ['a', 'b', 'c', 'd', 'e', 'f'] {
            let _ = bed.add_plant(loam_plant(symbol, 2));
            let used: usize = bed
                .rows_of_plants()
                .iter()
                .map(|r| r.current_width())
                .sum();
            assert!(used <= bed.width(), "Row widths must stay within the bed");
        }
    }

    #[test]
    fn test_length_exhausted_and_no_vertical_room_is_hard_failure() {
        // 10x3 bed filled with size-3 plants: three fit in the first row
        // (9/10), the fourth finds no length left and no unclaimed width.
        let mut bed = loam_bed(10, 3);
        assert!(bed.add_plant(loam_plant('a', 3)).is_ok());
        assert!(bed.add_plant(loam_plant('b', 3)).is_ok());
        assert!(bed.add_plant(loam_plant('c', 3)).is_ok());
        let before = bed.rows_of_plants().len();
        assert!(bed.add_plant(loam_plant('d', 3)).is_err());
        assert_eq!(
            bed.rows_of_plants().len(),
            before,
            "A failed insert must not open a row"
        );
        assert_eq!(bed.rows_of_plants()[0].current_length(), 9);
    }

    #[test]
    fn test_oversized_plant_rejected_even_though_room_check_passes() {
        // The coarse room check only looks at the width axis of a fresh row,
        // so a plant longer than the bed still passes it once the open row is
        // ruled out. add_plant must close that gap instead of dropping the
        // plant while claiming success.
        let mut bed = loam_bed(3, 10);
        let plant = loam_plant('a', 5);
        assert!(bed.is_enough_room(&plant), "Coarse check sees 10 unclaimed width");
        assert!(bed.can_be_planted_here(&plant));
        assert!(bed.add_plant(plant).is_err(), "A size-5 plant cannot fit length 3");
        assert_eq!(bed.rows_of_plants().len(), 1);
        assert!(!bed.rows_of_plants()[0].is_finalized());
    }

    #[test]
    fn test_rejected_plant_is_handed_back_untouched() {
        let mut bed = loam_bed(2, 2);
        let plant = loam_plant('a', 3);
        match bed.add_plant(plant) {
            Err(returned) => assert_eq!(returned.symbol, 'a'),
            Ok(()) => panic!("A size-3 plant must not fit a 2x2 bed"),
        }
    }

    #[test]
    fn test_display_separates_rows_with_dots() {
        let mut bed = loam_bed(4, 4);
        assert!(bed.add_plant(loam_plant('a', 2)).is_ok());
        assert!(bed.add_plant(loam_plant('b', 2)).is_ok());
        assert!(bed.add_plant(loam_plant('c', 2)).is_ok());
        assert_eq!(
            bed.to_string(),
            "+----+\n|aabb|\n|aabb|\n|....|\n|cc  |\n|cc  |\n+----+"
        );
    }

    #[test]
    fn test_display_empty_bed_is_just_the_frame() {
        let bed = loam_bed(3, 2);
        assert_eq!(bed.to_string(), "+---+\n+---+");
    }
}
