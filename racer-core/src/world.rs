use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::entity_location::EntityLocation;

pub const CELLS_PER_METRE: f64 = 10.0;

// Where the car is placed relative to the horizontal centre of the world
const START_OFFSET_X: f64 = 3.1;
const START_Y: f64 = 10.0;

// Extent of the simulated world and of the drivable rectangle centred inside it.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldGeometry {
    pub width: f64,
    pub height: f64,
    pub track_width: f64,
    pub track_height: f64,
}

impl Default for WorldGeometry {
    fn default() -> Self {
        WorldGeometry {
            width: 130.0,
            height: 80.0,
            track_width: 110.0,
            track_height: 70.0,
        }
    }
}

impl WorldGeometry {
    pub fn centre(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }

    // (min, max) corners of the drivable rectangle
    pub fn track_bounds(&self) -> (DVec2, DVec2) {
        let half_track = DVec2::new(self.track_width / 2.0, self.track_height / 2.0);
        (self.centre() - half_track, self.centre() + half_track)
    }

    pub fn contains(&self, point: DVec2) -> bool {
        point.x >= 0.0 && point.x <= self.width && point.y >= 0.0 && point.y <= self.height
    }

    // Size of the surface grid covering this world, in cells.
    pub fn grid_size(&self) -> (usize, usize) {
        (
            (self.width * CELLS_PER_METRE) as usize,
            (self.height * CELLS_PER_METRE) as usize,
        )
    }

    pub fn start_location(&self) -> EntityLocation {
        EntityLocation {
            position: DVec2::new(self.width / 2.0 + START_OFFSET_X, START_Y),
            heading: 0.0,
        }
    }
}
