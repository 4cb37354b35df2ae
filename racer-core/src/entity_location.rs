use glam::DVec2;
use serde::{Deserialize, Serialize};

// EntityLocation is what a renderer reads back from the simulation to know
// where (and which way round) to draw the car
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntityLocation {
    pub position: DVec2,
    pub heading: f64, // radians; the car drives towards -(cos, sin) of this
}

impl EntityLocation {
    pub fn forward(&self) -> DVec2 {
        -DVec2::new(self.heading.cos(), self.heading.sin())
    }
}
