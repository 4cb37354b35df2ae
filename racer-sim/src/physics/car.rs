use glam::DVec2;
use racer_core::entity_location::EntityLocation;
use racer_core::freeze::Freezeable;
use racer_core::lap_info::LapInformation;
use racer_core::world::WorldGeometry;
use serde::Serialize;

use crate::physics::constants::{CAR_LENGTH, CAR_MASS, CAR_WIDTH};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum CarState {
    Frozen,
    Active,
    Destroyed,
}

#[derive(Clone, Debug)]
pub struct Car {
    pub entity_location: EntityLocation,
    // signed; positive means moving the way the car faces
    pub speed: f64,

    pub mass: f64,
    // x is the length along the heading, y the width across it
    pub size: DVec2,

    pub destroyed: bool,
    pub frozen: bool,
    pub lap_info: LapInformation,

    pub(crate) world: WorldGeometry,
    start_location: EntityLocation,
}

impl Car {
    // A fresh car sits still and frozen on the start line
    pub fn new(world: WorldGeometry) -> Car {
        let start_location = world.start_location();
        Car {
            entity_location: start_location,
            speed: 0.0,
            mass: CAR_MASS,
            size: DVec2::new(CAR_LENGTH, CAR_WIDTH),
            destroyed: false,
            frozen: true,
            lap_info: LapInformation::new(),
            world,
            start_location,
        }
    }

    pub fn reset(&mut self) {
        self.entity_location = self.start_location;
        self.speed = 0.0;
        self.destroyed = false;
        self.frozen = true;
        self.lap_info = LapInformation::new();
    }

    pub fn state(&self) -> CarState {
        if self.destroyed {
            CarState::Destroyed
        } else if self.frozen {
            CarState::Frozen
        } else {
            CarState::Active
        }
    }

    pub fn start_location(&self) -> EntityLocation {
        self.start_location
    }

    pub fn position(&self) -> DVec2 {
        self.entity_location.position
    }

    pub fn heading(&self) -> f64 {
        self.entity_location.heading
    }

    pub fn length(&self) -> f64 {
        self.size.x
    }

    pub fn is_moving(&self) -> bool {
        self.speed != 0.0
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.speed * self.speed
    }

    pub fn has_passed_checkpoint(&self) -> bool {
        self.lap_info.passed_checkpoint
    }

    pub fn has_passed_end_line(&self) -> bool {
        self.lap_info.passed_end_line
    }
}

impl Freezeable for Car {
    fn freeze(&mut self) {
        self.frozen = true;
    }

    fn unfreeze(&mut self) {
        self.frozen = false;
    }
}
