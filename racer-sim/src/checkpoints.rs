use glam::DVec2;
use racer_core::timer::Stopwatch;
use racer_core::world::WorldGeometry;
use tracing::info;

use crate::physics::bounding_box::BoundingBox;
use crate::physics::{car::Car, trigger_entity::TriggerEntity};

// Both lines are a one metre wide strip, ten metres across the track
const LINE_THICKNESS: f64 = 1.0;
const LINE_SPAN: f64 = 10.0;
// The checkpoint sits this far before the far end of the track
const CHECKPOINT_INSET: f64 = 15.0;

#[derive(Clone, Copy, Debug)]
pub struct Checkpoint {
    pub bounds: BoundingBox,
}

impl Checkpoint {
    pub fn new(bounds: BoundingBox) -> Self {
        Self { bounds }
    }
}

impl TriggerEntity for Checkpoint {
    fn get_bounding_box(&self) -> BoundingBox {
        self.bounds
    }

    fn trigger(&self, car: &mut Car, _round_timer: &mut dyn Stopwatch) {
        if !car.lap_info.passed_checkpoint {
            info!("checkpoint passed");
        }
        car.lap_info.passed_checkpoint = true;
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FinishLine {
    pub bounds: BoundingBox,
}

impl FinishLine {
    pub fn new(bounds: BoundingBox) -> Self {
        Self { bounds }
    }
}

impl TriggerEntity for FinishLine {
    fn get_bounding_box(&self) -> BoundingBox {
        self.bounds
    }

    // The first time over the line starts the clock; the lap only counts once
    // the checkpoint has been passed on the way round
    fn trigger(&self, car: &mut Car, round_timer: &mut dyn Stopwatch) {
        if car.lap_info.passed_checkpoint {
            if !car.lap_info.passed_end_line {
                info!("lap complete");
            }
            car.lap_info.passed_end_line = true;
        } else {
            if !round_timer.is_running() {
                info!("round started");
            }
            round_timer.start();
        }
    }
}

// Start/finish line and checkpoint for a car of the given length starting on
// this world's start line
pub fn lines_for_track(world: &WorldGeometry, car_length: f64) -> (FinishLine, Checkpoint) {
    let start = world.start_location().position;
    let line_x = start.x - car_length / 2.0 - 1.0;
    let size = DVec2::new(LINE_THICKNESS, LINE_SPAN);

    let finish_line = FinishLine::new(BoundingBox::from_corner_and_size(
        DVec2::new(line_x, start.y - LINE_SPAN / 2.0),
        size,
    ));
    let checkpoint = Checkpoint::new(BoundingBox::from_corner_and_size(
        DVec2::new(line_x, start.y + world.track_height - CHECKPOINT_INSET),
        size,
    ));
    (finish_line, checkpoint)
}
