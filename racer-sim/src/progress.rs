use racer_core::lap_info::RaceStatus;
use racer_core::timer::Stopwatch;
use racer_core::world::WorldGeometry;

use crate::checkpoints::{lines_for_track, Checkpoint, FinishLine};
use crate::physics::{car::Car, trigger_entity::TriggerEntity};

// Turns the car crossing the start/finish line and the checkpoint into
// "round started" and "round finished".
#[derive(Clone, Copy, Debug)]
pub struct RaceProgressTracker {
    finish_line: FinishLine,
    checkpoint: Checkpoint,
}

impl RaceProgressTracker {
    pub fn new(finish_line: FinishLine, checkpoint: Checkpoint) -> Self {
        Self {
            finish_line,
            checkpoint,
        }
    }

    pub fn for_track(world: &WorldGeometry, car: &Car) -> Self {
        let (finish_line, checkpoint) = lines_for_track(world, car.length());
        Self::new(finish_line, checkpoint)
    }

    pub fn finish_line(&self) -> &FinishLine {
        &self.finish_line
    }

    pub fn checkpoint(&self) -> &Checkpoint {
        &self.checkpoint
    }

    // Call once per tick while racing. Returns whether the centre of the car
    // is on one of the lines; the finish line wins if they ever overlap.
    pub fn evaluate_lines(&self, car: &mut Car, round_timer: &mut dyn Stopwatch) -> bool {
        let triggers: [&dyn TriggerEntity; 2] = [&self.finish_line, &self.checkpoint];
        match triggers.iter().find(|trigger| trigger.is_triggered_by(car)) {
            Some(trigger) => {
                trigger.trigger(car, round_timer);
                true
            }
            None => false,
        }
    }

    pub fn status(&self, car: &Car, round_timer: &dyn Stopwatch) -> RaceStatus {
        car.lap_info.status(round_timer.has_started(), car.destroyed)
    }
}
