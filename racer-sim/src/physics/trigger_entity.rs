use glam::DVec2;
use racer_core::timer::Stopwatch;

use crate::physics::bounding_box::BoundingBox;
use crate::physics::car::Car;

// Something on the track that reacts when the car's centre is inside it
pub trait TriggerEntity {
    fn pos(&self) -> DVec2 {
        self.get_bounding_box().pos()
    }

    fn get_bounding_box(&self) -> BoundingBox;

    fn is_triggered_by(&self, car: &Car) -> bool {
        self.get_bounding_box().contains(car.position())
    }

    fn trigger(&self, car: &mut Car, round_timer: &mut dyn Stopwatch);
}
