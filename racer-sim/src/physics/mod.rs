use racer_core::player_inputs::PlayerInputs;
use tracing::{debug, info};

use crate::obstacles::Obstacle;
use crate::track::{Surface, TrackSurfaceMap};

pub mod bounding_box;
pub mod car;
pub mod collisions;
pub mod constants;
pub mod trigger_entity;

#[cfg(test)]
mod tests;

use car::Car;
use collisions::CollisionType;
use constants::*;

// Unlike f64::signum, a speed of zero has no direction
fn direction_of(speed: f64) -> f64 {
    if speed > 0.0 {
        1.0
    } else if speed < 0.0 {
        -1.0
    } else {
        0.0
    }
}

impl Car {
    /* Advance the car by one tick: resistance first, then the driver's input,
     * then movement and whatever it runs into. Frozen and wrecked cars stay
     * exactly as they are. */
    pub fn do_physics_step(
        &mut self,
        time_step: f64,
        inputs: &PlayerInputs,
        obstacles: &[Obstacle],
        track: &TrackSurfaceMap,
    ) -> CollisionType {
        if self.frozen || self.destroyed {
            return CollisionType::NoCollision;
        }

        self.apply_resistance(time_step, track);
        self.accept_input(inputs, time_step);

        let previous_position = self.entity_location.position;
        self.update_position(time_step);

        let collision = self.check_collision(obstacles);
        match collision {
            CollisionType::NoCollision => {}
            CollisionType::MinimalDamage | CollisionType::CriticalDamage => {
                if collision == CollisionType::CriticalDamage {
                    info!("car wrecked at {:.1} m/s", self.speed.abs());
                    self.destroyed = true;
                } else {
                    debug!("car bumped into something at {:.1} m/s", self.speed.abs());
                }
                // don't glitch into whatever we hit
                self.entity_location.position = previous_position;
                self.speed = 0.0;
            }
        }

        collision
    }

    fn update_position(&mut self, time_step: f64) {
        self.entity_location.position += self.entity_location.forward() * self.speed * time_step;
    }

    fn speed_from_energy(&self, energy: f64, direction: f64) -> f64 {
        (2.0 * energy.abs() / self.mass).sqrt() * direction
    }

    fn rolling_resistance_coefficient(&self, track: &TrackSurfaceMap) -> f64 {
        match track.classify(self.entity_location.position) {
            Surface::Paved => ROLLING_RESISTANCE_PAVED,
            Surface::Loose => ROLLING_RESISTANCE_LOOSE,
        }
    }

    // Equations for air and rolling resistance come from
    // https://asawicki.info/Mirror/Car%20Physics%20for%20Games/Car%20Physics%20for%20Games.html
    // but are taken out of the kinetic energy as work, so resistance alone can
    // only bring the car to rest and never flips its direction
    fn apply_resistance(&mut self, time_step: f64, track: &TrackSurfaceMap) {
        let direction = direction_of(self.speed);
        let mut energy = self.kinetic_energy();

        let air_resistance = AIR_RESISTANCE_COEFFICIENT * self.speed * self.speed;
        let rolling_resistance = self.rolling_resistance_coefficient(track)
            * self.mass
            * self.speed.abs()
            * GRAVITY_COEFFICIENT;

        let lost_work = (air_resistance + rolling_resistance) * time_step * MAGIC_CONSTANT;
        if lost_work < energy {
            energy -= lost_work;
        } else {
            energy = 0.0;
        }

        // otherwise we'd roll forever at ever smaller speeds
        self.speed = if energy < MIN_KINETIC_ENERGY {
            0.0
        } else {
            self.speed_from_energy(energy, direction)
        };
    }

    fn accept_input(&mut self, inputs: &PlayerInputs, time_step: f64) {
        // Steering bites harder the faster we go, with the fourth root of speed,
        // and does nothing at all while stationary
        let turn =
            direction_of(self.speed) * self.speed.abs().sqrt().sqrt() * TURNING_POWER * time_step;
        if inputs.steer_left {
            self.entity_location.heading -= turn;
        }
        if inputs.steer_right {
            self.entity_location.heading += turn;
        }

        let mut energy = self.kinetic_energy();
        let mut direction = 1.0;
        if self.speed > 0.0 {
            if inputs.accelerate {
                energy += ENGINE_POWER * time_step;
            }
            if inputs.brake {
                energy = (energy - BRAKING_POWER * time_step).max(0.0);
            }
        } else if self.speed < 0.0 {
            // going backwards, so the pedals swap roles
            direction = -1.0;
            if inputs.accelerate {
                energy -= BRAKING_POWER * time_step;
            }
            if inputs.brake {
                energy += ENGINE_POWER * time_step;
            }
            energy = energy.max(0.0);
        } else {
            if inputs.accelerate {
                energy += ENGINE_POWER * time_step;
            }
            // braking from a standstill means reversing
            if inputs.brake {
                energy -= ENGINE_POWER * time_step;
            }
            if energy < 0.0 {
                energy = -energy;
                direction = -1.0;
            }
        }

        self.speed = self.speed_from_energy(energy, direction);
    }
}
