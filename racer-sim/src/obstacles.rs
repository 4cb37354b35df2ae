use std::error::Error;
use std::f64::consts::TAU;
use std::fmt;

use glam::DVec2;
use racer_core::world::WorldGeometry;
use rand::Rng;
use serde::Serialize;
use tracing::{debug, warn};

use crate::track::TrackSurfaceMap;

// in metres
pub const MAX_DIAMETER: f64 = 1.8;
const MIN_RADIUS: f64 = MAX_DIAMETER * 0.4;

// Extra clearance in front of and behind the start line
const CORRIDOR_MARGIN_BEFORE: f64 = 1.5;
const CORRIDOR_MARGIN_AFTER: f64 = 1.0;

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Obstacle {
    pub position: DVec2,
    pub radius: f64,
    // only matters for drawing; collisions treat obstacles as circles
    pub rotation: f64,
}

impl Obstacle {
    pub fn new(position: DVec2, radius: f64, rotation: f64) -> Self {
        Obstacle {
            position,
            radius,
            rotation,
        }
    }

    // The passable gap between this obstacle and another one.
    pub fn space_between(&self, other: &Obstacle) -> f64 {
        self.position.distance(other.position) - self.radius - other.radius
    }

    pub fn contains(&self, point: DVec2) -> bool {
        point.distance(self.position) <= self.radius
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ObstacleField {
    obstacles: Vec<Obstacle>,
}

impl ObstacleField {
    pub fn new(obstacles: Vec<Obstacle>) -> Self {
        ObstacleField { obstacles }
    }

    pub fn as_slice(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }
}

#[derive(Debug)]
pub enum PlacementError {
    // Ran out of attempts; carries whatever had been placed by then
    BudgetExhausted {
        requested: usize,
        attempts: usize,
        partial: ObstacleField,
    },
}

impl PlacementError {
    pub fn into_partial(self) -> ObstacleField {
        match self {
            PlacementError::BudgetExhausted { partial, .. } => partial,
        }
    }
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::BudgetExhausted {
                requested,
                attempts,
                partial,
            } => write!(
                f,
                "placed only {} of {} obstacles after {} attempts",
                partial.len(),
                requested,
                attempts
            ),
        }
    }
}

impl Error for PlacementError {}

// Scatters obstacles over the paved part of the track by rejection sampling,
// keeping a gap the car fits through and leaving the start straight clear.
pub struct ObstacleGenerator<'a> {
    track: &'a TrackSurfaceMap,
    world: WorldGeometry,
    attempt_budget: usize,
}

impl<'a> ObstacleGenerator<'a> {
    pub fn new(track: &'a TrackSurfaceMap, world: WorldGeometry, attempt_budget: usize) -> Self {
        ObstacleGenerator {
            track,
            world,
            attempt_budget,
        }
    }

    // x-range around the start/finish line that must stay empty
    pub fn start_corridor(&self, min_spacing: f64) -> (f64, f64) {
        let centre_x = self.world.width / 2.0;
        (
            centre_x - min_spacing - CORRIDOR_MARGIN_BEFORE,
            centre_x + min_spacing + MAX_DIAMETER + CORRIDOR_MARGIN_AFTER,
        )
    }

    pub fn generate<R: Rng + ?Sized>(
        &self,
        count: usize,
        min_spacing: f64,
        rng: &mut R,
    ) -> Result<ObstacleField, PlacementError> {
        let (track_min, track_max) = self.world.track_bounds();
        let (corridor_start, corridor_end) = self.start_corridor(min_spacing);
        let mut obstacles: Vec<Obstacle> = Vec::with_capacity(count);
        let mut attempts = 0;

        while obstacles.len() < count {
            if attempts == self.attempt_budget {
                warn!(
                    "gave up placing obstacles after {} attempts ({} of {} placed)",
                    attempts,
                    obstacles.len(),
                    count
                );
                return Err(PlacementError::BudgetExhausted {
                    requested: count,
                    attempts,
                    partial: ObstacleField::new(obstacles),
                });
            }
            attempts += 1;

            let candidate = Obstacle::new(
                DVec2::new(
                    rng.gen_range(track_min.x..track_max.x),
                    rng.gen_range(track_min.y..track_max.y),
                ),
                rng.gen_range(MIN_RADIUS..MAX_DIAMETER),
                rng.gen_range(0.0..TAU),
            );

            if !self.track.is_paved(candidate.position) {
                continue;
            }

            if candidate.position.x >= corridor_start && candidate.position.x <= corridor_end {
                continue;
            }

            // would block the way through
            if obstacles
                .iter()
                .any(|placed| candidate.space_between(placed) <= min_spacing)
            {
                continue;
            }

            obstacles.push(candidate);
        }

        debug!("placed {} obstacles in {} attempts", count, attempts);
        Ok(ObstacleField::new(obstacles))
    }
}
