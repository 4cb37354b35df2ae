use glam::DVec2;

use super::car::Car;
use super::constants::CRITICAL_IMPACT_SPEED;
use crate::obstacles::Obstacle;

// How bad running into something was
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CollisionType {
    NoCollision,
    MinimalDamage,
    CriticalDamage,
}

impl CollisionType {
    pub fn from_impact_speed(speed: f64) -> CollisionType {
        if speed.abs() < CRITICAL_IMPACT_SPEED {
            CollisionType::MinimalDamage
        } else {
            CollisionType::CriticalDamage
        }
    }
}

// Given a 2D vector, rotate it by theta radians counterclockwise.
// Refer to https://en.wikipedia.org/wiki/Rotation_matrix for the formula used here
fn flat_rotate_vector(v: &DVec2, theta: f64) -> DVec2 {
    let sin_theta = theta.sin();
    let cos_theta = theta.cos();

    DVec2::new(v.x * cos_theta - v.y * sin_theta, v.x * sin_theta + v.y * cos_theta)
}

impl Car {
    // The points of the hull we test against the world: all four corners plus
    // the middle of each end, in the unrotated frame first
    pub fn collision_points(&self) -> [DVec2; 6] {
        let half_length = self.size.x / 2.0;
        let half_width = self.size.y / 2.0;
        let offsets = [
            DVec2::new(-half_length, half_width),
            DVec2::new(-half_length, -half_width),
            DVec2::new(-half_length, 0.0),
            DVec2::new(half_length, half_width),
            DVec2::new(half_length, -half_width),
            DVec2::new(half_length, 0.0),
        ];

        let position = self.entity_location.position;
        let heading = self.entity_location.heading;
        offsets.map(|offset| position + flat_rotate_vector(&offset, heading))
    }

    pub fn collides_with(&self, obstacle: &Obstacle) -> bool {
        self.collision_points()
            .iter()
            .any(|&point| obstacle.contains(point))
    }

    pub fn is_out_of_bounds(&self) -> bool {
        self.collision_points()
            .iter()
            .any(|&point| !self.world.contains(point))
    }

    pub fn check_collision(&self, obstacles: &[Obstacle]) -> CollisionType {
        if obstacles.iter().any(|obstacle| self.collides_with(obstacle)) || self.is_out_of_bounds()
        {
            CollisionType::from_impact_speed(self.speed)
        } else {
            CollisionType::NoCollision
        }
    }
}
