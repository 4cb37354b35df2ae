use glam::DVec2;
use racer_core::freeze::Freezeable;
use racer_core::player_inputs::PlayerInputs;
use racer_core::world::WorldGeometry;

use crate::obstacles::Obstacle;
use crate::physics::car::{Car, CarState};
use crate::physics::collisions::CollisionType;
use crate::physics::constants::*;
use crate::track::TrackSurfaceMap;

fn paved_track() -> TrackSurfaceMap {
    TrackSurfaceMap::from_fn(1300, 800, |_, _| true)
}

fn loose_track() -> TrackSurfaceMap {
    TrackSurfaceMap::from_fn(1300, 800, |_, _| false)
}

fn get_starting_car() -> Car {
    let mut car = Car::new(WorldGeometry::default());
    car.unfreeze();
    car
}

fn inputs(accelerate: bool, brake: bool, steer_left: bool, steer_right: bool) -> PlayerInputs {
    PlayerInputs {
        accelerate,
        brake,
        steer_left,
        steer_right,
    }
}

fn throttle() -> PlayerInputs {
    inputs(true, false, false, false)
}

fn coast() -> PlayerInputs {
    inputs(false, false, false, false)
}

#[test]
fn test_starting_state() {
    let car = Car::new(WorldGeometry::default());
    assert!(car.position().abs_diff_eq(DVec2::new(68.1, 10.0), 1e-9));
    assert_eq!(car.speed, 0.0);
    assert_eq!(car.heading(), 0.0);
    assert!(!car.is_moving());
    assert!(!car.destroyed);
    assert!(!car.has_passed_checkpoint());
    assert!(!car.has_passed_end_line());
    assert!(car.frozen);
    assert_eq!(car.state(), CarState::Frozen);
}

#[test]
fn test_frozen_car_ignores_steps() {
    let track = paved_track();
    let mut car = get_starting_car();
    car.freeze();
    assert_eq!(car.state(), CarState::Frozen);

    car.do_physics_step(1.0, &inputs(true, false, true, false), &[], &track);
    assert_eq!(car.position(), car.start_location().position);
    assert_eq!(car.speed, 0.0);
    assert_eq!(car.heading(), 0.0);

    // also while already moving
    car.unfreeze();
    car.do_physics_step(0.5, &throttle(), &[], &track);
    car.freeze();
    let before = car.clone();
    car.do_physics_step(0.1, &inputs(true, true, true, true), &[], &track);
    assert_eq!(car.entity_location, before.entity_location);
    assert_eq!(car.speed, before.speed);
}

#[test]
fn test_accelerating_from_rest() {
    let track = paved_track();
    let mut car = get_starting_car();
    car.do_physics_step(1.0, &throttle(), &[], &track);

    // all of the engine's work for one second goes into kinetic energy
    let expected_speed = (2.0 * ENGINE_POWER / CAR_MASS).sqrt();
    assert!((car.speed - expected_speed).abs() < 1e-9);
    assert!(car.is_moving());
    assert!(!car.frozen);
    assert_eq!(car.state(), CarState::Active);

    // driving forward means heading towards smaller x at heading 0
    let travelled = car.start_location().position - car.position();
    assert!(travelled.abs_diff_eq(DVec2::new(expected_speed, 0.0), 1e-9));
}

#[test]
fn test_resistance_slows_a_coasting_car() {
    let track = paved_track();
    let mut car = get_starting_car();
    car.speed = 20.0;
    car.do_physics_step(0.1, &coast(), &[], &track);

    let energy = 0.5 * CAR_MASS * 400.0;
    let air = AIR_RESISTANCE_COEFFICIENT * 400.0;
    let rolling = ROLLING_RESISTANCE_PAVED * CAR_MASS * 20.0 * GRAVITY_COEFFICIENT;
    let remaining = energy - (air + rolling) * 0.1 * MAGIC_CONSTANT;
    let expected_speed = (2.0 * remaining / CAR_MASS).sqrt();
    assert!((car.speed - expected_speed).abs() < 1e-9);
    assert!(car.speed > 0.0 && car.speed < 20.0);
}

#[test]
fn test_loose_ground_drags_harder() {
    let mut on_asphalt = get_starting_car();
    let mut on_gravel = get_starting_car();
    on_asphalt.speed = 15.0;
    on_gravel.speed = 15.0;

    on_asphalt.do_physics_step(0.05, &coast(), &[], &paved_track());
    on_gravel.do_physics_step(0.05, &coast(), &[], &loose_track());
    assert!(on_gravel.speed < on_asphalt.speed);
}

#[test]
fn test_resistance_never_reverses_direction() {
    let track = loose_track();
    let mut car = get_starting_car();
    car.speed = 1.0;
    // far more resistance than there is energy to take
    car.do_physics_step(5.0, &coast(), &[], &track);
    assert_eq!(car.speed, 0.0);

    car.speed = -1.0;
    car.do_physics_step(5.0, &coast(), &[], &track);
    assert_eq!(car.speed, 0.0);
}

#[test]
fn test_coasting_comes_to_a_full_stop() {
    let track = paved_track();
    let mut car = get_starting_car();
    car.speed = 3.0;
    for _ in 0..1_000 {
        car.do_physics_step(0.016, &coast(), &[], &track);
    }
    assert_eq!(car.speed, 0.0);
}

#[test]
fn test_reversing_from_rest() {
    let track = paved_track();
    let mut car = get_starting_car();
    car.do_physics_step(1.0, &inputs(false, true, false, false), &[], &track);

    // braking from a standstill uses the engine's power to back up
    let expected_speed = -(2.0 * ENGINE_POWER / CAR_MASS).sqrt();
    assert!((car.speed - expected_speed).abs() < 1e-9);
    assert!(car.position().x > car.start_location().position.x);
}

#[test]
fn test_braking_while_moving_forward() {
    let track = paved_track();
    let mut car = get_starting_car();
    car.speed = 10.0;
    car.do_physics_step(0.1, &inputs(false, true, false, false), &[], &track);
    assert!(car.speed >= 0.0 && car.speed < 10.0);

    // a long stamp on the brakes stops the car but doesn't reverse it
    car.speed = 10.0;
    car.do_physics_step(1.0, &inputs(false, true, false, false), &[], &track);
    assert_eq!(car.speed, 0.0);
}

#[test]
fn test_pedals_swap_roles_when_reversing() {
    let track = paved_track();
    let mut car = get_starting_car();
    car.speed = -10.0;
    // forward pedal brakes a reversing car...
    car.do_physics_step(0.05, &throttle(), &[], &track);
    assert!(car.speed < 0.0 && car.speed > -10.0);

    // ...and can't flip it into driving forward
    car.speed = -10.0;
    car.do_physics_step(1.0, &throttle(), &[], &track);
    assert_eq!(car.speed, 0.0);

    // the back pedal speeds up reversing
    car.speed = -10.0;
    car.do_physics_step(0.05, &inputs(false, true, false, false), &[], &track);
    assert!(car.speed < -10.0);
}

#[test]
fn test_both_pedals_at_rest_cancel_out() {
    let track = paved_track();
    let mut car = get_starting_car();
    car.do_physics_step(1.0, &inputs(true, true, false, false), &[], &track);
    assert_eq!(car.speed, 0.0);
    assert_eq!(car.position(), car.start_location().position);
}

#[test]
fn test_steering_needs_speed() {
    let track = paved_track();
    let mut car = get_starting_car();
    car.do_physics_step(1.0, &inputs(false, false, true, false), &[], &track);
    assert_eq!(car.heading(), 0.0);
    car.do_physics_step(1.0, &inputs(false, false, false, true), &[], &track);
    assert_eq!(car.heading(), 0.0);
}

#[test]
fn test_turn_left() {
    let track = paved_track();
    let mut car = get_starting_car();
    car.do_physics_step(1.0, &throttle(), &[], &track);
    car.do_physics_step(1.0, &inputs(false, false, true, false), &[], &track);
    assert!(car.heading() < 0.0);
    assert!(!car.destroyed);
}

#[test]
fn test_turn_right() {
    let track = paved_track();
    let mut car = get_starting_car();
    // start in the middle so the turn doesn't run us off the map
    car.entity_location.position = DVec2::new(100.0, 40.0);
    car.do_physics_step(1.0, &throttle(), &[], &track);
    car.do_physics_step(1.0, &inputs(false, false, false, true), &[], &track);
    assert!(car.heading() > 0.0);
}

#[test]
fn test_steering_scales_with_fourth_root_of_speed() {
    let track = paved_track();
    let mut car = get_starting_car();
    car.entity_location.position = DVec2::new(65.0, 40.0);
    car.speed = 16.0;
    // resistance runs first, so work out the speed steering actually sees
    let mut reference = car.clone();
    reference.do_physics_step(0.01, &coast(), &[], &track);
    let speed_after_resistance = reference.speed;

    car.do_physics_step(0.01, &inputs(false, false, false, true), &[], &track);
    let expected_turn = speed_after_resistance.powf(0.25) * TURNING_POWER * 0.01;
    assert!((car.heading() - expected_turn).abs() < 1e-12);
}

#[test]
fn test_reversing_steers_the_other_way() {
    let track = paved_track();
    let mut car = get_starting_car();
    car.entity_location.position = DVec2::new(65.0, 40.0);
    car.speed = -10.0;
    car.do_physics_step(0.1, &inputs(false, false, true, false), &[], &track);
    assert!(car.heading() > 0.0);
}

#[test]
fn test_high_speed_boundary_crash() {
    let track = paved_track();
    let mut car = get_starting_car();
    // two seconds flat out carries the car straight through the left edge
    let collision = car.do_physics_step(2.0, &throttle(), &[], &track);
    assert_eq!(collision, CollisionType::CriticalDamage);
    assert!(car.destroyed);
    assert_eq!(car.state(), CarState::Destroyed);
    assert_eq!(car.speed, 0.0);
    assert_eq!(car.position(), car.start_location().position);
}

#[test]
fn test_high_speed_obstacle_crash() {
    let track = paved_track();
    let mut car = get_starting_car();
    let start = car.start_location().position;
    let in_front_of_start = Obstacle::new(start - DVec2::new(10.0, 0.0), 1.0, 0.0);
    car.do_physics_step(0.5, &throttle(), &[in_front_of_start], &track);
    assert!(car.destroyed);
}

#[test]
fn test_low_speed_bump() {
    let track = paved_track();
    let mut car = get_starting_car();
    let start = car.start_location().position;
    // the tail sits 2.1m ahead of the centre; leave 0.2m of room
    let obstacle = Obstacle::new(start - DVec2::new(3.3, 0.0), 1.0, 0.0);
    let collision = car.do_physics_step(0.1, &throttle(), &[obstacle], &track);

    assert_eq!(collision, CollisionType::MinimalDamage);
    assert!(!car.destroyed);
    assert_eq!(car.speed, 0.0);
    assert_eq!(car.position(), start);
    assert_eq!(car.state(), CarState::Active);
}

#[test]
fn test_wrecked_car_stays_put() {
    let track = paved_track();
    let mut car = get_starting_car();
    car.do_physics_step(2.0, &throttle(), &[], &track);
    assert!(car.destroyed);

    car.unfreeze();
    car.do_physics_step(1.0, &throttle(), &[], &track);
    assert_eq!(car.speed, 0.0);
    assert_eq!(car.position(), car.start_location().position);
    assert_eq!(car.state(), CarState::Destroyed);
}

#[test]
fn test_reset_restores_starting_state() {
    let track = paved_track();
    let mut car = get_starting_car();
    car.do_physics_step(1.0, &throttle(), &[], &track);
    car.do_physics_step(0.5, &inputs(true, false, true, false), &[], &track);
    car.lap_info.passed_checkpoint = true;
    car.do_physics_step(5.0, &throttle(), &[], &track);
    assert!(car.destroyed);

    car.reset();
    let fresh = Car::new(WorldGeometry::default());
    assert_eq!(car.entity_location, fresh.entity_location);
    assert_eq!(car.speed, 0.0);
    assert_eq!(car.lap_info, fresh.lap_info);
    assert!(car.frozen);
    assert!(!car.destroyed);
}
