use std::thread;
use std::time::{Duration, Instant};

use anyhow::{bail, Result};
use racer_core::entity_location::EntityLocation;
use racer_core::freeze::Freezeable;
use racer_core::lap_info::{LapInformation, RaceStatus};
use racer_core::player_inputs::{InputEvent, PlayerInputs};
use racer_core::timer::{Clock, CountdownTimer, MonotonicClock, RoundTimer, Stopwatch};
use racer_core::world::WorldGeometry;
use racer_core::Settings;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::obstacles::{ObstacleField, ObstacleGenerator};
use crate::physics::car::{Car, CarState};
use crate::progress::RaceProgressTracker;
use crate::track::TrackSurfaceMap;

pub use self::phase::GamePhase;

mod phase;

// Everything a renderer needs to draw one frame; it never writes back
#[derive(Clone, Debug, Serialize)]
pub struct RaceSnapshot {
    pub phase: GamePhase,
    pub location: EntityLocation,
    pub speed: f64,
    pub car_state: CarState,
    pub lap_info: LapInformation,
    pub race_status: RaceStatus,
    pub round_time_ms: u64,
    pub round_time: String,
    pub countdown: Option<u64>,
}

pub trait InputSource {
    // Events that came in since the last poll, or None once the source is done
    // and the game loop should stop
    fn poll(&mut self, snapshot: &RaceSnapshot) -> Option<Vec<InputEvent>>;
}

pub struct GameSession<C: Clock + Clone = MonotonicClock> {
    world: WorldGeometry,
    track: TrackSurfaceMap,
    car: Car,
    obstacles: ObstacleField,
    progress: RaceProgressTracker,
    round_timer: RoundTimer<C>,
    countdown: CountdownTimer<C>,
    inputs: PlayerInputs,
    phase: GamePhase,

    rng: StdRng,
    tick_length: Duration,
    obstacle_amount: usize,
    obstacle_spacing: f64,
    obstacle_attempt_budget: usize,
}

impl<C: Clock + Clone> GameSession<C> {
    pub fn new(settings: &Settings, track: TrackSurfaceMap, clock: C) -> Result<Self> {
        let world = settings.world();
        if !(world.track_width > 0.0 && world.track_height > 0.0) {
            bail!(
                "track must have a positive size, got {}x{}",
                world.track_width,
                world.track_height
            );
        }
        if world.track_width > world.width || world.track_height > world.height {
            bail!(
                "track ({}x{}) doesn't fit in the world ({}x{})",
                world.track_width,
                world.track_height,
                world.width,
                world.height
            );
        }
        if !(settings.obstacle_spacing.is_finite() && settings.obstacle_spacing >= 0.0) {
            bail!(
                "obstacle spacing must be a non-negative distance, got {}",
                settings.obstacle_spacing
            );
        }
        if track.size() != world.grid_size() {
            bail!(
                "surface map is {:?} cells but the world needs {:?}",
                track.size(),
                world.grid_size()
            );
        }

        let rng = match settings.obstacle_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let car = Car::new(world);
        let progress = RaceProgressTracker::for_track(&world, &car);

        let mut session = GameSession {
            world,
            track,
            car,
            obstacles: ObstacleField::default(),
            progress,
            round_timer: RoundTimer::new(clock.clone()),
            countdown: CountdownTimer::new(clock, Duration::from_millis(settings.countdown_ms)),
            inputs: PlayerInputs::new(),
            phase: GamePhase::Menu,
            rng,
            tick_length: Duration::from_millis(settings.tick_ms),
            obstacle_amount: settings.obstacle_amount,
            obstacle_spacing: settings.obstacle_spacing,
            obstacle_attempt_budget: settings.obstacle_attempt_budget,
        };
        session.place_obstacles();
        Ok(session)
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn car(&self) -> &Car {
        &self.car
    }

    pub fn obstacles(&self) -> &ObstacleField {
        &self.obstacles
    }

    pub fn round_timer(&self) -> &RoundTimer<C> {
        &self.round_timer
    }

    pub fn progress(&self) -> &RaceProgressTracker {
        &self.progress
    }

    fn set_phase(&mut self, phase: GamePhase) {
        info!("{:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }

    fn place_obstacles(&mut self) {
        let generator =
            ObstacleGenerator::new(&self.track, self.world, self.obstacle_attempt_budget);
        self.obstacles =
            match generator.generate(self.obstacle_amount, self.obstacle_spacing, &mut self.rng) {
                Ok(field) => field,
                Err(error) => {
                    warn!("{}, racing with what fits", error);
                    error.into_partial()
                }
            };
    }

    // Puts everything back on the start line with a fresh obstacle layout and
    // starts the countdown.
    pub fn start_round(&mut self) {
        self.car.reset();
        self.round_timer.reset();
        self.place_obstacles();
        self.countdown.start();
        self.set_phase(GamePhase::CountingDown);
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        if self.inputs.apply(event) {
            return;
        }

        match event {
            InputEvent::TogglePause => self.toggle_pause(),
            InputEvent::Reset => self.start_round(),
            _ => {}
        }
    }

    fn toggle_pause(&mut self) {
        match self.phase {
            GamePhase::Racing => {
                self.freeze();
                self.set_phase(GamePhase::Paused);
            }
            GamePhase::Paused => {
                self.unfreeze();
                self.set_phase(GamePhase::Racing);
            }
            phase => debug!("can't pause during {:?}", phase),
        }
    }

    pub fn tick(&mut self, time_step: f64) {
        match self.phase {
            GamePhase::CountingDown => {
                if self.countdown.fire_on_zero() {
                    self.car.unfreeze();
                    self.set_phase(GamePhase::Racing);
                }
            }
            GamePhase::Racing => {
                self.car.do_physics_step(
                    time_step,
                    &self.inputs,
                    self.obstacles.as_slice(),
                    &self.track,
                );
                self.check_end_conditions();
            }
            GamePhase::Menu | GamePhase::Paused | GamePhase::Lost | GamePhase::Finished => {}
        }
    }

    fn check_end_conditions(&mut self) {
        if self.car.destroyed {
            self.freeze();
            self.set_phase(GamePhase::Lost);
            return;
        }

        self.progress
            .evaluate_lines(&mut self.car, &mut self.round_timer);
        if self.car.has_passed_end_line() {
            self.freeze();
            info!("round time {}", self.round_timer);
            self.set_phase(GamePhase::Finished);
        }
    }

    pub fn snapshot(&self) -> RaceSnapshot {
        RaceSnapshot {
            phase: self.phase,
            location: self.car.entity_location,
            speed: self.car.speed,
            car_state: self.car.state(),
            lap_info: self.car.lap_info,
            race_status: self.progress.status(&self.car, &self.round_timer),
            round_time_ms: self.round_timer.elapsed().as_millis() as u64,
            round_time: self.round_timer.to_string(),
            countdown: self.countdown.remaining_secs(),
        }
    }

    // WARNING: this only returns once the round is over or the input source
    // is closed
    pub fn run(&mut self, input: &mut impl InputSource) -> GamePhase {
        let mut last_tick = Instant::now();

        loop {
            let tick_start = Instant::now();

            match input.poll(&self.snapshot()) {
                Some(events) => events
                    .into_iter()
                    .for_each(|event| self.handle_input(event)),
                None => {
                    info!("input closed during {:?}", self.phase);
                    return self.phase;
                }
            }

            let time_step = (tick_start - last_tick).as_secs_f64();
            last_tick = tick_start;
            self.tick(time_step);

            if self.phase.is_over() {
                return self.phase;
            }

            // wait until the tick time has elapsed
            match self.tick_length.checked_sub(tick_start.elapsed()) {
                Some(remaining) => thread::sleep(remaining),
                None => warn!("tick took longer than {:?}", self.tick_length),
            }
        }
    }
}

// Freezing the session holds the car and the round timer together
impl<C: Clock + Clone> Freezeable for GameSession<C> {
    fn freeze(&mut self) {
        self.car.freeze();
        self.round_timer.freeze();
    }

    fn unfreeze(&mut self) {
        self.car.unfreeze();
        // the clock only runs once the car has crossed the start line
        if self.round_timer.has_started() {
            self.round_timer.unfreeze();
        }
    }
}
