pub const GRAVITY_COEFFICIENT: f64 = 9.81;

pub const CAR_MASS: f64 = 1000.0; // kg
pub const CAR_LENGTH: f64 = 4.2;
pub const CAR_WIDTH: f64 = 2.0;

// Air resistance grows with the square of speed, rolling resistance only
// linearly, so at low speed the ground dominates
pub const DRAG_COEFFICIENT: f64 = 0.28;
pub const FRONTAL_AREA: f64 = 2.19; // m^2
pub const AIR_DENSITY: f64 = 1.2041; // kg/m^3
pub const AIR_RESISTANCE_COEFFICIENT: f64 = DRAG_COEFFICIENT * FRONTAL_AREA * AIR_DENSITY / 2.0;

pub const ROLLING_RESISTANCE_PAVED: f64 = 0.015;
pub const ROLLING_RESISTANCE_LOOSE: f64 = 0.05;

pub const ENGINE_POWER: f64 = 315_000.0; // W
pub const BRAKING_POWER: f64 = 500_000.0; // W
pub const TURNING_POWER: f64 = 1.0;

// The constants above are realistic, but driving with them alone feels like
// sailing; resistance is scaled up by this to make the car handle
pub const MAGIC_CONSTANT: f64 = 30.0;

// Below this much kinetic energy (J) the car is considered stopped
pub const MIN_KINETIC_ENERGY: f64 = 0.01;

// Impacts at or above 50 km/h wreck the car
pub const CRITICAL_IMPACT_SPEED: f64 = 50.0 / 3.6;
