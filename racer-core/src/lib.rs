pub mod entity_location;
pub mod freeze;
pub mod lap_info;
pub mod player_inputs;
pub mod timer;
pub mod world;
mod settings;

pub use settings::{Settings, GLOBAL_CONFIG};
