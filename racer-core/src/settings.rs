use config::{Config, ConfigError, File};
use lazy_static::lazy_static;
use serde::Deserialize;
use tracing::debug;

use crate::world::WorldGeometry;

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub tick_ms: u64,

    // all world measurements are in metres
    pub world_width: f64,
    pub world_height: f64,
    pub track_width: f64,
    pub track_height: f64,

    pub obstacle_amount: usize,
    pub obstacle_spacing: f64,
    pub obstacle_attempt_budget: usize,
    pub obstacle_seed: Option<u64>,

    pub countdown_ms: u64,
    pub track_mask: String,
}

impl Settings {
    pub fn load() -> Result<Settings, ConfigError> {
        let config = Config::builder()
            .set_default("tick_ms", 16)?
            .set_default("world_width", 130.0)?
            .set_default("world_height", 80.0)?
            .set_default("track_width", 110.0)?
            .set_default("track_height", 70.0)?
            .set_default("obstacle_amount", 10)?
            // the car's length, so there is always a gap it fits through
            .set_default("obstacle_spacing", 4.2)?
            .set_default("obstacle_attempt_budget", 100_000)?
            .set_default("countdown_ms", 3_000)?
            .set_default("track_mask", "res/track_mask.png")?
            .add_source(File::with_name("config.yaml").required(false))
            .build()?;

        let settings: Settings = config.try_deserialize()?;
        debug!("{:?}", settings);
        Ok(settings)
    }

    pub fn world(&self) -> WorldGeometry {
        WorldGeometry {
            width: self.world_width,
            height: self.world_height,
            track_width: self.track_width,
            track_height: self.track_height,
        }
    }
}

lazy_static! {
    pub static ref GLOBAL_CONFIG: Settings = Settings::load().expect("failed to read config file");
}
