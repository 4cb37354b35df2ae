use anyhow::{Context, Result};
use racer_core::player_inputs::InputEvent;
use racer_core::timer::MonotonicClock;
use racer_core::GLOBAL_CONFIG;
use racer_sim::game::{GameSession, InputSource, RaceSnapshot};
use racer_sim::track::TrackSurfaceMap;
use tracing::info;
use tracing_subscriber::EnvFilter;

// Give up on a round that hasn't ended after this long
const MAX_ROUND_SECS: u64 = 120;

// Starts a round and keeps the throttle pinned until it's over
struct FullThrottle {
    ticks_left: u64,
    started: bool,
}

impl InputSource for FullThrottle {
    fn poll(&mut self, _snapshot: &RaceSnapshot) -> Option<Vec<InputEvent>> {
        if self.ticks_left == 0 {
            return None;
        }
        self.ticks_left -= 1;

        if self.started {
            Some(vec![])
        } else {
            self.started = true;
            Some(vec![InputEvent::Reset, InputEvent::Accelerate(true)])
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = &*GLOBAL_CONFIG;
    let track = TrackSurfaceMap::load(&settings.track_mask, &settings.world())?;
    let mut session = GameSession::new(settings, track, MonotonicClock::new())
        .context("could not set up the race")?;
    info!("{} obstacles on the track", session.obstacles().len());

    let mut driver = FullThrottle {
        ticks_left: MAX_ROUND_SECS * 1_000 / settings.tick_ms.max(1),
        started: false,
    };
    let outcome = session.run(&mut driver);

    info!("round ended: {:?}", outcome);
    info!("{}", serde_json::to_string(&session.snapshot())?);
    Ok(())
}
