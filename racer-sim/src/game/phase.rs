use serde::Serialize;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    // Before the first round; the car sits frozen on the start line until a
    // reset kicks off the countdown
    Menu,
    // The track and the car are there, but the controls aren't live yet
    CountingDown,
    // Driving; the round timer starts once the car crosses the start line
    Racing,
    // Car and round timer are frozen until unpaused
    Paused,
    // The car got wrecked
    Lost,
    // Checkpoint and finish line both passed
    Finished,
}

impl GamePhase {
    pub fn is_over(&self) -> bool {
        matches!(self, GamePhase::Lost | GamePhase::Finished)
    }
}
