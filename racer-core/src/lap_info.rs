use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LapInformation {
    pub passed_checkpoint: bool,
    pub passed_end_line: bool,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RaceStatus {
    NotStarted,
    Running,
    Finished,
    Wrecked,
}

impl LapInformation {
    pub fn new() -> Self {
        LapInformation {
            passed_checkpoint: false,
            passed_end_line: false,
        }
    }

    // A lap only counts as started once the round timer has been kicked off by
    // crossing the start line, so that has to be supplied from outside, same
    // as whether the car survived
    pub fn status(&self, timer_started: bool, destroyed: bool) -> RaceStatus {
        if destroyed {
            RaceStatus::Wrecked
        } else if self.passed_end_line {
            RaceStatus::Finished
        } else if timer_started || self.passed_checkpoint {
            RaceStatus::Running
        } else {
            RaceStatus::NotStarted
        }
    }
}
