use serde::{Deserialize, Serialize};

// InputEvent is what an input collaborator emits after mapping raw device
// events; intents carry whether the key went down (true) or up (false)
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    Accelerate(bool),
    Brake(bool),
    SteerLeft(bool),
    SteerRight(bool),
    TogglePause,
    Reset,
}

// PlayerInputs is the currently held set of intents; accelerating and braking
// (or steering both ways) at once is allowed and both get applied
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInputs {
    pub accelerate: bool,
    pub brake: bool,
    pub steer_left: bool,
    pub steer_right: bool,
}

impl PlayerInputs {
    pub fn new() -> Self {
        Self::default()
    }

    // Folds an intent event into the held state. Returns false for events that
    // aren't driving intents, which the caller has to handle itself.
    pub fn apply(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Accelerate(held) => self.accelerate = held,
            InputEvent::Brake(held) => self.brake = held,
            InputEvent::SteerLeft(held) => self.steer_left = held,
            InputEvent::SteerRight(held) => self.steer_right = held,
            InputEvent::TogglePause | InputEvent::Reset => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intents_are_held_until_released() {
        let mut inputs = PlayerInputs::new();
        assert!(inputs.apply(InputEvent::Accelerate(true)));
        assert!(inputs.apply(InputEvent::SteerLeft(true)));
        assert!(inputs.accelerate && inputs.steer_left);

        inputs.apply(InputEvent::Accelerate(false));
        assert!(!inputs.accelerate);
        assert!(inputs.steer_left);
    }

    #[test]
    fn commands_are_not_intents() {
        let mut inputs = PlayerInputs::new();
        assert!(!inputs.apply(InputEvent::TogglePause));
        assert!(!inputs.apply(InputEvent::Reset));
        assert_eq!(inputs, PlayerInputs::default());
    }
}
