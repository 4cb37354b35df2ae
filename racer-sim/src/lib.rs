pub mod checkpoints;
pub mod game;
pub mod obstacles;
pub mod physics;
pub mod progress;
pub mod track;
