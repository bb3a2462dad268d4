#![cfg_attr(not(test), no_std)]

pub mod app;
pub mod config;
pub mod drivers;
pub mod tools;

pub use config::{ConfigError, MotionConfig, ShuttleMove};
pub use drivers::stepper::{
    HomeSensor, HomingOutcome, PhaseOutput, RotationDirection, Sequencer, TickSource,
};
