//! Core application logic for AR Book Explorer
//!
//! This crate holds everything that is not a UI primitive: the app
//! configuration, the literal sample content shown by the prototype, and
//! the timer-driven simulated flows (scan progress, recognition) that stand
//! in for real camera work.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod sample;
pub mod simulation;

pub use config::{AppConfig, ConfigError, MotionConfig, SimulationConfig, StepConfig};
pub use sample::{Achievement, Book, QuizQuestion};
pub use simulation::{SimulatedTask, SimulationError, TaskEvent};
