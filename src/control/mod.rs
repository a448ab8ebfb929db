// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Motion Control
//!
//! Building blocks of the open-loop stepper motion core, plus the command and telemetry layer
//! that drives it.
//!
//! ## Modules
//!
//! - [`speed_map`] - Raw command value to microstep rate.
//! - [`ramp`] - Time-gated acceleration ramp.
//! - [`pulse`] - STEP line toggling and the shared step counter.
//! - [`power`] - Driver power-saving cutoff.
//! - [`commander`] - Drive command dispatch with per-side offsets and power-loss handling.
//! - [`telemetry`] - Periodic Teleplot report.

pub mod commander;
pub mod power;
pub mod pulse;
pub mod ramp;
pub mod speed_map;
pub mod telemetry;

pub use commander::DriveCommander;
pub use power::{PowerStage, PowerState};
pub use pulse::{PulseGenerator, StepCounter, StepSink};
pub use ramp::Ramp;
pub use speed_map::SpeedMapper;
pub use telemetry::{Report, Telemetry};
