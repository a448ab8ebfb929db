// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Actuator Abstractions
//!
//! Motor-level wrappers that sit above the step/direction drivers in `drivers`.
//!
//! ## Modules
//!
//! - [`motor_unit`] - Continuous-rotation stepper with ramping and power cutoff.
//! - [`drivetrain`] - Left/right pair of motor units.

pub mod drivetrain;
pub mod motor_unit;

pub use drivetrain::{Drivetrain, Side};
pub use motor_unit::{MotorState, MotorUnit};
