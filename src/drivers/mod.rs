// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Device-Specific Drivers
//!
//! This module contains device-specific drivers that sit between the GPIO layer and the motion
//! core in `control/` and `motors/`.
//!
//! ## Existing drivers
//!
//! - [`a4988`] – Allegro A4988 step/direction stepper driver with MS1..MS3 resolution select
//! - [`microstep`] – Microstep resolution shared by drivers and the motion core
//! - [`power_sense`] – Motor supply presence input

pub mod a4988;
pub mod microstep;
pub mod power_sense;

pub use a4988::{A4988Pins, A4988};
pub use microstep::Microstep;
pub use power_sense::PowerSense;

/// Pin-level interface of a step/direction stepper driver.
///
/// All operations are plain GPIO writes and cannot fail from the caller's point of view.
pub trait StepperDriver {
    /// Select the microstep resolution.
    fn set_microstep(&mut self, microstep: Microstep);

    /// Drive the DIR line.
    fn set_direction(&mut self, high: bool);

    /// Drive the STEP line.
    fn set_step(&mut self, high: bool);

    /// Wake the driver and enable its output stage.
    fn power_up(&mut self);

    /// Disable the output stage and put the driver to sleep and reset.
    fn power_down(&mut self);
}
