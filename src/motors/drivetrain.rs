// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Left/right pair of motor units driving the two screws.
//!
//! Every unit operation is addressable per side through [`Side`]. The two units have different
//! driver types, so dispatch is a `match` rather than an index.

use crate::config::ConfigError;
use crate::control::StepSink;
use crate::drivers::{Microstep, StepperDriver};
use crate::motors::motor_unit::MotorUnit;
use crate::time::Instant;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Both sides, left first.
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];
}

/// Run `$body` with `$unit` bound to the unit on `$side`.
macro_rules! on_side {
    ($drive:expr, $side:expr, |$unit:ident| $body:expr) => {
        match $side {
            Side::Left => {
                let $unit = &mut $drive.left;
                $body
            }
            Side::Right => {
                let $unit = &mut $drive.right;
                $body
            }
        }
    };
}

pub struct Drivetrain<L, R> {
    pub left: MotorUnit<L>,
    pub right: MotorUnit<R>,
}

impl<L: StepperDriver, R: StepperDriver> Drivetrain<L, R> {
    pub fn new(left: MotorUnit<L>, right: MotorUnit<R>) -> Self {
        Self { left, right }
    }

    /// Power both drivers down and select the microstep resolution on both.
    pub fn init(&mut self, microstep: Microstep) {
        self.left.init(microstep);
        self.right.init(microstep);
    }

    /// Advance both units. Left is always serviced before right.
    pub fn tick<S: StepSink>(&mut self, now: Instant, steps: &S) {
        self.left.tick(now, steps);
        self.right.tick(now, steps);
    }

    /// Set raw speeds on both sides at once.
    pub fn set_speeds(&mut self, left: i32, right: i32) {
        self.left.set_speed(left);
        self.right.set_speed(right);
    }

    pub fn set_speed(&mut self, side: Side, raw: i32) {
        on_side!(self, side, |unit| unit.set_speed(raw))
    }

    pub fn set_max_speed(&mut self, side: Side, max_speed: u16) -> Result<(), ConfigError> {
        on_side!(self, side, |unit| unit.set_max_speed(max_speed))
    }

    pub fn set_accel_rate(&mut self, side: Side, accel_rate: u16) -> Result<(), ConfigError> {
        on_side!(self, side, |unit| unit.set_accel_rate(accel_rate))
    }

    pub fn set_microstep(&mut self, side: Side, microstep: Microstep) {
        on_side!(self, side, |unit| unit.set_microstep(microstep))
    }

    pub fn stop(&mut self, side: Side) {
        on_side!(self, side, |unit| unit.stop())
    }

    pub fn enable(&mut self, side: Side) {
        on_side!(self, side, |unit| unit.enable())
    }

    pub fn disable(&mut self, side: Side) {
        on_side!(self, side, |unit| unit.disable())
    }

    pub fn current_speed(&self, side: Side) -> i32 {
        match side {
            Side::Left => self.left.current_speed(),
            Side::Right => self.right.current_speed(),
        }
    }

    pub fn target_speed(&self, side: Side) -> i32 {
        match side {
            Side::Left => self.left.target_speed(),
            Side::Right => self.right.target_speed(),
        }
    }

    pub fn is_at_rest(&self) -> bool {
        Side::BOTH
            .iter()
            .all(|&side| self.current_speed(side) == 0 && self.target_speed(side) == 0)
    }
}
