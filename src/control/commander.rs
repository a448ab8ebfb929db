// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Drive command dispatch.
//!
//! The commander keeps a base speed and a turn offset per side. Every command updates some of
//! them and then re-applies `speed + offset` to both units, so a turn offset persists across
//! later speed commands until a stop clears it.

use log::warn;

use crate::config::{self, ConfigError};
use crate::drivers::{Microstep, StepperDriver};
use crate::motors::{Drivetrain, Side};
use crate::protocol::Command;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DriveCommander {
    speed_l: i32,
    speed_r: i32,
    offset_l: i32,
    offset_r: i32,
}

impl DriveCommander {
    pub const fn new() -> Self {
        Self {
            speed_l: 0,
            speed_r: 0,
            offset_l: 0,
            offset_r: 0,
        }
    }

    /// Raw speed currently requested for each side, offsets included.
    pub fn requested(&self) -> (i32, i32) {
        (
            self.speed_l.saturating_add(self.offset_l),
            self.speed_r.saturating_add(self.offset_r),
        )
    }

    /// Apply one command.
    ///
    /// Speeds are re-applied even when a configuration value is rejected; the error is returned
    /// for the caller to report.
    pub fn apply<L, R>(
        &mut self,
        cmd: Command,
        drive: &mut Drivetrain<L, R>,
    ) -> Result<(), ConfigError>
    where
        L: StepperDriver,
        R: StepperDriver,
    {
        let mut result = Ok(());

        match cmd {
            Command::Forward(v) => self.set_bases(v, v),
            Command::Backward(v) => self.set_bases(-v, -v),
            Command::RollLeft(v) => self.set_bases(-v, v),
            Command::RollRight(v) => self.set_bases(v, -v),
            Command::PivotRight(v) => self.set_bases(0, -v),
            Command::PivotLeft(v) => self.set_bases(-v, 0),
            Command::TurnRight(v) => self.offset_r = -v,
            Command::TurnLeft(v) => self.offset_l = -v,
            Command::LeftSpeed(v) => self.speed_l = v,
            Command::RightSpeed(v) => self.speed_r = v,
            Command::SetMaxSpeed(v) => {
                result = config::check_max_speed(v).and_then(|max| {
                    Side::BOTH
                        .iter()
                        .try_for_each(|&side| drive.set_max_speed(side, max))
                });
            }
            Command::SetAccel(v) => {
                result = config::check_accel_rate(v).and_then(|rate| {
                    Side::BOTH
                        .iter()
                        .try_for_each(|&side| drive.set_accel_rate(side, rate))
                });
            }
            Command::SetMicrostep(v) => {
                result = Microstep::try_from(v).map(|m| {
                    for side in Side::BOTH {
                        drive.set_microstep(side, m);
                    }
                });
            }
            Command::Stop(_) => {
                *self = Self::new();
                for side in Side::BOTH {
                    drive.stop(side);
                }
            }
        }

        if let Err(e) = result {
            warn!("{} rejected: {}", cmd.name(), e);
        }

        let (left, right) = self.requested();
        drive.set_speeds(left, right);
        result
    }

    /// Power has gone away: clear everything and stop both units without ramping.
    pub fn power_lost<L, R>(&mut self, drive: &mut Drivetrain<L, R>)
    where
        L: StepperDriver,
        R: StepperDriver,
    {
        *self = Self::new();
        for side in Side::BOTH {
            drive.disable(side);
        }
    }

    fn set_bases(&mut self, left: i32, right: i32) {
        self.speed_l = left;
        self.speed_r = right;
    }
}
