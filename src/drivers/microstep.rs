// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Microstep resolution shared by the motion core and the step/direction drivers.

use core::convert::TryFrom;

use crate::config::ConfigError;

/// Electrical subdivision of one full step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Microstep {
    Full,
    Half,
    Quarter,
    Eighth,
    Sixteenth,
}

impl Microstep {
    /// Number of microsteps per full step.
    #[inline]
    pub const fn factor(self) -> u8 {
        match self {
            Microstep::Full => 1,
            Microstep::Half => 2,
            Microstep::Quarter => 4,
            Microstep::Eighth => 8,
            Microstep::Sixteenth => 16,
        }
    }
}

impl TryFrom<i32> for Microstep {
    type Error = ConfigError;

    fn try_from(factor: i32) -> Result<Self, Self::Error> {
        match factor {
            1 => Ok(Microstep::Full),
            2 => Ok(Microstep::Half),
            4 => Ok(Microstep::Quarter),
            8 => Ok(Microstep::Eighth),
            16 => Ok(Microstep::Sixteenth),
            other => Err(ConfigError::InvalidMicrostep(other)),
        }
    }
}
