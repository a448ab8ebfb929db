// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Raw command value to target step rate.
//!
//! Motion commands carry a raw value in [-255, 255]. The mapper scales that range linearly onto
//! `±max_speed × microstep factor` microsteps per second.

use crate::config::RAW_SPEED_LIMIT;
use crate::drivers::Microstep;

/// Linear map from raw command values to signed microstep rates.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SpeedMapper {
    max_speed: u16,
    microstep: Microstep,
}

impl SpeedMapper {
    pub const fn new(max_speed: u16, microstep: Microstep) -> Self {
        Self {
            max_speed,
            microstep,
        }
    }

    #[inline]
    pub fn max_speed(&self) -> u16 {
        self.max_speed
    }

    #[inline]
    pub fn set_max_speed(&mut self, max_speed: u16) {
        self.max_speed = max_speed;
    }

    #[inline]
    pub fn microstep(&self) -> Microstep {
        self.microstep
    }

    #[inline]
    pub fn set_microstep(&mut self, microstep: Microstep) {
        self.microstep = microstep;
    }

    /// Largest reachable magnitude, in microsteps per second.
    #[inline]
    pub fn limit(&self) -> i32 {
        self.max_speed as i32 * self.microstep.factor() as i32
    }

    /// Map a raw value to a target rate.
    ///
    /// The input is clamped to [-255, 255]. The result is `raw × limit / 255` rounded half away
    /// from zero, so the map is odd-symmetric and exact at both ends of the range.
    pub fn map(&self, raw: i32) -> i32 {
        let raw = raw.clamp(-RAW_SPEED_LIMIT, RAW_SPEED_LIMIT);
        let scaled = raw.unsigned_abs() as u64 * self.limit() as u64;
        let divisor = RAW_SPEED_LIMIT as u64;
        // 255 is odd, so an exact half never occurs and this is round-half-away-from-zero.
        let magnitude = ((scaled + divisor / 2) / divisor) as i32;
        if raw < 0 {
            -magnitude
        } else {
            magnitude
        }
    }
}
