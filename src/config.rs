// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Firmware-wide configuration: defaults, limits, and runtime-configurable motor settings.

use core::fmt;

use crate::drivers::Microstep;

// ============================================================================
// COMMUNICATION
// ============================================================================

/// Command link baud rate (ST-LINK virtual COM port).
pub const SERIAL_BAUD: u32 = 115_200;

/// Longest command line accepted, excluding the terminator.
pub const LINE_CAPACITY: usize = 32;

// ============================================================================
// MOTION
// ============================================================================

/// Bound on the raw speed value carried by motion commands.
pub const RAW_SPEED_LIMIT: i32 = 255;

/// Default speed cap in full steps per second.
pub const DEFAULT_MAX_SPEED: u16 = 200;

/// Upper bound accepted for the speed cap, in full steps per second.
pub const MAX_SPEED_LIMIT: u16 = 2_000;

/// Default ramp updates per second.
pub const DEFAULT_ACCEL_RATE: u16 = 50;

/// Default microstep resolution applied at boot.
pub const DEFAULT_MICROSTEP: Microstep = Microstep::Quarter;

/// Direction inversion per side, chosen so that positive speed turns both screws inwards
/// (clockwise on the left, anticlockwise on the right).
pub const LEFT_INVERT: bool = false;
pub const RIGHT_INVERT: bool = true;

// ============================================================================
// DIAGNOSTICS
// ============================================================================

/// Period of the telemetry report and of the step counter reset.
pub const TELEMETRY_PERIOD_MS: u32 = 1_000;

/// Print the Teleplot report on the console. Printing blocks the loop for several milliseconds
/// at 115 200 baud, which stretches STEP periods at high speed.
pub const TELEMETRY_ENABLED: bool = false;

/// Rejected configuration value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `accel_rate` must be at least one ramp update per second.
    ZeroAccelRate,
    /// `max_speed` must be positive.
    ZeroMaxSpeed,
    /// `max_speed` above [`MAX_SPEED_LIMIT`].
    MaxSpeedTooHigh(u32),
    /// Microstep factor outside {1, 2, 4, 8, 16}.
    InvalidMicrostep(i32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroAccelRate => f.write_str("accel rate must be positive"),
            ConfigError::ZeroMaxSpeed => f.write_str("max speed must be positive"),
            ConfigError::MaxSpeedTooHigh(v) => {
                write!(f, "max speed {} exceeds {}", v, MAX_SPEED_LIMIT)
            }
            ConfigError::InvalidMicrostep(v) => write!(f, "invalid microstep factor {}", v),
        }
    }
}

/// Runtime settings of one motor unit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MotorConfig {
    /// Speed cap in full steps per second.
    pub max_speed: u16,
    /// Ramp updates per second.
    pub accel_rate: u16,
    pub microstep: Microstep,
}

impl Default for MotorConfig {
    fn default() -> Self {
        Self {
            max_speed: DEFAULT_MAX_SPEED,
            accel_rate: DEFAULT_ACCEL_RATE,
            microstep: DEFAULT_MICROSTEP,
        }
    }
}

impl MotorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_max_speed(self.max_speed as i32)?;
        check_accel_rate(self.accel_rate as i32)?;
        Ok(())
    }
}

/// Validate a speed cap coming from the command link.
pub fn check_max_speed(value: i32) -> Result<u16, ConfigError> {
    if value <= 0 {
        Err(ConfigError::ZeroMaxSpeed)
    } else if value > MAX_SPEED_LIMIT as i32 {
        Err(ConfigError::MaxSpeedTooHigh(value as u32))
    } else {
        Ok(value as u16)
    }
}

/// Validate a ramp rate coming from the command link. Values above `u16::MAX` saturate.
pub fn check_accel_rate(value: i32) -> Result<u16, ConfigError> {
    if value <= 0 {
        Err(ConfigError::ZeroAccelRate)
    } else {
        Ok(value.min(u16::MAX as i32) as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = MotorConfig::default();
        assert_eq!(cfg.validate(), Ok(()));
        assert_eq!(cfg.microstep.factor(), 4);
    }

    #[test]
    fn max_speed_bounds() {
        assert_eq!(check_max_speed(0), Err(ConfigError::ZeroMaxSpeed));
        assert_eq!(check_max_speed(-5), Err(ConfigError::ZeroMaxSpeed));
        assert_eq!(check_max_speed(2_000), Ok(2_000));
        assert_eq!(
            check_max_speed(2_001),
            Err(ConfigError::MaxSpeedTooHigh(2_001))
        );
    }

    #[test]
    fn accel_rate_bounds() {
        assert_eq!(check_accel_rate(0), Err(ConfigError::ZeroAccelRate));
        assert_eq!(check_accel_rate(1), Ok(1));
        assert_eq!(check_accel_rate(100_000), Ok(u16::MAX));
    }
}
