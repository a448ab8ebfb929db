// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Line-based drive command protocol.
//!
//! Each command is one line: a command character followed by an optional signed decimal value,
//! e.g. `W120\n`. Command characters are case-insensitive.

use core::fmt;

// Command characters
pub const CMD_FORWARD: u8 = b'W';
pub const CMD_BACKWARD: u8 = b'S';
pub const CMD_ROLL_LEFT: u8 = b'A';
pub const CMD_ROLL_RIGHT: u8 = b'D';
pub const CMD_PIVOT_RIGHT: u8 = b'E';
pub const CMD_PIVOT_LEFT: u8 = b'Q';
pub const CMD_TURN_RIGHT: u8 = b'L';
pub const CMD_TURN_LEFT: u8 = b'J';
pub const CMD_LEFT_SPEED: u8 = b'[';
pub const CMD_RIGHT_SPEED: u8 = b']';
pub const CMD_SET_MAX_SPEED: u8 = b':';
pub const CMD_SET_ACCEL: u8 = b'@';
pub const CMD_SET_MICROSTEP: u8 = b'M';

/// Decoded drive command with its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Both sides forward.
    Forward(i32),
    /// Both sides backward.
    Backward(i32),
    /// Screws counter-rotating to roll left.
    RollLeft(i32),
    RollRight(i32),
    /// Right side only, left side stopped.
    PivotRight(i32),
    /// Left side only, right side stopped.
    PivotLeft(i32),
    /// Slow the right side by the value while keeping the base speeds.
    TurnRight(i32),
    /// Slow the left side by the value while keeping the base speeds.
    TurnLeft(i32),
    /// Tank control, left side.
    LeftSpeed(i32),
    /// Tank control, right side.
    RightSpeed(i32),
    SetMaxSpeed(i32),
    SetAccel(i32),
    SetMicrostep(i32),
    /// Clear speeds and offsets. Any unrecognised command decodes to this.
    Stop(i32),
}

impl Command {
    /// Build a command from its character and value.
    pub fn decode(code: u8, value: i32) -> Self {
        match code.to_ascii_uppercase() {
            CMD_FORWARD => Command::Forward(value),
            CMD_BACKWARD => Command::Backward(value),
            CMD_ROLL_LEFT => Command::RollLeft(value),
            CMD_ROLL_RIGHT => Command::RollRight(value),
            CMD_PIVOT_RIGHT => Command::PivotRight(value),
            CMD_PIVOT_LEFT => Command::PivotLeft(value),
            CMD_TURN_RIGHT => Command::TurnRight(value),
            CMD_TURN_LEFT => Command::TurnLeft(value),
            CMD_LEFT_SPEED => Command::LeftSpeed(value),
            CMD_RIGHT_SPEED => Command::RightSpeed(value),
            CMD_SET_MAX_SPEED => Command::SetMaxSpeed(value),
            CMD_SET_ACCEL => Command::SetAccel(value),
            CMD_SET_MICROSTEP => Command::SetMicrostep(value),
            _ => Command::Stop(value),
        }
    }

    /// Name echoed back on the serial link.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Forward(_) => "FORWARD",
            Command::Backward(_) => "BACKWARD",
            Command::RollLeft(_) => "LEFT",
            Command::RollRight(_) => "RIGHT",
            Command::PivotRight(_) => "PIVOT_R",
            Command::PivotLeft(_) => "PIVOT_L",
            Command::TurnRight(_) => "TURN_R",
            Command::TurnLeft(_) => "TURN_L",
            Command::LeftSpeed(_) => "L_FORWARD",
            Command::RightSpeed(_) => "R_FORWARD",
            Command::SetMaxSpeed(_) => "SET_SPEED",
            Command::SetAccel(_) => "SET_ACCEL",
            Command::SetMicrostep(_) => "SET_MICROSTEP",
            Command::Stop(_) => "STOP",
        }
    }

    pub fn value(&self) -> i32 {
        match *self {
            Command::Forward(v)
            | Command::Backward(v)
            | Command::RollLeft(v)
            | Command::RollRight(v)
            | Command::PivotRight(v)
            | Command::PivotLeft(v)
            | Command::TurnRight(v)
            | Command::TurnLeft(v)
            | Command::LeftSpeed(v)
            | Command::RightSpeed(v)
            | Command::SetMaxSpeed(v)
            | Command::SetAccel(v)
            | Command::SetMicrostep(v)
            | Command::Stop(v) => v,
        }
    }

    /// Whether the value is a raw speed and subject to the ±255 clamp.
    pub fn is_motion(&self) -> bool {
        !matches!(
            self,
            Command::SetMaxSpeed(_) | Command::SetAccel(_) | Command::SetMicrostep(_)
        )
    }
}

/// Echo line, `NAME value`.
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.value())
    }
}
