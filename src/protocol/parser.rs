// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Line parser for the drive command protocol.
//!
//! Bytes are fed one at a time as they arrive from the serial link. A command is produced when
//! a `\n` completes a line; `\r` is ignored so both line ending styles work.

use heapless::Vec;
use log::warn;

use crate::config::{LINE_CAPACITY, RAW_SPEED_LIMIT};
use crate::protocol::messages::Command;

pub struct Parser {
    line: Vec<u8, LINE_CAPACITY>,
    overflow: bool,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    pub const fn new() -> Self {
        Self {
            line: Vec::new(),
            overflow: false,
        }
    }

    /// Process a single incoming byte. Returns `Some(Command)` when a line is complete.
    pub fn push(&mut self, byte: u8) -> Option<Command> {
        match byte {
            b'\r' => None,
            b'\n' => {
                let cmd = if self.overflow {
                    warn!("command line over {} bytes discarded", LINE_CAPACITY);
                    Command::Stop(0)
                } else {
                    parse_line(&self.line)
                };
                self.line.clear();
                self.overflow = false;
                Some(cmd)
            }
            _ => {
                if !self.overflow && self.line.push(byte).is_err() {
                    self.overflow = true;
                }
                None
            }
        }
    }
}

/// Decode one line without its terminator. An empty line is a stop.
pub fn parse_line(line: &[u8]) -> Command {
    let Some((&code, rest)) = line.split_first() else {
        return Command::Stop(0);
    };
    let cmd = Command::decode(code, parse_int(rest));
    if cmd.is_motion() {
        clamp_motion(cmd)
    } else {
        cmd
    }
}

fn clamp_motion(cmd: Command) -> Command {
    let v = cmd.value().clamp(-RAW_SPEED_LIMIT, RAW_SPEED_LIMIT);
    match cmd {
        Command::Forward(_) => Command::Forward(v),
        Command::Backward(_) => Command::Backward(v),
        Command::RollLeft(_) => Command::RollLeft(v),
        Command::RollRight(_) => Command::RollRight(v),
        Command::PivotRight(_) => Command::PivotRight(v),
        Command::PivotLeft(_) => Command::PivotLeft(v),
        Command::TurnRight(_) => Command::TurnRight(v),
        Command::TurnLeft(_) => Command::TurnLeft(v),
        Command::LeftSpeed(_) => Command::LeftSpeed(v),
        Command::RightSpeed(_) => Command::RightSpeed(v),
        Command::Stop(_) => Command::Stop(v),
        other => other,
    }
}

/// Leading-integer parse: optional whitespace and sign, then digits up to the first non-digit.
/// Yields 0 when there are no digits and saturates on overflow.
pub fn parse_int(text: &[u8]) -> i32 {
    let mut bytes = text
        .iter()
        .copied()
        .skip_while(|b| b.is_ascii_whitespace())
        .peekable();

    let negative = match bytes.peek() {
        Some(b'-') => {
            bytes.next();
            true
        }
        Some(b'+') => {
            bytes.next();
            false
        }
        _ => false,
    };

    let mut value: i32 = 0;
    for b in bytes.take_while(u8::is_ascii_digit) {
        let digit = (b - b'0') as i32;
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }
    value
}
