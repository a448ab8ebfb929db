// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Simulated drivetrain: two A4988 drivers on recording pins, driven through the command parser
//! on a simulated clock.

#![allow(dead_code)]

use std::cell::Cell;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::digital::{ErrorType, OutputPin};

use screwdrive::config::{self, ConfigError};
use screwdrive::control::{DriveCommander, StepCounter};
use screwdrive::drivers::{A4988Pins, Microstep, A4988};
use screwdrive::motors::{Drivetrain, MotorUnit};
use screwdrive::protocol::{Command, Parser};
use screwdrive::time::Instant;

#[derive(Default)]
struct LineState {
    level: Cell<bool>,
    writes: Cell<u32>,
    rises: Cell<u32>,
}

/// Output pin that records its level, write count, and rising edges.
#[derive(Clone, Default)]
pub struct Line(Rc<LineState>);

impl Line {
    pub fn is_high(&self) -> bool {
        self.0.level.get()
    }

    pub fn writes(&self) -> u32 {
        self.0.writes.get()
    }

    pub fn rises(&self) -> u32 {
        self.0.rises.get()
    }

    pub fn clear_counts(&self) {
        self.0.writes.set(0);
        self.0.rises.set(0);
    }

    fn drive(&self, high: bool) {
        if high && !self.0.level.get() {
            self.0.rises.set(self.0.rises.get() + 1);
        }
        self.0.level.set(high);
        self.0.writes.set(self.0.writes.get() + 1);
    }
}

impl ErrorType for Line {
    type Error = Infallible;
}

impl OutputPin for Line {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.drive(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.drive(true);
        Ok(())
    }
}

pub type SimDriver = A4988<Line, Line, Line, Line, Line, Line, Line, Line>;

/// Handles on the eight lines of one driver.
#[derive(Clone, Default)]
pub struct DriverLines {
    pub step: Line,
    pub dir: Line,
    pub nenable: Line,
    pub nsleep: Line,
    pub nreset: Line,
    pub ms1: Line,
    pub ms2: Line,
    pub ms3: Line,
}

impl DriverLines {
    fn driver(&self) -> SimDriver {
        A4988::new(A4988Pins {
            step: self.step.clone(),
            dir: self.dir.clone(),
            nenable: self.nenable.clone(),
            nsleep: self.nsleep.clone(),
            nreset: self.nreset.clone(),
            ms1: self.ms1.clone(),
            ms2: self.ms2.clone(),
            ms3: self.ms3.clone(),
        })
    }

    /// Output stage enabled and translator running.
    pub fn is_powered(&self) -> bool {
        !self.nenable.is_high() && self.nsleep.is_high() && self.nreset.is_high()
    }

    /// Output stage disabled, driver asleep and in reset.
    pub fn is_powered_down(&self) -> bool {
        self.nenable.is_high() && !self.nsleep.is_high() && !self.nreset.is_high()
    }

    pub fn select_levels(&self) -> [bool; 3] {
        [self.ms1.is_high(), self.ms2.is_high(), self.ms3.is_high()]
    }
}

/// Firmware main loop minus the hardware.
pub struct Robot {
    pub drive: Drivetrain<SimDriver, SimDriver>,
    pub left: DriverLines,
    pub right: DriverLines,
    pub parser: Parser,
    pub commander: DriveCommander,
    pub steps: StepCounter,
    pub now_us: u32,
}

impl Robot {
    pub fn new() -> Self {
        let left = DriverLines::default();
        let right = DriverLines::default();
        let mut drive = Drivetrain::new(
            MotorUnit::new(left.driver(), config::LEFT_INVERT),
            MotorUnit::new(right.driver(), config::RIGHT_INVERT),
        );
        drive.init(Microstep::Quarter);

        Self {
            drive,
            left,
            right,
            parser: Parser::new(),
            commander: DriveCommander::new(),
            steps: StepCounter::new(),
            now_us: 0,
        }
    }

    /// Feed serial text; returns each decoded command with its dispatch result.
    pub fn send(&mut self, text: &str) -> Vec<(Command, Result<(), ConfigError>)> {
        let mut out = Vec::new();
        for &b in text.as_bytes() {
            if let Some(cmd) = self.parser.push(b) {
                let result = self.commander.apply(cmd, &mut self.drive);
                out.push((cmd, result));
            }
        }
        out
    }

    pub fn tick(&mut self) {
        self.drive.tick(Instant::from_micros(self.now_us), &self.steps);
    }

    /// Advance time by `duration_us`, ticking every `step_us`.
    pub fn run_us(&mut self, duration_us: u32, step_us: u32) {
        let end = self.now_us + duration_us;
        while self.now_us < end {
            self.now_us += step_us;
            self.tick();
        }
    }

    /// Advance time by `ms`, one tick per millisecond.
    pub fn run_ms(&mut self, ms: u32) {
        self.run_us(ms * 1_000, 1_000);
    }

    pub fn speeds(&self) -> (i32, i32) {
        (
            self.drive.left.current_speed(),
            self.drive.right.current_speed(),
        )
    }

    pub fn targets(&self) -> (i32, i32) {
        (
            self.drive.left.target_speed(),
            self.drive.right.target_speed(),
        )
    }
}
