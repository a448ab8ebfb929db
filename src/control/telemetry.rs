// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Periodic speed and step-rate report in Teleplot format (`>name:value` lines).

use core::fmt;

use crate::control::StepCounter;
use crate::drivers::StepperDriver;
use crate::motors::Drivetrain;
use crate::time::Instant;

/// Snapshot of both units and the step rate over the last period.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub left: i32,
    pub right: i32,
    pub left_target: i32,
    pub right_target: i32,
    /// STEP edges counted over the period, both sides.
    pub edges: u32,
}

impl Report {
    /// Full STEP pulses per second, summed over both sides, for a one second period.
    #[inline]
    pub fn step_freq(&self) -> u32 {
        self.edges / 2
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ">leftMotor:{}\r\n", self.left)?;
        write!(f, ">rightMotor:{}\r\n", self.right)?;
        write!(f, ">leftMotorTarget:{}\r\n", self.left_target)?;
        write!(f, ">rightMotorTarget:{}\r\n", self.right_target)?;
        write!(f, ">stepFreq:{}\r\n", self.step_freq())
    }
}

pub struct Telemetry {
    period_us: u32,
    last: Instant,
}

impl Telemetry {
    pub const fn new(period_ms: u32) -> Self {
        Self {
            period_us: period_ms * 1_000,
            last: Instant::ZERO,
        }
    }

    /// Produce a report if the period has elapsed. The step counter is reset each period.
    pub fn poll<L, R>(
        &mut self,
        now: Instant,
        drive: &Drivetrain<L, R>,
        steps: &StepCounter,
    ) -> Option<Report>
    where
        L: StepperDriver,
        R: StepperDriver,
    {
        if !now.has_elapsed(self.last, self.period_us) {
            return None;
        }
        self.last = now;
        Some(Report {
            left: drive.left.current_speed(),
            right: drive.right.current_speed(),
            left_target: drive.left.target_speed(),
            right_target: drive.right.target_speed(),
            edges: steps.take(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::StepSink;
    use crate::drivers::mock::MockDriver;
    use crate::drivers::Microstep;
    use crate::motors::MotorUnit;

    #[test]
    fn reports_once_per_period() {
        let mut d = Drivetrain::new(
            MotorUnit::new(MockDriver::default(), false),
            MotorUnit::new(MockDriver::default(), true),
        );
        d.init(Microstep::Quarter);
        d.set_speeds(255, 0);

        let steps = StepCounter::new();
        let mut t = Telemetry::new(1_000);
        assert_eq!(t.poll(Instant::from_millis(999), &d, &steps), None);

        for _ in 0..10 {
            steps.record_edge();
        }
        let report = t.poll(Instant::from_millis(1_000), &d, &steps);
        assert_eq!(
            report,
            Some(Report {
                left: 0,
                right: 0,
                left_target: 800,
                right_target: 0,
                edges: 10,
            })
        );
        assert_eq!(steps.get(), 0);
        assert_eq!(t.poll(Instant::from_millis(1_500), &d, &steps), None);
    }

    #[test]
    fn teleplot_lines() {
        let report = Report {
            left: 40,
            right: -40,
            left_target: 800,
            right_target: -800,
            edges: 161,
        };
        assert_eq!(
            report.to_string(),
            ">leftMotor:40\r\n>rightMotor:-40\r\n>leftMotorTarget:800\r\n>rightMotorTarget:-800\r\n>stepFreq:80\r\n"
        );
    }
}
