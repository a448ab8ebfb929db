// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Driver power-saving cutoff.
//!
//! A motor that is stopped and commanded to stay stopped has its driver put to sleep and its
//! output stage disabled. Any non-zero current or target speed wakes it again.

use log::debug;

use crate::drivers::StepperDriver;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PowerState {
    /// Output stage disabled, driver in sleep and reset.
    Off,
    /// Driver awake with its output stage enabled.
    On,
}

impl PowerState {
    /// Desired state for a pair of speeds.
    #[inline]
    pub fn for_speeds(current: i32, target: i32) -> Self {
        if current == 0 && target == 0 {
            PowerState::Off
        } else {
            PowerState::On
        }
    }
}

/// Tracks the state last written to the driver so the pins are only touched on transitions.
#[derive(Copy, Clone, Debug, Default)]
pub struct PowerStage {
    applied: Option<PowerState>,
}

impl PowerStage {
    pub const fn new() -> Self {
        Self { applied: None }
    }

    #[inline]
    pub fn is_on(&self) -> bool {
        self.applied == Some(PowerState::On)
    }

    /// Move the driver into `state` if it is not there already.
    pub fn apply<D: StepperDriver>(&mut self, driver: &mut D, state: PowerState) {
        if self.applied != Some(state) {
            self.force(driver, state);
        }
    }

    /// Write `state` to the driver unconditionally.
    pub fn force<D: StepperDriver>(&mut self, driver: &mut D, state: PowerState) {
        match state {
            PowerState::On => driver.power_up(),
            PowerState::Off => driver.power_down(),
        }
        if self.applied != Some(state) {
            debug!("driver power {:?}", state);
        }
        self.applied = Some(state);
    }
}
