// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Continuous-rotation stepper unit.
//!
//! A `MotorUnit` composes the speed mapper, the accel ramp, the step pulse generator, and the
//! power-saving cutoff around one step/direction driver. It never blocks: call
//! [`tick`](MotorUnit::tick) on every pass of the main loop and it decides by itself whether a ramp
//! update, a STEP edge, or a power transition is due.
//!
//! ```ignore
//! motor.init(Microstep::Quarter);
//! motor.set_speed(128);
//!
//! loop {
//!     motor.tick(clock.now(), &STEP_COUNTER);
//! }
//! ```

use log::{debug, warn};

use crate::config::{self, ConfigError, MotorConfig};
use crate::control::{PowerStage, PowerState, PulseGenerator, Ramp, SpeedMapper, StepSink};
use crate::drivers::{Microstep, StepperDriver};
use crate::time::Instant;

/// Observable state of a motor unit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MotorState {
    /// At rest with nothing commanded; the driver is powered down.
    Off,
    /// Current speed still moving toward the target.
    Ramping,
    /// Running at the target speed.
    Cruising,
}

pub struct MotorUnit<D> {
    driver: D,
    invert: bool,
    mapper: SpeedMapper,
    accel_rate: u16,
    /// Last raw command, kept so a configuration change can re-derive the target.
    raw: i32,
    target: i32,
    ramp: Ramp,
    pulse: PulseGenerator,
    power: PowerStage,
}

impl<D: StepperDriver> MotorUnit<D> {
    /// Create a unit with the default configuration.
    ///
    /// `invert` flips the DIR line so positive speed means the same rotation sense on both sides
    /// of the robot.
    pub fn new(driver: D, invert: bool) -> Self {
        let cfg = MotorConfig::default();
        Self {
            driver,
            invert,
            mapper: SpeedMapper::new(cfg.max_speed, cfg.microstep),
            accel_rate: cfg.accel_rate,
            raw: 0,
            target: 0,
            ramp: Ramp::new(cfg.accel_rate),
            pulse: PulseGenerator::new(),
            power: PowerStage::new(),
        }
    }

    /// Create a unit from an explicit configuration.
    pub fn with_config(driver: D, invert: bool, cfg: MotorConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;
        let mut unit = Self::new(driver, invert);
        unit.mapper = SpeedMapper::new(cfg.max_speed, cfg.microstep);
        unit.accel_rate = cfg.accel_rate;
        unit.ramp.set_rate(cfg.accel_rate);
        Ok(unit)
    }

    /// Power the driver down and select the microstep resolution.
    pub fn init(&mut self, microstep: Microstep) {
        self.disable();
        self.set_microstep(microstep);
    }

    /// Wake the driver. The next tick powers it down again if the unit is at rest.
    pub fn enable(&mut self) {
        self.power.force(&mut self.driver, PowerState::On);
    }

    /// Stop immediately, without ramping, and power the driver down.
    pub fn disable(&mut self) {
        self.stop();
        self.ramp.force(0);
        self.power.force(&mut self.driver, PowerState::Off);
    }

    /// Ramp down to zero.
    #[inline]
    pub fn stop(&mut self) {
        self.raw = 0;
        self.target = 0;
    }

    /// Set a target speed from a raw command value in [-255, 255]. Larger values are clamped.
    pub fn set_speed(&mut self, raw: i32) {
        self.raw = raw.clamp(-config::RAW_SPEED_LIMIT, config::RAW_SPEED_LIMIT);
        self.target = self.mapper.map(self.raw);
    }

    /// Set the speed cap in full steps per second.
    pub fn set_max_speed(&mut self, max_speed: u16) -> Result<(), ConfigError> {
        if max_speed == 0 {
            warn!("rejected max speed 0");
            return Err(ConfigError::ZeroMaxSpeed);
        }
        if max_speed > config::MAX_SPEED_LIMIT {
            warn!("rejected max speed {}", max_speed);
            return Err(ConfigError::MaxSpeedTooHigh(max_speed as u32));
        }
        self.mapper.set_max_speed(max_speed);
        self.target = self.mapper.map(self.raw);
        debug!("max speed {} -> target {}", max_speed, self.target);
        Ok(())
    }

    /// Set the number of ramp updates per second.
    pub fn set_accel_rate(&mut self, accel_rate: u16) -> Result<(), ConfigError> {
        if accel_rate == 0 {
            warn!("rejected accel rate 0");
            return Err(ConfigError::ZeroAccelRate);
        }
        self.accel_rate = accel_rate;
        self.ramp.set_rate(accel_rate);
        debug!("accel rate {} ({} us/update)", accel_rate, self.ramp.interval());
        Ok(())
    }

    /// Select a new microstep resolution and rescale the target to it.
    ///
    /// The current speed is left in the old microstep units; only the ramp moves it, toward the
    /// rescaled target, one increment of the new resolution per update.
    pub fn set_microstep(&mut self, microstep: Microstep) {
        self.mapper.set_microstep(microstep);
        self.driver.set_microstep(microstep);
        self.target = self.mapper.map(self.raw);
        debug!("microstep 1/{} -> target {}", microstep.factor(), self.target);
    }

    /// Advance the unit to `now`: ramp, step, and power cutoff.
    pub fn tick<S: StepSink>(&mut self, now: Instant, steps: &S) {
        let increment = self.mapper.microstep().factor() as i32;
        if let Some(speed) = self.ramp.poll(now, self.target, increment) {
            if speed != 0 {
                self.driver.set_direction((speed < 0) ^ self.invert);
            }
        }

        let speed = self.ramp.current();
        if let Some(level) = self.pulse.poll(now, speed) {
            self.driver.set_step(level);
            steps.record_edge();
        }

        let state = PowerState::for_speeds(speed, self.target);
        if state == PowerState::Off {
            self.stop();
        }
        self.power.apply(&mut self.driver, state);
    }

    /// Current speed in microsteps per second, signed by direction.
    #[inline]
    pub fn current_speed(&self) -> i32 {
        self.ramp.current()
    }

    /// Target speed in microsteps per second.
    #[inline]
    pub fn target_speed(&self) -> i32 {
        self.target
    }

    pub fn state(&self) -> MotorState {
        let current = self.ramp.current();
        if current != self.target {
            MotorState::Ramping
        } else if current != 0 {
            MotorState::Cruising
        } else {
            MotorState::Off
        }
    }

    #[inline]
    pub fn is_powered(&self) -> bool {
        self.power.is_on()
    }

    #[inline]
    pub fn max_speed(&self) -> u16 {
        self.mapper.max_speed()
    }

    #[inline]
    pub fn accel_rate(&self) -> u16 {
        self.accel_rate
    }

    #[inline]
    pub fn microstep(&self) -> Microstep {
        self.mapper.microstep()
    }

    /// Current STEP line level.
    #[inline]
    pub fn step_level(&self) -> bool {
        self.pulse.level()
    }

    /// Access the driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Release the driver.
    pub fn free(self) -> D {
        self.driver
    }
}
