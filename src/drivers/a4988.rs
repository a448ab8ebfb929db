// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Allegro A4988 step/direction stepper driver.
//!
//! The driver is controlled entirely through GPIO:
//! - STEP: one microstep per rising edge
//! - DIR: rotation sense, sampled on the STEP edge
//! - nENABLE: active-low output stage enable
//! - nSLEEP / nRESET: both must be high for the translator to run
//! - MS1..MS3: microstep resolution select

use embedded_hal::digital::OutputPin;

use crate::drivers::{Microstep, StepperDriver};

/// Pins wired to one A4988 carrier.
pub struct A4988Pins<STP, DIR, EN, SLP, RST, MS1, MS2, MS3> {
    pub step: STP,
    pub dir: DIR,
    pub nenable: EN,
    pub nsleep: SLP,
    pub nreset: RST,
    pub ms1: MS1,
    pub ms2: MS2,
    pub ms3: MS3,
}

/// A4988 driver bound to its control pins.
pub struct A4988<STP, DIR, EN, SLP, RST, MS1, MS2, MS3> {
    pins: A4988Pins<STP, DIR, EN, SLP, RST, MS1, MS2, MS3>,
}

impl<STP, DIR, EN, SLP, RST, MS1, MS2, MS3> A4988<STP, DIR, EN, SLP, RST, MS1, MS2, MS3>
where
    STP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
    SLP: OutputPin,
    RST: OutputPin,
    MS1: OutputPin,
    MS2: OutputPin,
    MS3: OutputPin,
{
    /// Take ownership of the pins and leave the driver asleep with STEP low.
    pub fn new(pins: A4988Pins<STP, DIR, EN, SLP, RST, MS1, MS2, MS3>) -> Self {
        let mut drv = Self { pins };
        drv.pins.step.set_low().ok();
        drv.power_down();
        drv
    }

    /// Release the pins.
    pub fn free(self) -> A4988Pins<STP, DIR, EN, SLP, RST, MS1, MS2, MS3> {
        self.pins
    }

    /// MS1, MS2, MS3 levels for a resolution.
    #[inline]
    pub const fn select_levels(microstep: Microstep) -> [bool; 3] {
        match microstep {
            Microstep::Full => [false, false, false],
            Microstep::Half => [true, false, false],
            Microstep::Quarter => [false, true, false],
            Microstep::Eighth => [true, true, false],
            Microstep::Sixteenth => [true, true, true],
        }
    }
}

#[inline]
fn write<P: OutputPin>(pin: &mut P, high: bool) {
    if high {
        pin.set_high().ok();
    } else {
        pin.set_low().ok();
    }
}

impl<STP, DIR, EN, SLP, RST, MS1, MS2, MS3> StepperDriver
    for A4988<STP, DIR, EN, SLP, RST, MS1, MS2, MS3>
where
    STP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
    SLP: OutputPin,
    RST: OutputPin,
    MS1: OutputPin,
    MS2: OutputPin,
    MS3: OutputPin,
{
    fn set_microstep(&mut self, microstep: Microstep) {
        let [ms1, ms2, ms3] = Self::select_levels(microstep);
        write(&mut self.pins.ms1, ms1);
        write(&mut self.pins.ms2, ms2);
        write(&mut self.pins.ms3, ms3);
    }

    #[inline]
    fn set_direction(&mut self, high: bool) {
        write(&mut self.pins.dir, high);
    }

    #[inline]
    fn set_step(&mut self, high: bool) {
        write(&mut self.pins.step, high);
    }

    fn power_up(&mut self) {
        self.pins.nsleep.set_high().ok();
        self.pins.nreset.set_high().ok();
        self.pins.nenable.set_low().ok();
    }

    fn power_down(&mut self) {
        self.pins.nsleep.set_low().ok();
        self.pins.nreset.set_low().ok();
        self.pins.nenable.set_high().ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;

    struct ProbePin<'a>(&'a Cell<bool>);

    impl ErrorType for ProbePin<'_> {
        type Error = Infallible;
    }

    impl OutputPin for ProbePin<'_> {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.0.set(false);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.0.set(true);
            Ok(())
        }
    }

    #[derive(Default)]
    struct Levels {
        step: Cell<bool>,
        dir: Cell<bool>,
        nenable: Cell<bool>,
        nsleep: Cell<bool>,
        nreset: Cell<bool>,
        ms: [Cell<bool>; 3],
    }

    impl Levels {
        fn driver(
            &self,
        ) -> A4988<
            ProbePin<'_>,
            ProbePin<'_>,
            ProbePin<'_>,
            ProbePin<'_>,
            ProbePin<'_>,
            ProbePin<'_>,
            ProbePin<'_>,
            ProbePin<'_>,
        > {
            A4988::new(A4988Pins {
                step: ProbePin(&self.step),
                dir: ProbePin(&self.dir),
                nenable: ProbePin(&self.nenable),
                nsleep: ProbePin(&self.nsleep),
                nreset: ProbePin(&self.nreset),
                ms1: ProbePin(&self.ms[0]),
                ms2: ProbePin(&self.ms[1]),
                ms3: ProbePin(&self.ms[2]),
            })
        }

        fn ms(&self) -> [bool; 3] {
            [self.ms[0].get(), self.ms[1].get(), self.ms[2].get()]
        }
    }

    #[test]
    fn starts_asleep_and_disabled() {
        let levels = Levels::default();
        levels.step.set(true);
        let _drv = levels.driver();

        assert!(!levels.step.get());
        assert!(!levels.nsleep.get());
        assert!(!levels.nreset.get());
        assert!(levels.nenable.get());
    }

    #[test]
    fn power_up_wakes_and_enables() {
        let levels = Levels::default();
        let mut drv = levels.driver();

        drv.power_up();
        assert!(levels.nsleep.get());
        assert!(levels.nreset.get());
        assert!(!levels.nenable.get());

        drv.power_down();
        assert!(!levels.nsleep.get());
        assert!(!levels.nreset.get());
        assert!(levels.nenable.get());
    }

    #[test]
    fn microstep_select_table() {
        let levels = Levels::default();
        let mut drv = levels.driver();

        drv.set_microstep(Microstep::Full);
        assert_eq!(levels.ms(), [false, false, false]);
        drv.set_microstep(Microstep::Half);
        assert_eq!(levels.ms(), [true, false, false]);
        drv.set_microstep(Microstep::Quarter);
        assert_eq!(levels.ms(), [false, true, false]);
        drv.set_microstep(Microstep::Eighth);
        assert_eq!(levels.ms(), [true, true, false]);
        drv.set_microstep(Microstep::Sixteenth);
        assert_eq!(levels.ms(), [true, true, true]);
    }

    #[test]
    fn step_and_direction_follow_requests() {
        let levels = Levels::default();
        let mut drv = levels.driver();

        drv.set_direction(true);
        drv.set_step(true);
        assert!(levels.dir.get());
        assert!(levels.step.get());

        drv.set_step(false);
        assert!(!levels.step.get());
    }
}
