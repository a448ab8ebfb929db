// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin definitions for the NUCLEO-F767ZI carrying two A4988 stepper drivers.
//!
//! Motor pins sit on the Zio/Arduino headers (CN7..CN10).

use stm32f7xx_hal::{
    gpio::{gpiod, Alternate},
    pac,
    prelude::*,
};

use crate::drivers::{A4988Pins, PowerSense};
use crate::hw::{PulledDownInput, PushPullPin};

/// A4988 carrier wiring: STEP, DIR, nENABLE, nSLEEP, nRESET, MS1, MS2, MS3.
pub type LeftPins = A4988Pins<
    PushPullPin<'C', 0>,
    PushPullPin<'A', 3>,
    PushPullPin<'C', 2>,
    PushPullPin<'C', 3>,
    PushPullPin<'F', 3>,
    PushPullPin<'B', 1>,
    PushPullPin<'F', 10>,
    PushPullPin<'F', 5>,
>;

pub type RightPins = A4988Pins<
    PushPullPin<'E', 13>,
    PushPullPin<'F', 15>,
    PushPullPin<'D', 15>,
    PushPullPin<'F', 14>,
    PushPullPin<'E', 11>,
    PushPullPin<'F', 12>,
    PushPullPin<'F', 13>,
    PushPullPin<'E', 9>,
>;

/// Motor supply sense on D13.
pub type SensePin = PowerSense<PulledDownInput<'A', 5>>;

/// All board pins. Construct this once at startup using:
///
/// ```ignore
/// let pins = BoardPins::new(dp.GPIOA, dp.GPIOB, dp.GPIOC, dp.GPIOD, dp.GPIOE, dp.GPIOF);
/// ```
pub struct BoardPins {
    pub left: LeftPins,
    pub right: RightPins,
    pub power_sense: SensePin,
    pub usart3: Usart3Pins,
}

/// USART3 on the ST-LINK virtual COM port.
pub struct Usart3Pins {
    pub tx: gpiod::PD8<Alternate<7>>,
    pub rx: gpiod::PD9<Alternate<7>>,
}

impl BoardPins {
    /// Create all named pins from raw GPIO peripherals.
    pub fn new(
        gpioa: pac::GPIOA,
        gpiob: pac::GPIOB,
        gpioc: pac::GPIOC,
        gpiod: pac::GPIOD,
        gpioe: pac::GPIOE,
        gpiof: pac::GPIOF,
    ) -> Self {
        let gpioa = gpioa.split();
        let gpiob = gpiob.split();
        let gpioc = gpioc.split();
        let gpiod = gpiod.split();
        let gpioe = gpioe.split();
        let gpiof = gpiof.split();

        Self {
            left: A4988Pins {
                step: PushPullPin::new(gpioc.pc0),    // A1
                dir: PushPullPin::new(gpioa.pa3),     // A0
                nenable: PushPullPin::new(gpioc.pc2), // A7
                nsleep: PushPullPin::new(gpioc.pc3),  // A2
                nreset: PushPullPin::new(gpiof.pf3),  // A3
                ms1: PushPullPin::new(gpiob.pb1),     // A6
                ms2: PushPullPin::new(gpiof.pf10),    // A5
                ms3: PushPullPin::new(gpiof.pf5),     // A4
            },

            right: A4988Pins {
                step: PushPullPin::new(gpioe.pe13),    // D3
                dir: PushPullPin::new(gpiof.pf15),     // D2
                nenable: PushPullPin::new(gpiod.pd15), // D9
                nsleep: PushPullPin::new(gpiof.pf14),  // D4
                nreset: PushPullPin::new(gpioe.pe11),  // D5
                ms1: PushPullPin::new(gpiof.pf12),     // D8
                ms2: PushPullPin::new(gpiof.pf13),     // D7
                ms3: PushPullPin::new(gpioe.pe9),      // D6
            },

            power_sense: PowerSense::new(PulledDownInput::new(gpioa.pa5)),

            usart3: Usart3Pins {
                tx: gpiod.pd8.into_alternate::<7>(),
                rx: gpiod.pd9.into_alternate::<7>(),
            },
        }
    }
}
