// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! `embedded-hal` 1.0 digital pin wrappers around STM32F7 GPIO pins.
//!
//! The motion core is written against the `embedded_hal::digital` traits so it can run on the
//! host. These wrappers put the HAL's inherent pin methods behind those traits. GPIO writes on
//! this MCU cannot fail, so the error type is `Infallible`.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, InputPin, OutputPin};
use stm32f7xx_hal::gpio::{self, Input, Output, PullDown, PushPull};

/// Push-pull output.
pub struct PushPullPin<const P: char, const N: u8> {
    pin: gpio::Pin<P, N, Output<PushPull>>,
}

impl<const P: char, const N: u8> PushPullPin<P, N> {
    /// Configure as push-pull output, driven low.
    pub fn new<MODE>(pin: gpio::Pin<P, N, MODE>) -> Self {
        let mut pin = pin.into_push_pull_output();
        pin.set_low();
        Self { pin }
    }

    pub fn free(self) -> gpio::Pin<P, N, Output<PushPull>> {
        self.pin
    }
}

impl<const P: char, const N: u8> ErrorType for PushPullPin<P, N> {
    type Error = Infallible;
}

impl<const P: char, const N: u8> OutputPin for PushPullPin<P, N> {
    #[inline]
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.pin.set_low();
        Ok(())
    }

    #[inline]
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.pin.set_high();
        Ok(())
    }
}

/// Input with the internal pull-down enabled, so an unconnected line reads low.
pub struct PulledDownInput<const P: char, const N: u8> {
    pin: gpio::Pin<P, N, Input<PullDown>>,
}

impl<const P: char, const N: u8> PulledDownInput<P, N> {
    pub fn new<MODE>(pin: gpio::Pin<P, N, MODE>) -> Self {
        Self {
            pin: pin.into_pull_down_input(),
        }
    }
}

impl<const P: char, const N: u8> ErrorType for PulledDownInput<P, N> {
    type Error = Infallible;
}

impl<const P: char, const N: u8> InputPin for PulledDownInput<P, N> {
    #[inline]
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.pin.is_high())
    }

    #[inline]
    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.pin.is_low())
    }
}
