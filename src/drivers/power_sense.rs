// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Motor supply presence input.
//!
//! The motor supply is divided down onto a GPIO; the line reads high while the supply is up.

use embedded_hal::digital::InputPin;

pub struct PowerSense<P> {
    pin: P,
}

impl<P: InputPin> PowerSense<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// True while the motor supply is present. A failed read counts as no supply.
    #[inline]
    pub fn is_present(&mut self) -> bool {
        self.pin.is_high().unwrap_or(false)
    }

    pub fn free(self) -> P {
        self.pin
    }
}
