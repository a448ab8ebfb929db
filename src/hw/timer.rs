// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Free-running microsecond counter on TIM2.
//!
//! TIM2 is a 32-bit timer on APB1. It is prescaled to tick at 1 MHz and left counting over its
//! full range, so the counter value is directly a wrapping microsecond timestamp.

use stm32f7xx_hal::{pac, rcc::Clocks};

use crate::time::{Clock, Instant};

pub struct MicrosTimer {
    tim: pac::TIM2,
}

impl MicrosTimer {
    /// Configure TIM2 as a 1 MHz up-counter and start it.
    pub fn tim2(tim2: pac::TIM2, clocks: &Clocks) -> Self {
        // Enable the peripheral clock
        let rcc = unsafe { &*pac::RCC::ptr() };
        rcc.apb1enr.modify(|_, w| w.tim2en().set_bit());

        let tim = tim2;

        // Disable counter while configuring
        tim.cr1.modify(|_, w| w.cen().clear_bit());

        // 1 MHz tick from the APB1 timer clock
        let psc = clocks.timclk1().raw() / 1_000_000 - 1;
        tim.psc.write(|w| unsafe { w.bits(psc) });

        // Auto-reload: max 32-bit
        tim.arr.write(|w| unsafe { w.bits(0xFFFF_FFFF) });

        // Latch the prescaler and reset the counter
        tim.egr.write(|w| w.ug().set_bit());
        tim.cnt.write(|w| unsafe { w.bits(0) });

        // Enable the counter
        tim.cr1.modify(|_, w| w.cen().set_bit());

        Self { tim }
    }

    /// Raw counter value in microseconds.
    #[inline]
    pub fn raw(&self) -> u32 {
        self.tim.cnt.read().bits()
    }

    /// Consume the wrapper and return the underlying timer peripheral.
    #[inline]
    pub fn free(self) -> pac::TIM2 {
        self.tim
    }
}

impl Clock for MicrosTimer {
    #[inline]
    fn now(&self) -> Instant {
        Instant::from_micros(self.raw())
    }
}
