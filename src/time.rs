// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Monotonic microsecond time base for the polling loop.
//!
//! Timestamps come from a free-running 32-bit microsecond counter and wrap roughly every 71.6
//! minutes. Elapsed time is always computed with modular subtraction, so a gate that compares
//! `now.duration_since(last)` against a threshold keeps working across the wrap as long as the
//! interval being measured is shorter than one full counter period.

/// A point in time, in microseconds since an arbitrary epoch, modulo 2^32.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Instant(u32);

impl Instant {
    /// Counter value at the epoch.
    pub const ZERO: Instant = Instant(0);

    #[inline]
    pub const fn from_micros(us: u32) -> Self {
        Self(us)
    }

    #[inline]
    pub const fn from_millis(ms: u32) -> Self {
        Self(ms.wrapping_mul(1_000))
    }

    /// Raw counter value.
    #[inline]
    pub const fn as_micros(self) -> u32 {
        self.0
    }

    /// Microseconds elapsed from `earlier` to `self`, modulo 2^32.
    #[inline]
    pub const fn duration_since(self, earlier: Instant) -> u32 {
        self.0.wrapping_sub(earlier.0)
    }

    /// Returns true once at least `interval_us` microseconds have passed since `earlier`.
    #[inline]
    pub const fn has_elapsed(self, earlier: Instant, interval_us: u32) -> bool {
        self.duration_since(earlier) >= interval_us
    }

    /// The instant `us` microseconds later, wrapping.
    #[inline]
    pub const fn add_micros(self, us: u32) -> Instant {
        Instant(self.0.wrapping_add(us))
    }
}

/// Source of monotonic time.
pub trait Clock {
    fn now(&self) -> Instant;
}

impl<F> Clock for F
where
    F: Fn() -> Instant,
{
    fn now(&self) -> Instant {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_survives_counter_wrap() {
        let before = Instant::from_micros(u32::MAX - 9);
        let after = before.add_micros(30);

        assert_eq!(after.as_micros(), 20);
        assert_eq!(after.duration_since(before), 30);
        assert!(after.has_elapsed(before, 30));
        assert!(!after.has_elapsed(before, 31));
    }

    #[test]
    fn closures_are_clocks() {
        let clock = || Instant::from_millis(5);
        assert_eq!(clock.now().as_micros(), 5_000);
    }
}
