// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Time-gated speed ramp.
//!
//! The ramp moves the current speed toward the target by one increment per ramp update. Updates
//! happen at most `accel_rate` times per second; the interval is computed in whole milliseconds,
//! so the cadence gets coarser as the rate grows (e.g. 300/s and 333/s both become 3 ms).
//!
//! The physical acceleration is therefore `accel_rate × increment` microsteps/s², where the
//! increment is the microstep factor.

use crate::time::Instant;

/// Ramp interval in microseconds for a given rate. `accel_rate` must be non-zero.
#[inline]
pub const fn interval_us(accel_rate: u16) -> u32 {
    (1_000 / accel_rate as u32) * 1_000
}

/// Accel ramper state.
#[derive(Copy, Clone, Debug)]
pub struct Ramp {
    current: i32,
    interval_us: u32,
    last_update: Instant,
}

impl Ramp {
    /// Create a ramp at rest. `accel_rate` must be non-zero.
    pub const fn new(accel_rate: u16) -> Self {
        Self {
            current: 0,
            interval_us: interval_us(accel_rate),
            last_update: Instant::ZERO,
        }
    }

    #[inline]
    pub fn current(&self) -> i32 {
        self.current
    }

    /// Jump to a speed without ramping.
    #[inline]
    pub fn force(&mut self, speed: i32) {
        self.current = speed;
    }

    /// Change the update rate. `accel_rate` must be non-zero.
    #[inline]
    pub fn set_rate(&mut self, accel_rate: u16) {
        self.interval_us = interval_us(accel_rate);
    }

    #[inline]
    pub fn interval(&self) -> u32 {
        self.interval_us
    }

    /// Run one ramp update if the interval has elapsed.
    ///
    /// Returns the new current speed when an update happened, `None` while gated.
    pub fn poll(&mut self, now: Instant, target: i32, increment: i32) -> Option<i32> {
        if !now.has_elapsed(self.last_update, self.interval_us) {
            return None;
        }
        self.last_update = now;
        self.current = approach(self.current, target, increment);
        Some(self.current)
    }
}

/// One ramp increment from `current` toward `target`, never passing it.
#[inline]
pub fn approach(current: i32, target: i32, increment: i32) -> i32 {
    if current < target {
        current.saturating_add(increment).min(target)
    } else if current > target {
        current.saturating_sub(increment).max(target)
    } else {
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_uses_whole_milliseconds() {
        assert_eq!(interval_us(50), 20_000);
        assert_eq!(interval_us(1), 1_000_000);
        assert_eq!(interval_us(300), 3_000);
        assert_eq!(interval_us(333), 3_000);
        assert_eq!(interval_us(2_000), 0);
    }

    #[test]
    fn approach_clamps_at_target() {
        assert_eq!(approach(0, 10, 4), 4);
        assert_eq!(approach(8, 10, 4), 10);
        assert_eq!(approach(10, 10, 4), 10);
        assert_eq!(approach(-8, -10, 4), -10);
        assert_eq!(approach(3, -10, 4), -1);
    }

    #[test]
    fn gated_by_interval() {
        let mut ramp = Ramp::new(50);

        assert_eq!(ramp.poll(Instant::from_millis(19), 800, 4), None);
        assert_eq!(ramp.poll(Instant::from_millis(20), 800, 4), Some(4));
        assert_eq!(ramp.poll(Instant::from_millis(39), 800, 4), None);
        assert_eq!(ramp.poll(Instant::from_millis(40), 800, 4), Some(8));
    }

    #[test]
    fn two_hundred_ms_at_fifty_per_second() {
        let mut ramp = Ramp::new(50);
        for ms in 0..=200 {
            ramp.poll(Instant::from_millis(ms), 800, 4);
        }
        assert_eq!(ramp.current(), 40);
    }

    #[test]
    fn monotonic_and_settles_on_target() {
        let mut ramp = Ramp::new(1_000);
        let target = 37;
        let mut prev = ramp.current();
        for ms in 1..100 {
            if let Some(speed) = ramp.poll(Instant::from_millis(ms), target, 8) {
                assert!(speed >= prev);
                assert!(speed - prev == 8 || speed == target || speed == prev);
                assert!(speed <= target);
                prev = speed;
            }
        }
        assert_eq!(ramp.current(), target);
    }
}
