// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Step pulse generator.
//!
//! The STEP line is toggled every half period of the current speed, so one full pulse (rising and
//! falling edge) is produced per period and the pulse frequency in Hz equals `|speed|`.

use core::sync::atomic::{AtomicU32, Ordering};

use crate::time::Instant;

/// Receives one notification per STEP edge.
pub trait StepSink {
    fn record_edge(&self);
}

/// Discards edge notifications.
impl StepSink for () {
    #[inline]
    fn record_edge(&self) {}
}

/// Process-wide edge counter owned by the surrounding loop.
#[derive(Debug, Default)]
pub struct StepCounter {
    edges: AtomicU32,
}

impl StepCounter {
    pub const fn new() -> Self {
        Self {
            edges: AtomicU32::new(0),
        }
    }

    /// Edges recorded since the last [`take`](Self::take).
    #[inline]
    pub fn get(&self) -> u32 {
        self.edges.load(Ordering::Relaxed)
    }

    /// Read and reset.
    #[inline]
    pub fn take(&self) -> u32 {
        self.edges.swap(0, Ordering::Relaxed)
    }
}

impl StepSink for StepCounter {
    #[inline]
    fn record_edge(&self) {
        self.edges.fetch_add(1, Ordering::Relaxed);
    }
}

/// Half period in microseconds for a non-zero speed.
#[inline]
pub fn half_period_us(speed: i32) -> u32 {
    debug_assert!(speed != 0);
    1_000_000 / speed.unsigned_abs().saturating_mul(2)
}

/// STEP line toggler.
#[derive(Copy, Clone, Debug, Default)]
pub struct PulseGenerator {
    level: bool,
    last_edge: Instant,
}

impl PulseGenerator {
    pub const fn new() -> Self {
        Self {
            level: false,
            last_edge: Instant::ZERO,
        }
    }

    /// Current STEP level.
    #[inline]
    pub fn level(&self) -> bool {
        self.level
    }

    /// Toggle the STEP level if half a period has elapsed at `speed`.
    ///
    /// Returns the new level when an edge is due. Nothing happens at zero speed.
    pub fn poll(&mut self, now: Instant, speed: i32) -> Option<bool> {
        if speed == 0 {
            return None;
        }
        if !now.has_elapsed(self.last_edge, half_period_us(speed)) {
            return None;
        }
        self.last_edge = now;
        self.level = !self.level;
        Some(self.level)
    }
}
