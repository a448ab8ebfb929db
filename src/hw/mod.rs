// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Board Support
//!
//! MCU-level wrappers for the NUCLEO-F767ZI: GPIO adapters, the microsecond timer, the serial
//! port, and the console logger. Only built with the `board` feature.

pub mod console;
pub mod gpio;
pub mod pins;
pub mod timer;
pub mod usart;

pub use gpio::{PulledDownInput, PushPullPin};
pub use pins::BoardPins;
pub use timer::MicrosTimer;
pub use usart::{Usart, UsartRx};
