// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Screwdrive Firmware
//!
//! This crate contains the firmware for a two-motor screw-propelled robot, written in Rust. Each
//! screw is turned by a stepper motor behind an A4988 step/direction driver; the robot is driven
//! by single-letter commands over a serial link.
//!
//! The motion core is hardware-independent and runs on the host for testing. Board support for
//! the NUCLEO-F767ZI (STM32F767) is compiled in with the `board` feature.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`control`] | Speed mapping, accel ramp, step pulses, power cutoff, command dispatch, telemetry |
//! | [`motors`] | Motor unit composed from the control blocks, left/right drivetrain |
//! | [`drivers`] | Device-level drivers (A4988, supply sense) |
//! | [`protocol`] | Serial command set and line parser |
//! | [`time`] | Wrapping microsecond time base |
//! | [`config`] | Defaults, limits, and runtime motor settings |
//! | `hw` | MCU-level wrappers around GPIO, TIM2, USART3 (feature `board`) |
//!
//! ## Getting Started
//!
//! Run the host tests:
//!
//! ```bash
//! cargo test
//! ```
//!
//! Flash the board:
//!
//! ```bash
//! cargo run --release --features board --target thumbv7em-none-eabihf
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod control;
pub mod drivers;
pub mod motors;
pub mod protocol;
pub mod time;

#[cfg(feature = "board")]
pub mod hw;
