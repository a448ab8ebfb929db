// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Serial drive command protocol: command set ([`messages`]) and line parser ([`parser`]).

pub mod messages;
pub mod parser;

pub use messages::Command;
pub use parser::Parser;
