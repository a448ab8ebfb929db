// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Serial console shared by command replies, telemetry, and the `log` backend.
//!
//! The transmit half of USART3 lives in a critical-section mutex so any module can log without
//! being handed the port. Log records are printed as `[LEVEL] message` lines.

use core::cell::RefCell;
use core::fmt::{self, Write};

use cortex_m::interrupt::{self, Mutex};
use log::{LevelFilter, Log, Metadata, Record};
use stm32f7xx_hal::pac::USART3;

use crate::hw::Usart;

static CONSOLE: Mutex<RefCell<Option<Usart<USART3>>>> = Mutex::new(RefCell::new(None));

static LOGGER: ConsoleLogger = ConsoleLogger;

struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            write_fmt(format_args!("[{}] {}\r\n", record.level(), record.args()));
        }
    }

    fn flush(&self) {
        interrupt::free(|cs| {
            if let Some(usart) = CONSOLE.borrow(cs).borrow_mut().as_mut() {
                usart.flush();
            }
        });
    }
}

/// Take ownership of the port and install the logger.
pub fn init(usart: Usart<USART3>, level: LevelFilter) {
    interrupt::free(|cs| {
        CONSOLE.borrow(cs).replace(Some(usart));
    });
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

/// Print formatted text. Does nothing before [`init`].
pub fn write_fmt(args: fmt::Arguments) {
    interrupt::free(|cs| {
        if let Some(usart) = CONSOLE.borrow(cs).borrow_mut().as_mut() {
            let _ = usart.write_fmt(args);
        }
    });
}

/// Print formatted text followed by CRLF.
#[macro_export]
macro_rules! console_println {
    ($($arg:tt)*) => {
        $crate::hw::console::write_fmt(format_args!("{}\r\n", format_args!($($arg)*)))
    };
}
