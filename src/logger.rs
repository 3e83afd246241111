//! Logging backend that writes to the platform UART.

use crate::driver::uart::Ns16550;
use crate::platform::UART0_BASE;
use core::fmt::Write;
use core::sync::atomic::{AtomicBool, Ordering};
use log::{Level, LevelFilter};
use spin::Mutex;

// SAFETY: this is the base address of the NS16550A UART of the platform.
static UART0: Mutex<Ns16550> = Mutex::new(unsafe { Ns16550::new(UART0_BASE) });
static LOGGER: Logger = Logger;
static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Initializes the logger, discarding records above `max_level`.
///
/// Must be called before the ISA detection, so that its diagnostics reach the console.
///
/// # Panics
///
/// Panics if called more than once.
pub fn init(max_level: LevelFilter) {
    assert!(
        !INITIALIZED.swap(true, Ordering::Relaxed),
        "logger already initialized"
    );
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(max_level);
}

// ————————————————————————————————— Logger ————————————————————————————————— //

pub struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            let mut uart = UART0.lock();
            let _ = writeln!(
                uart,
                "[{}] {}",
                level_display(record.level()),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

fn level_display(level: Level) -> &'static str {
    // We log with colors, using ANSI escape sequences
    match level {
        Level::Error => "\x1b[31;1mError\x1b[0m",
        Level::Warn => "\x1b[33;1mWarn\x1b[0m ",
        Level::Info => "\x1b[32;1mInfo\x1b[0m ",
        Level::Debug => "\x1b[34;1mDebug\x1b[0m",
        Level::Trace => "\x1b[35;1mTrace\x1b[0m",
    }
}
