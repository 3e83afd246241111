//! Minimal driver for the NS16550A UART.

use core::fmt;
use core::ptr;

const THR: usize = 0x00;
const LSR: usize = 0x05;
const LSR_THRE: u8 = 1 << 5;

/// An NS16550A UART, accessed through memory-mapped I/O.
pub struct Ns16550 {
    base: usize,
}

impl Ns16550 {
    /// Creates a new driver for the UART at the given MMIO base address.
    ///
    /// # Safety
    ///
    /// `base` must be the base address of a valid NS16550A UART and must remain mapped for the
    /// lifetime of the returned driver.
    pub const unsafe fn new(base: usize) -> Self {
        Self { base }
    }

    /// Writes a single byte to the UART, blocking until the transmit holding register is empty.
    pub fn putc(&self, c: u8) {
        while !self.is_thr_empty() {
            core::hint::spin_loop();
        }
        unsafe {
            ptr::write_volatile((self.base + THR) as *mut u8, c);
        }
    }

    fn is_thr_empty(&self) -> bool {
        let lsr = unsafe { ptr::read_volatile((self.base + LSR) as *const u8) };
        lsr & LSR_THRE != 0
    }
}

impl fmt::Write for Ns16550 {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.bytes() {
            if c == b'\n' {
                self.putc(b'\r');
            }
            self.putc(c);
        }
        Ok(())
    }
}
