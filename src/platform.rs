//! Platform-specific constants and configuration.
//!
//! All hardware-specific values (base addresses, memory layout, etc.) should be defined in this
//! module to make porting to a new platform straightforward.

use crate::arch::feature::HartNode;

/// Base address of the NS16550A UART (UART0) on the QEMU virt machine.
pub const UART0_BASE: usize = 0x1000_0000;

/// A hart whose description is known at build time.
pub struct StaticHart {
    pub isa: &'static str,
}

impl HartNode for StaticHart {
    fn is_usable(&self) -> bool {
        true
    }

    fn isa(&self) -> Option<&str> {
        Some(self.isa)
    }
}

/// Harts of the QEMU virt machine, as its device tree describes them with `-cpu rv64`.
// TODO: read the `riscv,isa` properties from the device tree passed by the firmware instead.
pub static HARTS: [StaticHart; 1] = [StaticHart {
    isa: "rv64imafdch_zicbom_zicboz_zicntr_zicsr_zifencei_zihintpause_zihpm_zba_zbb_zbs_sstc",
}];
