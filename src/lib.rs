//! RISC-V supervisor bring-up.

#![cfg_attr(not(test), no_std)]

pub mod arch;
pub mod driver;
pub mod logger;
pub mod platform;

use arch::feature::HartNode;

/// Brings up the console, then detects the extensions available on the harts described by the
/// firmware.
///
/// Must be called exactly once, on the boot hart, before any other hart is started.
pub fn boot<I>(harts: I)
where
    I: IntoIterator,
    I::Item: HartNode,
{
    logger::init(log::LevelFilter::Info);
    arch::feature::init(harts);
}
