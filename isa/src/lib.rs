//! RISC-V ISA string parsing.
//!
//! Each hart advertises its extensions through an ISA string such as `rv64imafdc_zicsr_zba`.
//! This crate parses those strings and folds them into the set of extensions available on every
//! hart of the host, along with the legacy capability mask exposed to user space.

#![cfg_attr(not(test), no_std)]

pub mod bitmap;
pub mod config;
pub mod decimal;
pub mod hart;
pub mod host;
pub mod hwcap;
pub mod letters;
pub mod token;
pub mod watch;

#[cfg(test)]
mod test_log;

pub use bitmap::{ISA_EXT_MAX, IsaBitmap, ext};
pub use config::{IsaConfig, Xlen};
pub use hart::HartIsa;
pub use host::{Aggregator, HostIsa};
pub use hwcap::HwCap;
