//! Hardware feature detection from the firmware-provided ISA strings.
//!
//! Every hart described by the firmware reports a `riscv,isa` string. The extensions reported
//! by all the usable harts are computed once during boot, then frozen for the lifetime of the
//! kernel.

use isa::{Aggregator, HostIsa, HwCap, IsaBitmap, IsaConfig};
use spin::Once;

static HOST_ISA: Once<HostIsa> = Once::new();

/// A hart, as described by the firmware.
pub trait HartNode {
    /// Returns `true` if the hart can be used by the kernel.
    fn is_usable(&self) -> bool;

    /// Returns the `riscv,isa` string of the hart, if any.
    fn isa(&self) -> Option<&str>;
}

impl<T: HartNode + ?Sized> HartNode for &T {
    fn is_usable(&self) -> bool {
        (**self).is_usable()
    }

    fn isa(&self) -> Option<&str> {
        (**self).isa()
    }
}

/// Detects the extensions available on all the harts, and publishes them.
///
/// # Panics
///
/// Panics if called more than once.
pub fn init<I>(harts: I)
where
    I: IntoIterator,
    I::Item: HartNode,
{
    publish(&HOST_ISA, detect(IsaConfig::default(), harts));
}

/// Computes the extensions available on all the given harts.
pub fn detect<I>(config: IsaConfig, harts: I) -> HostIsa
where
    I: IntoIterator,
    I::Item: HartNode,
{
    let mut aggregator = Aggregator::new(config);
    for hart in harts {
        aggregator.add_hart(hart.is_usable(), hart.isa());
    }
    aggregator.finish()
}

/// Stores the host ISA in `slot`, which must still be empty.
fn publish(slot: &Once<HostIsa>, host: HostIsa) {
    let mut published = false;
    slot.call_once(|| {
        published = true;
        host
    });
    assert!(published, "ISA features already initialized");
}

/// Returns the host ISA stored in `slot`, which must have been published.
fn published(slot: &Once<HostIsa>) -> &HostIsa {
    slot.get().expect("ISA features not initialized")
}

fn host() -> &'static HostIsa {
    published(&HOST_ISA)
}

/// Checks whether an extension is available in `isa`, or on the host if `None`.
pub fn is_extension_available(isa: Option<&IsaBitmap>, bit: usize) -> bool {
    host().is_extension_available(isa, bit)
}

/// Returns the base extension word of `isa`, or of the host if `None`.
pub fn base_extension_word(isa: Option<&IsaBitmap>) -> usize {
    host().base_extension_word(isa)
}

/// Returns the capabilities exposed to user space through `AT_HWCAP`.
pub fn elf_hwcap() -> HwCap {
    host().hwcap()
}

/// Returns `true` if the floating point state of tasks must be saved and restored.
pub fn has_fpu() -> bool {
    host().has_fpu()
}

#[cfg(test)]
mod tests {
    use super::*;
    use isa::{Xlen, ext};

    struct Hart {
        usable: bool,
        isa: Option<&'static str>,
    }

    impl HartNode for Hart {
        fn is_usable(&self) -> bool {
            self.usable
        }

        fn isa(&self) -> Option<&str> {
            self.isa
        }
    }

    const fn hart(isa: &'static str) -> Hart {
        Hart {
            usable: true,
            isa: Some(isa),
        }
    }

    const RV64: IsaConfig = IsaConfig { xlen: Xlen::Rv64 };

    #[test]
    fn detect_harts() {
        // Intersection of the usable harts.
        let harts = [
            hart("rv64imafdc_zicsr"),
            hart("rv64imafdcv_zicsr_zba"),
            Hart {
                usable: false,
                isa: Some("rv64i"),
            },
            Hart {
                usable: true,
                isa: None,
            },
        ];
        let host = detect(RV64, &harts);
        assert_eq!(host.isa().letters().as_str(), "acdfim");
        assert!(host.isa().test(ext::ZICSR));
        assert!(!host.isa().test(ext::ZBA));
        assert!(host.has_fpu());

        // Single precision only.
        let host = detect(RV64, [hart("rv64imafc"), hart("rv64imafc")]);
        assert_eq!(host.hwcap(), HwCap::I | HwCap::M | HwCap::A | HwCap::C);
        assert!(!host.has_fpu());

        // Nothing to detect.
        assert_eq!(detect(RV64, core::iter::empty::<Hart>()), HostIsa::EMPTY);
    }

    #[test]
    fn init_publishes() {
        let xlen = IsaConfig::default().xlen;
        let harts = match xlen {
            Xlen::Rv32 => [hart("rv32imafdc_zba"), hart("rv32imac_zba")],
            Xlen::Rv64 => [hart("rv64imafdc_zba"), hart("rv64imac_zba")],
        };
        init(&harts);

        assert!(is_extension_available(None, ext::letter(b'a')));
        assert!(is_extension_available(None, ext::ZBA));
        assert!(!is_extension_available(None, ext::letter(b'f')));
        assert!(!is_extension_available(None, isa::ISA_EXT_MAX));
        assert_eq!(elf_hwcap(), HwCap::I | HwCap::M | HwCap::A | HwCap::C);
        assert!(!has_fpu());

        let mut restricted = IsaBitmap::new();
        restricted.set(ext::letter(b'i'));
        assert!(!is_extension_available(Some(&restricted), ext::letter(b'a')));
        assert_eq!(base_extension_word(Some(&restricted)), 1 << 8);
        assert_eq!(
            base_extension_word(None) & ((1 << 26) - 1),
            (1 << 0) | (1 << 2) | (1 << 8) | (1 << 12)
        );
    }

    #[test]
    fn publish_once() {
        let slot = Once::new();
        publish(&slot, HostIsa::EMPTY);
        assert_eq!(published(&slot), &HostIsa::EMPTY);
    }

    #[test]
    #[should_panic(expected = "ISA features already initialized")]
    fn publish_twice() {
        let slot = Once::new();
        publish(&slot, HostIsa::EMPTY);
        publish(&slot, HostIsa::EMPTY);
    }

    #[test]
    #[should_panic(expected = "ISA features not initialized")]
    fn read_before_publish() {
        let slot = Once::new();
        published(&slot);
    }
}
