//! ISA extensions common to all the harts of the host.
//!
//! The host ISA is the intersection of the ISA of every usable hart: an extension is only
//! reported if every hart the kernel may schedule on implements it.

use crate::bitmap::IsaBitmap;
use crate::config::IsaConfig;
use crate::hart::HartIsa;
use crate::hwcap::HwCap;
use crate::watch::WatchSet;

/// Final, immutable, view of the host ISA.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HostIsa {
    isa: IsaBitmap,
    hwcap: HwCap,
    fpu: bool,
}

impl HostIsa {
    /// A host without any extension.
    pub const EMPTY: HostIsa = HostIsa {
        isa: IsaBitmap::new(),
        hwcap: HwCap::empty(),
        fpu: false,
    };

    /// Returns the ISA bitmap of the host.
    pub fn isa(&self) -> &IsaBitmap {
        &self.isa
    }

    /// Returns the capability mask exposed to user space.
    pub fn hwcap(&self) -> HwCap {
        self.hwcap
    }

    /// Returns `true` if floating point registers must be managed.
    pub fn has_fpu(&self) -> bool {
        self.fpu
    }

    /// Checks whether an extension is available in `isa`, or in the host ISA if `None`.
    ///
    /// Identifiers out of range are never available.
    pub fn is_extension_available(&self, isa: Option<&IsaBitmap>, bit: usize) -> bool {
        isa.unwrap_or(&self.isa).test(bit)
    }

    /// Returns the base extension word of `isa`, or of the host ISA if `None`.
    pub fn base_extension_word(&self, isa: Option<&IsaBitmap>) -> usize {
        isa.unwrap_or(&self.isa).base_word()
    }
}

/// Folds the ISA of each hart into the host ISA.
pub struct Aggregator {
    config: IsaConfig,
    /// Intersection of the harts folded so far, `None` until the first one.
    folded: Option<(IsaBitmap, HwCap)>,
    /// Watch-listed extensions already reported.
    seen: WatchSet,
}

impl Aggregator {
    pub fn new(config: IsaConfig) -> Self {
        Self {
            config,
            folded: None,
            seen: WatchSet::new(),
        }
    }

    /// Adds a hart, as described by the firmware.
    ///
    /// Harts that are not usable are ignored, harts without an ISA string are ignored with a
    /// warning.
    pub fn add_hart(&mut self, usable: bool, isa: Option<&str>) {
        if !usable {
            return;
        }
        let Some(isa) = isa else {
            log::warn!("Unable to find \"riscv,isa\" devicetree entry");
            return;
        };
        self.fold(HartIsa::parse(isa, self.config.xlen));
    }

    /// Restricts the host ISA to the extensions of `hart`.
    pub fn fold(&mut self, hart: HartIsa) {
        self.seen.report(hart.watched);
        self.folded = Some(match self.folded {
            None => (hart.isa, hart.hwcap),
            Some((isa, hwcap)) => (isa & hart.isa, hwcap & hart.hwcap),
        });
    }

    /// Returns the host ISA, after applying the cross-extension rules.
    pub fn finish(self) -> HostIsa {
        let (isa, mut hwcap) = self.folded.unwrap_or_default();

        // F without D is not supported.
        if hwcap.contains(HwCap::F) && !hwcap.contains(HwCap::D) {
            log::info!("This kernel does not support systems with F but not D");
            hwcap.remove(HwCap::F);
        }

        log::info!("riscv: ISA extensions {}", isa.letters());
        log::info!("riscv: ELF capabilities {}", hwcap.letters());

        HostIsa {
            isa,
            hwcap,
            fpu: hwcap.has_float(),
        }
    }
}
