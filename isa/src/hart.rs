//! ISA of a single hart.

use crate::bitmap::{IsaBitmap, ext};
use crate::config::Xlen;
use crate::hwcap::HwCap;
use crate::token::{ExtKind, Token, Tokens};
use crate::watch::WatchSet;

/// Extensions reported by one hart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HartIsa {
    pub isa: IsaBitmap,
    pub hwcap: HwCap,
    /// Watch-listed extensions found in the ISA string.
    pub watched: WatchSet,
}

impl HartIsa {
    /// Parses the ISA string of a hart.
    ///
    /// Malformed extensions are skipped and contribute nothing.
    pub fn parse(isa: &str, xlen: Xlen) -> Self {
        let mut hart = Self::default();
        for token in Tokens::new(xlen.strip_prefix(isa)) {
            match token.validate() {
                Ok(()) => hart.add(&token),
                Err(err) => log::debug!("riscv: skipping ISA extension {:?}: {}", token.text, err),
            }
        }
        hart
    }

    fn add(&mut self, token: &Token<'_>) {
        match token.kind {
            ExtKind::Single(letter) => {
                if let Some(capa) = HwCap::from_letter(letter) {
                    self.hwcap |= capa;
                }
                self.isa.set(ext::letter(letter));
            }
            ExtKind::Namespaced => {
                if let Some(id) = ext::lookup(token.name) {
                    self.isa.set(id);
                }
            }
            ExtKind::Invalid => return,
        }
        self.watched.observe(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_log;

    fn parse(isa: &str) -> HartIsa {
        HartIsa::parse(isa, Xlen::Rv64)
    }

    #[test]
    fn base_letters() {
        let hart = parse("rv64imac");
        assert_eq!(hart.isa.letters().as_str(), "acim");
        assert_eq!(hart.hwcap, HwCap::I | HwCap::M | HwCap::A | HwCap::C);
        assert_eq!(hart.hwcap.letters().as_str(), "acim");
        assert_eq!(hart.watched, WatchSet::new());

        // Non-legacy letters reach the bitmap but not the mask.
        let hart = parse("rv64imafdcvh");
        assert_eq!(hart.isa.letters().as_str(), "acdfhimv");
        assert_eq!(hart.hwcap.letters().as_str(), "acdfim");
        assert!(hart.watched.contains("h"));

        // Upper case base letters.
        assert_eq!(parse("rv64IMAFDC"), parse("rv64imafdc"));
    }

    #[test]
    fn delimiters() {
        assert_eq!(parse("rv64imafdc"), parse("rv64i_m_a_f_d_c"));
        assert_eq!(parse("rv64i2p0m2a2p0"), parse("rv64i_m_a"));
    }

    #[test]
    fn namespaced() {
        let hart = parse("rv64imafdc_zFOO_zba");
        assert_eq!(hart.isa.letters().as_str(), "acdfim");
        assert_eq!(hart.hwcap.letters().as_str(), "acdfim");
        assert!(hart.watched.contains("zba"));
        assert!(hart.isa.test(ext::ZBA));

        // Unknown namespaced extensions set nothing.
        let hart = parse("rv64i_xfoo_zfoo1p0");
        assert_eq!(hart.isa.letters().as_str(), "i");
        assert_eq!(hart.isa.base_word(), 1 << ext::letter(b'i'));
    }

    #[test]
    fn absorbs_errors() {
        // Version overflow drops the extension but not the rest of the string.
        let hart = parse("rv64i_m99999999999_a_zba99999999999_c");
        assert_eq!(hart.isa.letters().as_str(), "aci");
        assert!(!hart.isa.test(ext::ZBA));
        assert!(!hart.watched.contains("zba"));

        // Malformed tokens are reported at debug level.
        let (hart, records) = test_log::capture_all(|| parse("rv64i#c"));
        assert_eq!(hart.isa.letters().as_str(), "ci");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].0, log::Level::Debug);
        assert!(records[0].1.contains("\"#\""));
    }

    #[test]
    fn width_prefix() {
        assert_eq!(HartIsa::parse("rv32imac", Xlen::Rv32), parse("rv64imac"));
        assert_eq!(parse("imac"), parse("rv64imac"));
        assert_eq!(parse(""), HartIsa::default());
    }
}
