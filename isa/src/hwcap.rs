//! Legacy capability mask exposed to user space (`AT_HWCAP`).
//!
//! Only the six base letters are represented. Each bit sits at the index of its letter, so the
//! mask can be rendered with the same presenter as the ISA bitmap.

use bitflags::bitflags;

use crate::letters::{self, Letters};

bitflags! {
    /// Legacy base-extension capability bits.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct HwCap: usize {
        const A = 1 << 0;
        const C = 1 << 2;
        const D = 1 << 3;
        const F = 1 << 5;
        const I = 1 << 8;
        const M = 1 << 12;
    }
}

/// Letters that carry a capability bit. Absent letters are not legacy extensions.
const LEGACY: [(u8, HwCap); 6] = [
    (b'i', HwCap::I),
    (b'm', HwCap::M),
    (b'a', HwCap::A),
    (b'f', HwCap::F),
    (b'd', HwCap::D),
    (b'c', HwCap::C),
];

impl HwCap {
    /// Returns the capability bit of a base letter, ignoring case.
    pub fn from_letter(letter: u8) -> Option<HwCap> {
        let letter = letter.to_ascii_lowercase();
        LEGACY
            .iter()
            .find(|(l, _)| *l == letter)
            .map(|&(_, capa)| capa)
    }

    /// Returns `true` if either floating point extension is present.
    pub fn has_float(self) -> bool {
        self.intersects(HwCap::F | HwCap::D)
    }

    /// Renders the mask as the letters of its set bits.
    pub fn letters(self) -> Letters {
        letters::render(self.bits())
    }
}
