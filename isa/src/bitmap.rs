//! ISA extension bitmap and the registry of extension identifiers.
//!
//! Identifiers 0 to 25 are the single-letter extensions `a` to `z`. Namespaced extensions are
//! numbered from 26 upward; only those listed in the registry can be represented.

use core::ops::{BitAnd, BitAndAssign};

use bit_field::BitArray;

use crate::letters::{self, Letters};

/// Capacity of an ISA bitmap, in extensions.
pub const ISA_EXT_MAX: usize = 64;

const WORD_BITS: usize = usize::BITS as usize;
const WORDS: usize = ISA_EXT_MAX.div_ceil(WORD_BITS);

// ———————————————————————————————— Registry ———————————————————————————————— //

macro_rules! define_namespaced_extensions {
    { $($name:ident = $id:literal, $text:literal;)* } => {
        $(
            #[doc = concat!("The `", $text, "` extension.")]
            pub const $name: usize = $id;
        )*

        /// Known namespaced extensions and their identifiers.
        const REGISTRY: &[(&str, usize)] = &[
            $(($text, $name),)*
        ];
    };
}

/// Extension identifiers.
pub mod ext {
    /// Identifier of a single-letter extension.
    pub const fn letter(letter: u8) -> usize {
        (letter.to_ascii_lowercase() - b'a') as usize
    }

    define_namespaced_extensions! {
        SSCOFPMF = 26, "sscofpmf";
        SVPBMT = 27, "svpbmt";
        ZICBOM = 28, "zicbom";
        ZIHINTPAUSE = 29, "zihintpause";
        SSTC = 30, "sstc";
        SVINVAL = 31, "svinval";
        ZBB = 32, "zbb";
        ZICBOZ = 33, "zicboz";
        SMAIA = 34, "smaia";
        SSAIA = 35, "ssaia";
        ZBA = 36, "zba";
        ZBS = 37, "zbs";
        ZICNTR = 38, "zicntr";
        ZICSR = 39, "zicsr";
        ZIFENCEI = 40, "zifencei";
        ZIHPM = 41, "zihpm";
    }

    /// Looks up the identifier of a namespaced extension by name.
    pub fn lookup(name: &str) -> Option<usize> {
        REGISTRY
            .iter()
            .find(|(text, _)| *text == name)
            .map(|&(_, id)| id)
    }
}

// ————————————————————————————————— Bitmap ————————————————————————————————— //

/// A fixed-capacity set of extension identifiers, stored as machine words.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IsaBitmap {
    words: [usize; WORDS],
}

impl IsaBitmap {
    /// An empty bitmap.
    pub const fn new() -> Self {
        Self { words: [0; WORDS] }
    }

    /// Adds an extension. Identifiers past [`ISA_EXT_MAX`] are ignored.
    pub fn set(&mut self, bit: usize) {
        if bit < ISA_EXT_MAX {
            self.words[..].set_bit(bit, true);
        }
    }

    /// Returns `true` if the extension is present. Out-of-range identifiers are never present.
    pub fn test(&self, bit: usize) -> bool {
        bit < ISA_EXT_MAX && self.words[..].get_bit(bit)
    }

    /// Returns the first machine word of the bitmap, which holds all the single-letter extensions.
    pub fn base_word(&self) -> usize {
        self.words[0]
    }

    /// Renders the single-letter extensions of the bitmap.
    pub fn letters(&self) -> Letters {
        letters::render(self.base_word())
    }
}

impl BitAndAssign for IsaBitmap {
    fn bitand_assign(&mut self, rhs: Self) {
        for (word, other) in self.words.iter_mut().zip(rhs.words) {
            *word &= other;
        }
    }
}

impl BitAnd for IsaBitmap {
    type Output = Self;

    fn bitand(mut self, rhs: Self) -> Self {
        self &= rhs;
        self
    }
}
