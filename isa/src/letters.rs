//! Rendering of bit sets as extension letters, for boot diagnostics.

use arrayvec::ArrayString;

/// Number of single-letter extensions, `a` to `z`.
pub const NUM_ALPHA_EXTS: usize = (b'z' - b'a' + 1) as usize;

/// Letters of a set of single-letter extensions, in alphabetical order.
pub type Letters = ArrayString<NUM_ALPHA_EXTS>;

/// Collects the letters whose bit is set among the first 26 bits of `word`.
pub fn render(word: usize) -> Letters {
    let mut letters = Letters::new();
    for (i, letter) in ('a'..='z').enumerate() {
        if word & (1 << i) != 0 {
            letters.push(letter);
        }
    }
    letters
}
