//! Extensions reported on the boot log when first found.

use crate::token::Token;

/// An extension of interest and the message logged when it is found.
pub struct Watch {
    pub name: &'static str,
    pub message: &'static str,
}

/// Extensions reported during bring-up.
pub const WATCH_LIST: &[Watch] = &[
    Watch {
        name: "h",
        message: "H extension is supported.",
    },
    Watch {
        name: "zba",
        message: "Zba extension is supported.",
    },
    Watch {
        name: "zihintpause",
        message: "ZiHintPause extension is supported.",
    },
    Watch {
        name: "zksed",
        message: "Zksed extension is supported.",
    },
];

/// A set of entries of the watch-list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WatchSet(u32);

impl WatchSet {
    pub const fn new() -> Self {
        Self(0)
    }

    /// Marks the watch-list entry matching the token, if any.
    pub fn observe(&mut self, token: &Token<'_>) {
        if let Some(idx) = WATCH_LIST.iter().position(|watch| token.is(watch.name)) {
            self.0 |= 1 << idx;
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries().any(|watch| watch.name == name)
    }

    /// Returns the entries of the set.
    pub fn entries(&self) -> impl Iterator<Item = &'static Watch> + '_ {
        WATCH_LIST
            .iter()
            .enumerate()
            .filter(|(idx, _)| self.0 & (1 << idx) != 0)
            .map(|(_, watch)| watch)
    }

    /// Adds `other` to the set, logging every entry that was not already present.
    pub fn report(&mut self, other: WatchSet) {
        let new = WatchSet(other.0 & !self.0);
        for watch in new.entries() {
            log::info!("[FEATURE_TEST] {}", watch.message);
        }
        self.0 |= other.0;
    }
}
