//! Build configuration of the ISA detection.

/// Machine word width, selecting the prefix expected at the start of ISA strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Xlen {
    Rv32,
    Rv64,
}

impl Xlen {
    /// The width of the target the kernel is built for.
    pub const fn native() -> Self {
        if cfg!(target_pointer_width = "32") {
            Xlen::Rv32
        } else {
            Xlen::Rv64
        }
    }

    pub const fn prefix(self) -> &'static str {
        match self {
            Xlen::Rv32 => "rv32",
            Xlen::Rv64 => "rv64",
        }
    }

    /// Strips the width prefix from an ISA string, if it matches this width.
    pub fn strip_prefix(self, isa: &str) -> &str {
        isa.strip_prefix(self.prefix()).unwrap_or(isa)
    }
}

/// Configuration of the ISA string parser.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IsaConfig {
    pub xlen: Xlen,
}

impl Default for IsaConfig {
    fn default() -> Self {
        Self {
            xlen: Xlen::native(),
        }
    }
}
