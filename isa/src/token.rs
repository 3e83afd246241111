//! Tokenizer for the extension list of a RISC-V ISA string.
//!
//! The width prefix (`rv64`, ...) must already be stripped. The remainder is a sequence of
//! extensions, optionally separated by `_`:
//!
//! - Single-letter extensions, each optionally followed by a version (`i2p1`). They can be
//!   chained without delimiters (`imafdc`).
//! - Namespaced extensions, starting with `s`, `x` or `z`, made of lowercase letters and digits
//!   and running until the next `_`. Their version, if any, is read backward from the end of the
//!   name (`zba1p0`).
//!
//! Malformed tokens are still consumed, so that a single bad extension never prevents the rest
//! of the string from being parsed.

use thiserror::Error;

use crate::decimal::{self, DecimalError};
use crate::hwcap::HwCap;

/// Major version of an extension whose version is not specified.
pub const UNVERSIONED: u32 = u32::MAX;

/// Explicit delimiter between extensions.
const DELIMITER: u8 = b'_';

// ————————————————————————————————— Errors ————————————————————————————————— //

/// Reason for which a token contributes no extension.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    #[error("malformed extension name")]
    MalformedName,
    #[error("invalid version number: {0}")]
    Version(#[from] DecimalError),
    #[error("major version collides with the unversioned marker")]
    UnversionedMajor,
}

// ————————————————————————————————— Tokens ————————————————————————————————— //

/// Version of an extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
}

impl Version {
    pub const UNVERSIONED: Version = Version {
        major: UNVERSIONED,
        minor: 0,
    };
}

impl Default for Version {
    fn default() -> Self {
        Self::UNVERSIONED
    }
}

/// Class of an extension token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExtKind {
    /// A single-letter extension, holding its lowercase letter.
    Single(u8),
    /// A multi-letter extension prefixed by `s`, `x` or `z`.
    Namespaced,
    /// A character that can not start an extension.
    Invalid,
}

/// One extension of an ISA string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: ExtKind,
    /// Name of the extension, without its version.
    pub name: &'a str,
    /// Text consumed for this token, excluding the trailing delimiter.
    pub text: &'a str,
    pub version: Version,
    /// Whether the name is well formed.
    pub name_valid: bool,
    /// Error encountered while parsing the version, if any.
    pub version_error: Option<TokenError>,
}

impl<'a> Token<'a> {
    /// Returns an error if the token must not contribute any extension.
    pub fn validate(&self) -> Result<(), TokenError> {
        if !self.name_valid {
            return Err(TokenError::MalformedName);
        }
        match self.version_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Returns `true` if the token names the given extension. Single letters ignore case.
    pub fn is(&self, name: &str) -> bool {
        match self.kind {
            ExtKind::Single(_) => self.name.eq_ignore_ascii_case(name),
            ExtKind::Namespaced => self.name == name,
            ExtKind::Invalid => false,
        }
    }
}

// ——————————————————————————————— Tokenizer ———————————————————————————————— //

/// Iterator over the extension tokens of an ISA string.
pub struct Tokens<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Tokens<'a> {
    /// Creates a tokenizer over an ISA string whose width prefix has been stripped.
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn namespaced(&mut self, start: usize) -> Token<'a> {
        let src = self.src;
        let bytes = src.as_bytes();

        // The name runs until the next delimiter.
        let mut end = start + 1;
        let mut name_valid = true;
        while end < bytes.len() && bytes[end] != DELIMITER {
            if !bytes[end].is_ascii_lowercase() && !bytes[end].is_ascii_digit() {
                name_valid = false;
            }
            end += 1;
        }
        self.pos = end;

        let text = &src[start..end];
        let mut token = Token {
            kind: ExtKind::Namespaced,
            name: text,
            text,
            version: Version::UNVERSIONED,
            name_valid,
            version_error: None,
        };
        if name_valid {
            let (name_len, version, version_error) = split_version(text.as_bytes());
            token.name = &text[..name_len];
            token.version = version;
            token.version_error = version_error;
        }
        token
    }

    fn single(&mut self, start: usize) -> Token<'a> {
        let src = self.src;
        let bytes = src.as_bytes();
        let letter = bytes[start].to_ascii_lowercase();
        let mut pos = start + 1;
        let mut version = Version::UNVERSIONED;
        let mut version_error = None;

        // The version, if any, is read forward: <major>[p<minor>].
        if bytes.get(pos).is_some_and(u8::is_ascii_digit) {
            match decimal::parse(&bytes[pos..]) {
                Ok((UNVERSIONED, _)) => version_error = Some(TokenError::UnversionedMajor),
                Ok((major, _)) => version.major = major,
                Err(err) => version_error = Some(err.into()),
            }
            pos += decimal::digit_run(&bytes[pos..]);

            // A `p` not followed by a digit is the next extension.
            if bytes.get(pos) == Some(&b'p') && bytes.get(pos + 1).is_some_and(u8::is_ascii_digit)
            {
                pos += 1;
                match decimal::parse(&bytes[pos..]) {
                    Ok((minor, _)) => version.minor = minor,
                    Err(err) => {
                        version_error.get_or_insert(err.into());
                    }
                }
                pos += decimal::digit_run(&bytes[pos..]);
            }
        }
        self.pos = pos;

        Token {
            kind: ExtKind::Single(letter),
            name: &src[start..start + 1],
            text: &src[start..pos],
            version,
            name_valid: true,
            version_error,
        }
    }

    fn invalid(&mut self, start: usize) -> Token<'a> {
        let src = self.src;
        let len = src[start..].chars().next().map_or(1, char::len_utf8);
        self.pos = start + len;

        let text = &src[start..self.pos];
        Token {
            kind: ExtKind::Invalid,
            name: text,
            text,
            version: Version::UNVERSIONED,
            name_valid: false,
            version_error: None,
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let start = self.pos;
        let token = match *self.src.as_bytes().get(start)? {
            b's' | b'x' | b'z' => self.namespaced(start),
            b'a'..=b'z' => self.single(start),
            // Base letters are the only extensions accepted in upper case.
            c if HwCap::from_letter(c).is_some() => self.single(start),
            _ => self.invalid(start),
        };

        // Without a delimiter, the next character starts the next token.
        if self.src.as_bytes().get(self.pos) == Some(&DELIMITER) {
            self.pos += 1;
        }
        Some(token)
    }
}

/// Splits the version from the end of a namespaced extension name.
///
/// The trailing digits are the major version, unless they are preceded by `p` and another run
/// of digits, in which case they are the minor version and the earlier run is the major one.
/// Returns the length of the name without its version.
fn split_version(run: &[u8]) -> (usize, Version, Option<TokenError>) {
    let mut version = Version::UNVERSIONED;
    let mut error = None;

    let last = run.len() - decimal::trailing_digit_run(run);
    if last == run.len() {
        return (run.len(), version, None);
    }
    match decimal::parse(&run[last..]) {
        Ok((value, _)) => version.major = value,
        Err(err) => error = Some(TokenError::from(err)),
    }

    let paired = last >= 2 && run[last - 1] == b'p' && run[last - 2].is_ascii_digit();
    if !paired {
        return (last, version, error);
    }

    version.minor = version.major;
    let major_end = last - 1;
    let major_start = major_end - decimal::trailing_digit_run(&run[..major_end]);
    match decimal::parse(&run[major_start..major_end]) {
        Ok((UNVERSIONED, _)) => {
            error.get_or_insert(TokenError::UnversionedMajor);
        }
        Ok((value, _)) => version.major = value,
        Err(err) => {
            error.get_or_insert(err.into());
        }
    }
    (major_start, version, error)
}
