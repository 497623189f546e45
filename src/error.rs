//! Error taxonomy for the decomposition/normalization pipeline.
//!
//! Mirrors the five error kinds a conforming implementation must surface
//! (allocator failure, overflow, malformed input, policy rejection, bad
//! option combinations), each returned at the first point of detection.

use thiserror::Error;

/// The five-way error taxonomy used throughout the crate.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The allocator refused a request for the output buffer.
    #[error("memory allocation failed")]
    NoMem,
    /// The output would exceed the signed-size ceiling, or a UTF-8 sequence
    /// would read past the end of its buffer.
    #[error("buffer size would overflow")]
    Overflow,
    /// The input byte stream contains an ill-formed UTF-8 sequence.
    #[error("invalid UTF-8")]
    InvalidUtf8,
    /// `rejectna` was set and an unassigned codepoint was encountered.
    #[error("unassigned codepoint rejected")]
    NotAssigned,
    /// An incompatible combination of options was requested (e.g. `compose`
    /// and `decompose` together, or `stripmark` without either).
    #[error("invalid option combination")]
    InvalidOpts,
}

impl Error {
    /// Human readable message describing this error, suitable for display.
    pub fn errmsg(self) -> &'static str {
        match self {
            Error::NoMem => "memory could not be allocated",
            Error::Overflow => "the given string is too long",
            Error::InvalidUtf8 => "invalid UTF-8",
            Error::NotAssigned => "unassigned codepoint rejected",
            Error::InvalidOpts => "invalid options for normalization",
        }
    }
}
