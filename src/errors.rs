//! Top-level error taxonomy
//!
//! Every fatal condition the core can raise is a distinct variant,
//! composed via `#[from]` into one enum the binary matches on to
//! choose an exit code. Usage errors (wrong argument count) are
//! handled by clap itself before any of this machinery runs, so they
//! have no variant here.

use crate::decode::DecodeError;
use crate::memory::MemoryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageError {
    #[error("could not read program image {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("program image is {size} bytes, exceeds memory capacity of {capacity} bytes")]
    TooLarge { size: usize, capacity: usize },
}

/// Aggregates every fatal condition the core can raise. `Halted` is
/// not an error in the usual sense, but it shares the same "stop the
/// run loop" control path and terminate-with-dump routine, so it lives
/// alongside the true error variants here.
#[derive(Error, Debug)]
pub enum SimError {
    #[error(transparent)]
    Image(#[from] ImageError),
    #[error("decode error at pc=0x{pc:08x}: {source}")]
    Decode {
        pc: u32,
        #[source]
        source: DecodeError,
    },
    #[error("memory error at pc=0x{pc:08x}: {source}")]
    Memory {
        pc: u32,
        #[source]
        source: MemoryError,
    },
}

impl SimError {
    /// Exit code policy from the error-handling design: every fatal
    /// condition reaching this point (usage errors are handled by
    /// clap before we get here) is uniformly fatal.
    pub fn exit_code(&self) -> i32 {
        match self {
            SimError::Image(_) | SimError::Decode { .. } | SimError::Memory { .. } => 1,
        }
    }
}
