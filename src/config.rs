//! Run configuration
//!
//! Alignment enforcement and the initial stack-pointer value are named
//! configuration knobs rather than hardcoded per-call-site choices;
//! this struct is where those and the dump path/trace flag live, built
//! once from CLI args plus sensible defaults.

use crate::memory::{AlignmentPolicy, DEFAULT_CAPACITY};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub memory_capacity: usize,
    pub initial_sp: u32,
    pub alignment: AlignmentPolicy,
    pub dump_path: PathBuf,
    pub trace: bool,
}

impl Config {
    /// Defaults chosen deliberately: initial `sp` at the top of
    /// memory, misalignment allowed, the plain `register_dump.bin`
    /// filename, tracing off.
    pub fn new(memory_capacity: usize) -> Self {
        Self {
            memory_capacity,
            initial_sp: memory_capacity as u32,
            alignment: AlignmentPolicy::AllowMisaligned,
            dump_path: PathBuf::from("register_dump.bin"),
            trace: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
