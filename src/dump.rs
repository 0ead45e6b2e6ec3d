//! Register-state dump and the single termination entry point
//!
//! One "terminate" operation that every exit path funnels through, so
//! the register dump is produced regardless of whether execution ended
//! in a SYSTEM trap, a fatal error, or falling off the end of memory.
//! Rust has no portable at-exit hook worth reaching for here, so
//! [`terminate`] is called explicitly at every exit site in `main`.

use crate::registers::RegisterFile;
use std::io::Write;
use std::path::Path;

/// Write the 128-byte binary register dump: 32 little-endian u32
/// values, register 0 first.
pub fn write_binary_dump(path: &Path, registers: &RegisterFile) -> std::io::Result<()> {
    let mut buf = Vec::with_capacity(32 * 4);
    for n in 0..32u8 {
        buf.extend_from_slice(&registers.read(n).to_le_bytes());
    }
    let mut file = std::fs::File::create(path)?;
    file.write_all(&buf)
}

/// Print the diagnostic message, the human-readable register dump,
/// write the binary dump (best-effort: a dump failure is reported but
/// does not change the exit code), then exit the process.
pub fn terminate(registers: &RegisterFile, dump_path: &Path, message: &str, exit_code: i32) -> ! {
    println!("{message}");
    print!("{registers}");
    if let Err(e) = write_binary_dump(dump_path, registers) {
        eprintln!(
            "warning: could not write register dump to {}: {e}",
            dump_path.display()
        );
    }
    std::process::exit(exit_code);
}
