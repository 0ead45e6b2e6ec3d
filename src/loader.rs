//! Program-image loading
//!
//! Reads a raw binary image off disk and copies it into memory at
//! offset 0: no header, no relocation, no symbol table, just bytes.

use crate::errors::ImageError;
use crate::memory::Memory;

/// Load `path` into `memory` at offset 0. Fatal if the image does not
/// fit; a non-multiple-of-4 size is a non-fatal warning logged by the
/// caller, not an error here.
pub fn load_image(memory: &mut Memory, path: &str) -> Result<Vec<u8>, ImageError> {
    let bytes = std::fs::read(path).map_err(|source| ImageError::Unreadable {
        path: path.to_string(),
        source,
    })?;
    if bytes.len() > memory.capacity() {
        return Err(ImageError::TooLarge {
            size: bytes.len(),
            capacity: memory.capacity(),
        });
    }
    memory.load_image(&bytes);
    Ok(bytes)
}
