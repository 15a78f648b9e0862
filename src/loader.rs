use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{LoadError, Result};

/// Marker byte appended after the last content byte.
pub const SENTINEL: u8 = 0;

/// Owned file contents with a terminating sentinel.
///
/// The final byte of the backing buffer is always [`SENTINEL`]; it marks
/// the logical end of the content and is not part of it.
pub struct FileContent {
    bytes: Vec<u8>,
}

impl FileContent {
    /// Content bytes, without the sentinel.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.bytes.len() - 1]
    }

    /// Content bytes including the trailing sentinel.
    pub fn with_sentinel(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Reads the whole file at `path` into an exact-fit buffer.
///
/// The buffer is sized once from a metadata probe on the open handle and
/// filled by accumulating reads; a single call returning fewer bytes than
/// requested just continues the loop. A stream that ends before the probed
/// size yields the bytes actually read. No step is retried; the first
/// error wins and releases whatever is held.
pub fn load(path: &Path) -> Result<FileContent> {
    let mut file = File::open(path).map_err(|source| LoadError::FileNotFound {
        path: path.display().to_string(),
        source,
    })?;

    let size = file
        .metadata()
        .map_err(|source| LoadError::ReadFailure {
            path: path.display().to_string(),
            source,
        })?
        .len() as usize;

    let mut buf: Vec<u8> = Vec::new();
    buf.try_reserve_exact(size + 1)
        .map_err(|_| LoadError::MemoryAllocation { requested: size + 1 })?;
    buf.resize(size, 0);

    let mut filled = 0;
    while filled < size {
        match file.read(&mut buf[filled..]) {
            Ok(0) => {
                // Stream ended before the probed size; keep what we got.
                log::debug!("short file {}: expected {size} bytes, got {filled}", path.display());
                break;
            }
            Ok(n) => filled += n,
            Err(source) => {
                return Err(LoadError::ReadFailure {
                    path: path.display().to_string(),
                    source,
                });
            }
        }
    }

    buf.truncate(filled);
    buf.push(SENTINEL);
    Ok(FileContent { bytes: buf })
}
