//! Whole-document reads and atomic writes

use std::fs::{self, OpenOptions};
use std::io::{Read, Write};
use std::path::Path;

use fs2::FileExt;

use crate::stream::{Sink, Source};
use crate::{Error, Result};

/// Decode UTF-8, dropping any byte sequence that is not valid UTF-8.
///
/// Unlike [`String::from_utf8_lossy`] no replacement characters are inserted;
/// the offending bytes simply disappear.
pub fn decode_lenient(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    let mut dropped = 0usize;

    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
        dropped += chunk.invalid().len();
    }

    if dropped > 0 {
        tracing::warn!(dropped, "dropped undecodable bytes from input");
    }

    text
}

/// Read the whole input into memory.
pub fn read_source(source: &Source) -> Result<String> {
    let bytes = match source {
        Source::Stdin => {
            let mut buf = Vec::new();
            std::io::stdin()
                .lock()
                .read_to_end(&mut buf)
                .map_err(|e| Error::io(source.display_path(), e))?;
            buf
        }
        Source::File(path) => fs::read(path).map_err(|e| Error::io(path, e))?,
    };

    tracing::debug!(%source, bytes = bytes.len(), "read input");
    Ok(decode_lenient(&bytes))
}

/// Write the whole result to its destination.
///
/// Standard output is written through a locked handle held only for this
/// call. Files are replaced atomically.
pub fn write_sink(sink: &Sink, content: &str) -> Result<()> {
    match sink {
        Sink::Stdout => {
            let mut out = std::io::stdout().lock();
            out.write_all(content.as_bytes())
                .and_then(|()| out.flush())
                .map_err(|e| Error::io(sink.display_path(), e))?;
        }
        Sink::File(path) => write_atomic(path, content.as_bytes())?,
    }

    tracing::debug!(%sink, bytes = content.len(), "wrote output");
    Ok(())
}

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename so readers never observe a partial file.
/// Acquires an advisory lock on the temp file while writing.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    // Temp file in the same directory keeps the rename on one filesystem
    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = path.with_file_name(&temp_name);

    let result = write_locked(&temp_path, path, content)
        .and_then(|()| fs::rename(&temp_path, path).map_err(|e| Error::io(path, e)));

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn write_locked(temp_path: &Path, target: &Path, content: &[u8]) -> Result<()> {
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp_path)
        .map_err(|e| Error::io(temp_path, e))?;

    temp_file
        .lock_exclusive()
        .map_err(|_| Error::LockFailed {
            path: target.to_path_buf(),
        })?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(temp_path, e))?;

    temp_file.sync_all().map_err(|e| Error::io(temp_path, e))?;

    FileExt::unlock(&temp_file).map_err(|_| Error::LockFailed {
        path: target.to_path_buf(),
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_valid_utf8_unchanged() {
        assert_eq!(decode_lenient("Қазақ тілі".as_bytes()), "Қазақ тілі");
    }

    #[test]
    fn test_decode_drops_invalid_bytes() {
        assert_eq!(decode_lenient(b"ab\xffcd\xc3"), "abcd");
    }

    #[test]
    fn test_decode_drops_truncated_sequence_mid_text() {
        // 0xE2 0x82 starts a three-byte sequence that never completes.
        assert_eq!(decode_lenient(b"x\xe2\x82y"), "xy");
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode_lenient(b""), "");
    }
}
