//! Memory-mapped access to static resource files.
//!
//! Only available with the `std` feature.

use memmap2::Mmap;
use std::fs::File;
use std::path::Path;

use crate::{KripoError, Result};

/// A read-only memory-mapped file.
#[derive(Debug)]
pub struct MappedFile {
    _file: File,
    mmap: Mmap,
}

impl MappedFile {
    /// Open and memory-map a file.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the file is not modified by another process
    /// while the mapping is active. Bit dictionary resources are written once
    /// and never touched afterwards.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| KripoError::Resource(format!("{}: {}", path.display(), e)))?;
        // SAFETY: We hold the File open for the lifetime of the mapping.
        let mmap = unsafe { Mmap::map(&file) }
            .map_err(|e| KripoError::Resource(format!("{}: {}", path.display(), e)))?;
        Ok(Self { _file: file, mmap })
    }

    /// The mapped bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.mmap
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.mmap.len()
    }

    /// Whether the mapped region is empty.
    pub fn is_empty(&self) -> bool {
        self.mmap.is_empty()
    }
}

impl AsRef<[u8]> for MappedFile {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_map_file() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(b"HHHaaa 7\n").unwrap();
        tmp.flush().unwrap();

        let mapped = MappedFile::open(tmp.path()).unwrap();
        assert_eq!(mapped.as_bytes(), b"HHHaaa 7\n");
        assert_eq!(mapped.len(), 9);
        assert!(!mapped.is_empty());
    }

    #[test]
    fn test_missing_file() {
        let err = MappedFile::open("/nonexistent/bitinfo.txt.gz").unwrap_err();
        assert!(matches!(err, KripoError::Resource(_)));
        assert!(err.to_string().contains("/nonexistent/bitinfo.txt.gz"));
    }
}
