// In-memory disk image, loaded once and shared read-only

use crate::error::{FatWalkError, Result};
use byteorder::{ByteOrder, LittleEndian};
use log::info;
use std::fs;
use std::path::Path;

/// The raw bytes of a disk image.
///
/// Every accessor is bounds-checked and reports `OutOfBounds` instead of
/// panicking or truncating.
#[derive(Debug, Clone)]
pub struct FilesystemImage {
    bytes: Vec<u8>,
}

impl FilesystemImage {
    /// Read the whole file at `path` into memory.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        info!("Loaded image {} ({} bytes)", path.display(), bytes.len());
        Ok(Self { bytes })
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Borrow `len` bytes starting at `offset`.
    pub fn slice(&self, offset: u64, len: usize) -> Result<&[u8]> {
        let end = offset
            .checked_add(len as u64)
            .filter(|&end| end <= self.bytes.len() as u64)
            .ok_or_else(|| {
                FatWalkError::OutOfBounds(format!(
                    "{} bytes at offset {:#x} exceed image of {} bytes",
                    len,
                    offset,
                    self.bytes.len()
                ))
            })?;
        // end fits in usize since it is bounded by the buffer length
        Ok(&self.bytes[offset as usize..end as usize])
    }

    pub fn byte_at(&self, offset: u64) -> Result<u8> {
        Ok(self.slice(offset, 1)?[0])
    }

    pub fn read_u8(&self, offset: u64) -> Result<u8> {
        self.byte_at(offset)
    }

    pub fn read_u16_le(&self, offset: u64) -> Result<u16> {
        Ok(LittleEndian::read_u16(self.slice(offset, 2)?))
    }

    pub fn read_u32_le(&self, offset: u64) -> Result<u32> {
        Ok(LittleEndian::read_u32(self.slice(offset, 4)?))
    }
}
