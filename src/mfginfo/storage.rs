// ABOUTME: Byte-addressable storage device abstraction
// ABOUTME: Read-only random access plus an in-memory implementation over byte slices

use super::error::{MfgInfoError, Result};

/// Read-only view of a configuration memory device
pub trait Storage {
    /// Device size in bytes
    fn size(&self) -> usize;

    /// Read into `buf` starting at `offset`, returning the number of bytes read
    ///
    /// Fewer bytes than `buf.len()` means the device ended early.
    fn read(&self, offset: usize, buf: &mut [u8]) -> Result<usize>;

    /// Read exactly `buf.len()` bytes or fail
    fn read_exact(&self, offset: usize, buf: &mut [u8]) -> Result<()> {
        let got = self.read(offset, buf)?;
        if got != buf.len() {
            return Err(MfgInfoError::ShortRead {
                offset,
                wanted: buf.len(),
                got,
            });
        }
        Ok(())
    }
}

impl<S: Storage + ?Sized> Storage for &S {
    fn size(&self) -> usize {
        (**self).size()
    }

    fn read(&self, offset: usize, buf: &mut [u8]) -> Result<usize> {
        (**self).read(offset, buf)
    }
}

/// Storage backed by a byte slice, e.g. an EEPROM image
#[derive(Debug, Clone, Copy)]
pub struct MemoryStorage<'a> {
    data: &'a [u8],
}

impl<'a> MemoryStorage<'a> {
    /// Wrap an in-memory image
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Get the underlying data slice
    pub fn data(&self) -> &[u8] {
        self.data
    }
}

impl Storage for MemoryStorage<'_> {
    fn size(&self) -> usize {
        self.data.len()
    }

    fn read(&self, offset: usize, buf: &mut [u8]) -> Result<usize> {
        if offset > self.data.len() {
            return Err(MfgInfoError::Io {
                offset,
                len: buf.len(),
            });
        }

        let available = &self.data[offset..];
        let count = available.len().min(buf.len());
        buf[..count].copy_from_slice(&available[..count]);
        Ok(count)
    }
}
