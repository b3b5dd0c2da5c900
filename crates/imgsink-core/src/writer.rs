//! Growable byte sink that accumulates encoder output in memory.
//!
//! Encoders in the `image` crate stream their output through `std::io::Write`.
//! [`MemoryWriter`] is the write target for a single encode call: it grows by
//! doubling (with a 4096-byte floor) and hands the finished buffer to the
//! caller by value via [`MemoryWriter::into_bytes`].
//!
//! Allocation failures are reported as [`SinkError::OutOfMemory`] rather than
//! silently truncating the output; the encode adapter aborts the whole call
//! when it sees one.

use std::io::{self, Write};
use thiserror::Error;

/// Capacity of the first allocation. Avoids a run of tiny reallocations for
/// small images.
const INITIAL_CAPACITY: usize = 4096;

/// Error type for sink operations.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The allocator could not provide the requested capacity.
    #[error("Out of memory growing output buffer to {requested} bytes")]
    OutOfMemory { requested: usize },
}

/// An append-only in-memory byte buffer with doubling growth.
///
/// Invariants:
/// - `len() <= capacity()` at all times.
/// - Capacity never shrinks; each growth event at least doubles it (or jumps
///   to the 4096-byte floor from empty).
#[derive(Debug, Default)]
pub struct MemoryWriter {
    data: Vec<u8>,
}

impl MemoryWriter {
    /// Create an empty writer with no allocation.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if no bytes have been written.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of bytes currently allocated.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Append a chunk, growing storage if needed.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::OutOfMemory`] if the allocator cannot provide the
    /// grown capacity. The already-written bytes are left intact; the chunk
    /// is not partially applied.
    pub fn append(&mut self, chunk: &[u8]) -> Result<(), SinkError> {
        let needed = self
            .data
            .len()
            .checked_add(chunk.len())
            .ok_or(SinkError::OutOfMemory {
                requested: usize::MAX,
            })?;
        if needed > self.data.capacity() {
            let new_capacity = self.grown_capacity(needed)?;
            self.data
                .try_reserve_exact(new_capacity - self.data.len())
                .map_err(|_| SinkError::OutOfMemory {
                    requested: new_capacity,
                })?;
        }
        self.data.extend_from_slice(chunk);
        Ok(())
    }

    /// Transfer ownership of the accumulated bytes to the caller.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Compute the capacity for the next growth event: the 4096-byte floor
    /// from empty, otherwise double, then keep doubling until `needed` fits.
    fn grown_capacity(&self, needed: usize) -> Result<usize, SinkError> {
        let overflow = SinkError::OutOfMemory {
            requested: usize::MAX,
        };
        let mut new_capacity = if self.data.capacity() == 0 {
            INITIAL_CAPACITY
        } else {
            self.data.capacity().checked_mul(2).ok_or(overflow)?
        };
        while new_capacity < needed {
            new_capacity = new_capacity.checked_mul(2).ok_or(SinkError::OutOfMemory {
                requested: usize::MAX,
            })?;
        }
        Ok(new_capacity)
    }
}

impl Write for MemoryWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.append(buf)
            .map_err(|e| io::Error::new(io::ErrorKind::OutOfMemory, e))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
