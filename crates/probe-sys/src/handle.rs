//! `name_to_handle_at(2)` and the variable-length file handle buffer.
//!
//! The kernel's `struct file_handle` is a fixed header followed by an opaque
//! payload whose length is not known up front:
//!
//! ```text
//! struct file_handle {
//!     unsigned int  handle_bytes;   // in: capacity, out: actual size
//!     int           handle_type;
//!     unsigned char f_handle[];     // handle_bytes opaque bytes
//! };
//! ```
//!
//! ## Size Discovery
//!
//! Calling with a payload capacity that is too small fails with `EOVERFLOW`
//! and writes the required size into `handle_bytes`. [`name_to_handle_at`]
//! turns that into [`Lookup::NeedsCapacity`]; the caller grows the buffer
//! with [`FileHandle::resize`] and calls again.
//!
//! ```ignore
//! let mut handle = FileHandle::empty();
//! if let Lookup::NeedsCapacity(size) = name_to_handle_at(libc::AT_FDCWD, path, &mut handle, 0)? {
//!     handle.resize(size)?;
//! }
//! let Lookup::Complete { mount_id } = name_to_handle_at(libc::AT_FDCWD, path, &mut handle, 0)? else {
//!     unreachable!()
//! };
//! ```

use std::collections::TryReserveError;
use std::os::fd::RawFd;
use std::path::Path;

use rustix::io::Errno;

use crate::{last_errno, path_to_cstring};

/// Size of the `handle_bytes` + `handle_type` header.
pub const HEADER_LEN: usize = size_of::<u32>() + size_of::<i32>();

/// Resolve relative paths against the current working directory.
pub const AT_FDCWD: RawFd = libc::AT_FDCWD;

/// Outcome of a single `name_to_handle_at` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// The handle was written; the path lives on mount `mount_id`.
    Complete { mount_id: i32 },
    /// The payload capacity was too small; the kernel needs this many bytes.
    NeedsCapacity(u32),
}

/// Owned `struct file_handle`.
///
/// The allocation is always exactly `HEADER_LEN + handle_bytes` long, so the
/// capacity advertised to the kernel never exceeds the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    buf: Vec<u8>,
}

impl FileHandle {
    /// A handle with a zero-length payload, used to query the required size.
    pub fn empty() -> Self {
        Self {
            buf: vec![0; HEADER_LEN],
        }
    }

    /// Payload size: capacity before a successful lookup, actual size after.
    pub fn handle_bytes(&self) -> u32 {
        u32::from_ne_bytes(self.header_word(0))
    }

    /// Filesystem-specific handle type written by the kernel.
    pub fn handle_type(&self) -> i32 {
        i32::from_ne_bytes(self.header_word(4))
    }

    /// The opaque payload.
    pub fn bytes(&self) -> &[u8] {
        let len = (self.handle_bytes() as usize).min(self.capacity());
        &self.buf[HEADER_LEN..HEADER_LEN + len]
    }

    /// Payload bytes the buffer can hold.
    pub fn capacity(&self) -> usize {
        self.buf.len() - HEADER_LEN
    }

    /// Resize the payload to exactly `handle_bytes`, keeping the header.
    pub fn resize(&mut self, handle_bytes: u32) -> Result<(), TryReserveError> {
        let total = HEADER_LEN + handle_bytes as usize;
        if total > self.buf.len() {
            self.buf.try_reserve_exact(total - self.buf.len())?;
        }
        self.buf.resize(total, 0);
        self.set_handle_bytes(handle_bytes);
        Ok(())
    }

    fn header_word(&self, offset: usize) -> [u8; 4] {
        let mut word = [0u8; 4];
        word.copy_from_slice(&self.buf[offset..offset + 4]);
        word
    }

    fn set_handle_bytes(&mut self, handle_bytes: u32) {
        self.buf[..4].copy_from_slice(&handle_bytes.to_ne_bytes());
    }
}

/// Resolve `path` (relative to `dirfd`) into `handle`.
///
/// Returns [`Lookup::NeedsCapacity`] on `EOVERFLOW`. In that case the
/// handle's advertised capacity is restored to its real capacity, so the
/// same buffer can never be reused with a size larger than its allocation.
pub fn name_to_handle_at(
    dirfd: RawFd,
    path: &Path,
    handle: &mut FileHandle,
    flags: libc::c_int,
) -> Result<Lookup, Errno> {
    let path_c = path_to_cstring(path)?;
    let mut mount_id: libc::c_int = 0;

    // SAFETY: handle.buf is HEADER_LEN + handle_bytes long, which is exactly
    // what the kernel may write. path_c and mount_id outlive the call.
    let ret = unsafe {
        libc::syscall(
            libc::SYS_name_to_handle_at,
            dirfd,
            path_c.as_ptr(),
            handle.buf.as_mut_ptr(),
            &raw mut mount_id,
            flags,
        )
    };
    if ret == 0 {
        return Ok(Lookup::Complete { mount_id });
    }

    let errno = last_errno();
    if errno != Errno::OVERFLOW {
        return Err(errno);
    }

    let required = handle.handle_bytes();
    let capacity = handle.capacity() as u32;
    handle.set_handle_bytes(capacity);
    Ok(Lookup::NeedsCapacity(required))
}
