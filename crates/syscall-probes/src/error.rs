//! Error type shared by all probes.

use std::collections::TryReserveError;

use rustix::io::Errno;
use thiserror::Error;

/// A probe failure. `Display` renders the single diagnostic line.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("{step} failed: {}", describe(.errno))]
    Syscall { step: &'static str, errno: Errno },

    #[error("{step} failed: call unexpectedly succeeded with an empty handle buffer")]
    UnexpectedSuccess { step: &'static str },

    #[error("{step} failed: {source}")]
    Alloc {
        step: &'static str,
        #[source]
        source: TryReserveError,
    },
}

impl ProbeError {
    pub fn syscall(step: &'static str, errno: Errno) -> Self {
        Self::Syscall { step, errno }
    }

    /// The errno behind the failure, if a syscall reported one.
    pub fn errno(&self) -> Option<Errno> {
        match self {
            Self::Syscall { errno, .. } => Some(*errno),
            _ => None,
        }
    }
}

fn describe(errno: &Errno) -> &'static str {
    probe_sys::describe(*errno)
}

/// Result type for probe operations.
pub type Result<T> = std::result::Result<T, ProbeError>;
