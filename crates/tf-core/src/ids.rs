//! ID prefix constants and generation.
//!
//! Every entity ID has the form `{prefix}-{16 lowercase hex chars}`, e.g.
//! `tsk-3fa85f6457174562`. The random part comes from the OS RNG.

use crate::errors::CoreError;

pub const PREFIX_TASK: &str = "tsk";
pub const PREFIX_USER: &str = "usr";

pub const ALL_PREFIXES: &[&str] = &[PREFIX_TASK, PREFIX_USER];

/// Number of random bytes in an ID (rendered as twice as many hex chars).
const RANDOM_BYTES: usize = 8;

/// Generate a fresh prefixed ID.
///
/// # Errors
///
/// Returns `CoreError::Other` if the OS random source is unavailable.
pub fn generate_id(prefix: &str) -> Result<String, CoreError> {
    let mut buf = [0u8; RANDOM_BYTES];
    getrandom::fill(&mut buf)
        .map_err(|e| CoreError::Other(anyhow::anyhow!("random source unavailable: {e}")))?;

    let mut id = String::with_capacity(prefix.len() + 1 + RANDOM_BYTES * 2);
    id.push_str(prefix);
    id.push('-');
    for byte in buf {
        id.push_str(&format!("{byte:02x}"));
    }
    Ok(id)
}

/// Check whether `id` looks like an ID with the given prefix.
#[must_use]
pub fn has_prefix(id: &str, prefix: &str) -> bool {
    id.strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('-'))
        .is_some_and(|hex| hex.len() == RANDOM_BYTES * 2 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}
