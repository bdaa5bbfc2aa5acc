//! Checksum calculation for snapshot deduplication.

use sha2::{Digest, Sha256};

/// Calculate the SHA-256 checksum of a snapshot's canonical JSON.
///
/// Saving a day whose checksum matches the stored snapshot is skipped, so an
/// unchanged schedule never produces a second copy.
///
/// # Arguments
/// * `content` - JSON string content of the snapshot
///
/// # Returns
/// Hexadecimal string representation of the SHA-256 hash.
pub fn calculate_checksum(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let result = hasher.finalize();
    hex::encode(result)
}
