//! Database abstraction layer
//!
//! This module provides a driver-agnostic interface for catalog discovery
//! and windowed row retrieval.

pub mod traits;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "postgres")]
pub mod postgres;

// Re-export the main trait
pub use traits::{DatabaseError, DatabaseProvider};

/// Text rendered for SQL NULL
pub const NULL_TEXT: &str = "NULL";

/// Text rendered for binary values; the bytes themselves are not shown
pub fn blob_text(bytes: &[u8]) -> String {
    format!("[BLOB: {} bytes]", bytes.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blob_text() {
        assert_eq!(blob_text(&[]), "[BLOB: 0 bytes]");
        assert_eq!(blob_text(b"\x00\x01\x02"), "[BLOB: 3 bytes]");
    }
}
