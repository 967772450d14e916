//! Ergonomic error context helpers.
//!
//! Provides extension traits for adding context to `Result` types,
//! converting IO errors into context-rich `NetError` variants.

use crate::base::neterror::NetError;
use std::io;
use std::path::Path;

/// Extension trait for adding context to IO Results.
pub trait IoResultExt<T> {
    /// Add snapshot file context to an IO error.
    ///
    /// # Example
    /// ```ignore
    /// use snapjar::base::context::IoResultExt;
    ///
    /// let data = std::fs::read(path).snapshot_context(path)?;
    /// // Error: "Snapshot I/O on /tmp/cookies.json: No such file or directory"
    /// ```
    fn snapshot_context(self, path: &Path) -> Result<T, NetError>;
}

impl<T> IoResultExt<T> for Result<T, io::Error> {
    fn snapshot_context(self, path: &Path) -> Result<T, NetError> {
        self.map_err(|e| NetError::snapshot_io(path, e))
    }
}
