//! Cookie persistence - save and load jar snapshots to/from disk.
//!
//! Files hold the indented JSON snapshot produced by
//! [`CookieJar::marshal_json_indent`]. Loading merges, so a file can be
//! folded into a jar that already holds cookies.

use crate::base::context::IoResultExt;
use crate::base::neterror::NetError;
use crate::cookies::jar::CookieJar;
use crate::cookies::options::JarOptions;
use crate::cookies::store::MergeSummary;
use std::fs;
use std::path::Path;

/// Save a jar snapshot to a file.
///
/// # Example
/// ```ignore
/// persistence::save_to_path(&jar, Path::new("/path/to/cookies.json"), true)?;
/// ```
pub fn save_to_path(jar: &CookieJar, path: &Path, persistent_only: bool) -> Result<(), NetError> {
    let json = jar.marshal_json_indent(persistent_only, "", "  ")?;
    fs::write(path, json).snapshot_context(path)?;
    tracing::debug!(path = %path.display(), persistent_only, "saved cookie snapshot");
    Ok(())
}

/// Merge a snapshot file into an existing jar.
pub fn merge_from_path(jar: &CookieJar, path: &Path) -> Result<MergeSummary, NetError> {
    let data = fs::read(path).snapshot_context(path)?;
    let summary = jar.merge_json(&data)?;
    tracing::debug!(
        path = %path.display(),
        inserted = summary.inserted,
        replaced = summary.replaced,
        "loaded cookie snapshot"
    );
    Ok(summary)
}

/// Load a snapshot file into a new jar.
///
/// # Example
/// ```ignore
/// let jar = persistence::load_from_path(Path::new("/path/to/cookies.json"), JarOptions::default())?;
/// ```
pub fn load_from_path(path: &Path, options: JarOptions) -> Result<CookieJar, NetError> {
    let jar = CookieJar::with_options(options);
    merge_from_path(&jar, path)?;
    Ok(jar)
}
