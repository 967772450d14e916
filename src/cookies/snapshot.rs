//! Snapshot records and their JSON wire form.
//!
//! A snapshot is a JSON array of records, one per stored cookie:
//!
//! ```text
//! [
//!   { "D": "<domain key>", "K": "<cookie id>", "E": { ...cookie fields incl. SeqNum... } },
//!   ...
//! ]
//! ```
//!
//! Records are written in ascending `SeqNum` order. Readers do not rely on it.

use crate::base::neterror::NetError;
use crate::cookies::canonicalcookie::CanonicalCookie;
use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};

/// One flattened store entry: the two map coordinates plus the cookie.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SnapshotRecord {
    /// Outer key, the cookie's domain group.
    #[serde(rename = "D")]
    pub domain_key: String,
    /// Inner key, see [`CanonicalCookie::id`].
    #[serde(rename = "K")]
    pub id: String,
    #[serde(rename = "E")]
    pub cookie: CanonicalCookie,
}

/// Encode records as compact JSON.
pub fn encode(records: &[SnapshotRecord]) -> Result<String, NetError> {
    serde_json::to_string(records).map_err(|e| NetError::snapshot_encode_failed(e.to_string()))
}

/// Encode records as indented JSON. Each nested line starts with `prefix`
/// followed by one `indent` per nesting level; the first line carries no prefix.
pub fn encode_indent(
    records: &[SnapshotRecord],
    prefix: &str,
    indent: &str,
) -> Result<String, NetError> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
    records
        .serialize(&mut ser)
        .map_err(|e| NetError::snapshot_encode_failed(e.to_string()))?;
    let json = String::from_utf8(buf).map_err(|e| NetError::snapshot_encode_failed(e.to_string()))?;

    if prefix.is_empty() {
        return Ok(json);
    }
    // serde_json escapes newlines inside strings, so every raw '\n' is a line break
    Ok(json.replace('\n', &format!("\n{prefix}")))
}

/// Decode a snapshot produced by [`encode`] or [`encode_indent`].
pub fn decode(data: &[u8]) -> Result<Vec<SnapshotRecord>, NetError> {
    serde_json::from_slice(data).map_err(|e| {
        tracing::warn!(error = %e, "cookie snapshot failed to decode");
        NetError::from(e)
    })
}
