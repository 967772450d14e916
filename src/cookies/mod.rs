//! Cookie storage with order-preserving snapshots.
//!
//! This module provides:
//!
//! - **Storage**: In-memory cookie jar ([`CookieJar`](jar::CookieJar)) over a
//!   two-level [`CookieStore`](store::CookieStore)
//! - **Snapshots**: Flatten the store into records ordered by insertion and
//!   merge them back into a live jar ([`snapshot`])
//! - **Persistence**: Save/load snapshots to disk ([`persistence`])
//! - **PSL**: Supercookie rejection and domain grouping ([`psl`])
//!
//! # Architecture
//!
//! | Type | Responsibility |
//! |------|----------------|
//! | [`CookieJar`](jar::CookieJar) | Ingests `Set-Cookie`, selects cookies for a URL, one lock over the store |
//! | [`CookieStore`](store::CookieStore) | Domain key to cookie id to cookie, plus the sequence counter |
//! | [`CanonicalCookie`](canonicalcookie::CanonicalCookie) | Single stored cookie |
//! | [`SnapshotRecord`](snapshot::SnapshotRecord) | One flattened `(domain key, id, cookie)` row |
//!
//! # Sequence numbers
//!
//! Every stored cookie carries a `seq_num` handed out by its store. Snapshots
//! are sorted by it, and merging keeps the number of a cookie that is already
//! present while new keys draw the next one. Clearing the store restarts the
//! counter at zero.
//!
//! # Save and Restore
//!
//! ```rust,no_run
//! use snapjar::cookies::jar::CookieJar;
//! use url::Url;
//!
//! let jar = CookieJar::new();
//! let url = Url::parse("https://example.com/")?;
//! jar.parse_and_save_cookie(&url, "session=abc; Max-Age=3600")?;
//!
//! let json = jar.marshal_json(true)?;
//!
//! let restored = CookieJar::new();
//! restored.merge_json(&json)?;
//! assert_eq!(restored.cookie_header(&url).as_deref(), Some("session=abc"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod canonicalcookie;
pub mod jar;
pub mod options;
pub mod persistence;
pub mod psl;
pub mod snapshot;
pub mod store;
