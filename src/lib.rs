//! # snapjar
//!
//! An RFC 6265 cookie jar whose contents can be written out as a JSON
//! snapshot and merged back into a live jar.
//!
//! ## Features
//!
//! - **Cookie Management**: RFC 6265 storage and selection with PSL validation
//! - **Snapshots**: Extraction ordered by insertion, not by key
//! - **Merge**: Existing cookies keep their position, new ones are appended
//! - **Persistence**: Compact or indented JSON, to strings or files
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use snapjar::cookies::jar::CookieJar;
//! use snapjar::cookies::persistence;
//!
//! let jar = CookieJar::new();
//! jar.parse_and_save_cookie(&url, "id=42; Max-Age=86400")?;
//! persistence::save_to_path(&jar, Path::new("cookies.json"), true)?;
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Error definitions and context helpers
//! - [`cookies`] - Cookie jar, store, snapshots and persistence

pub mod base;
pub mod cookies;
