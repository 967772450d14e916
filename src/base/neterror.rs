use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NetError {
    // URL Errors
    #[error("Invalid URL")]
    InvalidUrl,
    #[error("Disallowed URL scheme")]
    DisallowedUrlScheme,

    // Cookie Errors
    #[error("Cookie prefix validation failed")]
    CookieInvalidPrefix,
    #[error("Cookie domain is a public suffix")]
    CookiePublicSuffix,
    #[error("Cookie domain does not match request host")]
    CookieIllegalDomain,
    #[error("Cookie domain is malformed")]
    CookieMalformedDomain,
    #[error("Invalid cookie data: {reason}")]
    CookieInvalidData { reason: String },

    // Snapshot Errors
    #[error("Malformed cookie snapshot: {message}")]
    SnapshotMalformed { message: String },
    #[error("Failed to encode cookie snapshot: {message}")]
    SnapshotEncodeFailed { message: String },
    #[error("Snapshot I/O on {}: {source}", .path.display())]
    SnapshotIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Unknown error: {0}")]
    Unknown(i32),
}

impl NetError {
    pub fn as_i32(&self) -> i32 {
        match self {
            NetError::InvalidUrl => -300,
            NetError::DisallowedUrlScheme => -301,
            // Cookie and snapshot errors (custom codes starting at -10000)
            NetError::CookieInvalidPrefix => -10003,
            NetError::CookiePublicSuffix => -10004,
            NetError::CookieIllegalDomain => -10005,
            NetError::CookieMalformedDomain => -10006,
            NetError::CookieInvalidData { .. } => -10007,
            NetError::SnapshotMalformed { .. } => -10010,
            NetError::SnapshotEncodeFailed { .. } => -10011,
            NetError::SnapshotIo { .. } => -10012,
            NetError::Unknown(code) => *code,
        }
    }

    /// Create an invalid cookie data error.
    pub fn cookie_invalid_data(reason: impl Into<String>) -> Self {
        NetError::CookieInvalidData {
            reason: reason.into(),
        }
    }

    /// Create a malformed snapshot error.
    pub fn snapshot_malformed(message: impl Into<String>) -> Self {
        NetError::SnapshotMalformed {
            message: message.into(),
        }
    }

    /// Create a snapshot encoding error.
    pub fn snapshot_encode_failed(message: impl Into<String>) -> Self {
        NetError::SnapshotEncodeFailed {
            message: message.into(),
        }
    }

    /// Create a snapshot I/O error carrying the file path.
    pub fn snapshot_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        NetError::SnapshotIo {
            path: path.into(),
            source,
        }
    }
}

/// Only the payload-free variants can be rebuilt from a code.
impl From<i32> for NetError {
    fn from(code: i32) -> Self {
        match code {
            -300 => NetError::InvalidUrl,
            -301 => NetError::DisallowedUrlScheme,
            -10003 => NetError::CookieInvalidPrefix,
            -10004 => NetError::CookiePublicSuffix,
            -10005 => NetError::CookieIllegalDomain,
            -10006 => NetError::CookieMalformedDomain,
            _ => NetError::Unknown(code),
        }
    }
}

impl From<serde_json::Error> for NetError {
    fn from(err: serde_json::Error) -> Self {
        NetError::snapshot_malformed(err.to_string())
    }
}
