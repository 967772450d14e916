use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Expiry given to session cookies: 9999-12-31T23:59:59Z.
pub const END_OF_TIME: OffsetDateTime = match OffsetDateTime::from_unix_timestamp(253_402_300_799)
{
    Ok(t) => t,
    Err(_) => OffsetDateTime::UNIX_EPOCH,
};

/// Represents a stored cookie.
/// Modeled after Chromium's `net::CanonicalCookie`, plus the jar bookkeeping
/// (`persistent`, `seq_num`) the snapshot format carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalCookie {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Value")]
    pub value: String,
    #[serde(rename = "Domain")]
    pub domain: String,
    #[serde(rename = "Path")]
    pub path: String,
    #[serde(rename = "SameSite", default)]
    pub same_site: SameSite,
    #[serde(rename = "Secure")]
    pub secure: bool,
    #[serde(rename = "HttpOnly")]
    pub http_only: bool,
    #[serde(rename = "Persistent")]
    pub persistent: bool,
    #[serde(rename = "HostOnly")]
    pub host_only: bool,
    #[serde(rename = "Expires", with = "time::serde::rfc3339")]
    pub expiration_time: OffsetDateTime,
    #[serde(rename = "Creation", with = "time::serde::rfc3339")]
    pub creation_time: OffsetDateTime,
    #[serde(rename = "LastAccess", with = "time::serde::rfc3339")]
    pub last_access_time: OffsetDateTime,
    /// Insertion rank inside the owning store. Assigned by the store only.
    #[serde(rename = "SeqNum", default)]
    pub seq_num: u64,
}

/// `SameSite` attribute as stored. The wire value is the attribute text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SameSite {
    #[default]
    #[serde(rename = "")]
    Unspecified,
    /// Attribute present without a recognized value.
    #[serde(rename = "SameSite")]
    Default,
    #[serde(rename = "SameSite=None")]
    NoRestriction,
    #[serde(rename = "SameSite=Lax")]
    Lax,
    #[serde(rename = "SameSite=Strict")]
    Strict,
}

impl From<Option<cookie::SameSite>> for SameSite {
    fn from(value: Option<cookie::SameSite>) -> Self {
        match value {
            Some(cookie::SameSite::Lax) => SameSite::Lax,
            Some(cookie::SameSite::Strict) => SameSite::Strict,
            Some(cookie::SameSite::None) => SameSite::NoRestriction,
            None => SameSite::Unspecified,
        }
    }
}

impl CanonicalCookie {
    /// Session cookie with host-only scope. Sequence number 0 until a store
    /// takes ownership of it.
    pub fn new(
        name: String,
        value: String,
        domain: String,
        path: String,
        creation_time: OffsetDateTime,
    ) -> Self {
        Self {
            name,
            value,
            domain,
            path,
            same_site: SameSite::Unspecified,
            secure: false,
            http_only: false,
            persistent: false,
            host_only: true,
            expiration_time: END_OF_TIME,
            creation_time,
            last_access_time: creation_time,
            seq_num: 0,
        }
    }

    /// Key of this cookie inside its domain group.
    pub fn id(&self) -> String {
        format!("{};{};{}", self.domain, self.path, self.name)
    }

    /// Session cookies never expire while the jar lives.
    pub fn is_expired(&self, current_time: OffsetDateTime) -> bool {
        self.persistent && self.expiration_time <= current_time
    }

    /// RFC 6265 domain matching. `host` must already be canonical.
    pub fn domain_match(&self, host: &str) -> bool {
        if self.domain == host {
            return true;
        }
        !self.host_only && has_dot_suffix(host, &self.domain)
    }

    /// RFC 6265 path matching.
    pub fn path_match(&self, request_path: &str) -> bool {
        if request_path == self.path {
            return true;
        }

        if let Some(rest) = request_path.strip_prefix(self.path.as_str()) {
            // Cookie path is a prefix
            if self.path.ends_with('/') {
                return true;
            }
            return rest.starts_with('/');
        }

        false
    }

    pub fn should_send(&self, https: bool, host: &str, path: &str) -> bool {
        self.domain_match(host) && self.path_match(path) && (https || !self.secure)
    }

    /// Validate __Secure- and __Host- cookie prefixes per RFC 6265bis.
    /// - __Secure- cookies MUST have the Secure attribute
    /// - __Host- cookies MUST have Secure, Path="/", and no Domain attribute
    pub fn validate_prefix(
        &self,
        secure_origin: bool,
    ) -> Result<(), crate::base::neterror::NetError> {
        use crate::base::neterror::NetError;

        if self.name.starts_with("__Secure-") && (!self.secure || !secure_origin) {
            return Err(NetError::CookieInvalidPrefix);
        }

        if self.name.starts_with("__Host-") {
            // __Host- requires: Secure flag, Path="/", host-only (no Domain), secure origin
            if !self.secure || self.path != "/" || !self.host_only || !secure_origin {
                return Err(NetError::CookieInvalidPrefix);
            }
        }

        Ok(())
    }
}

/// Whether `s` ends in "." followed by `suffix`.
pub(crate) fn has_dot_suffix(s: &str, suffix: &str) -> bool {
    s.len() > suffix.len()
        && s.ends_with(suffix)
        && s.as_bytes()[s.len() - suffix.len() - 1] == b'.'
}
