use crate::base::neterror::NetError;
use crate::cookies::canonicalcookie::{has_dot_suffix, CanonicalCookie, END_OF_TIME};
use crate::cookies::options::JarOptions;
use crate::cookies::psl::jar_key;
use crate::cookies::snapshot::{self, SnapshotRecord};
use crate::cookies::store::{CookieStore, MergeSummary};
use cookie::Cookie;
use parking_lot::Mutex;
use std::net::IpAddr;
use time::{Duration, OffsetDateTime};
use url::{Host, Url};

/// An RFC 6265 cookie jar whose contents can be snapshotted and merged back.
///
/// All operations, reads included, go through one mutex around the
/// [`CookieStore`]: selection stamps access times and evicts expired
/// cookies, and sequence numbers span the whole store.
#[derive(Debug)]
pub struct CookieJar {
    store: Mutex<CookieStore>,
    options: JarOptions,
}

impl Default for CookieJar {
    fn default() -> Self {
        Self::new()
    }
}

impl CookieJar {
    pub fn new() -> Self {
        Self::with_options(JarOptions::default())
    }

    pub fn with_options(options: JarOptions) -> Self {
        Self {
            store: Mutex::new(CookieStore::new()),
            options,
        }
    }

    pub fn options(&self) -> &JarOptions {
        &self.options
    }

    /// Store cookies received in a response from `url`.
    pub fn set_cookies(&self, url: &Url, cookies: &[Cookie<'_>]) {
        self.set_cookies_at(url, cookies, OffsetDateTime::now_utc());
    }

    /// Store cookies received from `url`, as observed at `now`.
    ///
    /// Cookies that fail validation are skipped. A cookie whose `Max-Age` is
    /// not positive, or whose `Expires` is not after `now`, deletes the
    /// stored cookie with the same id.
    pub fn set_cookies_at(&self, url: &Url, cookies: &[Cookie<'_>], now: OffsetDateTime) {
        if cookies.is_empty() || !is_http(url) {
            return;
        }
        let Some(host) = canonical_host(url) else {
            return;
        };
        let key = jar_key(&host, self.options.public_suffix_list.as_deref());
        let def_path = default_path(url.path());
        let https = url.scheme() == "https";

        let mut store = self.store.lock();
        for c in cookies {
            let (mut entry, remove) = match self.new_entry(c, now, &def_path, &host, https) {
                Ok(v) => v,
                Err(e) => {
                    tracing::debug!(name = c.name(), host = %host, error = %e, "rejected cookie");
                    continue;
                }
            };
            let id = entry.id();

            if remove {
                if let Some(submap) = store.existing_submap_mut(&key) {
                    submap.remove(&id);
                }
                continue;
            }

            let existing = store
                .submap(&key)
                .and_then(|m| m.get(&id))
                .map(|old| (old.creation_time, old.seq_num));
            match existing {
                Some((creation_time, seq_num)) => {
                    entry.creation_time = creation_time;
                    entry.seq_num = seq_num;
                }
                None => {
                    entry.creation_time = now;
                    entry.seq_num = store.allocate_seq_num();
                }
            }
            entry.last_access_time = now;
            store.submap_mut(&key).insert(id, entry);
        }
        store.prune(&key);
    }

    /// Cookies to send in a request to `url`.
    pub fn cookies(&self, url: &Url) -> Vec<Cookie<'static>> {
        self.cookies_at(url, OffsetDateTime::now_utc())
    }

    /// Cookies to send in a request to `url` made at `now`.
    ///
    /// Expired cookies of the host's domain group are dropped. The result is
    /// ordered by path length (longest first), then creation time, then
    /// insertion order.
    pub fn cookies_at(&self, url: &Url, now: OffsetDateTime) -> Vec<Cookie<'static>> {
        if !is_http(url) {
            return Vec::new();
        }
        let Some(host) = canonical_host(url) else {
            return Vec::new();
        };
        let key = jar_key(&host, self.options.public_suffix_list.as_deref());
        let https = url.scheme() == "https";
        let path = if url.path().is_empty() { "/" } else { url.path() };

        let mut store = self.store.lock();
        let Some(submap) = store.existing_submap_mut(&key) else {
            return Vec::new();
        };

        submap.retain(|_, e| !e.is_expired(now));
        let mut selected: Vec<CanonicalCookie> = Vec::new();
        for e in submap.values_mut() {
            if !e.should_send(https, &host, path) {
                continue;
            }
            e.last_access_time = now;
            selected.push(e.clone());
        }
        store.prune(&key);
        drop(store);

        selected.sort_by(|a, b| {
            b.path
                .len()
                .cmp(&a.path.len())
                .then_with(|| a.creation_time.cmp(&b.creation_time))
                .then_with(|| a.seq_num.cmp(&b.seq_num))
        });

        selected
            .into_iter()
            .map(|e| Cookie::new(e.name, e.value))
            .collect()
    }

    /// Value for a `Cookie` request header, or `None` when nothing applies.
    pub fn cookie_header(&self, url: &Url) -> Option<String> {
        let cookies = self.cookies(url);
        if cookies.is_empty() {
            return None;
        }
        Some(
            cookies
                .iter()
                .map(|c| format!("{}={}", c.name(), c.value()))
                .collect::<Vec<_>>()
                .join("; "),
        )
    }

    /// Parse one `Set-Cookie` header line from `url` and store it.
    ///
    /// Unlike [`set_cookies`](Self::set_cookies), a URL the jar cannot take
    /// cookies from is reported instead of ignored.
    pub fn parse_and_save_cookie(&self, url: &Url, cookie_line: &str) -> Result<(), NetError> {
        if !is_http(url) {
            return Err(NetError::DisallowedUrlScheme);
        }
        canonical_host(url).ok_or(NetError::InvalidUrl)?;
        let parsed = Cookie::parse(cookie_line).map_err(|e| {
            tracing::debug!(line = cookie_line, error = %e, "failed to parse cookie");
            NetError::cookie_invalid_data(e.to_string())
        })?;
        self.set_cookies(url, &[parsed]);
        Ok(())
    }

    /// Get total cookie count.
    pub fn total_cookie_count(&self) -> usize {
        self.store.lock().len()
    }

    pub fn next_seq_num(&self) -> u64 {
        self.store.lock().next_seq_num()
    }

    /// Snapshot records in insertion order. See [`CookieStore::extract`].
    pub fn extract(&self, persistent_only: bool) -> Vec<SnapshotRecord> {
        self.store.lock().extract(persistent_only)
    }

    /// Fold snapshot records into the jar. See [`CookieStore::merge`].
    pub fn merge_records<I>(&self, records: I) -> MergeSummary
    where
        I: IntoIterator<Item = SnapshotRecord>,
    {
        self.store.lock().merge(records)
    }

    /// Serialize the jar as compact JSON.
    /// With `persistent_only`, session cookies are left out.
    pub fn marshal_json(&self, persistent_only: bool) -> Result<String, NetError> {
        snapshot::encode(&self.extract(persistent_only))
    }

    /// Serialize the jar as indented JSON.
    pub fn marshal_json_indent(
        &self,
        persistent_only: bool,
        prefix: &str,
        indent: &str,
    ) -> Result<String, NetError> {
        snapshot::encode_indent(&self.extract(persistent_only), prefix, indent)
    }

    /// Merge JSON produced by [`marshal_json`](Self::marshal_json) into this jar.
    ///
    /// The whole payload is decoded before the store is touched, so a
    /// malformed payload leaves the jar as it was.
    pub fn merge_json(&self, data: impl AsRef<[u8]>) -> Result<MergeSummary, NetError> {
        let records = snapshot::decode(data.as_ref())?;
        Ok(self.merge_records(records))
    }

    /// Clear all cookies and restart sequence numbering.
    pub fn clear(&self) {
        self.store.lock().clear();
    }

    /// Turn a received cookie into a store entry. The flag is true when the
    /// cookie asks for deletion instead.
    fn new_entry(
        &self,
        c: &Cookie<'_>,
        now: OffsetDateTime,
        def_path: &str,
        host: &str,
        https: bool,
    ) -> Result<(CanonicalCookie, bool), NetError> {
        let path = match c.path() {
            Some(p) if p.starts_with('/') => p.to_string(),
            _ => def_path.to_string(),
        };
        let (domain, host_only) = self.domain_and_type(host, c.domain().unwrap_or(""))?;

        let mut entry = CanonicalCookie::new(c.name().to_string(), String::new(), domain, path, now);
        entry.host_only = host_only;

        // Max-Age takes precedence over Expires
        if let Some(max_age) = c.max_age() {
            if max_age <= Duration::ZERO {
                return Ok((entry, true));
            }
            entry.expiration_time = now
                .checked_add(max_age)
                .map_or(END_OF_TIME, |t| t.min(END_OF_TIME));
            entry.persistent = true;
        } else if let Some(expires) = c.expires_datetime() {
            if expires <= now {
                return Ok((entry, true));
            }
            entry.expiration_time = expires.min(END_OF_TIME);
            entry.persistent = true;
        }

        entry.value = c.value().to_string();
        entry.secure = c.secure().unwrap_or(false);
        entry.http_only = c.http_only().unwrap_or(false);
        entry.same_site = c.same_site().into();

        if self.options.enforce_prefixes {
            entry.validate_prefix(https)?;
        }

        Ok((entry, false))
    }

    /// Cookie domain and host-only flag for a cookie with `Domain` attribute
    /// `domain` (empty when absent) received from `host`.
    fn domain_and_type(&self, host: &str, domain: &str) -> Result<(String, bool), NetError> {
        if domain.is_empty() {
            // No domain attribute: a host cookie
            return Ok((host.to_string(), true));
        }

        if host.parse::<IpAddr>().is_ok() {
            // An IP address may only name itself
            if host != domain {
                return Err(NetError::CookieIllegalDomain);
            }
            return Ok((host.to_string(), true));
        }

        let domain = domain.strip_prefix('.').unwrap_or(domain);
        if domain.is_empty() || domain.starts_with('.') || domain.ends_with('.') {
            return Err(NetError::CookieMalformedDomain);
        }
        // IDNA to punycode, lowercased, so it compares against the URL's host
        let domain = match Host::parse(domain) {
            Ok(Host::Domain(d)) => d,
            Ok(_) | Err(_) => return Err(NetError::CookieMalformedDomain),
        };

        if let Some(list) = &self.options.public_suffix_list {
            let suffix = list.public_suffix(&domain);
            if !suffix.is_empty() && !has_dot_suffix(&domain, &suffix) {
                if host == domain {
                    // Domain attribute naming the host itself: still a host cookie
                    return Ok((host.to_string(), true));
                }
                return Err(NetError::CookiePublicSuffix);
            }
        }

        // www.mycompany.com cannot set cookies for .ourcompetitors.com
        if host != domain && !has_dot_suffix(host, &domain) {
            return Err(NetError::CookieIllegalDomain);
        }

        Ok((domain, false))
    }
}

fn is_http(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https")
}

/// Lowercase host without a trailing dot. IPv6 addresses lose their brackets.
fn canonical_host(url: &Url) -> Option<String> {
    match url.host()? {
        Host::Domain(d) => {
            let d = d.strip_suffix('.').unwrap_or(d);
            if d.is_empty() {
                return None;
            }
            Some(d.to_ascii_lowercase())
        }
        Host::Ipv4(ip) => Some(ip.to_string()),
        Host::Ipv6(ip) => Some(ip.to_string()),
    }
}

/// RFC 6265 section 5.1.4 default path: the request path up to its last '/'.
fn default_path(path: &str) -> String {
    if !path.starts_with('/') {
        return "/".to_string();
    }
    match path.rfind('/') {
        Some(0) | None => "/".to_string(),
        Some(i) => path[..i].to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cookies::canonicalcookie::SameSite;

    fn t0() -> OffsetDateTime {
        // 2013-01-01T12:00:00Z
        OffsetDateTime::from_unix_timestamp(1_357_041_600).unwrap()
    }

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    fn set(jar: &CookieJar, from: &str, lines: &[&str], now: OffsetDateTime) {
        let cookies: Vec<Cookie<'_>> = lines.iter().map(|l| Cookie::parse(*l).unwrap()).collect();
        jar.set_cookies_at(&url(from), &cookies, now);
    }

    fn get(jar: &CookieJar, to: &str, now: OffsetDateTime) -> String {
        jar.cookies_at(&url(to), now)
            .iter()
            .map(|c| format!("{}={}", c.name(), c.value()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_default_path() {
        assert_eq!(default_path(""), "/");
        assert_eq!(default_path("abc"), "/");
        assert_eq!(default_path("/"), "/");
        assert_eq!(default_path("/abc"), "/");
        assert_eq!(default_path("/abc/"), "/abc");
        assert_eq!(default_path("/abc/xyz"), "/abc");
        assert_eq!(default_path("/abc/xyz/"), "/abc/xyz");
    }

    #[test]
    fn test_canonical_host() {
        assert_eq!(canonical_host(&url("http://www.Host.Test./x")).unwrap(), "www.host.test");
        assert_eq!(canonical_host(&url("http://127.0.0.1:8080/")).unwrap(), "127.0.0.1");
        assert_eq!(canonical_host(&url("http://[::1]/")).unwrap(), "::1");
    }

    #[test]
    fn test_domain_and_type() {
        let jar = CookieJar::new();
        let ok = |host: &str, domain: &str| jar.domain_and_type(host, domain).unwrap();

        assert_eq!(ok("www.example.com", ""), ("www.example.com".to_string(), true));
        assert_eq!(ok("127.0.0.1", "127.0.0.1"), ("127.0.0.1".to_string(), true));
        assert_eq!(ok("www.example.com", "example.com"), ("example.com".to_string(), false));
        assert_eq!(ok("www.example.com", ".example.com"), ("example.com".to_string(), false));
        assert_eq!(ok("www.example.com", "www.example.com"), ("www.example.com".to_string(), false));
        assert_eq!(ok("www.example.com", ".Example.COM"), ("example.com".to_string(), false));
        // Domain attribute equal to a public suffix host
        assert_eq!(ok("co.uk", "co.uk"), ("co.uk".to_string(), true));

        assert!(matches!(
            jar.domain_and_type("127.0.0.1", "127.0.0.2"),
            Err(NetError::CookieIllegalDomain)
        ));
        assert!(matches!(
            jar.domain_and_type("www.example.com", ".."),
            Err(NetError::CookieMalformedDomain)
        ));
        assert!(matches!(
            jar.domain_and_type("www.example.com", "example.com."),
            Err(NetError::CookieMalformedDomain)
        ));
        assert!(matches!(
            jar.domain_and_type("www.example.com", "other.com"),
            Err(NetError::CookieIllegalDomain)
        ));
        assert!(matches!(
            jar.domain_and_type("www.bbc.co.uk", "co.uk"),
            Err(NetError::CookiePublicSuffix)
        ));
    }

    #[test]
    fn test_domain_and_type_without_list() {
        let jar = CookieJar::with_options(JarOptions::new().without_public_suffix_list());
        assert_eq!(
            jar.domain_and_type("www.bbc.co.uk", "co.uk").unwrap(),
            ("co.uk".to_string(), false)
        );
    }

    #[test]
    fn test_set_and_get() {
        let jar = CookieJar::new();
        set(&jar, "http://www.host.test/", &["A=a", "B=b; path=/foo"], t0());

        assert_eq!(get(&jar, "http://www.host.test/", t0()), "A=a");
        assert_eq!(get(&jar, "http://www.host.test/foo/x", t0()), "B=b A=a");
        assert_eq!(get(&jar, "ftp://www.host.test/", t0()), "");
        assert_eq!(get(&jar, "http://other.host.test/", t0()), "");
        assert_eq!(jar.total_cookie_count(), 2);
        assert_eq!(jar.next_seq_num(), 2);
    }

    #[test]
    fn test_update_keeps_creation_and_seq_num() {
        let jar = CookieJar::new();
        set(&jar, "http://www.host.test/", &["A=1", "B=2"], t0());
        set(&jar, "http://www.host.test/", &["A=3"], t0() + Duration::seconds(5));

        let records = jar.extract(false);
        let a = records.iter().find(|r| r.cookie.name == "A").unwrap();
        assert_eq!(a.cookie.value, "3");
        assert_eq!(a.cookie.seq_num, 0);
        assert_eq!(a.cookie.creation_time, t0());
        assert_eq!(a.cookie.last_access_time, t0() + Duration::seconds(5));
        assert_eq!(jar.next_seq_num(), 2);
    }

    #[test]
    fn test_delete_with_max_age() {
        let jar = CookieJar::new();
        set(&jar, "http://www.host.test/", &["A=1", "B=2"], t0());
        set(&jar, "http://www.host.test/", &["A=1; max-age=0", "B=2; max-age=-1"], t0());

        assert_eq!(jar.total_cookie_count(), 0);
        assert!(jar.extract(false).is_empty());
    }

    #[test]
    fn test_persistence_flags() {
        let jar = CookieJar::new();
        set(&jar, "http://www.host.test/", &["s=1", "p=2; max-age=100"], t0());

        let persistent = jar.extract(true);
        assert_eq!(persistent.len(), 1);
        assert_eq!(persistent[0].cookie.name, "p");
        assert_eq!(persistent[0].cookie.expiration_time, t0() + Duration::seconds(100));

        let session = jar.extract(false).into_iter().find(|r| r.cookie.name == "s").unwrap();
        assert!(!session.cookie.persistent);
        assert_eq!(session.cookie.expiration_time, END_OF_TIME);
    }

    #[test]
    fn test_expired_cookies_dropped_on_read() {
        let jar = CookieJar::new();
        set(&jar, "http://www.host.test/", &["a=1; max-age=1", "b=2"], t0());

        assert_eq!(get(&jar, "http://www.host.test/", t0() + Duration::seconds(2)), "b=2");
        assert_eq!(jar.total_cookie_count(), 1);
    }

    #[test]
    fn test_read_stamps_last_access() {
        let jar = CookieJar::new();
        set(&jar, "http://www.host.test/", &["a=1"], t0());
        get(&jar, "http://www.host.test/", t0() + Duration::minutes(1));

        let records = jar.extract(false);
        assert_eq!(records[0].cookie.last_access_time, t0() + Duration::minutes(1));
        assert_eq!(records[0].cookie.creation_time, t0());
    }

    #[test]
    fn test_same_path_length_orders_by_insertion() {
        let jar = CookieJar::new();
        set(&jar, "http://www.host.test/", &["Z=z", "A=a", "M=m"], t0());
        assert_eq!(get(&jar, "http://www.host.test/", t0()), "Z=z A=a M=m");
    }

    #[test]
    fn test_invalid_prefix_rejected() {
        let jar = CookieJar::new();
        set(&jar, "http://www.host.test/", &["__Secure-id=1; Secure"], t0());
        set(&jar, "https://www.host.test/", &["__Host-id=2; Secure; Path=/"], t0());
        assert_eq!(get(&jar, "https://www.host.test/", t0()), "__Host-id=2");

        let lax = CookieJar::with_options(JarOptions::new().enforce_prefixes(false));
        set(&lax, "http://www.host.test/", &["__Secure-id=1; Secure"], t0());
        assert_eq!(lax.total_cookie_count(), 1);
    }

    #[test]
    fn test_ip_host() {
        let jar = CookieJar::new();
        set(&jar, "http://127.0.0.1/", &["a=1", "b=2; domain=127.0.0.1", "c=3; domain=127.0.0.2"], t0());
        assert_eq!(get(&jar, "http://127.0.0.1/", t0()), "a=1 b=2");
    }

    #[test]
    fn test_parse_and_save_cookie() {
        let jar = CookieJar::new();
        let u = url("https://example.com/foo");
        jar.parse_and_save_cookie(&u, "foo=bar; Path=/").unwrap();
        assert_eq!(jar.cookie_header(&u).unwrap(), "foo=bar");

        let err = jar.parse_and_save_cookie(&u, "=novalue").unwrap_err();
        assert!(matches!(err, NetError::CookieInvalidData { .. }));
    }

    #[test]
    fn test_parse_and_save_cookie_rejects_unusable_url() {
        let jar = CookieJar::new();
        let err = jar
            .parse_and_save_cookie(&url("ftp://www.host.test/"), "a=1")
            .unwrap_err();
        assert!(matches!(err, NetError::DisallowedUrlScheme));
        assert_eq!(err.as_i32(), -301);

        let err = jar
            .parse_and_save_cookie(&url("http://./"), "a=1")
            .unwrap_err();
        assert!(matches!(err, NetError::InvalidUrl));
        assert_eq!(jar.total_cookie_count(), 0);
    }

    #[test]
    fn test_idn_domain_attribute() {
        let jar = CookieJar::new();
        assert_eq!(
            jar.domain_and_type("www.xn--bcher-kva.test", "bücher.test").unwrap(),
            ("xn--bcher-kva.test".to_string(), false)
        );
        assert_eq!(
            jar.domain_and_type("www.xn--bcher-kva.test", ".BÜCHER.test").unwrap(),
            ("xn--bcher-kva.test".to_string(), false)
        );
        assert!(matches!(
            jar.domain_and_type("www.host.test", "bücher.test"),
            Err(NetError::CookieIllegalDomain)
        ));

        set(&jar, "http://www.bücher.test/", &["a=1; domain=bücher.test"], t0());
        assert_eq!(get(&jar, "http://shop.xn--bcher-kva.test/", t0()), "a=1");
    }

    #[test]
    fn test_debug_output() {
        let jar = CookieJar::new();
        set(&jar, "http://www.host.test/", &["a=1"], t0());
        let out = format!("{:?}", jar);
        assert!(out.contains("CookieJar"));
        assert!(out.contains("next_seq_num: 1"));
    }

    #[test]
    fn test_marshal_merge_round_trip() {
        let jar = CookieJar::new();
        set(&jar, "http://www.host.test/", &["a=1; max-age=3600", "b=2"], t0());
        set(&jar, "http://www.other.test/", &["c=3"], t0());

        let json = jar.marshal_json(false).unwrap();
        let copy = CookieJar::new();
        let summary = copy.merge_json(&json).unwrap();

        assert_eq!(summary.inserted, 3);
        assert_eq!(copy.extract(false), jar.extract(false));
        assert_eq!(get(&copy, "http://www.host.test/", t0()), "a=1 b=2");
    }

    #[test]
    fn test_marshal_persistent_only() {
        let jar = CookieJar::new();
        set(&jar, "http://www.host.test/", &["a=1; max-age=3600", "b=2"], t0());

        let copy = CookieJar::new();
        copy.merge_json(jar.marshal_json(true).unwrap()).unwrap();
        assert_eq!(copy.total_cookie_count(), 1);
        assert_eq!(get(&copy, "http://www.host.test/", t0()), "a=1");
    }

    #[test]
    fn test_merge_json_malformed_leaves_jar_untouched() {
        let jar = CookieJar::new();
        set(&jar, "http://www.host.test/", &["a=1"], t0());
        let json = jar.marshal_json(false).unwrap();

        let target = CookieJar::new();
        let err = target.merge_json(&json[..json.len() - 3]).unwrap_err();
        assert!(matches!(err, NetError::SnapshotMalformed { .. }));
        assert_eq!(target.total_cookie_count(), 0);
        assert_eq!(target.next_seq_num(), 0);
    }

    #[test]
    fn test_merge_json_default_same_site() {
        let json = r#"[{"D":"host.test","K":"host.test;/;a","E":{
            "Name":"a","Value":"1","Domain":"host.test","Path":"/",
            "SameSite":"SameSite","Secure":false,"HttpOnly":false,
            "Persistent":false,"HostOnly":true,"Expires":"9999-12-31T23:59:59Z",
            "Creation":"2013-01-01T12:00:00Z","LastAccess":"2013-01-01T12:00:00Z"}}]"#;
        let jar = CookieJar::new();
        let summary = jar.merge_json(json).unwrap();
        assert_eq!(summary.inserted, 1);

        let records = jar.extract(false);
        assert_eq!(records[0].cookie.same_site, SameSite::Default);
        assert!(jar.marshal_json(false).unwrap().contains(r#""SameSite":"SameSite""#));
        assert_eq!(get(&jar, "http://www.host.test/", t0()), "");
        assert_eq!(get(&jar, "http://host.test/", t0()), "a=1");
    }

    #[test]
    fn test_merge_into_live_jar_keeps_fresh_order() {
        let jar = CookieJar::new();
        set(&jar, "http://www.host.test/", &["a=1", "b=2"], t0());
        let saved = jar.marshal_json(false).unwrap();

        set(&jar, "http://www.host.test/", &["c=3"], t0());
        set(&jar, "http://www.host.test/", &["a=fresh"], t0());
        jar.merge_json(&saved).unwrap();

        // Stored values come from the snapshot, order from the live jar.
        assert_eq!(get(&jar, "http://www.host.test/", t0()), "a=1 b=2 c=3");
        assert_eq!(jar.next_seq_num(), 3);
    }

    #[test]
    fn test_clear() {
        let jar = CookieJar::new();
        set(&jar, "http://www.host.test/", &["a=1", "b=2"], t0());
        jar.clear();

        assert_eq!(jar.total_cookie_count(), 0);
        assert_eq!(jar.next_seq_num(), 0);
        set(&jar, "http://www.host.test/", &["c=3"], t0());
        assert_eq!(jar.extract(false)[0].cookie.seq_num, 0);
    }
}
