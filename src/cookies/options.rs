//! Cookie jar configuration.

use crate::cookies::psl::{MozillaPublicSuffixList, PublicSuffixList};
use std::sync::Arc;

/// Configuration options for [`CookieJar`](crate::cookies::jar::CookieJar).
#[derive(Clone)]
pub struct JarOptions {
    /// Public suffix list used to reject supercookies and to group cookies
    /// by registrable domain. `None` groups by the last two host labels and
    /// accepts any `Domain` attribute that domain-matches the host.
    pub public_suffix_list: Option<Arc<dyn PublicSuffixList>>,

    /// Reject `__Secure-` / `__Host-` cookies that break their prefix rules.
    pub enforce_prefixes: bool,
}

impl Default for JarOptions {
    fn default() -> Self {
        Self {
            public_suffix_list: Some(Arc::new(MozillaPublicSuffixList)),
            enforce_prefixes: true,
        }
    }
}

impl JarOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_public_suffix_list(mut self, list: Arc<dyn PublicSuffixList>) -> Self {
        self.public_suffix_list = Some(list);
        self
    }

    pub fn without_public_suffix_list(mut self) -> Self {
        self.public_suffix_list = None;
        self
    }

    pub fn enforce_prefixes(mut self, enforce: bool) -> Self {
        self.enforce_prefixes = enforce;
        self
    }
}

impl std::fmt::Debug for JarOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JarOptions")
            .field(
                "public_suffix_list",
                &self.public_suffix_list.as_ref().map(|l| l.description()),
            )
            .field("enforce_prefixes", &self.enforce_prefixes)
            .finish()
    }
}
