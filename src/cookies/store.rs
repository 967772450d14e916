//! The jar's backing store and its snapshot operations.
//!
//! Cookies live in a two-level map: domain key (eTLD+1) to cookie id to
//! cookie. Map iteration order carries no meaning; insertion order is kept
//! by each cookie's `seq_num`, handed out from the store's own counter.
//!
//! - [`CookieStore::extract`] flattens the map into records sorted by `seq_num`.
//! - [`CookieStore::merge`] folds records back in. An existing cookie keeps
//!   its `seq_num`, a new one takes the next number from the counter.
//! - [`CookieStore::clear`] empties the map and resets the counter to zero.
//!
//! The store does no locking of its own. [`CookieJar`](crate::cookies::jar::CookieJar)
//! wraps it in a single mutex.

use crate::cookies::canonicalcookie::CanonicalCookie;
use crate::cookies::snapshot::SnapshotRecord;
use std::collections::HashMap;

/// Outcome of a [`CookieStore::merge`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeSummary {
    /// Records for keys that were absent and got a fresh sequence number.
    pub inserted: usize,
    /// Records that overwrote an existing cookie and inherited its sequence number.
    pub replaced: usize,
}

#[derive(Debug, Default)]
pub struct CookieStore {
    entries: HashMap<String, HashMap<String, CanonicalCookie>>,
    /// Every stored `seq_num` is below this. Only `clear` lowers it.
    next_seq_num: u64,
}

impl CookieStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored cookies across all domain groups.
    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.values().all(HashMap::is_empty)
    }

    pub fn next_seq_num(&self) -> u64 {
        self.next_seq_num
    }

    pub fn get(&self, domain_key: &str, id: &str) -> Option<&CanonicalCookie> {
        self.entries.get(domain_key).and_then(|m| m.get(id))
    }

    /// Flatten the store into records ordered by `seq_num`.
    ///
    /// With `persistent_only`, session cookies are left out.
    pub fn extract(&self, persistent_only: bool) -> Vec<SnapshotRecord> {
        let mut records: Vec<SnapshotRecord> = self
            .entries
            .iter()
            .flat_map(|(domain_key, submap)| {
                submap
                    .iter()
                    .filter(|(_, cookie)| !persistent_only || cookie.persistent)
                    .map(move |(id, cookie)| SnapshotRecord {
                        domain_key: domain_key.clone(),
                        id: id.clone(),
                        cookie: cookie.clone(),
                    })
            })
            .collect();

        records.sort_by_key(|r| r.cookie.seq_num);
        tracing::trace!(
            count = records.len(),
            persistent_only,
            "extracted cookie snapshot"
        );
        records
    }

    /// Fold records into the store.
    ///
    /// The incoming cookie replaces whatever sits at its key, except for
    /// `seq_num`: a replaced cookie's number is inherited, a new key draws
    /// the next number. Input order is not required to be sorted.
    pub fn merge<I>(&mut self, records: I) -> MergeSummary
    where
        I: IntoIterator<Item = SnapshotRecord>,
    {
        let mut summary = MergeSummary::default();

        for record in records {
            let SnapshotRecord {
                domain_key,
                id,
                mut cookie,
            } = record;

            let submap = self.entries.entry(domain_key).or_default();
            match submap.get(&id) {
                Some(old) => {
                    cookie.seq_num = old.seq_num;
                    summary.replaced += 1;
                }
                None => {
                    cookie.seq_num = self.next_seq_num;
                    self.next_seq_num += 1;
                    summary.inserted += 1;
                }
            }
            submap.insert(id, cookie);
        }

        tracing::debug!(
            inserted = summary.inserted,
            replaced = summary.replaced,
            next_seq_num = self.next_seq_num,
            "merged cookie snapshot"
        );
        summary
    }

    /// Remove every cookie and restart sequence numbering at zero.
    pub fn clear(&mut self) {
        let dropped = self.len();
        self.entries.clear();
        self.next_seq_num = 0;
        tracing::debug!(dropped, "cleared cookie store");
    }

    pub(crate) fn submap(&self, domain_key: &str) -> Option<&HashMap<String, CanonicalCookie>> {
        self.entries.get(domain_key)
    }

    /// Domain group for `domain_key`, created empty on first use.
    pub(crate) fn submap_mut(&mut self, domain_key: &str) -> &mut HashMap<String, CanonicalCookie> {
        self.entries.entry(domain_key.to_string()).or_default()
    }

    pub(crate) fn existing_submap_mut(
        &mut self,
        domain_key: &str,
    ) -> Option<&mut HashMap<String, CanonicalCookie>> {
        self.entries.get_mut(domain_key)
    }

    /// Drop the group for `domain_key` if nothing is left in it.
    pub(crate) fn prune(&mut self, domain_key: &str) {
        if self.entries.get(domain_key).is_some_and(HashMap::is_empty) {
            self.entries.remove(domain_key);
        }
    }

    pub(crate) fn allocate_seq_num(&mut self) -> u64 {
        let seq_num = self.next_seq_num;
        self.next_seq_num += 1;
        seq_num
    }
}
