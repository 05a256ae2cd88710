//! Catalog matching - ordered strategy cascade over a catalog snapshot.
//!
//! The snapshot is built once per import from the full vehicle list and the
//! four strategies are tried in order until one succeeds. Each strategy is
//! an independent pure function; a strategy returning `None` means it cannot
//! resolve the record and the next one is tried. Four cheap strategies keep
//! the worst case to linear scans without needing edit-distance matching.

use std::collections::HashMap;

use super::candidates::compact;
use crate::catalog::Vehicle;

/// Candidates shorter than this never participate in prefix matching; they
/// would collide with half the catalog.
const MIN_PREFIX_LEN: usize = 3;

struct SnapshotEntry {
    slug: String,
    name_lower: String,
}

/// Immutable snapshot of the reference catalog for one import run.
///
/// Preserves the repository's slug-ordered listing, which fixes the
/// (intentionally arbitrary) first-hit tie-break of the prefix strategy for
/// a given catalog state. A compact-form index of slugs is precomputed.
pub struct CatalogSnapshot {
    entries: Vec<SnapshotEntry>,
    compact_index: HashMap<String, String>,
}

impl CatalogSnapshot {
    pub fn new(vehicles: &[Vehicle]) -> Self {
        let entries: Vec<SnapshotEntry> = vehicles
            .iter()
            .map(|v| SnapshotEntry {
                slug: v.slug.clone(),
                name_lower: v.name.to_lowercase(),
            })
            .collect();

        let mut compact_index = HashMap::with_capacity(entries.len());
        for entry in &entries {
            // First slug wins on compact collisions, matching catalog order.
            compact_index
                .entry(compact(&entry.slug))
                .or_insert_with(|| entry.slug.clone());
        }

        Self {
            entries,
            compact_index,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves a record against the catalog, cascading through the four
    /// strategies and stopping at the first hit. Returns `None` only after
    /// all of them fail; the caller must then fall back to stub creation.
    pub fn resolve(&self, candidates: &[String], display_name: &str) -> Option<String> {
        self.match_slug(candidates)
            .or_else(|| self.match_display_name(display_name))
            .or_else(|| self.match_compact(candidates))
            .or_else(|| self.match_slug_prefix(candidates))
    }

    /// Strategy 1: exact slug equality, tried per candidate in order.
    fn match_slug(&self, candidates: &[String]) -> Option<String> {
        candidates
            .iter()
            .find(|c| self.entries.iter().any(|e| &e.slug == *c))
            .cloned()
    }

    /// Strategy 2: case-insensitive exact equality of the display name.
    fn match_display_name(&self, display_name: &str) -> Option<String> {
        let needle = display_name.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .find(|e| e.name_lower == needle)
            .map(|e| e.slug.clone())
    }

    /// Strategy 3: compact candidate equality against the compact index.
    fn match_compact(&self, candidates: &[String]) -> Option<String> {
        candidates
            .iter()
            .find_map(|c| self.compact_index.get(&compact(c)))
            .cloned()
    }

    /// Strategy 4: candidate is a string-prefix of some catalog slug. First
    /// hit in catalog order wins.
    fn match_slug_prefix(&self, candidates: &[String]) -> Option<String> {
        candidates
            .iter()
            .filter(|c| c.len() >= MIN_PREFIX_LEN)
            .find_map(|c| {
                self.entries
                    .iter()
                    .find(|e| e.slug.starts_with(c.as_str()))
                    .map(|e| e.slug.clone())
            })
    }
}
