// Work identifier → key signature mapping, and the merge of per-collection
// mappings into one table.
//
// `WorkMapping` is a thin wrapper around a `BTreeMap`, so iteration order is
// always the serialized (lexicographic) order. Merging walks collections in
// declaration order; a key produced by two collections is a data-authoring
// bug, reported as a `Collision` and resolved by letting the later collection
// win.

use crate::catalog::Collection;
use crate::key::KeySignature;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::btree_map;
use tracing::warn;

/// Mapping from work identifier (e.g. `BWV846_prelude`) to its key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkMapping {
    entries: BTreeMap<String, KeySignature>,
}

impl WorkMapping {
    pub fn new() -> Self {
        WorkMapping::default()
    }

    /// Insert an entry, returning the entry it replaced, if any.
    pub fn insert(&mut self, id: impl Into<String>, key: KeySignature) -> Option<KeySignature> {
        self.entries.insert(id.into(), key)
    }

    pub fn get(&self, id: &str) -> Option<&KeySignature> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Identifiers in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in sorted order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, KeySignature> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a WorkMapping {
    type Item = (&'a String, &'a KeySignature);
    type IntoIter = btree_map::Iter<'a, String, KeySignature>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<S: Into<String>> FromIterator<(S, KeySignature)> for WorkMapping {
    fn from_iter<I: IntoIterator<Item = (S, KeySignature)>>(iter: I) -> Self {
        WorkMapping {
            entries: iter.into_iter().map(|(id, key)| (id.into(), key)).collect(),
        }
    }
}

/// A work identifier produced by more than one collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub id: String,
    /// Collection whose entry was overwritten.
    pub previous_collection: &'static str,
    pub previous: KeySignature,
    /// Collection whose entry was kept.
    pub collection: &'static str,
    pub current: KeySignature,
}

/// Output of merging a collection set.
#[derive(Debug, Clone)]
pub struct MergeResult {
    pub mapping: WorkMapping,
    /// Entry count per collection, in declaration order.
    pub counts: Vec<(&'static str, usize)>,
    pub collisions: Vec<Collision>,
}

/// Build every collection and merge the results in order.
///
/// Duplicates are logged and recorded but never rejected: the later
/// collection's entry replaces the earlier one.
pub fn merge_collections(collections: &[Collection]) -> MergeResult {
    let mut mapping = WorkMapping::new();
    let mut origin: BTreeMap<String, &'static str> = BTreeMap::new();
    let mut counts = Vec::with_capacity(collections.len());
    let mut collisions = Vec::new();

    for collection in collections {
        let partial = collection.build();
        counts.push((collection.name, partial.len()));

        for (id, key) in partial.entries {
            if let Some(previous) = mapping.insert(id.clone(), key) {
                let previous_collection = origin.get(&id).copied().unwrap_or("?");
                warn!(
                    id = %id,
                    previous_collection,
                    collection = collection.name,
                    "duplicate work id: {} replaced by {}",
                    previous,
                    key
                );
                collisions.push(Collision {
                    id: id.clone(),
                    previous_collection,
                    previous,
                    collection: collection.name,
                    current: key,
                });
            }
            origin.insert(id, collection.name);
        }
    }

    MergeResult {
        mapping,
        counts,
        collisions,
    }
}
