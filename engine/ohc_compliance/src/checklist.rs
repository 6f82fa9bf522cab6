use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::CATALOG;

/// Which mandatory items the reviewer found present in the report.
///
/// Keys follow the catalog; a key that was never set counts as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChecklistRecord {
    items: BTreeMap<String, bool>,
}

impl ChecklistRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every catalog item marked present.
    pub fn complete() -> Self {
        CATALOG.iter().map(|item| (item.key, true)).collect()
    }

    pub fn set(&mut self, key: impl Into<String>, present: bool) {
        self.items.insert(key.into(), present);
    }

    /// Builder form of [`ChecklistRecord::set`].
    pub fn with(mut self, key: impl Into<String>, present: bool) -> Self {
        self.set(key, present);
        self
    }

    /// Flip an item, as a reviewer toggling a checkbox would.
    pub fn toggle(&mut self, key: &str) -> bool {
        let entry = self.items.entry(key.to_string()).or_insert(false);
        *entry = !*entry;
        *entry
    }

    pub fn is_present(&self, key: &str) -> bool {
        self.items.get(key).copied().unwrap_or(false)
    }

    /// Keys that do not name any catalog item.
    pub fn unknown_keys(&self) -> impl Iterator<Item = &str> {
        self.items
            .keys()
            .map(String::as_str)
            .filter(|key| !CATALOG.iter().any(|item| item.key == *key))
    }
}

impl<K: Into<String>> FromIterator<(K, bool)> for ChecklistRecord {
    fn from_iter<I: IntoIterator<Item = (K, bool)>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
