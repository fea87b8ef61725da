//! Site navigation maintenance.

use crate::model::{NavEntry, SiteConfig};
use std::collections::BTreeMap;

/// Upsert the navigation record for `key`.
///
/// The first entry whose `text` matches is replaced in place; with no
/// match, a new record is appended at the end.
pub fn upsert_navigation(config: &mut SiteConfig, key: &str) {
    let entry = NavEntry {
        text: key.to_string(),
        url: format!("{key}/"),
        internal: true,
        extra: BTreeMap::new(),
    };

    if let Some(existing) = config.navigation.iter_mut().find(|e| e.text == key) {
        *existing = entry;
    } else {
        config.navigation.push(entry);
    }
}
