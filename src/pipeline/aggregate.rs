//! Merges per-system control fragments into the base-control template.

use crate::model::BaseControl;

/// Merge `fragments` into `template`, in order.
///
/// The template defines the allowed shape: only family keys and section
/// keys it already carries accumulate entries, everything else a fragment
/// defines is dropped. A family's `name` attribute never accumulates.
/// Entries are appended as-is, duplicates included.
pub fn aggregate(template: BaseControl, fragments: Vec<BaseControl>) -> BaseControl {
    let mut merged = template;
    for fragment in &fragments {
        merge_fragment(&mut merged, fragment);
    }
    merged
}

fn merge_fragment(merged: &mut BaseControl, fragment: &BaseControl) {
    for (key, family) in merged.iter_mut() {
        let Some(addition) = fragment.get(key) else {
            continue;
        };
        for (section, accumulated) in family.sections.iter_mut() {
            match addition.sections.get(section) {
                Some(Some(entries)) if !entries.is_empty() => {
                    accumulated
                        .get_or_insert_with(Vec::new)
                        .extend(entries.iter().cloned());
                }
                _ => {}
            }
        }
    }
}
