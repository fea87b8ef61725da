//! Cross-references controls onto the standard elements they satisfy.

use crate::error::{Result, WeaveError};
use crate::model::{Control, Standard};
use std::collections::BTreeMap;
use tracing::debug;

/// Append every control as a justification onto each element its
/// `satisfies` mapping names.
///
/// Consumes the standards map and returns the linked copy. Feeding an
/// already-linked map back in duplicates every justification, so each run
/// links exactly once from freshly loaded standards. A reference to a
/// standard or element that was never loaded is fatal.
pub fn link(
    standards: BTreeMap<String, Standard>,
    controls: &[Control],
) -> Result<BTreeMap<String, Standard>> {
    let mut linked = standards;

    for control in controls {
        for (standard_name, element_keys) in &control.satisfies {
            let standard =
                linked
                    .get_mut(standard_name)
                    .ok_or_else(|| WeaveError::UnknownStandard {
                        control: control.label().to_string(),
                        standard: standard_name.clone(),
                    })?;
            for element_key in element_keys {
                let element = standard.elements.get_mut(element_key).ok_or_else(|| {
                    WeaveError::UnknownElement {
                        control: control.label().to_string(),
                        standard: standard_name.clone(),
                        element: element_key.clone(),
                    }
                })?;
                element
                    .justifications
                    .get_or_insert_with(Vec::new)
                    .push(control.clone());
                debug!(
                    control = control.label(),
                    standard = %standard_name,
                    element = %element_key,
                    "linked justification"
                );
            }
        }
    }

    Ok(linked)
}
