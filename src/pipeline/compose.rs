//! Fills certification templates with linked standard elements.

use crate::error::{Result, WeaveError};
use crate::model::{Certification, Standard};
use std::collections::BTreeMap;
use std::fmt;

/// A certification reference no linked standard element could fill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedReference {
    pub certification: String,
    pub standard: String,
    pub element: String,
}

impl fmt::Display for UnresolvedReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: no linked element for {}/{}",
            self.certification, self.standard, self.element
        )
    }
}

/// Replace each certification placeholder with a deep copy of the linked
/// element when one exists.
///
/// Placeholders whose (standard, element) pair is absent from the linked
/// map pass through untouched; each such pair is recorded in the returned
/// report rather than dropped silently. The copy is structural: mutating
/// the source standard afterwards leaves composed certifications alone.
pub fn compose(
    certifications: BTreeMap<String, Certification>,
    standards: &BTreeMap<String, Standard>,
) -> Result<(BTreeMap<String, Certification>, Vec<UnresolvedReference>)> {
    let mut composed = certifications;
    let mut unresolved = Vec::new();

    for (certification_name, certification) in composed.iter_mut() {
        for (standard_name, elements) in certification.standards.iter_mut() {
            let linked_standard = standards.get(standard_name);
            for (element_key, slot) in elements.iter_mut() {
                match linked_standard.and_then(|s| s.elements.get(element_key)) {
                    Some(element) => {
                        *slot =
                            serde_yaml::to_value(element).map_err(|e| WeaveError::EncodeYaml {
                                what: format!("element {standard_name}/{element_key}"),
                                source: e,
                            })?;
                    }
                    None => unresolved.push(UnresolvedReference {
                        certification: certification_name.clone(),
                        standard: standard_name.clone(),
                        element: element_key.clone(),
                    }),
                }
            }
        }
    }

    Ok((composed, unresolved))
}
