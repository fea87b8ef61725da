//! Gap analysis: certification references with no satisfying controls.

use crate::model::{Certification, Standard};
use std::collections::BTreeMap;
use std::fmt;

/// A referenced element nothing satisfies.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Gap {
    pub standard: String,
    pub element: String,
}

impl fmt::Display for Gap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.standard, self.element)
    }
}

/// For each certification, collect the referenced (standard, element) pairs
/// whose linked element carries no justifications. Elements missing from
/// the standards entirely count as gaps. Gaps come back sorted.
pub fn gap_analysis(
    certifications: &BTreeMap<String, Certification>,
    standards: &BTreeMap<String, Standard>,
) -> BTreeMap<String, Vec<Gap>> {
    let mut report = BTreeMap::new();

    for (name, certification) in certifications {
        let mut gaps = Vec::new();
        for (standard_name, elements) in &certification.standards {
            for element_key in elements.keys() {
                let satisfied = standards
                    .get(standard_name)
                    .and_then(|s| s.elements.get(element_key))
                    .is_some_and(|e| e.has_justifications());
                if !satisfied {
                    gaps.push(Gap {
                        standard: standard_name.clone(),
                        element: element_key.clone(),
                    });
                }
            }
        }
        gaps.sort();
        report.insert(name.clone(), gaps);
    }

    report
}
