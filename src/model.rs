//! Document model for the compliance data tree.
//!
//! Every keyed mapping is a `BTreeMap` so serialized artifacts come out in
//! sorted key order regardless of input file order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A compliance framework document broken into addressable elements.
///
/// Any top-level key other than `name` is an element keyed by its
/// identifier (e.g. `AC-2`, `SC-13`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standard {
    pub name: String,
    #[serde(flatten)]
    pub elements: BTreeMap<String, StandardElement>,
}

/// One addressable element of a standard.
///
/// `justifications` is absent until the linker attaches the first control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardElement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justifications: Option<Vec<Control>>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl StandardElement {
    /// Whether any control has been linked onto this element.
    pub fn has_justifications(&self) -> bool {
        self.justifications.as_ref().is_some_and(|j| !j.is_empty())
    }
}

/// A documented practice claiming to satisfy standard elements.
///
/// `satisfies` maps a standard name to the element keys the control
/// fulfills. Everything else in the document (name, narrative, references)
/// rides along untouched in `docs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Control {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub satisfies: BTreeMap<String, Vec<String>>,
    #[serde(flatten)]
    pub docs: BTreeMap<String, serde_yaml::Value>,
}

impl Control {
    /// Best-effort identifier for diagnostics.
    pub fn label(&self) -> &str {
        self.docs
            .get("name")
            .and_then(serde_yaml::Value::as_str)
            .unwrap_or("<unnamed>")
    }
}

/// A certification template: which standards/elements the program requires.
///
/// Each element key maps to a placeholder value that composition replaces
/// with a deep copy of the linked [`StandardElement`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    #[serde(default)]
    pub standards: BTreeMap<String, BTreeMap<String, serde_yaml::Value>>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

/// One family of the base-control document: a `name` plus keyed sections.
///
/// The entry type is generic because the aggregator treats section entries
/// as opaque values while the renderer needs them shaped as
/// [`SectionEntry`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlFamily<E> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<serde_yaml::Value>,
    #[serde(flatten)]
    pub sections: BTreeMap<String, Option<Vec<E>>>,
}

impl<E> ControlFamily<E> {
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_ref().and_then(serde_yaml::Value::as_str)
    }
}

/// The base-control template and its per-system fragments, keyed by family.
pub type BaseControl = BTreeMap<String, ControlFamily<serde_yaml::Value>>;

/// The merged control document as the renderer consumes it.
pub type MergedControls = BTreeMap<String, ControlFamily<SectionEntry>>;

/// One entry under a merged-control section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionEntry {
    pub title: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub justifications: Vec<Justification>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Justification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

/// Site configuration carrying the navigation list; every other attribute
/// round-trips untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub navigation: Vec<NavEntry>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavEntry {
    pub text: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub internal: bool,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_flattens_elements() {
        let standard: Standard = serde_yaml::from_str(
            "name: NIST-800-53\nAC-2:\n  title: Account Management\nSC-13:\n  title: Cryptographic Protection\n",
        )
        .unwrap();
        assert_eq!(standard.name, "NIST-800-53");
        assert_eq!(standard.elements.len(), 2);
        assert_eq!(
            standard.elements["AC-2"].title.as_deref(),
            Some("Account Management")
        );
        assert!(standard.elements["AC-2"].justifications.is_none());
    }

    #[test]
    fn test_control_keeps_documentation_attributes() {
        let control: Control = serde_yaml::from_str(
            "name: User Accounts\nsatisfies:\n  NIST-800-53:\n    - AC-2\nreferences:\n  - verification: https://example.gov/accounts\n",
        )
        .unwrap();
        assert_eq!(control.label(), "User Accounts");
        assert_eq!(control.satisfies["NIST-800-53"], vec!["AC-2"]);
        assert!(control.docs.contains_key("references"));
    }

    #[test]
    fn test_control_label_falls_back_when_unnamed() {
        let control: Control =
            serde_yaml::from_str("satisfies:\n  NIST-800-53:\n    - AC-2\n").unwrap();
        assert_eq!(control.label(), "<unnamed>");
    }

    #[test]
    fn test_family_null_sections_deserialize_as_absent() {
        let family: ControlFamily<serde_yaml::Value> =
            serde_yaml::from_str("name: Access Control\nreferences: ~\ngovernors: []\n").unwrap();
        assert_eq!(family.display_name(), Some("Access Control"));
        assert_eq!(family.sections["references"], None);
        assert_eq!(family.sections["governors"], Some(vec![]));
    }

    #[test]
    fn test_site_config_preserves_unknown_attributes() {
        let config: SiteConfig = serde_yaml::from_str(
            "title: Compliance Docs\nnavigation:\n  - text: Home\n    url: /\n    internal: true\n",
        )
        .unwrap();
        assert_eq!(config.navigation.len(), 1);
        assert_eq!(config.extra["title"], serde_yaml::Value::from("Compliance Docs"));

        let out = serde_yaml::to_string(&config).unwrap();
        assert!(out.contains("title: Compliance Docs"));
    }
}
