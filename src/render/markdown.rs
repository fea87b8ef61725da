//! Markdown page assembly for one control family.

use crate::model::{ControlFamily, SectionEntry};

/// Render the documentation page for one top-level control key.
///
/// Front matter, then one `###` heading per section entry with a bullet per
/// justification. Justifications with empty or missing text produce no
/// bullet at all.
pub fn render_page(key: &str, family: &ControlFamily<SectionEntry>) -> String {
    let mut markdown = front_matter(key, family.display_name());
    for entries in family.sections.values().flatten() {
        for entry in entries {
            markdown.push_str(&format!("### {}  \n", entry.title));
            for justification in &entry.justifications {
                if let Some(text) = justification.text.as_deref()
                    && !text.is_empty()
                {
                    markdown.push_str(&format!("* {text}  \n"));
                }
            }
            markdown.push_str("  \n");
        }
    }
    markdown
}

fn front_matter(key: &str, name: Option<&str>) -> String {
    let title = match name {
        Some(name) => format!("{key} - {name}"),
        None => key.to_string(),
    };
    format!("---\npermalink: /{key}/\ntitle: {title}\n---\n")
}
