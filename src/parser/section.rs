//! Section tree for underline-marked documents.
//!
//! A section is a titled unit of the document: its own body text plus an
//! ordered list of nested sections. Trees are immutable values: every
//! transformation in the pipeline builds a new tree rather than mutating
//! one in place.

use serde::{Deserialize, Serialize};

/// A titled unit of the document.
///
/// The root section represents the whole document; its `contents` is always
/// empty and all prose lives in its subsections. Subsection order follows
/// the order of appearance in the source text and is preserved by every
/// transformation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Heading text without the underline markup.
    pub title: String,
    /// Body text belonging directly to this section, excluding any nested
    /// subsections' headings or bodies.
    pub contents: String,
    /// Directly nested sections, in document order.
    pub subsections: Vec<Section>,
}

impl Section {
    /// Create a leaf section with no subsections.
    pub fn new(title: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            contents: contents.into(),
            subsections: Vec::new(),
        }
    }

    /// Create a section with the given subsections.
    pub fn with_subsections(
        title: impl Into<String>,
        contents: impl Into<String>,
        subsections: Vec<Section>,
    ) -> Self {
        Self {
            title: title.into(),
            contents: contents.into(),
            subsections,
        }
    }

    /// Find a section by title anywhere in this subtree, depth-first.
    ///
    /// Returns the first match in document order, starting with this
    /// section itself.
    pub fn find(&self, title: &str) -> Option<&Section> {
        if self.title == title {
            return Some(self);
        }
        self.subsections.iter().find_map(|sub| sub.find(title))
    }

    /// Total number of sections in this subtree, including this one.
    pub fn section_count(&self) -> usize {
        1 + self
            .subsections
            .iter()
            .map(Section::section_count)
            .sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Section {
        Section::with_subsections(
            "Doc",
            "",
            vec![
                Section::new("Intro", "hello\n"),
                Section::with_subsections("Body", "world\n", vec![Section::new("Detail", "")]),
            ],
        )
    }

    #[test]
    fn test_find_nested() {
        let doc = sample();
        assert_eq!(doc.find("Doc").unwrap().title, "Doc");
        assert_eq!(doc.find("Detail").unwrap().title, "Detail");
        assert!(doc.find("Missing").is_none());
    }

    #[test]
    fn test_section_count() {
        assert_eq!(sample().section_count(), 4);
        assert_eq!(Section::new("Solo", "").section_count(), 1);
    }
}
