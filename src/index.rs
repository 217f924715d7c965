//! Index generation over a section tree.
//!
//! The index is itself a section: its contents are one line per section of
//! the document, each a 1-based ordinal followed by a link to the section's
//! anchor, with nested subsections indented one unit per level. Building is
//! idempotent: any previously generated index is stripped before the fresh
//! one is computed, so re-indexing an already indexed document never
//! accumulates duplicates.

use crate::parser::links::as_link;
use crate::parser::{ParseError, Section, parse};

/// Reserved title of the generated index section.
pub const DEFAULT_INDEX_TITLE: &str = "Índice";

/// Indent unit for nested index entries, one per level of depth.
pub const DEFAULT_INDEX_INDENT: &str = "    ";

/// Builds the index section of a document.
///
/// The reserved title and the indent unit are configurable; the defaults
/// match the document format's conventions.
#[derive(Debug, Clone)]
pub struct IndexBuilder {
    title: String,
    indent: String,
}

impl Default for IndexBuilder {
    fn default() -> Self {
        Self {
            title: DEFAULT_INDEX_TITLE.to_string(),
            indent: DEFAULT_INDEX_INDENT.to_string(),
        }
    }
}

impl IndexBuilder {
    /// Create a builder with the default title and indent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different reserved title for the index section.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Use a different indent unit for nested entries.
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// The document without any existing index section.
    ///
    /// Index sections are only ever injected at the top level, so only the
    /// root's direct subsections are filtered.
    pub fn strip(&self, document: &Section) -> Section {
        Section::with_subsections(
            document.title.clone(),
            document.contents.clone(),
            document
                .subsections
                .iter()
                .filter(|section| section.title != self.title)
                .cloned()
                .collect(),
        )
    }

    /// The index body for a document, one line per section.
    ///
    /// Entries follow document order, never alphabetical. Each section's own
    /// subsections are listed directly after it, indented one level deeper.
    /// Expects a tree already stripped of any prior index; [`build`] does
    /// both steps.
    ///
    /// [`build`]: IndexBuilder::build
    pub fn contents(&self, document: &Section) -> String {
        let mut lines = Vec::new();
        self.push_entries(&document.subsections, 0, &mut lines);
        lines.join("\n")
    }

    fn push_entries(&self, sections: &[Section], depth: usize, lines: &mut Vec<String>) {
        for (ordinal, section) in sections.iter().enumerate() {
            lines.push(format!(
                "{}{}. {}",
                self.indent.repeat(depth),
                ordinal + 1,
                as_link(&section.title)
            ));
            self.push_entries(&section.subsections, depth + 1, lines);
        }
    }

    /// Rebuild the document with a fresh index as its first subsection.
    pub fn build(&self, document: &Section) -> Section {
        let stripped = self.strip(document);
        let index = Section::new(self.title.as_str(), self.contents(&stripped));

        let Section {
            title,
            contents,
            subsections: rest,
        } = stripped;
        let mut subsections = Vec::with_capacity(rest.len() + 1);
        subsections.push(index);
        subsections.extend(rest);
        Section::with_subsections(title, contents, subsections)
    }

    /// Parse raw text and rebuild it with a fresh index.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when the text has no document heading.
    pub fn build_text(&self, text: &str) -> Result<Section, ParseError> {
        Ok(self.build(&parse(text)?))
    }
}

/// Rebuild a document with a fresh `Índice` section using the defaults.
pub fn build_index(document: &Section) -> Section {
    IndexBuilder::new().build(document)
}
