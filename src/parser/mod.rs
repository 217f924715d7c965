//! Parsing of underline-marked documents into a section tree.
//!
//! The document format uses two heading levels marked by underline runs: the
//! document title sits over a line of `=` characters, and each top-level
//! section title sits over a line of `-` characters. Parsing turns raw text
//! into a [`Section`] tree; it never looks at the filesystem and has no side
//! effects.

pub mod links;
pub mod scanner;
pub mod section;

pub use scanner::{LineClass, ParseError, classify_line};
pub use section::Section;

/// Parse a document into its root section.
///
/// The returned root carries the document title, empty `contents`, and one
/// subsection per `-`-underlined heading, in document order.
///
/// # Errors
///
/// Returns [`ParseError::MissingTitle`] if no title line underlined with `=`
/// exists in the input.
///
/// # Examples
///
/// ```
/// use indice::parser::parse;
///
/// let doc = parse("Doc\n===\nIntro\n-----\nhello\n").unwrap();
/// assert_eq!(doc.title, "Doc");
/// assert_eq!(doc.subsections[0].title, "Intro");
/// ```
pub fn parse(text: &str) -> Result<Section, ParseError> {
    scanner::split_document(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Doc\n===\nIntro\n-----\nhello\nBody\n-----\nworld\n";

    #[test]
    fn test_parse_round_trip_scenario() {
        let doc = parse(SAMPLE).unwrap();
        assert_eq!(doc.title, "Doc");
        assert_eq!(doc.contents, "");
        assert_eq!(
            doc.subsections,
            vec![
                Section::new("Intro", "hello\n"),
                Section::new("Body", "world\n"),
            ]
        );
    }

    #[test]
    fn test_parse_preserves_order() {
        let doc = parse("Doc\n===\nZeta\n-----\nz\nAlpha\n-----\na\nMid\n-----\nm\n").unwrap();
        let titles: Vec<_> = doc.subsections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn test_parse_title_only_document() {
        let doc = parse("Doc\n===\n").unwrap();
        assert_eq!(doc.title, "Doc");
        assert!(doc.subsections.is_empty());
    }

    #[test]
    fn test_parse_malformed_input() {
        assert!(parse("no headings anywhere\n").is_err());
    }

    #[test]
    fn test_parse_titles_with_spaces() {
        let doc = parse("My Long Doc\n===========\nFirst Part\n----------\ntext\n").unwrap();
        assert_eq!(doc.title, "My Long Doc");
        assert_eq!(doc.subsections[0].title, "First Part");
    }
}
