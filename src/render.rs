//! Serialization of a section tree back into underline-marked text.
//!
//! Heading decoration depends on nesting depth: the document title is
//! underlined with `=`, top-level sections with `-`, and anything deeper
//! falls back to an inline `# ` prefix with no underline. The parser only
//! produces two levels, so the fallback is reached only by trees built in
//! code.

use crate::parser::Section;

/// Render a section tree as document text.
///
/// Contents follow each heading verbatim; a newline is inserted before the
/// next heading when a section's contents do not end with one. The result
/// is trimmed of leading and trailing whitespace.
///
/// # Examples
///
/// ```
/// use indice::parser::Section;
/// use indice::render::render;
///
/// let doc = Section::with_subsections("Doc", "", vec![Section::new("Intro", "hello\n")]);
/// assert_eq!(render(&doc), "Doc\n===\nIntro\n-----\nhello");
/// ```
pub fn render(document: &Section) -> String {
    let mut out = String::new();
    render_section(document, 0, &mut out);
    out.trim().to_string()
}

fn render_section(section: &Section, depth: usize, out: &mut String) {
    let width = section.title.chars().count();
    match depth {
        0 => {
            out.push_str(&section.title);
            out.push('\n');
            out.push_str(&"=".repeat(width));
            out.push('\n');
        }
        1 => {
            out.push_str(&section.title);
            out.push('\n');
            out.push_str(&"-".repeat(width));
            out.push('\n');
        }
        _ => {
            out.push_str("# ");
            out.push_str(&section.title);
            out.push('\n');
        }
    }

    if !section.contents.is_empty() {
        out.push_str(&section.contents);
        if !section.contents.ends_with('\n') {
            out.push('\n');
        }
    }

    for subsection in &section.subsections {
        render_section(subsection, depth + 1, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::build_index;
    use crate::parser::parse;

    const SAMPLE: &str = "Doc\n===\nIntro\n-----\nhello\nBody\n-----\nworld\n";

    #[test]
    fn test_render_basic() {
        let doc = parse(SAMPLE).unwrap();
        assert_eq!(
            render(&doc),
            "Doc\n===\nIntro\n-----\nhello\nBody\n-----\nworld"
        );
    }

    #[test]
    fn test_underline_length_matches_title() {
        let doc = Section::with_subsections(
            "My Long Doc",
            "",
            vec![Section::new("Índice", "")],
        );
        let text = render(&doc);
        assert!(text.contains("My Long Doc\n===========\n"));
        // Character count, not byte count.
        assert!(text.ends_with("Índice\n------"));
    }

    #[test]
    fn test_deep_sections_use_inline_prefix() {
        let doc = Section::with_subsections(
            "Doc",
            "",
            vec![Section::with_subsections(
                "Guide",
                "intro\n",
                vec![Section::new("Advanced", "tips\n")],
            )],
        );
        assert_eq!(
            render(&doc),
            "Doc\n===\nGuide\n-----\nintro\n# Advanced\ntips"
        );
    }

    #[test]
    fn test_newline_inserted_before_next_heading() {
        let doc = Section::with_subsections(
            "Doc",
            "",
            vec![
                Section::new("Intro", "no trailing newline"),
                Section::new("Body", "world\n"),
            ],
        );
        assert_eq!(
            render(&doc),
            "Doc\n===\nIntro\n-----\nno trailing newline\nBody\n-----\nworld"
        );
    }

    #[test]
    fn test_render_indexed_document() {
        let indexed = build_index(&parse(SAMPLE).unwrap());
        assert_eq!(
            render(&indexed),
            "Doc\n===\n\
             Índice\n------\n\
             1. [Intro](#intro)\n2. [Body](#body)\n\
             Intro\n-----\nhello\n\
             Body\n-----\nworld"
        );
    }

    #[test]
    fn test_reparse_recovers_structure() {
        let doc = parse(SAMPLE).unwrap();
        let reparsed = parse(&render(&doc)).unwrap();
        assert_eq!(reparsed.title, doc.title);
        let titles: Vec<_> = reparsed.subsections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["Intro", "Body"]);
        assert_eq!(reparsed.subsections[0].contents, "hello\n");
    }

    #[test]
    fn test_reindexing_is_textually_stable() {
        let first = render(&build_index(&parse(SAMPLE).unwrap()));
        let second = render(&build_index(&parse(&first).unwrap()));
        let third = render(&build_index(&parse(&second).unwrap()));
        assert_eq!(first, second);
        assert_eq!(second, third);
        // Exactly one index section survives repeated runs.
        assert_eq!(second.matches("Índice").count(), 1);
    }
}
