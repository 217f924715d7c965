//! Line-oriented scanner for heading detection.
//!
//! Headings in this format are two-line constructs: a title line of word
//! characters and spaces, immediately followed by a line consisting only of
//! repeated underline characters (`=` for the document title, `-` for a
//! top-level section). The scanner classifies each line on its own and pairs
//! titles with underlines through a held-back "pending title": a candidate
//! only becomes a heading once the very next line turns out to be an
//! underline run. This keeps recognition anchored to line starts, so a
//! `-----`-like run inside a paragraph never splits a section.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use super::section::Section;

/// Classification of a single source line, without its trailing newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// Word characters and spaces only, a heading title if the next line
    /// is an underline run.
    TitleCandidate,
    /// A run of `=` characters: underlines the document title.
    UnderlinePrimary,
    /// A run of `-` characters: underlines a section title.
    UnderlineSecondary,
    /// An empty line.
    Blank,
    /// Anything else.
    Body,
}

/// Failure to locate a document heading in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// No title line followed by a line of `=` characters was found.
    MissingTitle,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MissingTitle => write!(
                f,
                "no document title found: expected a title line followed by a line of `=` characters"
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Classify a single line.
///
/// The line must not include its trailing newline. Underline runs win over
/// title candidates by construction: `=` and `-` are not word characters.
pub fn classify_line(line: &str) -> LineClass {
    static TITLE: OnceLock<Regex> = OnceLock::new();
    static PRIMARY: OnceLock<Regex> = OnceLock::new();
    static SECONDARY: OnceLock<Regex> = OnceLock::new();

    let title = TITLE.get_or_init(|| Regex::new(r"^[\w ]+$").unwrap());
    let primary = PRIMARY.get_or_init(|| Regex::new(r"^=+$").unwrap());
    let secondary = SECONDARY.get_or_init(|| Regex::new(r"^-+$").unwrap());

    if line.is_empty() {
        LineClass::Blank
    } else if primary.is_match(line) {
        LineClass::UnderlinePrimary
    } else if secondary.is_match(line) {
        LineClass::UnderlineSecondary
    } else if title.is_match(line) {
        LineClass::TitleCandidate
    } else {
        LineClass::Body
    }
}

fn strip_newline(raw: &str) -> &str {
    raw.strip_suffix('\n').unwrap_or(raw)
}

/// Split a whole document into its root section.
///
/// The root is the first title line underlined with `=`; any preamble before
/// it is ignored, and blank lines directly after the underline are consumed.
/// Everything that follows becomes the body, split into subsections. The
/// root's own `contents` is always empty.
pub(crate) fn split_document(text: &str) -> Result<Section, ParseError> {
    let lines: Vec<&str> = text.split_inclusive('\n').collect();

    let mut pending: Option<usize> = None;
    let mut heading: Option<(usize, usize)> = None;
    for (i, raw) in lines.iter().enumerate() {
        match classify_line(strip_newline(raw)) {
            LineClass::TitleCandidate => pending = Some(i),
            LineClass::UnderlinePrimary => {
                if let Some(title_idx) = pending.take() {
                    heading = Some((title_idx, i));
                    break;
                }
            }
            _ => pending = None,
        }
    }

    let Some((title_idx, underline_idx)) = heading else {
        return Err(ParseError::MissingTitle);
    };
    let title = strip_newline(lines[title_idx]);

    let mut body_start = underline_idx + 1;
    while body_start < lines.len()
        && classify_line(strip_newline(lines[body_start])) == LineClass::Blank
    {
        body_start += 1;
    }
    let body: String = lines[body_start..].concat();

    Ok(Section::with_subsections(title, "", split_subsections(&body)))
}

/// Split body text into the sections marked by `-` underlines.
///
/// Text before the first heading is dropped, as is everything from a later
/// `=`-underlined heading onward. A held-back title candidate that is not
/// followed by an underline flows back into the current section's contents.
pub(crate) fn split_subsections(text: &str) -> Vec<Section> {
    fn flush_pending(pending: &mut Option<&str>, current: &mut Option<Section>) {
        if let Some(raw) = pending.take() {
            if let Some(section) = current.as_mut() {
                section.contents.push_str(raw);
            }
        }
    }

    let mut sections: Vec<Section> = Vec::new();
    let mut current: Option<Section> = None;
    let mut pending: Option<&str> = None;
    let mut skip_blanks = false;

    for raw in text.split_inclusive('\n') {
        match classify_line(strip_newline(raw)) {
            LineClass::TitleCandidate => {
                flush_pending(&mut pending, &mut current);
                pending = Some(raw);
                skip_blanks = false;
            }
            LineClass::UnderlineSecondary => {
                if let Some(title_raw) = pending.take() {
                    if let Some(section) = current.take() {
                        sections.push(section);
                    }
                    current = Some(Section::new(strip_newline(title_raw), ""));
                    skip_blanks = true;
                } else {
                    if let Some(section) = current.as_mut() {
                        section.contents.push_str(raw);
                    }
                    skip_blanks = false;
                }
            }
            LineClass::UnderlinePrimary => {
                if pending.take().is_some() {
                    // A second document heading: the scan stops here and the
                    // remainder of the input is dropped.
                    break;
                }
                if let Some(section) = current.as_mut() {
                    section.contents.push_str(raw);
                }
                skip_blanks = false;
            }
            LineClass::Blank => {
                flush_pending(&mut pending, &mut current);
                if !skip_blanks {
                    if let Some(section) = current.as_mut() {
                        section.contents.push_str(raw);
                    }
                }
            }
            LineClass::Body => {
                flush_pending(&mut pending, &mut current);
                if let Some(section) = current.as_mut() {
                    section.contents.push_str(raw);
                }
                skip_blanks = false;
            }
        }
    }

    flush_pending(&mut pending, &mut current);
    if let Some(section) = current.take() {
        sections.push(section);
    }
    sections
}
