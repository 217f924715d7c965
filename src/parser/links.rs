//! Anchor slugs and link rendering for section titles.
//!
//! Index entries point at sections through markup-style links whose anchor
//! is derived from the title. The slug algorithm is deliberately minimal:
//! lowercase the title and collapse whitespace runs into single hyphens.
//! Punctuation passes through unchanged; titles are restricted to word
//! characters and spaces by the document grammar, so nothing else normally
//! reaches this point.

/// Derive the anchor slug for a section title.
///
/// # Examples
///
/// ```
/// use indice::parser::links::slugify;
///
/// assert_eq!(slugify("My Section Title"), "my-section-title");
/// assert_eq!(slugify("Índice"), "índice");
/// ```
pub fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Render a title as a link to its own anchor.
///
/// The visible text is the title unchanged; the target is its slug.
///
/// # Examples
///
/// ```
/// use indice::parser::links::as_link;
///
/// assert_eq!(as_link("Getting Started"), "[Getting Started](#getting-started)");
/// ```
pub fn as_link(title: &str) -> String {
    format!("[{}](#{})", title, slugify(title))
}
