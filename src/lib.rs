//! # indice
//!
//! A library for re-indexing underline-styled text documents.
//!
//! Documents use two heading levels marked by underline runs: the document
//! title over a line of `=` characters, and each section title over a line
//! of `-` characters. A reserved section (titled `Índice` by default) holds
//! an auto-generated listing of every section as a link, and is replaced
//! wholesale on every run.
//!
//! The pipeline is three pure steps: parse text into a [`Section`] tree,
//! rebuild the tree with a fresh index as its first subsection, and render
//! the tree back to text.
//!
//! ## Example
//!
//! ```rust
//! use indice::{build_index, parse, render};
//!
//! let text = "Doc\n===\nIntro\n-----\nhello\nBody\n-----\nworld\n";
//!
//! let document = parse(text).unwrap();
//! let indexed = build_index(&document);
//! assert_eq!(indexed.subsections[0].title, "Índice");
//! assert_eq!(
//!     indexed.subsections[0].contents,
//!     "1. [Intro](#intro)\n2. [Body](#body)"
//! );
//!
//! // Re-indexing the rendered output changes nothing.
//! let rendered = render(&indexed);
//! let again = render(&build_index(&parse(&rendered).unwrap()));
//! assert_eq!(rendered, again);
//! ```

/// Configuration module for the index title and indent unit.
pub mod config;

/// Index generation: strip the old index section, compute a new one.
pub mod index;

/// Input handling module for stdin and file sources.
pub mod input;

/// Parser module for underline-marked documents.
pub mod parser;

/// Renderer module serializing section trees back to text.
pub mod render;

// Re-export commonly used types for convenience
pub use config::Config;
pub use index::{IndexBuilder, build_index};
pub use parser::{ParseError, Section, parse};
pub use render::render;
