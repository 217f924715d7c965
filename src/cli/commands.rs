use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "indice")]
#[command(version)]
#[command(about = "Regenerate the index section of underline-styled text documents")]
#[command(
    long_about = "indice - Rebuild the table-of-contents section of a text document.\n\n\
    Reads a document whose headings are marked by underline runs (`=` for the\n\
    document title, `-` for sections), replaces any existing index section with\n\
    a freshly generated one, and prints the result. Re-running on its own\n\
    output is a no-op.\n\n\
    Examples:\n  \
    indice notes.txt              # Print the re-indexed document\n  \
    indice -w notes.txt           # Rewrite the file in place\n  \
    cat notes.txt | indice        # Pipe a document through\n  \
    indice -i notes.txt           # Print only the index entries\n  \
    indice -o json notes.txt      # Dump the indexed section tree as JSON"
)]
pub struct Cli {
    /// Document to process, or '-' for stdin
    ///
    /// Path to the document to re-index. Use '-' to read from stdin.
    /// If no file is specified and stdin is piped, input is read from stdin.
    pub file: Option<PathBuf>,

    /// Print only the generated index entries
    ///
    /// Skips rendering the document and prints just the index body: one
    /// `<ordinal>. [Title](#anchor)` line per section, nested entries
    /// indented by depth.
    #[arg(short = 'i', long = "index-only")]
    pub index_only: bool,

    /// List section titles, indented by depth (non-interactive)
    ///
    /// Prints the parsed document structure without generating an index.
    #[arg(short = 'l', long = "list")]
    pub list: bool,

    /// Output format for the re-indexed document
    ///
    /// Controls what is printed:
    ///   plain - The rendered document text (default)
    ///   json  - The indexed section tree as pretty-printed JSON
    #[arg(short = 'o', long = "output", default_value = "plain")]
    pub output: OutputFormat,

    /// Rewrite the input file in place
    ///
    /// Replaces FILE with the re-indexed document, written atomically.
    /// Requires a real file operand and the plain output format.
    #[arg(short = 'w', long = "write")]
    pub write: bool,

    /// Override the reserved index section title
    ///
    /// The section with this title is stripped and regenerated. Defaults to
    /// the configured title, or 'Índice'.
    ///
    /// Example: --title Contents
    #[arg(long = "title", value_name = "TITLE")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Rendered document text
    Plain,
    /// Pretty-printed JSON section tree
    Json,
}
