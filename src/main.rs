//! # indice
//!
//! Regenerate the index section of underline-styled text documents.
//!
//! ## Usage
//!
//! Print a document with a fresh index:
//! ```sh
//! indice notes.txt
//! ```
//!
//! Rewrite it in place:
//! ```sh
//! indice -w notes.txt
//! ```
//!
//! Pipe a document through:
//! ```sh
//! cat notes.txt | indice
//! ```

mod cli;

use clap::Parser as ClapParser;
use cli::{Cli, OutputFormat};
use color_eyre::Result;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;

use indice::input::{InputError, determine_input_source, read_input};
use indice::{Config, IndexBuilder, Section, parse, render};

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    let source = match determine_input_source(args.file.as_deref()) {
        Ok(source) => source,
        Err(InputError::NoTty) => {
            eprintln!("Error: document file argument is required");
            eprintln!("\nUsage: indice [OPTIONS] <FILE>");
            eprintln!("       indice [OPTIONS] -");
            eprintln!("       cat doc.txt | indice [OPTIONS]\n");
            eprintln!("Use '-' to explicitly read from stdin, or pipe input.");
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error reading input: {}", e);
            process::exit(1);
        }
    };

    let write_path: Option<PathBuf> = source.path().map(Path::to_path_buf);
    if args.write {
        if write_path.is_none() {
            eprintln!("Error: --write requires a file operand, not stdin");
            process::exit(1);
        }
        if args.index_only || args.list || matches!(args.output, OutputFormat::Json) {
            eprintln!("Error: --write only applies to the plain rendered document");
            process::exit(1);
        }
    }

    let text = match read_input(source) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error reading input: {}", e);
            process::exit(1);
        }
    };

    let document = match parse(&text) {
        Ok(document) => document,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if args.list {
        print_sections(&document, 0);
        return Ok(());
    }

    // CLI flag takes priority over the config file.
    let config = Config::load();
    let title = args.title.clone().unwrap_or(config.index.title);
    let builder = IndexBuilder::new()
        .with_title(title)
        .with_indent(config.index.indent);

    if args.index_only {
        let stripped = builder.strip(&document);
        println!("{}", builder.contents(&stripped));
        return Ok(());
    }

    let indexed = builder.build(&document);

    match args.output {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&indexed)?);
        }
        OutputFormat::Plain => {
            let rendered = render(&indexed);
            match write_path {
                Some(path) if args.write => write_atomic(&path, &rendered)?,
                _ => println!("{}", rendered),
            }
        }
    }

    Ok(())
}

/// Print the section tree as an indented title listing.
fn print_sections(section: &Section, depth: usize) {
    println!("{}{}", "  ".repeat(depth), section.title);
    for subsection in &section.subsections {
        print_sections(subsection, depth + 1);
    }
}

/// Replace `path` with `contents` without leaving a torn file behind.
fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let mut file = tempfile::NamedTempFile::new_in(dir)?;
    file.write_all(contents.as_bytes())?;
    file.write_all(b"\n")?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
