//! Input handling for stdin and file sources.
//!
//! The whole document is read into memory before processing begins; there is
//! no streaming. A `-` operand or a piped stdin both select standard input,
//! and a missing operand on an interactive terminal is an error rather than
//! a hang.

use std::fmt;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

/// Where the document text comes from.
#[derive(Debug)]
pub enum InputSource {
    /// Content already read from standard input.
    Stdin(String),
    /// A file to read.
    File(PathBuf),
}

impl InputSource {
    /// The backing file path, when there is one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            InputSource::Stdin(_) => None,
            InputSource::File(path) => Some(path),
        }
    }
}

/// Failure to resolve or read the input.
#[derive(Debug)]
pub enum InputError {
    /// No file operand and stdin is an interactive terminal.
    NoTty,
    /// The underlying read failed.
    Io(io::Error),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::NoTty => write!(f, "no input: pass a file path or pipe a document"),
            InputError::Io(err) => write!(f, "failed to read input: {}", err),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::NoTty => None,
            InputError::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for InputError {
    fn from(err: io::Error) -> Self {
        InputError::Io(err)
    }
}

/// Resolve the file operand into an input source.
///
/// `Some("-")` and a piped stdin with no operand both read standard input to
/// the end immediately; any other operand is kept as a path and read later
/// by [`read_input`].
pub fn determine_input_source(file: Option<&Path>) -> Result<InputSource, InputError> {
    match file {
        Some(path) if path.as_os_str() == "-" => read_stdin(),
        Some(path) => Ok(InputSource::File(path.to_path_buf())),
        None if io::stdin().is_terminal() => Err(InputError::NoTty),
        None => read_stdin(),
    }
}

fn read_stdin() -> Result<InputSource, InputError> {
    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;
    Ok(InputSource::Stdin(text))
}

/// Produce the full document text for a source.
pub fn read_input(source: InputSource) -> Result<String, InputError> {
    match source {
        InputSource::Stdin(text) => Ok(text),
        InputSource::File(path) => Ok(fs::read_to_string(path)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_operand_becomes_file_source() {
        let source = determine_input_source(Some(Path::new("doc.txt"))).unwrap();
        assert_eq!(source.path(), Some(Path::new("doc.txt")));
    }

    #[test]
    fn test_stdin_source_has_no_path() {
        let source = InputSource::Stdin("Doc\n===\n".to_string());
        assert_eq!(source.path(), None);
        assert_eq!(read_input(source).unwrap(), "Doc\n===\n");
    }

    #[test]
    fn test_read_input_missing_file() {
        let source = InputSource::File(PathBuf::from("/nonexistent/indice-test"));
        assert!(matches!(read_input(source), Err(InputError::Io(_))));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            InputError::NoTty.to_string(),
            "no input: pass a file path or pipe a document"
        );
    }
}
