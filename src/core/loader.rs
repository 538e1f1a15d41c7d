//! # Loader
//!
//! Reads a presentation file and hands it to the parser. All I/O failures are
//! mapped to [`LoadError`] so the CLI can print a one-line diagnostic.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::core::document::Document;
use crate::core::parser::{self, ParseError};

#[derive(Debug)]
pub enum LoadError {
    FileNotFound(PathBuf),
    Unreadable { path: PathBuf, source: io::Error },
    Parse(ParseError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::FileNotFound(path) => write!(f, "file '{}' not found", path.display()),
            LoadError::Unreadable { path, source } => {
                write!(f, "cannot read '{}': {source}", path.display())
            }
            LoadError::Parse(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::FileNotFound(_) => None,
            LoadError::Unreadable { source, .. } => Some(source),
            LoadError::Parse(e) => Some(e),
        }
    }
}

impl From<ParseError> for LoadError {
    fn from(e: ParseError) -> Self {
        LoadError::Parse(e)
    }
}

/// Read and parse the presentation at `path`.
pub fn load(path: &Path) -> Result<Document, LoadError> {
    let source = fs::read_to_string(path).map_err(|e| {
        warn!("Failed to read {}: {}", path.display(), e);
        match e.kind() {
            io::ErrorKind::NotFound => LoadError::FileNotFound(path.to_path_buf()),
            _ => LoadError::Unreadable {
                path: path.to_path_buf(),
                source: e,
            },
        }
    })?;
    info!("Loaded {} ({} bytes)", path.display(), source.len());

    Ok(parser::parse(&source)?)
}
