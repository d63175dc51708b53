use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// One DQL input, named for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub name: String,
    pub text: String,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("input is required: use a positional argument, - for stdin, or -q/--query")]
    Missing,

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read '{}': {source}", .path.display())]
    File { path: PathBuf, source: io::Error },

    #[error("failed to read directory '{}': {source}", .path.display())]
    Directory { path: PathBuf, source: io::Error },

    #[error("no .dql files found in '{}'", .0.display())]
    NoSources(PathBuf),
}

pub fn load_sources(
    query_path: Option<&Path>,
    query_text: Option<&str>,
) -> Result<Vec<SourceFile>, LoadError> {
    if let Some(text) = query_text {
        return Ok(vec![SourceFile::new("<query>", text)]);
    }

    let Some(path) = query_path else {
        return Err(LoadError::Missing);
    };

    if path.as_os_str() == "-" {
        return load_stdin().map(|s| vec![s]);
    }
    if path.is_dir() {
        return load_directory(path);
    }
    load_file(path).map(|s| vec![s])
}

fn load_stdin() -> Result<SourceFile, LoadError> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(LoadError::Stdin)?;
    Ok(SourceFile::new("<stdin>", buf))
}

fn load_file(path: &Path) -> Result<SourceFile, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::File {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(SourceFile::new(path.to_string_lossy(), text))
}

fn load_directory(dir: &Path) -> Result<Vec<SourceFile>, LoadError> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(|source| LoadError::Directory {
            path: dir.to_path_buf(),
            source,
        })?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "dql"))
        .collect();

    if paths.is_empty() {
        return Err(LoadError::NoSources(dir.to_path_buf()));
    }

    // Deterministic order
    paths.sort();
    tracing::debug!(dir = %dir.display(), files = paths.len(), "loading directory");

    paths.iter().map(|p| load_file(p)).collect()
}
