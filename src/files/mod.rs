//! Plain-text file access and directory listing for the open dialog.

use std::path::{Path, PathBuf};

use crate::error::{DocError, Result};

/// Read a UTF-8 text file, normalising Windows line endings to `\n`.
pub fn read_text(path: &Path) -> Result<String> {
    let text = std::fs::read_to_string(path).map_err(|source| DocError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if text.contains("\r\n") {
        return Ok(text.replace("\r\n", "\n"));
    }
    Ok(text)
}

/// Write `text` to `path` verbatim, replacing any existing file.
pub fn write_text(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text).map_err(|source| DocError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Append `ext` to `path` when it has no extension.
pub fn with_default_extension(path: &Path, ext: &str) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(ext)
    }
}

/// File-type filter offered by the open dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileFilter {
    #[default]
    TextFiles,
    AllFiles,
}

impl FileFilter {
    pub const fn label(self) -> &'static str {
        match self {
            Self::TextFiles => "Text Files (*.txt)",
            Self::AllFiles => "All Files (*.*)",
        }
    }

    /// The other filter.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::TextFiles => Self::AllFiles,
            Self::AllFiles => Self::TextFiles,
        }
    }

    /// Whether a file (not a directory) named `name` passes the filter.
    pub fn matches(self, name: &str) -> bool {
        match self {
            Self::AllFiles => true,
            Self::TextFiles => Path::new(name)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("txt")),
        }
    }
}

/// A directory entry shown in the open dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Display name (filename or "..")
    pub name: String,
    /// Full path to the entry
    pub path: PathBuf,
    /// Whether this entry is a directory
    pub is_dir: bool,
}

/// List `dir` for the open dialog.
///
/// The result starts with a `..` entry, followed by directories and then the
/// files passing `filter`, each group sorted case-insensitively. Hidden
/// entries are skipped. Returns the canonical directory alongside.
pub fn list_directory(dir: &Path, filter: FileFilter) -> Result<(PathBuf, Vec<DirEntry>)> {
    let read_err = |source| DocError::Read {
        path: dir.to_path_buf(),
        source,
    };
    let dir = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());

    let mut entries = vec![DirEntry {
        name: "..".to_string(),
        path: dir.parent().unwrap_or(&dir).to_path_buf(),
        is_dir: true,
    }];

    let mut dirs = Vec::new();
    let mut files = Vec::new();

    for entry in std::fs::read_dir(&dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let name = entry.file_name().to_string_lossy().to_string();
        // Skip hidden files/dirs
        if name.starts_with('.') {
            continue;
        }
        let path = entry.path();
        let is_dir = entry.file_type().map_err(read_err)?.is_dir();
        if is_dir {
            dirs.push(DirEntry { name, path, is_dir });
        } else if filter.matches(&name) {
            files.push(DirEntry {
                name,
                path,
                is_dir: false,
            });
        }
    }

    dirs.sort_by_key(|e| e.name.to_lowercase());
    files.sort_by_key(|e| e.name.to_lowercase());

    entries.extend(dirs);
    entries.extend(files);
    Ok((dir, entries))
}

/// Final path component for display, falling back to the whole path.
pub fn display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().to_string(),
    )
}
