//! Directory scanner for audio files

use crate::error::{Error, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Extension of the audio files matched against the table
pub const DEFAULT_EXTENSION: &str = ".wav";

/// File names found in an audio directory
#[derive(Debug, Clone)]
pub struct AudioFileSet {
    /// Directory that was scanned
    pub dir: PathBuf,
    /// Extension including the leading dot (e.g. ".wav")
    pub extension: String,
    /// Base file names, extension included
    names: HashSet<String>,
}

impl AudioFileSet {
    /// Build a set from names directly, without touching the filesystem
    pub fn from_names<I, S>(extension: &str, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            dir: PathBuf::new(),
            extension: normalize_extension(extension),
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over names in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

/// List the direct entries of `dir` whose names end in `extension`
///
/// Dot-prefixed names are included like any other. Names that are not valid
/// UTF-8 are skipped. Matching is case-sensitive.
pub fn scan_audio_directory<P: AsRef<Path>>(dir: P, extension: &str) -> Result<AudioFileSet> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(Error::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let extension = normalize_extension(extension);
    let mut names = HashSet::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry?;

        let Some(name) = entry.file_name().to_str() else {
            warn!(path = %entry.path().display(), "skipping entry with non UTF-8 name");
            continue;
        };

        if is_audio_name(name, &extension) {
            names.insert(name.to_string());
        }
    }

    debug!(dir = %dir.display(), files = names.len(), %extension, "scanned audio directory");

    Ok(AudioFileSet {
        dir: dir.to_path_buf(),
        extension,
        names,
    })
}

/// Make sure an extension carries its leading dot
pub fn normalize_extension(extension: &str) -> String {
    if extension.starts_with('.') {
        extension.to_string()
    } else {
        format!(".{}", extension)
    }
}

/// `name` ends with `extension`, the same set a `*<ext>` pattern lists
fn is_audio_name(name: &str, extension: &str) -> bool {
    name.ends_with(extension)
}
