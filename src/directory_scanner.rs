// SPDX-License-Identifier: MPL-2.0
//! Directory scanner module for building the carousel image list.
//!
//! Command-line arguments may name image files, http(s) URLs or directories.
//! Directories expand into every supported image they directly contain,
//! sorted alphabetically by file name.

use crate::error::Result;
use crate::media::{self, ImageSource};
use std::path::{Path, PathBuf};

/// Scans a directory for supported images, sorted by file name.
///
/// Returns an error if the directory cannot be read.
pub fn scan_directory(directory: &Path) -> Result<Vec<PathBuf>> {
    let mut image_files = Vec::new();

    for entry in std::fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && media::is_supported_image(&path) {
            image_files.push(path);
        }
    }

    image_files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(image_files)
}

/// Expands raw arguments into an ordered image list.
///
/// Unreadable directories are logged and skipped so one bad argument does
/// not empty the whole carousel.
pub fn expand_arguments<I, S>(arguments: I) -> Vec<ImageSource>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut sources = Vec::new();

    for raw in arguments {
        let raw = raw.as_ref();
        let source = ImageSource::parse(raw);

        match &source {
            ImageSource::File(path) if path.is_dir() => match scan_directory(path) {
                Ok(files) => {
                    tracing::debug!(directory = %path.display(), count = files.len(), "scanned directory");
                    sources.extend(files.into_iter().map(ImageSource::File));
                }
                Err(err) => {
                    tracing::warn!(directory = %path.display(), %err, "failed to scan directory");
                }
            },
            _ => sources.push(source),
        }
    }

    sources
}
