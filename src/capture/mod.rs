//! Image capture: produce an image reference for a new note.
//!
//! The journal never decodes image bytes. A capture service hands back an
//! opaque reference string that is stored verbatim in the note's `uri`.

use log::{debug, info};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use ulid::Ulid;

/// Directory (inside the journal directory) that holds imported images.
pub const IMAGES_DIR: &str = "images";

/// Errors from a capture service.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("image not found: {path}")]
    SourceNotFound { path: PathBuf },

    #[error("not a file: {path}")]
    NotAFile { path: PathBuf },

    #[error("failed to store image {source_path} into {dest}: {source}")]
    Copy {
        source_path: PathBuf,
        dest: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Something that can produce a reference to a freshly captured image.
pub trait CaptureService {
    fn capture(&self) -> Result<String, CaptureError>;
}

/// How an imported image is referenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportMode {
    /// Copy the file into the journal's image directory.
    #[default]
    Copy,
    /// Reference the source file where it is.
    Link,
}

/// Captures by importing an existing image file from disk.
///
/// In `Copy` mode the file is copied to `<images_dir>/<ULID>.<ext>` and the
/// absolute path of the copy is the reference. In `Link` mode the reference
/// is the absolute path of the source.
#[derive(Debug, Clone)]
pub struct FileImport {
    source: PathBuf,
    images_dir: PathBuf,
    mode: ImportMode,
}

impl FileImport {
    pub fn new(source: impl Into<PathBuf>, images_dir: impl Into<PathBuf>, mode: ImportMode) -> Self {
        Self {
            source: source.into(),
            images_dir: images_dir.into(),
            mode,
        }
    }

    fn checked_source(&self) -> Result<PathBuf, CaptureError> {
        let metadata = fs::metadata(&self.source).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => CaptureError::SourceNotFound {
                path: self.source.clone(),
            },
            _ => CaptureError::Io {
                path: self.source.clone(),
                source: e,
            },
        })?;
        if !metadata.is_file() {
            return Err(CaptureError::NotAFile {
                path: self.source.clone(),
            });
        }
        fs::canonicalize(&self.source).map_err(|e| CaptureError::Io {
            path: self.source.clone(),
            source: e,
        })
    }
}

impl CaptureService for FileImport {
    fn capture(&self) -> Result<String, CaptureError> {
        let source = self.checked_source()?;

        let reference = match self.mode {
            ImportMode::Link => {
                debug!("linking image in place: {}", source.display());
                source
            }
            ImportMode::Copy => {
                fs::create_dir_all(&self.images_dir).map_err(|e| CaptureError::Io {
                    path: self.images_dir.clone(),
                    source: e,
                })?;
                let dest = self.images_dir.join(imported_file_name(&source));
                fs::copy(&source, &dest).map_err(|e| CaptureError::Copy {
                    source_path: source.clone(),
                    dest: dest.clone(),
                    source: e,
                })?;
                info!("imported {} as {}", source.display(), dest.display());
                fs::canonicalize(&dest).unwrap_or(dest)
            }
        };

        Ok(reference.to_string_lossy().into_owned())
    }
}

/// Returns a fresh ULID file name keeping the source's extension.
fn imported_file_name(source: &Path) -> String {
    let stem = Ulid::new().to_string();
    match source.extension().and_then(|e| e.to_str()) {
        Some(ext) if !ext.is_empty() => format!("{}.{}", stem, ext.to_ascii_lowercase()),
        _ => stem,
    }
}
