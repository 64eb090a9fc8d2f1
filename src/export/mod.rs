//! Export services: copy an image to the media library or share it.
//!
//! These only move or hand off the file an image reference points at; they
//! never touch the note store.

use log::{debug, info, trace};
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;
use thiserror::Error;

/// Errors from export services.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("image file is missing: {path}")]
    ImageMissing { path: PathBuf },

    #[error("sharing is not available: no share command configured")]
    ShareUnavailable,

    #[error("share command is empty")]
    EmptyShareCommand,

    #[error("failed to launch share command '{command}': {source}")]
    ShareLaunch {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("share command '{command}' exited with non-zero status")]
    ShareFailed { command: String },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Something that can export images out of the journal.
pub trait ExportService {
    /// Copies the referenced image into the media library and returns the
    /// path of the copy.
    fn copy_to_library(&self, image: &str) -> Result<PathBuf, ExportError>;

    /// Hands the referenced image to the platform share mechanism.
    fn share(&self, image: &str) -> Result<(), ExportError>;
}

/// Exports to a local library directory and an external share command.
#[derive(Debug, Clone)]
pub struct LocalExporter {
    library_dir: PathBuf,
    share_command: Option<String>,
}

impl LocalExporter {
    pub fn new(library_dir: impl Into<PathBuf>, share_command: Option<String>) -> Self {
        Self {
            library_dir: library_dir.into(),
            share_command,
        }
    }
}

impl ExportService for LocalExporter {
    /// Never overwrites: if the file name is taken, `-1`, `-2`, ... is
    /// appended to the stem.
    fn copy_to_library(&self, image: &str) -> Result<PathBuf, ExportError> {
        let source = image_path(image)?;

        fs::create_dir_all(&self.library_dir).map_err(|e| ExportError::Io {
            path: self.library_dir.clone(),
            source: e,
        })?;

        let mut input = File::open(&source).map_err(|e| ExportError::Io {
            path: source.clone(),
            source: e,
        })?;
        let (dest, mut output) = create_unique(&self.library_dir, &source)?;
        let copied = io::copy(&mut input, &mut output).and_then(|_| output.sync_all());
        if let Err(e) = copied {
            // Drop the partial copy so the name is free again
            let _ = fs::remove_file(&dest);
            return Err(ExportError::Io {
                path: dest,
                source: e,
            });
        }

        info!("saved {} to library as {}", source.display(), dest.display());
        Ok(dest)
    }

    fn share(&self, image: &str) -> Result<(), ExportError> {
        let source = image_path(image)?;
        let command = self
            .share_command
            .as_deref()
            .ok_or(ExportError::ShareUnavailable)?;

        // May include args like "xdg-open" or "kdeconnect-cli --share"
        let parts: Vec<&str> = command.split_whitespace().collect();
        let Some((program, args)) = parts.split_first() else {
            return Err(ExportError::EmptyShareCommand);
        };

        debug!("sharing {} via '{}'", source.display(), command);
        let status = Command::new(program)
            .args(args)
            .arg(&source)
            .status()
            .map_err(|e| ExportError::ShareLaunch {
                command: command.to_string(),
                source: e,
            })?;

        if !status.success() {
            return Err(ExportError::ShareFailed {
                command: command.to_string(),
            });
        }
        Ok(())
    }
}

/// Resolves an image reference to an existing file path.
///
/// Accepts plain paths and `file://` URIs.
fn image_path(image: &str) -> Result<PathBuf, ExportError> {
    let path = PathBuf::from(image.strip_prefix("file://").unwrap_or(image));
    if !path.is_file() {
        return Err(ExportError::ImageMissing { path });
    }
    Ok(path)
}

/// Creates a new file in `dir` named after `source` and returns it open.
///
/// A taken name gets `-1`, `-2`, ... appended to the stem. Each attempt is a
/// single `create_new` open, so two saves never end up sharing a file.
fn create_unique(dir: &Path, source: &Path) -> Result<(PathBuf, File), ExportError> {
    let file_name = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    let path = Path::new(&file_name);
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_name.clone());
    let ext = path.extension().map(|e| e.to_string_lossy().into_owned());

    let mut n: u32 = 0;
    loop {
        let dest = match (n, &ext) {
            (0, _) => dir.join(&file_name),
            (n, Some(ext)) => dir.join(format!("{}-{}.{}", stem, n, ext)),
            (n, None) => dir.join(format!("{}-{}", stem, n)),
        };
        match OpenOptions::new().write(true).create_new(true).open(&dest) {
            Ok(file) => return Ok((dest, file)),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                trace!("library name taken: {}", dest.display());
                n += 1;
            }
            Err(e) => return Err(ExportError::Io { path: dest, source: e }),
        }
    }
}
