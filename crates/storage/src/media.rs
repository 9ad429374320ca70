use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use log::{debug, warn};
use uuid::Uuid;

use liftlog_domain as domain;

/// Media files below `<documents>/WorkoutMedia`.
#[derive(Clone, Debug)]
pub struct MediaStore {
    documents: PathBuf,
}

impl MediaStore {
    pub fn new(documents: impl Into<PathBuf>) -> Self {
        Self {
            documents: documents.into(),
        }
    }

    /// Uses the platform documents directory, if there is one.
    #[must_use]
    pub fn from_documents_dir() -> Option<Self> {
        dirs::document_dir().map(Self::new)
    }

    #[must_use]
    pub fn documents(&self) -> &Path {
        &self.documents
    }

    #[must_use]
    pub fn directory(&self) -> PathBuf {
        domain::media_directory(&self.documents)
    }

    #[must_use]
    pub fn exists(&self, media: &domain::WorkoutMedia) -> bool {
        media.file_exists_in(&self.documents)
    }

    /// Writes a new media file and returns its path.
    ///
    /// # Errors
    ///
    /// Returns an error if `filename` is not a plain file name, if a file with
    /// that name already exists or if writing fails.
    pub fn import(&self, filename: &str, content: &[u8]) -> Result<PathBuf, MediaError> {
        if filename.is_empty()
            || filename.contains(['/', '\\'])
            || filename == "."
            || filename == ".."
        {
            return Err(MediaError::InvalidFilename(filename.to_string()));
        }
        let directory = self.directory();
        fs::create_dir_all(&directory)?;
        let path = directory.join(filename);
        if path.exists() {
            return Err(MediaError::AlreadyExists(filename.to_string()));
        }
        fs::write(&path, content)?;
        debug!("imported {} bytes to {}", content.len(), path.display());
        Ok(path)
    }

    /// Deletes the file of `media`. Returns `false` if there was no file.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file could not be deleted.
    pub fn remove(&self, media: &domain::WorkoutMedia) -> Result<bool, MediaError> {
        match fs::remove_file(media.file_path_in(&self.documents)) {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                warn!("media file {} already gone", media.filename);
                Ok(false)
            }
            Err(err) => Err(err.into()),
        }
    }
}

/// A unique file name with the extension used for `media_type`.
#[must_use]
pub fn new_filename(media_type: domain::MediaType) -> String {
    let extension = match media_type {
        domain::MediaType::Photo => "jpg",
        domain::MediaType::Video => "mov",
    };
    format!("{}.{extension}", Uuid::new_v4())
}

#[derive(thiserror::Error, Debug)]
pub enum MediaError {
    #[error("invalid file name: {0:?}")]
    InvalidFilename(String),
    #[error("media file already exists: {0}")]
    AlreadyExists(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
