use std::{
    path::{Path, PathBuf},
    slice::Iter,
};

use chrono::NaiveDateTime;
use derive_more::Deref;
use strum::{AsRefStr, EnumString};
use uuid::Uuid;

use crate::{Property, WorkoutID};

/// Subdirectory of the documents directory holding all media files.
pub const MEDIA_DIRECTORY: &str = "WorkoutMedia";

/// A photo or video attached to a workout.
///
/// Only the file name is stored. The file itself lives in the media directory
/// and may disappear independently of this reference.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutMedia {
    pub id: WorkoutMediaID,
    pub workout_id: Option<WorkoutID>,
    pub filename: String,
    pub media_type: MediaType,
    pub created_at: NaiveDateTime,
    pub caption: Option<String>,
}

impl WorkoutMedia {
    #[must_use]
    pub fn new(filename: String, media_type: MediaType, created_at: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4().into(),
            workout_id: None,
            filename,
            media_type,
            created_at,
            caption: None,
        }
    }

    /// Location of the media file below the platform documents directory.
    #[must_use]
    pub fn file_path(&self) -> Option<PathBuf> {
        dirs::document_dir().map(|documents| self.file_path_in(&documents))
    }

    #[must_use]
    pub fn file_path_in(&self, documents: &Path) -> PathBuf {
        media_directory(documents).join(&self.filename)
    }

    #[must_use]
    pub fn file_exists(&self) -> bool {
        self.file_path().is_some_and(|path| path.is_file())
    }

    #[must_use]
    pub fn file_exists_in(&self, documents: &Path) -> bool {
        self.file_path_in(documents).is_file()
    }
}

#[must_use]
pub fn media_directory(documents: &Path) -> PathBuf {
    documents.join(MEDIA_DIRECTORY)
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkoutMediaID(Uuid);

impl WorkoutMediaID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for WorkoutMediaID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for WorkoutMediaID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(AsRefStr, EnumString, Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[strum(serialize_all = "camelCase")]
pub enum MediaType {
    #[default]
    Photo,
    Video,
}

impl Property for MediaType {
    fn iter() -> Iter<'static, MediaType> {
        static MEDIA_TYPES: [MediaType; 2] = [MediaType::Photo, MediaType::Video];
        MEDIA_TYPES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            MediaType::Photo => "Photo",
            MediaType::Video => "Video",
        }
    }
}
