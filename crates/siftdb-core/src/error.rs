use std::{
    io,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;

///
/// InitError
///
/// Initialization failures. All are fatal to the attempt: no partial engine
/// state survives any of them, and retry means fixing the input and calling
/// init again. Query-time "no result" is not an error and never appears here.
///

#[derive(Debug, ThisError)]
pub enum InitError {
    #[error("data directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to deserialize {path}: {reason}")]
    Deserialize { path: PathBuf, reason: String },

    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("relationship references unknown entity type: {entity}")]
    UnknownRelationshipEntity { entity: String },
}

impl InitError {
    pub(crate) fn deserialize(path: &Path, reason: impl ToString) -> Self {
        Self::Deserialize {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn read(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            return Self::FileNotFound {
                path: path.to_path_buf(),
            };
        }

        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
