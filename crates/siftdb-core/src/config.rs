use crate::{error::InitError, metadata::Metadata};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

///
/// Source
///
/// One JSON data file holding an array of flat objects for one entity type.
///

#[derive(Clone, Debug, Deserialize)]
pub struct Source {
    pub entity: String,
    pub file: String,
}

///
/// Config
///
/// Parsed initialization payload: the data directory, one source per entity
/// type, and the relationship metadata. Callers may build this in code or
/// read it from a JSON file via [`Config::load`].
///

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    pub directory: PathBuf,
    pub sources: Vec<Source>,
    pub metadata: Metadata,
}

impl Config {
    /// Read and parse a configuration file.
    ///
    /// A missing file is the file-not-found kind; malformed JSON is the
    /// deserialization kind — the same taxonomy data files use.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, InitError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|err| InitError::read(path, err))?;

        serde_json::from_slice(&bytes).map_err(|err| InitError::deserialize(path, err))
    }

    pub(crate) fn source_path(&self, source: &Source) -> PathBuf {
        self.directory.join(&source.file)
    }
}
