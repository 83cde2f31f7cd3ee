//! Reference tables read from the site's static data directory.

use std::fs;
use std::path::{Path, PathBuf};

use tnload_core::constants::{LAND_USE_FILE_NAME, TREATMENT_METHOD_FILE_NAME};
use tnload_core::{LandUseEntry, ReferenceSource, TreatmentMethodEntry};

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} is not a valid reference table: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Directory holding the land use and treatment method JSON files.
#[derive(Debug, Clone)]
pub struct DirSource {
    dir: PathBuf,
}

impl DirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn land_use_path(&self) -> PathBuf {
        self.dir.join(LAND_USE_FILE_NAME)
    }

    pub fn treatment_method_path(&self) -> PathBuf {
        self.dir.join(TREATMENT_METHOD_FILE_NAME)
    }

    fn read<T: serde::de::DeserializeOwned>(path: PathBuf) -> Result<T, SourceError> {
        let text = fs::read_to_string(&path).map_err(|source| SourceError::Io {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| SourceError::Json { path, source })
    }
}

impl ReferenceSource for DirSource {
    type Error = SourceError;

    fn load_land_uses(&self) -> Result<Vec<LandUseEntry>, Self::Error> {
        Self::read(self.land_use_path())
    }

    fn load_treatment_methods(&self) -> Result<Vec<TreatmentMethodEntry>, Self::Error> {
        Self::read(self.treatment_method_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tnload_core::LoadReductionCalculator;

    fn shipped_data() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../tnload-web/static/calculator")
    }

    #[test]
    fn loads_shipped_tables() {
        let calc = LoadReductionCalculator::from_source(&DirSource::new(shipped_data()))
            .expect("shipped tables load");
        assert!(!calc.tables().land_uses.is_empty());
        assert!(!calc.tables().treatment_methods.is_empty());
    }

    #[test]
    fn missing_directory_names_the_file() {
        let source = DirSource::new("/definitely/not/here");
        let err = source.load_land_uses().unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
        assert!(err.to_string().contains(LAND_USE_FILE_NAME));
    }
}
