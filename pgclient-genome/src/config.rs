use std::ffi::OsStr;
use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{
    DEFAULT_LOCATIONS_CAPACITY, DEFAULT_LOCATIONS_FILENAME, DEFAULT_LOCATIONS_SUBFOLDER,
};

///
/// Where to find the marker location resource and how large it is.
///
/// ```toml
/// path = "snps.data.gz"
/// capacity = 1200000
/// ```
///
/// A relative `path` is resolved against the directory of the config file.
///
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct LocationsConfig {
    pub path: PathBuf,
    pub capacity: Option<usize>,
}

#[derive(Error, Debug)]
pub enum LocationsConfigError {
    #[error("Missing or invalid file extension in locations config file. It must be `toml`")]
    InvalidFileType,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl LocationsConfig {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        LocationsConfig {
            path: path.into(),
            capacity: None,
        }
    }

    ///
    /// Path of the resource bundled with this crate.
    ///
    pub fn bundled_path() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join(DEFAULT_LOCATIONS_SUBFOLDER)
            .join(DEFAULT_LOCATIONS_FILENAME)
    }
}

impl Default for LocationsConfig {
    fn default() -> Self {
        LocationsConfig {
            path: LocationsConfig::bundled_path(),
            capacity: Some(DEFAULT_LOCATIONS_CAPACITY),
        }
    }
}

impl TryFrom<&Path> for LocationsConfig {
    type Error = LocationsConfigError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        if path.extension().and_then(OsStr::to_str) != Some("toml") {
            return Err(LocationsConfigError::InvalidFileType);
        }

        let toml_str = read_to_string(path)?;
        let mut config: LocationsConfig = toml::from_str(&toml_str)?;

        if config.path.is_relative() {
            if let Some(parent) = path.parent() {
                config.path = parent.join(&config.path);
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_try_from_toml() {
        let path = PathBuf::from("../tests/data/locations/locations.toml");
        let result = LocationsConfig::try_from(path.as_path());
        assert_eq!(result.is_ok(), true);
    }

    #[rstest]
    fn test_relative_path_is_resolved_against_config_dir() {
        let path = PathBuf::from("../tests/data/locations/locations.toml");
        let config = LocationsConfig::try_from(path.as_path()).unwrap();

        assert_eq!(
            config.path,
            PathBuf::from("../tests/data/locations/snps.sample.data.gz")
        );
        assert_eq!(config.capacity, Some(16));
    }

    #[rstest]
    fn test_capacity_is_optional() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("locations.toml");
        std::fs::write(&path, "path = \"/opt/markers/snps.data.gz\"\n").unwrap();

        let config = LocationsConfig::try_from(path.as_path()).unwrap();
        assert_eq!(config.path, PathBuf::from("/opt/markers/snps.data.gz"));
        assert_eq!(config.capacity, None);
    }

    #[rstest]
    fn test_invalid_extension() {
        let path = PathBuf::from("locations.yaml");
        let result = LocationsConfig::try_from(path.as_path());
        assert!(matches!(result, Err(LocationsConfigError::InvalidFileType)));
    }

    #[rstest]
    fn test_missing_path_key() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("locations.toml");
        std::fs::write(&path, "capacity = 10\n").unwrap();

        let result = LocationsConfig::try_from(path.as_path());
        assert!(matches!(result, Err(LocationsConfigError::Toml(_))));
    }

    #[rstest]
    fn test_default_points_at_bundled_resource() {
        let config = LocationsConfig::default();
        assert!(config.path.ends_with("data/snps.data.gz"));
        assert_eq!(config.capacity, Some(DEFAULT_LOCATIONS_CAPACITY));
    }
}
