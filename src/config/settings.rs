use std::path::{Path, PathBuf};

use hashlink::LinkedHashMap;
use saphyr::{LoadableYamlNode, Scalar, Yaml};
use snafu::prelude::*;
use tracing::debug;

use crate::ext::PathDisplayExt;

pub const SETTINGS_FILE_NAME: &str = ".buildtree.yaml";

fn get_settings_file_path(root: &Path) -> PathBuf {
    root.join(SETTINGS_FILE_NAME)
}

/// Defaults read from `.buildtree.yaml` in the target root. Every key is
/// optional and command-line arguments take precedence.
///
/// ```yaml
/// max_depth: 10
/// input_file: layout.txt
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub max_depth: Option<i64>,
    /// Relative to the root the settings file was found in
    pub input_file: Option<PathBuf>,
}

impl Settings {
    /// Reads the settings of `root`, falling back to defaults when there are none.
    pub async fn read(root: &Path) -> Result<Self, SettingsCreationError> {
        let path = get_settings_file_path(root);
        match compio::fs::read(&path).await {
            Ok(bytes) => {
                debug!(
                    "Read settings file {}: {} bytes",
                    path.display_absolute(),
                    bytes.len()
                );
                let contents = String::from_utf8(bytes).context(NotUtf8Snafu {
                    file_path: path.display_absolute(),
                })?;
                Self::try_from(contents.as_str())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No settings file in {}, using defaults", root.display());
                Ok(Self::default())
            }
            Err(e) => Err(e).context(ReadSnafu {
                file_path: path.display_absolute(),
            }),
        }
    }

    fn from_mapping(top_level: &LinkedHashMap<Yaml, Yaml>) -> Result<Self, SettingsCreationError> {
        let mut settings = Self::default();

        for (key, value) in top_level {
            match key.as_str() {
                Some("max_depth") => {
                    settings.max_depth = match value {
                        Yaml::Value(Scalar::Integer(depth)) => Some(*depth),
                        Yaml::Value(Scalar::Null) => None,
                        _ => return InvalidMaxDepthSnafu.fail(),
                    };
                }
                Some("input_file") => {
                    settings.input_file = match value {
                        Yaml::Value(Scalar::Null) => None,
                        _ => Some(value.as_str().context(InvalidInputFileSnafu)?.into()),
                    };
                }
                _ => debug!("Ignoring unknown settings key: {:?}", key),
            }
        }

        Ok(settings)
    }
}

impl TryFrom<&str> for Settings {
    type Error = SettingsCreationError;

    fn try_from(contents: &str) -> Result<Self, Self::Error> {
        let documents = Yaml::load_from_str(contents).context(ParseSnafu)?;

        // A file holding nothing but comments has no document at all
        let Some(document) = documents.first() else {
            return Ok(Self::default());
        };

        let top_level = document.as_mapping().context(TopLevelNotMapSnafu)?;
        Self::from_mapping(top_level)
    }
}

#[derive(Debug, Snafu)]
pub enum SettingsCreationError {
    #[snafu(display("Failed to read the settings file: {}", file_path))]
    ReadError {
        file_path: String,
        source: std::io::Error,
    },
    #[snafu(display("Settings file {} is not valid UTF-8", file_path))]
    NotUtf8Error {
        file_path: String,
        source: std::string::FromUtf8Error,
    },
    #[snafu(display("Failed to parse the settings file"))]
    ParseError { source: saphyr::ScanError },
    #[snafu(display("Top level of the settings file should be a map"))]
    TopLevelNotMap,
    #[snafu(display("'max_depth' should be an integer"))]
    InvalidMaxDepth,
    #[snafu(display("'input_file' should be a string"))]
    InvalidInputFile,
}
