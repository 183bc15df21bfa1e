use std::path::PathBuf;

use snafu::prelude::*;
use tracing::debug;

use crate::application::RuntimeConfig;
use crate::config::Settings;
use crate::ext::PathDisplayExt;

/// Where the tree drawing comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Inline(String),
    File(PathBuf),
    Stdin,
}

impl InputSource {
    /// Picks the source in order of precedence: the positional argument
    /// (`-` for stdin), `--input-file`, the settings' `input_file`, then a
    /// piped stdin.
    pub fn select(
        config: &RuntimeConfig,
        settings: &Settings,
        stdin_is_terminal: bool,
    ) -> Result<Self, InputError> {
        if let Some(structure) = &config.structure {
            return Ok(if structure == "-" {
                InputSource::Stdin
            } else {
                InputSource::Inline(structure.clone())
            });
        }

        if let Some(path) = &config.input_file {
            return Ok(InputSource::File(path.clone()));
        }

        if let Some(path) = &settings.input_file {
            return Ok(InputSource::File(config.root.join(path)));
        }

        ensure!(!stdin_is_terminal, NoInputSnafu);
        Ok(InputSource::Stdin)
    }

    pub async fn read(self) -> Result<String, InputError> {
        match self {
            InputSource::Inline(structure) => Ok(structure),
            InputSource::File(path) => {
                let file_path = path.display_absolute();
                debug!("Reading structure from {file_path}");
                let bytes = compio::fs::read(&path)
                    .await
                    .context(ReadFileSnafu {
                        file_path: file_path.clone(),
                    })?;
                String::from_utf8(bytes).context(NotUtf8Snafu { file_path })
            }
            InputSource::Stdin => {
                debug!("Reading structure from stdin");
                std::io::read_to_string(std::io::stdin()).context(ReadStdinSnafu)
            }
        }
    }
}

#[derive(Debug, Snafu)]
pub enum InputError {
    #[snafu(display("No input structure provided"))]
    NoInput,
    #[snafu(display("Failed to read the structure file: {}", file_path))]
    ReadFileError {
        file_path: String,
        source: std::io::Error,
    },
    #[snafu(display("Structure file {} is not valid UTF-8", file_path))]
    NotUtf8Error {
        file_path: String,
        source: std::string::FromUtf8Error,
    },
    #[snafu(display("Failed to read the structure from stdin"))]
    ReadStdinError { source: std::io::Error },
}
