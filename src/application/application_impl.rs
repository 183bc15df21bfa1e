use std::io::IsTerminal;

use snafu::Snafu;
use snafu::prelude::*;
use tracing::debug;
use tracing::info;

use crate::application::{DEFAULT_MAX_DEPTH, InputError, InputSource, RuntimeConfig};
use crate::config::{Settings, SettingsCreationError};
use crate::materializer::{MaterializeError, MaterializeReport, Materializer};
use crate::parser::{ParseError, parse_input};

pub struct Application;

impl Application {
    pub async fn run(
        app_config: impl Into<RuntimeConfig>,
    ) -> Result<MaterializeReport, ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();
        let settings = Settings::read(&app_config.root)
            .await
            .context(SettingsSnafu)?;
        debug!("Loaded settings: {:?}", settings);

        let source = InputSource::select(&app_config, &settings, std::io::stdin().is_terminal())
            .context(InputSnafu)?;
        debug!("Reading structure from {:?}", source);
        let input = source.read().await.context(InputSnafu)?;

        let tree = parse_input(&input).context(InputParseSnafu)?;

        let max_depth = app_config
            .max_depth
            .or(settings.max_depth)
            .unwrap_or(DEFAULT_MAX_DEPTH);
        info!(
            "Building '{}' in {} (max depth {})",
            tree.name,
            app_config.root.display(),
            max_depth
        );

        Materializer::new(&app_config.root)
            .materialize(&tree, max_depth)
            .context(MaterializationSnafu)
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while loading settings"))]
    SettingsError { source: SettingsCreationError },
    #[snafu(display("Critical failure encountered while reading the input structure"))]
    InputError { source: InputError },
    #[snafu(display("Error parsing input"))]
    InputParseError { source: ParseError },
    #[snafu(display("Error building tree"))]
    MaterializationError { source: MaterializeError },
}
