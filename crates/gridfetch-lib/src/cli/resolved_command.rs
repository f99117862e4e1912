use crate::catalog::build_catalog;
use crate::cli::args::Command;
use crate::cli::params::{FetchParams, ListDatasetsParams};
use crate::config::load_config;
use crate::download::FetchOptions;
use crate::error::GridFetchError;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Clone, Debug)]
pub enum ResolvedCommand {
    Fetch(FetchParams),
    ListDatasets(ListDatasetsParams),
}

/// Turns parsed arguments into fully-validated parameters: the config is
/// loaded, every export URL is built and checked, and CLI overrides are
/// applied. Everything that can fail before the first transfer fails here.
pub fn resolve_command(command: Command) -> Result<ResolvedCommand, GridFetchError> {
    match command {
        Command::Fetch {
            config_path,
            output_dir,
            log_file,
            retry_count,
        } => {
            let app_config = load_config(&config_path)?;

            if app_config.datasets.is_empty() {
                return Err(GridFetchError::CliArgumentValidation {
                    details: "No datasets defined in config.".to_string(),
                });
            }

            let resolved_retry_count = retry_count.unwrap_or(app_config.download.retry_count);
            if resolved_retry_count == 0 {
                return Err(GridFetchError::CliArgumentValidation {
                    details: "retry-count must be greater than 0.".to_string(),
                });
            }

            let catalog = build_catalog(&app_config.source, &app_config.datasets)?;

            let options = FetchOptions {
                retry_count: resolved_retry_count,
                retry_delay: Duration::from_secs(app_config.download.retry_delay_secs),
                connect_timeout: Duration::from_secs(app_config.download.connect_timeout_secs),
                total_timeout: Duration::from_secs(app_config.download.total_timeout_secs),
            };

            Ok(ResolvedCommand::Fetch(FetchParams {
                catalog,
                output_dir: output_dir
                    .map(PathBuf::from)
                    .unwrap_or_else(|| app_config.output.path.clone()),
                log_path: log_file
                    .map(PathBuf::from)
                    .unwrap_or_else(|| app_config.log.path.clone()),
                options,
            }))
        }
        Command::ListDatasets { config_path } => {
            let app_config = load_config(&config_path)?;
            let catalog = build_catalog(&app_config.source, &app_config.datasets)?;

            Ok(ResolvedCommand::ListDatasets(ListDatasetsParams { catalog }))
        }
    }
}
