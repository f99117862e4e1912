//! The dataset table: output filenames mapped to fully-resolved export URLs.
//!
//! URLs are built once at startup from the source configuration; anything
//! malformed is a startup error, never a per-download failure.

use crate::config::{DatasetDef, SourceConfig};
use crate::error::GridFetchError;
use url::Url;

#[derive(Clone, Debug)]
pub struct DatasetMapping {
    pub filename: String,
    pub url: Url,
}

/// Builds the export URL for one dataset slug:
/// `<base>/explore/dataset/<slug>/download/?format=..&use_labels_for_header=..&epsg=..`
pub fn export_url(source: &SourceConfig, dataset: &str) -> Result<Url, GridFetchError> {
    let mut url =
        Url::parse(&source.base_url).map_err(|e| GridFetchError::InvalidSourceUrl {
            url: source.base_url.clone(),
            reason: e.to_string(),
        })?;

    url.path_segments_mut()
        .map_err(|()| GridFetchError::InvalidSourceUrl {
            url: source.base_url.clone(),
            reason: "base URL cannot have path segments".to_string(),
        })?
        .pop_if_empty()
        .extend(["explore", "dataset", dataset, "download", ""]);

    url.query_pairs_mut()
        .append_pair("format", &source.format)
        .append_pair(
            "use_labels_for_header",
            if source.use_labels_for_header {
                "true"
            } else {
                "false"
            },
        )
        .append_pair("epsg", &source.epsg.to_string());

    Ok(url)
}

/// Resolves the configured dataset table into an ordered, immutable catalog.
/// Output filenames must be unique; each mapping is downloaded exactly once
/// per run, in configuration order.
pub fn build_catalog(
    source: &SourceConfig,
    datasets: &[DatasetDef],
) -> Result<Vec<DatasetMapping>, GridFetchError> {
    let mut catalog = Vec::with_capacity(datasets.len());

    for def in datasets {
        if catalog
            .iter()
            .any(|m: &DatasetMapping| m.filename == def.filename)
        {
            return Err(GridFetchError::DuplicateDatasetFilename {
                filename: def.filename.clone(),
            });
        }

        catalog.push(DatasetMapping {
            filename: def.filename.clone(),
            url: export_url(source, &def.dataset)?,
        });
    }

    Ok(catalog)
}
