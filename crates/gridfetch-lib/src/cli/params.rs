use crate::catalog::DatasetMapping;
use crate::download::FetchOptions;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct FetchParams {
    pub catalog: Vec<DatasetMapping>,
    pub output_dir: PathBuf,
    pub log_path: PathBuf,
    pub options: FetchOptions,
}

#[derive(Clone, Debug)]
pub struct ListDatasetsParams {
    pub catalog: Vec<DatasetMapping>,
}
