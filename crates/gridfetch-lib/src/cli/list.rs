use crate::cli::params::ListDatasetsParams;
use crate::error::GridFetchError;

pub fn run_list_datasets(params: ListDatasetsParams) -> Result<(), GridFetchError> {
    for mapping in &params.catalog {
        println!("{} -> {}", mapping.filename, mapping.url);
    }
    Ok(())
}
