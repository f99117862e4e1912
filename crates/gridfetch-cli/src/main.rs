use gridfetch_lib::cli::{
    ResolvedCommand, parse_args, resolve_command, run_fetch, run_list_datasets,
};
use gridfetch_lib::error::GridFetchError;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<(), GridFetchError> {
    color_eyre::install()?;

    let args = parse_args();
    let command = resolve_command(args.command)?;

    match command {
        ResolvedCommand::Fetch(params) => {
            // Per-dataset failures are already in the run log and the
            // summary; the exit status only reflects whether the batch ran.
            run_fetch(params).await?;
        }
        ResolvedCommand::ListDatasets(params) => run_list_datasets(params)?,
    }

    Ok(())
}
