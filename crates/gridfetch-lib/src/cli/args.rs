use clap::{ArgAction, Parser, Subcommand};
use tracing::Level;
use tracing_subscriber;

#[derive(Debug, Clone)]
pub enum Command {
    Fetch {
        config_path: String,
        output_dir: Option<String>,
        log_file: Option<String>,
        retry_count: Option<u32>,
    },
    ListDatasets {
        config_path: String,
    },
}

pub struct Args {
    pub command: Command,
    pub log_level: Level,
}

#[derive(Debug, Parser)]
#[command(
    name = "gridfetch",
    version,
    about = "Download a configured set of electrical-grid open-data exports into a local directory"
)]
struct Cli {
    #[arg(
        short = 'v',
        long = "verbose",
        help = "Sets the level of verbosity",
        action = ArgAction::Count,
        global = true
    )]
    verbose: u8,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Download every configured dataset, retrying each one independently
    Fetch {
        #[arg(
            short = 'c',
            long = "config",
            value_name = "FILE",
            help = "Sets a custom config file",
            default_value = "config.yaml"
        )]
        config: String,

        #[arg(
            short = 'o',
            long = "output-dir",
            value_name = "DIR",
            help = "Overrides the destination directory for downloaded datasets"
        )]
        output_dir: Option<String>,

        #[arg(
            long = "log-file",
            value_name = "FILE",
            help = "Overrides the run log path"
        )]
        log_file: Option<String>,

        #[arg(
            long = "retry-count",
            value_name = "N",
            help = "Overrides the maximum attempts per dataset"
        )]
        retry_count: Option<u32>,
    },

    /// Print the resolved dataset table (filename -> export URL)
    #[command(name = "list-datasets", visible_alias = "list")]
    ListDatasets {
        #[arg(
            short = 'c',
            long = "config",
            value_name = "FILE",
            help = "Sets a custom config file",
            default_value = "config.yaml"
        )]
        config: String,
    },
}

pub fn parse_args() -> Args {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(log_level.into())
                .from_env_lossy(),
        )
        .init();

    let command = match cli.command {
        CliCommand::Fetch {
            config,
            output_dir,
            log_file,
            retry_count,
        } => Command::Fetch {
            config_path: config,
            output_dir,
            log_file,
            retry_count,
        },
        CliCommand::ListDatasets { config } => Command::ListDatasets {
            config_path: config,
        },
    };

    Args { command, log_level }
}
