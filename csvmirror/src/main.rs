//! Copy folders listed in a CSV manifest from a source tree to a destination tree.
//!
//! ```bash
//! csvmirror --csv folders.csv --src S:\share --dest D:\backup --log copy.log
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use csvmirror::context::{RunArgs, RunContext, StartupError};
use csvmirror::copy::CopyJob;
use csvmirror::exit_codes;
use csvmirror::io::config::load_config;
use csvmirror::io::executor::CommandMirrorExecutor;
use csvmirror::io::resolve::PathResolver;
use csvmirror::logging::{self, LogContext};

#[derive(Parser)]
#[command(
    name = "csvmirror",
    version,
    about = "Copy folders listed in a CSV manifest"
)]
struct Cli {
    /// Path of the CSV file (one folder per row, no header).
    #[arg(long = "csv")]
    csv: PathBuf,
    /// Path of the source directory.
    #[arg(long = "src")]
    src: PathBuf,
    /// Path of the destination directory (created if missing).
    #[arg(long = "dest")]
    dest: PathBuf,
    /// Path of the log file (appended, created if missing).
    #[arg(long = "log")]
    log: PathBuf,
    /// Optional TOML file overriding the mirror command.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    logging::init();
    let log = LogContext::detect();

    if let Err(err) = run(cli, &log) {
        eprintln!("{:#}", err);
        let code = match err.downcast_ref::<StartupError>() {
            // Already reported by startup validation.
            Some(StartupError::NotFound { .. }) => exit_codes::NOT_FOUND,
            _ => {
                log.error(format_args!("{err:#}"));
                exit_codes::FAILURE
            }
        };
        std::process::exit(code);
    }
}

fn run(cli: Cli, log: &LogContext) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let resolver = PathResolver::from_current_exe()?;
    let args = RunArgs {
        csv: cli.csv,
        src: cli.src,
        dest: cli.dest,
        log: cli.log,
    };

    let ctx = RunContext::validate(&args, &resolver, log)?;
    let executor = CommandMirrorExecutor::new(config.mirror);
    CopyJob {
        ctx: &ctx,
        resolver: &resolver,
        executor: &executor,
        log,
    }
    .run()?;
    Ok(())
}
