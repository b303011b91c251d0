use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use release_notes::cli::{open_history, run_release_notes, ReleaseNotesArgs};
use release_notes::config::{self, Backend};
use release_notes::{logging, ui};

#[derive(clap::Parser)]
#[command(
    name = "release-notes",
    version,
    about = "Generate categorized release notes from git commit history"
)]
struct Args {
    #[arg(value_name = "VERSION", help = "Version being released (e.g. 2.3.0)")]
    current_version: String,

    #[arg(help = "Previous version; defaults to the nearest tag before HEAD")]
    previous_version: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, default_value = ".", help = "Repository to read history from")]
    repo: PathBuf,

    #[arg(long, value_enum, help = "History backend (overrides configuration)")]
    backend: Option<BackendArg>,

    #[arg(short, long, help = "Log debug output to stderr")]
    verbose: bool,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum BackendArg {
    Git2,
    Cli,
}

impl From<BackendArg> for Backend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Git2 => Backend::Git2,
            BackendArg::Cli => Backend::Cli,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let mut config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    if let Some(backend) = args.backend {
        config.history.backend = backend.into();
    }

    let history = match open_history(
        config.history.backend,
        &args.repo,
        Duration::from_secs(config.history.query_timeout_secs),
    ) {
        Ok(history) => history,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    let workflow_args = ReleaseNotesArgs {
        version: args.current_version,
        previous_version: args.previous_version,
    };

    let outcome = match run_release_notes(&workflow_args, &config, history) {
        Ok(outcome) => outcome,
        Err(e) => {
            ui::display_error(&format!("Failed to generate release notes: {}", e));
            std::process::exit(1);
        }
    };

    ui::display_boundary_warnings(&outcome.warnings);
    ui::display_previous_version(&outcome.previous);

    println!("{}", outcome.document);
    Ok(())
}
