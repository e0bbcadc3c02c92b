//! CLI Adapter.

use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use clap::error::ErrorKind as ClapErrorKind;

use crate::adapters::git::Git2RepositoryAdapter;
use crate::adapters::{config_file, logging, terminal};
use crate::app::AppContext;
use crate::app::commands::{self, Mode, Target};
use crate::domain::AppError;

#[derive(Parser, Debug)]
#[command(name = "facad")]
#[command(disable_version_flag = true)]
#[command(
    about = "Modern, visually enhanced replacement for ls with emoji icons",
    long_about = None
)]
struct Cli {
    /// Print version information and exit
    #[arg(short = 'v', long)]
    version: bool,
    /// Long listing with size, time and permissions
    #[arg(short = 'l', long)]
    long: bool,
    /// Show directory analytics
    #[arg(short = 'a', long)]
    analytics: bool,
    /// Files or directories to list (default: current directory)
    targets: Vec<PathBuf>,
}

impl Cli {
    fn mode(&self) -> Mode {
        if self.long {
            Mode::Long
        } else if self.analytics {
            Mode::Analytics
        } else {
            Mode::Grid
        }
    }
}

/// Entry point for the CLI.
pub fn run() {
    logging::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                process::exit(1);
            }
        },
    };

    if cli.version {
        println!("facad version {}", crate::VERSION);
        return;
    }

    match run_listing(cli) {
        Ok(()) => {}
        Err(AppError::Io(e)) if e.kind() == ErrorKind::BrokenPipe => {}
        Err(e) => {
            eprintln!("facad: {}", e);
            process::exit(1);
        }
    }
}

fn run_listing(cli: Cli) -> Result<(), AppError> {
    let mode = cli.mode();
    let raw = if cli.targets.is_empty() { vec![PathBuf::from(".")] } else { cli.targets };
    let targets = raw.iter().map(|target| Target::resolve(target)).collect::<Result<Vec<_>, _>>()?;

    let config = config_file::load()?;
    let ctx = AppContext::new(Git2RepositoryAdapter::new(), config, terminal::width());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    commands::execute(&ctx, &targets, mode, &mut out)
}
