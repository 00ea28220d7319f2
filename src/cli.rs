//! CLI definitions and entry point

use std::io;
use std::path::PathBuf;

use clap::Parser;
use log::debug;

use take_theirs::adapters::git::GitVersionControl;
use take_theirs::config::{Overrides, ResolverConfig};
use take_theirs::core::ports::Silent;
use take_theirs::core::services::ConflictResolver;
use take_theirs::output::{HumanPrinter, OutputMode};

/// take-theirs - resolve merge conflicts with the incoming side
#[derive(Parser, Debug)]
#[command(
    name = "take-theirs",
    version,
    about = "Resolve unmerged files by taking the incoming (theirs) version",
    long_about = "Resolve unmerged files by taking the incoming (theirs) version.\n\n\
                  Every conflicted path outside the keep list is checked out with\n\
                  `git checkout --theirs` and staged. The conflicts that remain are\n\
                  listed at the end."
)]
pub struct Cli {
    /// Working tree to operate on (defaults to the current directory)
    #[arg(short = 'C', long = "repo", value_name = "PATH")]
    pub repo: Option<PathBuf>,

    /// Path to leave conflicted (repeatable, or comma-separated)
    #[arg(short, long, value_name = "PATH", value_delimiter = ',')]
    pub keep: Vec<String>,

    /// Config file (defaults to .take-theirs.toml in the working tree)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// git executable to run
    #[arg(long, value_name = "PROGRAM")]
    pub git: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            repository: self.repo.clone(),
            config_file: self.config.clone(),
            keep: self.keep.clone(),
            git: self.git.clone(),
        }
    }
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config = ResolverConfig::discover(cli.overrides())?;
    debug!(
        "repository {}, {} kept path(s), git {}",
        config.repository.display(),
        config.keep.len(),
        config.git
    );

    let resolver = ConflictResolver::new(GitVersionControl::from_config(&config), config.keep);

    let report = match output_mode {
        OutputMode::Human => {
            let mut printer = HumanPrinter::new(io::stdout().lock());
            resolver.run(&mut printer)?
        },
        OutputMode::Json => resolver.run(&mut Silent)?,
    };

    report.render(output_mode)
}
