//! GemForge command-line interface.

use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use gemforge::{AllocatorConfig, CoreGrade, Optimizer, Role, CONFIG_FILE};

mod input;
mod render;

use input::RequestFile;
use render::{render_targets, render_text, Report};

#[derive(Parser)]
#[command(name = "gemforge")]
#[command(about = "Allocate gems to prioritized cores", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Suppress solver logging on stderr
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve an allocation request file
    Solve(SolveArgs),

    /// Show the willpower budget and target menu of a grade
    Targets {
        /// hero, legend, relic or ancient
        grade: CoreGrade,
    },
}

#[derive(clap::Args)]
struct SolveArgs {
    /// JSON file with slots and gems
    request: PathBuf,

    /// Scoring role; overrides the role in the request file
    #[arg(long)]
    role: Option<Role>,

    /// Configuration file (defaults to ./gemforge.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Skip request validation
    #[arg(long)]
    lenient: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if !cli.quiet {
        gemforge_console::init();
    }

    match cli.command {
        Commands::Solve(args) => solve(&args),
        Commands::Targets { grade } => {
            print!("{}", render_targets(grade));
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<AllocatorConfig> {
    match path {
        Some(path) => AllocatorConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None if Path::new(CONFIG_FILE).exists() => AllocatorConfig::load(CONFIG_FILE)
            .with_context(|| format!("failed to load config {CONFIG_FILE}")),
        None => Ok(AllocatorConfig::default()),
    }
}

fn solve(args: &SolveArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let file = RequestFile::read(&args.request)?;
    let request = file.request();
    let role = args.role.or(file.role).unwrap_or(Role::Dealer);

    if config.validation.strict && !args.lenient {
        request
            .validate(&file.gems)
            .with_context(|| format!("invalid request {}", args.request.display()))?;
    }

    let allocation = Optimizer::new(config).optimize(&request, &file.gems, role);

    let color = io::stdout().is_terminal();
    let mut stdout = io::stdout().lock();
    match args.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut stdout, &Report::new(role, &allocation))
                .context("failed to write report")?;
            writeln!(stdout)?;
        }
        OutputFormat::Text => {
            write!(stdout, "{}", render_text(&allocation, color))?;
        }
    }
    Ok(())
}
