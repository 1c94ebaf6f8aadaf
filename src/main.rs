//! CLI entry point for twig

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use termcolor::{BufferedStandardStream, ColorChoice};
use tracing_subscriber::EnvFilter;
use twig::{DepthLimit, OutputFormat, TreeWalker, WalkerConfig, exit_code};

/// Environment variable holding the log filter, e.g. `TWIG_LOG=debug`.
const LOG_ENV: &str = "TWIG_LOG";

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

/// Parse `-L`: a positive number of levels.
fn parse_level(s: &str) -> Result<usize, String> {
    match s.trim().parse::<usize>() {
        Ok(0) => Err("level must be greater than 0".to_string()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("invalid level: {}", s)),
    }
}

#[derive(Parser, Debug)]
#[command(name = "twig")]
#[command(about = "List directory contents as a tree, JSON, or tree.vim folds")]
struct Args {
    /// Directories to display
    #[arg(default_value = ".")]
    paths: Vec<PathBuf>,

    /// List all files, including those starting with '.'
    #[arg(short, long)]
    all: bool,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level", value_name = "N", value_parser = parse_level)]
    level: Option<usize>,

    /// Print the tree as JSON
    #[arg(short = 'J', long = "json", conflicts_with = "vim")]
    json: bool,

    /// Print the tree for tree.vim, with fold markers
    #[arg(short = 'V', long = "vim")]
    vim: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Print version
    #[arg(long = "version")]
    version: bool,
}

impl Args {
    fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.vim {
            OutputFormat::Fold
        } else {
            OutputFormat::Tree
        }
    }

    fn walker_config(&self) -> WalkerConfig {
        WalkerConfig {
            show_all: self.all,
            max_depth: DepthLimit::new(self.level.unwrap_or(0)),
            format: self.format(),
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();

    if args.version {
        println!("twig {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    init_logging();

    let config = args.walker_config();
    // Only branch art carries color; JSON and folds must stay machine-readable.
    let choice = if config.format == OutputFormat::Tree && should_use_color(args.color) {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };
    let mut stdout = BufferedStandardStream::stdout(choice);

    if let Err(e) = TreeWalker::new(config).walk(args.paths.as_slice(), &mut stdout) {
        eprintln!("twig: {}", e);
        process::exit(exit_code(&e));
    }
}
