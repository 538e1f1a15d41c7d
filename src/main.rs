use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use termslides::core::config::{self, CliOverrides};
use termslides::core::loader;
use termslides::tui;

#[derive(Parser)]
#[command(name = "termslides", version, about = "Terminal-based markdown slides")]
struct Args {
    /// Markdown file to present
    file: PathBuf,

    /// Config file (default: ~/.termslides/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Author shown in the footer
    #[arg(short, long)]
    author: Option<String>,

    /// Start with speaker notes visible
    #[arg(short, long)]
    notes: bool,

    /// Where to write the log
    #[arg(long, default_value = "termslides.log")]
    log_file: PathBuf,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let (file_config, source) = config::load_config(args.config.as_deref())?;
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            author: args.author,
            notes: args.notes,
            log_level: args.log_level,
        },
    );

    let level = resolved.log_filter();
    init_logging(&args.log_file, level.unwrap_or(LevelFilter::Info));
    log::info!("termslides starting up with {}", args.file.display());
    source.log();
    if level.is_none() {
        log::warn!("Unknown log level {:?}, using info", resolved.log_level);
    }

    // Parse before touching the terminal so failures print to a normal screen.
    let document = loader::load(&args.file)?;
    tui::run(&document, &resolved)?;
    Ok(())
}

/// Log to a file; the TUI owns stdout.
fn init_logging(path: &Path, level: LevelFilter) {
    if level == LevelFilter::Off {
        return;
    }

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(path) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }
}
