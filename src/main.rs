// ccheck: tokenizer and syntax checker for a small C-like language

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use ccheck::analysis::{analyze_with, AnalyzerConfig};
use ccheck::parser::parse::DEFAULT_MAX_DEPTH;
use ccheck::ui::App;

/// Tokenize a C-like source file and check its syntax
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Source file to check (`-` or omitted reads stdin)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Open the interactive editor instead of printing a report
    #[arg(long)]
    tui: bool,

    /// Print only the token listing
    #[arg(long, conflicts_with = "tui")]
    tokens_only: bool,

    /// Maximum statement nesting depth
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write log output to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:?}", err);
            ExitCode::from(2)
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    setup_logging(args.verbose, args.log_file.as_deref(), args.tui)?;

    let config = AnalyzerConfig {
        max_depth: args.max_depth,
    };

    if args.tui {
        let source = match args.input.as_deref() {
            Some(path) => read_source(path)?,
            None => String::new(),
        };
        run_tui(&source, config)?;
        return Ok(ExitCode::SUCCESS);
    }

    let source = read_source(args.input.as_deref().unwrap_or(Path::new("-")))?;
    let analysis = analyze_with(&source, &config);

    if args.tokens_only {
        for line in analysis.token_lines() {
            println!("{}", line);
        }
        for warning in &analysis.warnings {
            eprintln!("warning: {}", warning);
        }
    } else {
        print!("{}", analysis);
    }

    Ok(if analysis.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

/// Read the whole source, treating `-` as stdin
fn read_source(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .context("Failed to read source from stdin")?;
        return Ok(source);
    }

    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn run_tui(source: &str, config: AnalyzerConfig) -> Result<()> {
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(source, config);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.context("Terminal UI failed")
}

fn setup_logging(verbosity: u8, log_file: Option<&Path>, tui: bool) -> Result<()> {
    // Log lines would corrupt the alternate screen
    if tui && log_file.is_none() {
        return Ok(());
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .compact();

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(io::stderr).init(),
    }

    Ok(())
}
