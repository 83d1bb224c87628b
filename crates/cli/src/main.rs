mod app;
mod render;

use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use stock_tracker_core::errors::CoreError;
use stock_tracker_core::models::settings::Settings;

use app::Session;

/// Interactive stock portfolio tracker.
#[derive(Debug, Parser)]
#[command(name = "stock-tracker", version, about)]
struct Args {
    /// JSON settings file (portfolio path and market seed prices)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Holdings file; overrides the path from the settings
    #[arg(long)]
    portfolio: Option<PathBuf>,

    /// Owner name; skips the name prompt
    #[arg(long)]
    name: Option<String>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), CoreError> {
    let mut settings = match &args.config {
        Some(path) => Settings::load_from_file(path)?,
        None => Settings::default(),
    };
    if let Some(path) = args.portfolio {
        settings.portfolio_path = path;
    }
    let market = settings.build_market()?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    let name = match args.name {
        Some(name) => name,
        None => prompt_name(&mut input, &mut output)?,
    };

    let mut session = Session::start(name, market, settings.portfolio_path, &mut output)?;
    session.run(&mut input, &mut output)
}

fn prompt_name(input: &mut impl BufRead, output: &mut impl Write) -> Result<String, CoreError> {
    write!(output, "Enter your name: ")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
