use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use clap::Parser;
use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::style::ResetColor;
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use tracing_subscriber::EnvFilter;

use quickfilter::{app, AnnotationConfig, AppState};

#[derive(Parser, Debug)]
#[command(version, about = "Live filter over annotation labels")]
struct Args {
    /// Annotation config (TOML)
    #[arg(long, default_value = "quickfilter.toml")]
    config: PathBuf,
    /// Write tracing output to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Apply --query once and print the visible labels instead of opening the UI
    #[arg(long)]
    print: bool,
    #[arg(long, default_value = "")]
    query: String,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        let file = File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    }

    let loaded = AnnotationConfig::load(&args.config).and_then(|c| AppState::from_config(&c));
    let mut state = match loaded {
        Ok(state) => state,
        Err(err) => {
            tracing::error!("{err}");
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    if args.print {
        print_visible(&mut state, &args.query);
        return Ok(());
    }

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, Clear(ClearType::All), Hide)?;

    let result = app::run(&mut stdout, &mut state);

    execute!(stdout, LeaveAlternateScreen, Show, ResetColor)?;
    terminal::disable_raw_mode()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn print_visible(state: &mut AppState, query: &str) {
    if let Some(filter) = state.filter.as_mut() {
        filter.on_query_change(&mut state.registry, query);
    } else if let Some(message) = &state.message {
        eprintln!("{message}");
    }
    for candidate in state.active_candidates().iter().filter(|ch| ch.visible) {
        println!("{}", candidate.label);
    }
}
