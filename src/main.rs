//! # Recipe Picker CLI Entry Point
//!
//! This is the main entry point for the recipe picker.
//!
//! ## Overview
//!
//! The picker reads the system `.just` recipe files, groups their recipes
//! into categories and lets the user pick one from a full-screen menu. The
//! chosen recipe is then run through `ujust` in the same terminal.
//!
//! ## Usage
//!
//! ```bash
//! # Browse the system recipes
//! recipe-picker
//!
//! # Use another recipe directory and runner
//! recipe-picker --dir ./just --runner just
//!
//! # Debug mode - print discovered recipes and exit
//! recipe-picker --debug
//! ```
//!
//! ## Architecture
//!
//! 1. **Discovery**: Finds `*.just` files in the recipe directory
//! 2. **Parsing**: Extracts recipes and their comments, grouped by file
//! 3. **UI**: A blocking event loop over the picker state
//! 4. **Execution**: Runs the selected recipe once the terminal is restored
//!
//! ## Key Bindings
//!
//! - `←` / `h` - Previous category
//! - `→` / `l` - Next category
//! - `↑` / `k` - Previous recipe
//! - `↓` / `j` - Next recipe
//! - `Enter` - Run the selected recipe
//! - `Esc` / `q` / `Ctrl+C` - Quit without running anything

use picker::config::{PickerOptions, DEFAULT_EXCLUDE_KEYWORD, DEFAULT_RECIPE_DIR, DEFAULT_RUNNER};
use picker::recipe::{self, Catalog};
use picker::ui::{self, Outcome, Picker};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, size as terminal_size, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::io;
use std::panic;
use std::path::{Path, PathBuf};

/// Viewport assumed when the terminal size cannot be queried.
const FALLBACK_SIZE: (u16, u16) = (80, 24);

/// Trait for reading terminal events (allows dependency injection for testing)
trait EventReader {
    fn read_event(&mut self) -> Result<Event>;
}

/// Production event reader that blocks on crossterm's event queue
struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self) -> Result<Event> {
        event::read().context("Failed to read terminal event")
    }
}

/// Interactive menu for browsing and running ujust recipes
#[derive(Parser, Debug)]
#[command(name = "recipe-picker")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Browse and run ujust recipes", long_about = None)]
struct Args {
    /// Directory containing the `.just` recipe files
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_RECIPE_DIR)]
    dir: PathBuf,

    /// Command that runs the selected recipe
    #[arg(short, long, value_name = "CMD", default_value = DEFAULT_RUNNER)]
    runner: String,

    /// Skip recipe files whose name contains this keyword
    #[arg(long, value_name = "KEYWORD", default_value = DEFAULT_EXCLUDE_KEYWORD)]
    exclude: String,

    /// Write diagnostic logs to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Print discovered recipes and exit
    #[arg(long)]
    debug: bool,
}

impl Args {
    fn options(&self) -> PickerOptions {
        PickerOptions {
            recipe_dir: self.dir.clone(),
            runner: self.runner.clone(),
            exclude_keyword: self.exclude.clone(),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(ref path) = args.log_file {
        if let Err(e) = init_logging(path) {
            eprintln!("Warning: Could not initialize logging: {:#}", e);
        }
    }

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);

        original_hook(panic_info);
    }));

    let result = run_application(&args);

    // Restore panic hook
    let _ = panic::take_hook();

    result
}

fn init_logging(path: &Path) -> Result<()> {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    let log_file = File::create(path)
        .with_context(|| format!("Failed to create log file: {}", path.display()))?;

    WriteLogger::init(LevelFilter::Debug, log_config, log_file)
        .context("Failed to install logger")?;

    Ok(())
}

fn run_application(args: &Args) -> Result<()> {
    let options = args.options();

    let catalog = Catalog::load(&options.recipe_dir, &options.exclude_keyword)
        .context("Failed to load recipes")?;

    log::info!(
        "Loaded {} categories with {} recipes",
        catalog.len(),
        catalog.recipe_count()
    );

    if args.debug {
        print_catalog(&catalog, &options);
        return Ok(());
    }

    let mut terminal = setup_terminal()?;

    let (width, height) = terminal_size().unwrap_or(FALLBACK_SIZE);
    let mut picker = Picker::new(catalog, width, height);

    // Run the picker and ensure cleanup happens even on error
    let mut event_reader = CrosstermEventReader;
    let run_result = run_picker(&mut terminal, &mut picker, &mut event_reader);

    // Restore terminal (always runs, even if run_picker failed)
    let cleanup_result = cleanup_terminal(&mut terminal);

    let outcome = run_result?;
    cleanup_result?;

    match outcome {
        Outcome::Selected(name) => execute_selection(&options.runner, &name),
        Outcome::Cancelled => log::info!("Picker cancelled"),
    }

    Ok(())
}

fn print_catalog(catalog: &Catalog, options: &PickerOptions) {
    println!("=== Recipe Directory ===");
    println!("  {}", options.recipe_dir.display());
    println!("\n=== Categories ===");
    for category in catalog.categories() {
        println!("  {} ({} recipes)", category.name, category.recipes.len());
        for recipe in &category.recipes {
            if recipe.description.is_empty() {
                println!("    {}", recipe.name);
            } else {
                println!("    {} - {}", recipe.name, recipe.description);
            }
        }
    }
    println!(
        "\nTotal: {} categories, {} recipes",
        catalog.len(),
        catalog.recipe_count()
    );
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode for terminal")?;

    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e).context("Failed to setup terminal");
    }

    let backend = CrosstermBackend::new(stdout);
    match Terminal::new(backend) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            Err(e).context("Failed to create terminal")
        }
    }
}

/// Clean up terminal state
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}

/// Hand the selected recipe to the runner. Failures are logged, never returned.
fn execute_selection(runner: &str, name: &str) {
    log::info!("Selected recipe: {}", name);

    if let Err(e) = recipe::announce(&mut io::stdout(), name) {
        log::warn!("Failed to print status line: {}", e);
    }

    match recipe::run_recipe(runner, name) {
        Some(code) => log::info!("Runner exited with code {}", code),
        None => log::warn!("Runner produced no exit code for '{}'", name),
    }
}

/// Draw, read one event, apply it; repeat until the picker yields an outcome.
fn run_picker<B>(
    terminal: &mut Terminal<B>,
    picker: &mut Picker,
    event_reader: &mut dyn EventReader,
) -> Result<Outcome>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal
            .draw(|f| ui::render(f, picker))
            .context("Failed to draw terminal UI")?;

        let event = event_reader.read_event()?;

        if let Some(outcome) = picker.handle_event(&event) {
            return Ok(outcome);
        }
    }
}
