use anyhow::{Context, Result as AnyhowResult};
use clap::Parser;
use crossterm::event::{poll as event_poll, read as event_read, Event as CrosstermEvent};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, stdout};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tabshell::app::Editor;
use tabshell::config::Config;
use tabshell::model::filesystem::StdFileSystem;
use tabshell::services::terminal_modes::{self, TerminalModes};
use tabshell::services::{clipboard, log_dirs, tracing_setup};

/// Exit status for a startup root that is missing or not a directory
const EXIT_INVALID_ROOT: u8 = 3;

/// A terminal multi-file editor with a file tree, tabs and a status line
#[derive(Parser, Debug)]
#[command(name = "tabshell")]
#[command(version)]
struct Args {
    /// Directory shown in the file explorer (default: current directory)
    #[arg(value_name = "ROOT")]
    root: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to log file for editor diagnostics
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

/// Check the startup root before the terminal is touched
fn validate_root(root: &Path) -> Result<(), String> {
    if !root.exists() {
        return Err(format!("Error: Directory '{}' does not exist", root.display()));
    }
    if !root.is_dir() {
        return Err(format!("Error: Directory '{}' is not a directory", root.display()));
    }
    Ok(())
}

fn main() -> AnyhowResult<ExitCode> {
    let args = Args::parse();

    let root = match args.root.clone() {
        Some(root) => root,
        None => std::env::current_dir().context("Failed to determine current directory")?,
    };
    if let Err(message) = validate_root(&root) {
        eprintln!("{}", message);
        return Ok(ExitCode::from(EXIT_INVALID_ROOT));
    }

    let config = Config::load(args.config.as_deref()).with_context(|| match &args.config {
        Some(path) => format!("Failed to load config from {}", path.display()),
        None => "Failed to load config".to_string(),
    })?;

    let log_file = args.log_file.clone().unwrap_or_else(log_dirs::main_log_path);
    tracing_setup::init_global(&log_file);
    tracing::info!("Editor starting in {}", root.display());

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        terminal_modes::emergency_cleanup();
        original_hook(panic);
    }));

    let mut editor = Editor::new(
        config.clone(),
        root,
        Arc::new(StdFileSystem),
        clipboard::default_provider(config.clipboard.timeout_ms),
    )
    .context("Failed to open the explorer root")?;

    let mut modes = TerminalModes::enable()?;
    let result = Terminal::new(CrosstermBackend::new(stdout()))
        .context("Failed to create terminal")
        .and_then(|mut terminal| run_event_loop(&mut editor, &mut terminal));
    modes.undo();

    if let Err(e) = &result {
        tracing::error!("Editor exited with error: {:#}", e);
    } else {
        tracing::info!("Editor exited");
    }
    result.map(|()| ExitCode::SUCCESS)
}

fn run_event_loop(
    editor: &mut Editor,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> AnyhowResult<()> {
    terminal.clear()?;

    loop {
        terminal.draw(|frame| editor.render(frame))?;

        if editor.should_quit() {
            break;
        }

        // Wake up at least once per status tick
        if !event_poll(editor.time_until_tick())? {
            editor.tick();
            continue;
        }

        match event_read()? {
            CrosstermEvent::Key(key_event) => editor.handle_key(key_event),
            CrosstermEvent::Mouse(mouse_event) => editor.handle_mouse(mouse_event),
            CrosstermEvent::Paste(text) => editor.handle_paste(&text),
            CrosstermEvent::Resize(w, h) => {
                tracing::debug!("Terminal resized to {}x{}", w, h);
                terminal.autoresize()?;
            }
            _ => {}
        }

        if editor.time_until_tick().is_zero() {
            editor.tick();
        }
    }

    Ok(())
}
