use anyhow::{Context, Result};
use crossterm::{
    event::{Event, KeyEventKind, read},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode},
};
use log::{LevelFilter, info};
use std::fs::OpenOptions;
use std::path::Path;
use jotpad::cli;
use jotpad::config::EditorConfig;
use jotpad::editor::Editor;
use jotpad::keymap::key_to_command;
use jotpad::prompt::default_dialog_dir;
use jotpad::session::EditorSession;
use jotpad::storage::DiskStore;
use jotpad::ui::theme::THEME_NAMES;
use jotpad::ui::{TerminalPrompter, Theme, TuiRenderer};

/// Application entry point: parse arguments, set up logging and config, open
/// the file named on the command line, then run the editor until Ctrl+Q.
///
/// The terminal is put into raw mode on the alternate screen for the
/// duration of the event loop and restored afterwards, even when the loop
/// fails.
fn main() -> Result<()> {
    // Parse command-line arguments first (before terminal setup)
    let cli_args = match cli::parse_args() {
        Ok(args) => args,
        Err(e) => e.exit(),
    };

    init_logging(cli_args.log_file.as_deref())?;

    if cli_args.list_themes {
        println!("Available themes:");
        for theme in THEME_NAMES {
            println!("  {}", theme);
        }
        return Ok(());
    }

    let config = EditorConfig::load(cli_args.config.as_deref())?;
    let theme_name = cli_args
        .theme
        .or(config.theme)
        .unwrap_or_else(|| "classic".to_string());
    let theme = Theme::by_name(&theme_name)
        .with_context(|| format!("Unknown theme '{}'", theme_name))?;

    let dialog_dir = config.default_dir.unwrap_or_else(default_dialog_dir);
    let mut editor = Editor::new(EditorSession::new(Box::new(DiskStore), dialog_dir));

    // Continue with an empty document if the file can't be opened
    if let Some(path) = &cli_args.file {
        editor.status_message = Some(match editor.session.open_path(path) {
            Ok(()) => format!("Opened {}", editor.session.document().display_name()),
            Err(e) => e.to_string(),
        });
    }

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen, SetTitle("Text Editor"))?;

    let result = run(&mut editor, theme);

    crossterm::execute!(stdout, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    result
}

fn run(editor: &mut Editor, theme: Theme) -> Result<()> {
    let mut renderer = TuiRenderer::new(theme).context("Failed to initialise terminal")?;
    let (cols, rows) = crossterm::terminal::size()?;
    editor.handle_resize(cols, rows);

    loop {
        renderer.draw(editor)?;

        match read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                if let Some(cmd) = key_to_command(key_event, editor.mode) {
                    let mut ui = TerminalPrompter::new(&mut renderer);
                    if editor.execute_command(cmd, &mut ui) {
                        break; // Quit
                    }
                }
            }
            Event::Resize(cols, rows) => editor.handle_resize(cols, rows),
            _ => {}
        }
    }

    info!("editor closed");
    Ok(())
}

/// The screen belongs to the UI, so records only go to stderr when RUST_LOG
/// asks for them; `--log-file` turns on `info` by default.
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            builder
                .filter_level(LevelFilter::Info)
                .target(env_logger::Target::Pipe(Box::new(file)));
        }
        None => {
            builder.filter_level(LevelFilter::Off);
        }
    }
    builder.parse_default_env().init();
    Ok(())
}
