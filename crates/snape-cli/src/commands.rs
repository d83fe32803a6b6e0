use crate::cli::{Commands, Snape};
use snape_core::config::ensure_dir;
use snape_core::{
    load_catalog, resolve_snippets_dir, Result, SelectionController, Settings, SettingsStore,
    SnapeError, SnippetSource, SystemClipboard, Theme,
};
use snape_ui::{display_snippet_picker, PickerOptions};
use std::path::Path;
use std::process::Command;
use tracing::{debug, info};

pub fn handle_command(args: Snape) -> Result<()> {
    let dir = resolve_snippets_dir(args.dir.as_deref());

    match args.commands {
        None => handle_picker(&dir, args.width_size, args.height_size),
        Some(Commands::Path) => {
            println!("{}", dir.display());
            Ok(())
        }
        Some(Commands::Open) => open_snippets_dir(&dir),
        Some(Commands::Settings {
            theme,
            width,
            height,
        }) => handle_settings(&dir, theme, width, height),
    }
}

fn handle_picker(dir: &Path, width: Option<u32>, height: Option<u32>) -> Result<()> {
    // Saved settings, with explicit sizes from the command line taking priority
    let settings = SettingsStore::new(dir).load().with_size(width, height);

    debug!(
        "Starting Snape snippet manager (size: {}x{})...",
        settings.window_width, settings.window_height
    );
    debug!("Snippets directory: {}", dir.display());

    let source = SnippetSource::new(dir);
    let controller = SelectionController::new(load_catalog(&source));
    let mut clipboard = SystemClipboard::new();

    let options = PickerOptions {
        settings,
        snippets_dir: dir.to_path_buf(),
    };

    if let Some(snippet) = display_snippet_picker(controller, &options, &mut clipboard)? {
        debug!("Selected snippet: {}", snippet.display_name);
    }

    Ok(())
}

fn handle_settings(
    dir: &Path,
    theme: Option<Theme>,
    width: Option<u32>,
    height: Option<u32>,
) -> Result<()> {
    let store = SettingsStore::new(dir);
    let mut settings = store.load();

    if theme.is_none() && width.is_none() && height.is_none() {
        print_settings(&settings, store.path());
        return Ok(());
    }

    if let Some(theme) = theme {
        settings.theme = theme;
    }
    settings = settings.with_size(width, height);
    store.save(&settings)?;
    info!("Saved settings to {}", store.path().display());

    print_settings(&settings, store.path());
    Ok(())
}

fn print_settings(settings: &Settings, path: &Path) {
    println!("Settings file: {}", path.display());
    println!("Theme:         {}", settings.theme);
    println!(
        "Window size:   {}x{}",
        settings.window_width, settings.window_height
    );
}

/// Open the snippets directory with the platform's file manager
fn open_snippets_dir(dir: &Path) -> Result<()> {
    ensure_dir(dir)?;
    println!("Opening snippets folder: {}", dir.display());

    #[cfg(target_os = "macos")]
    let status = Command::new("open").arg(dir).status();

    #[cfg(target_os = "windows")]
    let status = Command::new("explorer").arg(dir).status();

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let status = Command::new("xdg-open").arg(dir).status();

    match status {
        Ok(exit_status) if exit_status.success() => Ok(()),
        Ok(exit_status) => Err(SnapeError::Other(format!(
            "Failed to open snippets folder: process exited with code {:?}",
            exit_status.code()
        ))),
        Err(e) => Err(SnapeError::Io(e)),
    }
}
