use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use folio::app::{
    r#loop::{run_loop, Runtime},
    state::AppState,
};
use folio::config::AppConfig;
use folio::events::BusEvent;
use folio::infrastructure::http_adapter::HttpAdminAdapter;
use folio::palette::classifier::COMMAND_PREFIX;
use folio::storage::{FileStore, KeyValueStore, MemoryStore};

/// Keyboard-driven quick navigation for the folio admin.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Config file (defaults to ~/.config/folio/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Admin API base URL, overriding config and FOLIO_API_URL
    #[arg(long)]
    api_url: Option<String>,

    /// Where recents, notifications and logs are kept
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Start with the palette open on this query
    #[arg(long, conflicts_with = "commands")]
    search: Option<String>,

    /// Start with the palette open in command mode
    #[arg(long)]
    commands: bool,
}

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Everything that can fail on bad input happens before the terminal is
    // put into raw mode.
    let mut config = AppConfig::load(args.config.as_deref())?;
    if let Some(url) = args.api_url {
        config.api_base_url = url;
    }
    if let Some(dir) = args.data_dir {
        config.data_dir = Some(dir);
    }

    let data_dir = config.resolved_data_dir();
    let _log_guard = folio::logging::init(data_dir.as_deref(), &config.log_level);

    let store: Arc<dyn KeyValueStore> = match &data_dir {
        Some(dir) => Arc::new(FileStore::new(dir)),
        None => {
            tracing::warn!("No data directory; recents and notifications are session-only");
            Arc::new(MemoryStore::new())
        }
    };

    let adapter = Arc::new(HttpAdminAdapter::new(
        &config.api_base_url,
        config.api_token.clone(),
        config.request_timeout(),
    ));

    let mut app_state = AppState::new(store, &config.keys);
    app_state.api_base_url = config.api_base_url.clone();

    let mut runtime = Runtime::new(adapter);
    runtime.search_debounce = config.search_debounce();
    if let Some(query) = args.search {
        runtime.startup_events.push(BusEvent::open_palette(Some(query)));
    } else if args.commands {
        runtime
            .startup_events
            .push(BusEvent::open_palette(Some(COMMAND_PREFIX.to_string())));
    }

    setup_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state, runtime).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "Exited with error");
        eprintln!("{err:?}");
    }

    Ok(())
}
