use crm::app::App;
use crm::cli::{handle_version_command, parse_args, run_cli_command, CliCommand};
use crm::startup::{init_logging, run_preflight, CrmConfig, StartupResult};
use crm::terminal::{setup_panic_hook, TerminalManager};
use crm::ui;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;

/// Spinner and redraw cadence while requests are in flight.
const TICK: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    color_eyre::install()?;

    // Handle --version before any initialization
    let command = parse_args(std::env::args());
    if command == CliCommand::Version {
        handle_version_command();
    }

    let mut config = CrmConfig::from_env()?;
    if let CliCommand::RunTui {
        api_url: Some(url),
    } = &command
    {
        config = config.with_api_url(url.clone());
    }
    config.validate()?;

    // Non-TUI commands exit before the terminal is touched
    if let Some(result) = run_cli_command(&command, &config) {
        return result;
    }

    init_logging(&config)?;
    tracing::info!(api_url = %config.api_url, "starting crm");

    let runtime = tokio::runtime::Runtime::new()?;
    let startup = runtime
        .block_on(run_preflight(config))
        .wrap_err("preparing the session")?;

    setup_panic_hook();

    let result = runtime.block_on(run_tui(startup));

    if let Err(ref e) = result {
        tracing::error!(error = %e, "crm exited with an error");
    }
    result
}

async fn run_tui(startup: StartupResult) -> Result<()> {
    let mut manager = TerminalManager::new()?;
    let mut app = App::new(startup);
    app.start();
    let result = run_app(manager.terminal(), &mut app).await;
    let restored = manager.restore();
    result?;
    restored
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let mut message_rx = app.message_rx.take();
    let mut ticker = tokio::time::interval(TICK);
    let mut store_revision = app.store.subscribe();

    loop {
        // Draw the UI only when local state or the store changed
        let store_changed = store_revision.has_changed().unwrap_or(false);
        if app.needs_redraw || store_changed {
            store_revision.borrow_and_update();
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = ticker.tick() => app.tick(),

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Paste(text))) => app.handle_paste(&text),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::warn!(error = %e, "terminal event stream failed");
                        return Err(e).wrap_err("reading terminal events");
                    }
                    None => return Ok(()),
                }
            }

            // Actions from request tasks, folded into the store in order
            applied = app.store.next() => {
                if applied.is_some() {
                    app.store.drain();
                    app.clamp_cursors();
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
