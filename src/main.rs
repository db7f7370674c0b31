use launchpad::adapters::{JsonFileStore, ReqwestHttpClient};
use launchpad::api::SpaceXApi;
use launchpad::app::{App, KeyOutcome};
use launchpad::cache::MemoryStore;
use launchpad::config::LaunchpadConfig;
use launchpad::coordinator::LaunchCoordinator;
use launchpad::logging;
use launchpad::terminal::{setup_panic_hook, TerminalManager};
use launchpad::traits::{LaunchStore, RenderSink};
use launchpad::ui;
use launchpad::view::StateSubscription;

use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use std::time::Duration;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Spinner cadence while a load is in flight
const TICK: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    // Handle --version flag before any initialization
    if std::env::args().any(|arg| arg == "--version") {
        println!("launchpad {}", VERSION);
        std::process::exit(0);
    }

    color_eyre::install()?;

    let mut config = LaunchpadConfig::from_env();
    if std::env::args().any(|arg| arg == "--no-cache") {
        config = config.without_cache_file();
    }

    match &config.log_file {
        Some(path) => {
            if let Err(e) = logging::init_file(path) {
                eprintln!("Warning: logging disabled ({})", e);
                logging::init_disabled();
            }
        }
        None => logging::init_disabled(),
    }

    let runtime = tokio::runtime::Runtime::new()?;
    let coordinator = Arc::new(build_coordinator(&config)?);

    // Handle --clear-cache: drop the snapshot and exit without starting the UI
    if std::env::args().any(|arg| arg == "--clear-cache") {
        runtime.block_on(coordinator.clear_cache())?;
        println!("Launch cache cleared");
        return Ok(());
    }

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    tracing::info!(version = VERSION, api = %config.api_base_url, "Starting launchpad");

    runtime.block_on(run(coordinator))
}

async fn run(coordinator: Arc<LaunchCoordinator>) -> Result<()> {
    let mut term_manager = TerminalManager::new()?;
    let mut app = App::new(coordinator);
    app.activate();

    let result = run_app(term_manager.terminal(), &mut app).await;

    app.deactivate();
    term_manager.restore();
    result
}

fn build_coordinator(config: &LaunchpadConfig) -> Result<LaunchCoordinator> {
    let http = ReqwestHttpClient::with_timeout(config.request_timeout)
        .map_err(|e| eyre!("Failed to build HTTP client: {}", e))?;
    let api = SpaceXApi::with_base_url(Arc::new(http), config.api_base_url.clone());

    let store: Arc<dyn LaunchStore> = match &config.cache_file {
        Some(path) => Arc::new(JsonFileStore::new(path)),
        None => Arc::new(MemoryStore::new()),
    };

    Ok(LaunchCoordinator::new(api, store))
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the current cycle's subscription (we need ownership for select!)
    let mut subscription: Option<StateSubscription> = app.take_subscription();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app.render_context()))?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(TICK);
        // Subscription swaps happen after select! releases its borrow
        let mut resubscribe = false;
        let mut cycle_done = false;

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) => {
                        match app.handle_key(key) {
                            KeyOutcome::Reloaded => resubscribe = true,
                            KeyOutcome::Quit => return Ok(()),
                            KeyOutcome::Handled | KeyOutcome::Ignored => {}
                        }
                    }
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => return Ok(()),
                }
            }

            state = async {
                match &mut subscription {
                    Some(sub) => sub.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                match state {
                    Some(state) => app.on_state_change(&state),
                    None => cycle_done = true,
                }
            }
        }

        if resubscribe {
            subscription = app.take_subscription();
        } else if cycle_done {
            subscription = None;
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
