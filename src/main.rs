use artgrid::adapters::ReqwestHttpClient;
use artgrid::app::{App, AppMessage};
use artgrid::cli::{parse_args, run_cli_command};
use artgrid::input::KeybindingConfig;
use artgrid::source::ArticSource;
use artgrid::startup::{logging, AppConfig};
use artgrid::terminal::{setup_panic_hook, TerminalManager};
use artgrid::ui;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind, MouseEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Redraw and animation tick.
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    // Handle --version / --help before any initialization
    let command = match parse_args(std::env::args()) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("artgrid: {}", e);
            std::process::exit(2);
        }
    };
    let overrides = run_cli_command(command);

    color_eyre::install()?;

    let config = AppConfig::from_env()
        .wrap_err("reading ARTGRID_* environment")?
        .apply_overrides(&overrides);
    config.validate().wrap_err("invalid configuration")?;

    let log_path = logging::init_from_env();
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        base_url = %config.base_url,
        page_size = config.page_size,
        log = ?log_path,
        "starting artgrid"
    );

    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    let result = runtime.block_on(async {
        let client = ReqwestHttpClient::with_timeout(config.timeout);
        let source = ArticSource::new(client, config.base_url.clone(), config.page_size);
        let mut app = App::new(Arc::new(source));
        app.on_page_change(config.start_page);

        let mut term_manager = TerminalManager::new()?;
        let result = run_app(term_manager.terminal(), &mut app).await;
        term_manager.restore()?;
        result
    });

    if let Err(e) = &result {
        tracing::error!(error = %e, "artgrid exited with an error");
    }
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let bindings = KeybindingConfig::new();
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.should_quit {
            return Ok(());
        }

        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(TICK);

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        if let Some(cmd) = bindings.dispatch(key, app.input_mode()) {
                            app.execute_command(cmd);
                        }
                    }
                    Some(Ok(Event::Mouse(mouse))) => match mouse.kind {
                        MouseEventKind::ScrollUp => app.move_focus_up(),
                        MouseEventKind::ScrollDown => app.move_focus_down(),
                        _ => {}
                    },
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::warn!(error = %e, "terminal event error");
                    }
                    None => return Ok(()),
                }
            }

            Some(msg) = async {
                match message_rx.as_mut() {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                app.handle_message(msg);
            }
        }
    }
}
