use crate::config::Config;
use crate::provider::CardProvider;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse, InputAction};
use crate::ui::layout::body_rect;
use crate::ui::render::draw;
use crate::ui::session::FetchTicket;
use crate::ui::terminal_guard::setup_terminal;
use ratatui::layout::Rect;
use std::io;
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

pub fn run(config: Config, provider: Arc<dyn CardProvider>, runtime: Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let batch_size = config.api.batch_size;
    let mut app = App::new(&config);
    let events = EventHandler::new(tick_rate);
    let mut body = crossterm::terminal::size()
        .map(|(cols, rows)| body_rect(Rect::new(0, 0, cols, rows)))
        .unwrap_or_default();

    let fetch = |ticket: FetchTicket| {
        spawn_fetch(&runtime, Arc::clone(&provider), batch_size, ticket, events.sender())
    };

    if let Some(ticket) = app.start() {
        fetch(ticket);
    }

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        let action = match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse, body),
            Ok(AppEvent::Tick) => {
                app.on_tick();
                InputAction::None
            }
            Ok(AppEvent::Resize(cols, rows)) => {
                body = body_rect(Rect::new(0, 0, cols, rows));
                InputAction::None
            }
            Ok(AppEvent::FetchCompleted { generation, result }) => {
                app.on_fetch_complete(generation, result);
                InputAction::None
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => InputAction::None,
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        };

        if let InputAction::Fetch(ticket) = action {
            fetch(ticket);
        }
    }

    drop(guard);
    Ok(())
}

/// Runs one fetch on the async runtime and posts the result back to the UI loop.
fn spawn_fetch(
    runtime: &Handle,
    provider: Arc<dyn CardProvider>,
    batch_size: usize,
    ticket: FetchTicket,
    tx: Sender<AppEvent>,
) {
    tracing::debug!(generation = ticket.generation, batch_size, "Spawning fetch");
    runtime.spawn(async move {
        let result = provider.fetch_batch(batch_size).await;
        let _ = tx.send(AppEvent::FetchCompleted {
            generation: ticket.generation,
            result,
        });
    });
}
