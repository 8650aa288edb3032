use crate::api::MovieClient;
use crate::session::TokenStore;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::route::Route;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;
use tokio::runtime::Handle;

/// Run the UI loop on the current thread until the user quits.
///
/// Must be called from inside a tokio runtime context; fetches are spawned
/// onto it.
pub fn run(
    client: MovieClient,
    tokens: TokenStore,
    start: Route,
    tick_rate: Duration,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);
    let mut app = App::new(client, tokens, events.sender(), Handle::current());
    app.navigate(start);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Fetched { generation, result }) => app.on_fetched(generation, result),
            Ok(AppEvent::Resize) | Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!("ui loop finished");
    Ok(())
}
