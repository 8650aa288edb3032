use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use serde_json::Value;

use crate::api::{ApiResponse, DashboardView, Movie, Review, TokenPair};

/// A fetch that finished. One variant per kind of slot a page can fill.
#[derive(Debug, Clone)]
pub enum FetchResult {
    Dashboard(ApiResponse<DashboardView>),
    Movies(ApiResponse<Vec<Movie>>),
    Movie(ApiResponse<Movie>),
    Reviews(ApiResponse<Vec<Review>>),
    Login(ApiResponse<TokenPair>),
    Register(ApiResponse<Value>),
    ReviewPosted(ApiResponse<Value>),
    /// Local tokens are gone. Server outcome is already logged.
    LoggedOut,
}

pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    /// Tagged with the page generation that sent the request.
    Fetched { generation: u64, result: FetchResult },
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    /// Start the input thread. It polls the terminal every `tick_rate` and
    /// exits once the receiving side is gone.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || loop {
            let ready = match event::poll(tick_rate) {
                Ok(ready) => ready,
                Err(err) => {
                    tracing::error!(error = %err, "terminal poll failed");
                    break;
                }
            };
            if !ready {
                continue;
            }

            let sent = match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    event_tx.send(AppEvent::Key(key))
                }
                Ok(Event::Resize(..)) => event_tx.send(AppEvent::Resize),
                Ok(_) => Ok(()),
                Err(err) => {
                    tracing::error!(error = %err, "terminal read failed");
                    break;
                }
            };
            if sent.is_err() {
                break;
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}
