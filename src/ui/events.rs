use std::io;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
    /// A screen's fetch settled; redraw.
    FetchSettled,
    /// The input thread stopped after a terminal error.
    InputClosed,
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> io::Result<Self> {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::Builder::new()
            .name("input".to_string())
            .spawn(move || {
                let mut last_tick = Instant::now();
                loop {
                    let timeout = tick_rate
                        .saturating_sub(last_tick.elapsed())
                        .min(Duration::from_millis(50));

                    let forwarded = match event::poll(timeout) {
                        Ok(true) => match event::read() {
                            Ok(Event::Key(key)) => event_tx.send(AppEvent::Key(key)).is_ok(),
                            Ok(Event::Resize(cols, rows)) => {
                                event_tx.send(AppEvent::Resize(cols, rows)).is_ok()
                            }
                            Ok(_) => true,
                            Err(err) => {
                                tracing::error!(error = %err, "Terminal read failed");
                                let _ = event_tx.send(AppEvent::InputClosed);
                                false
                            }
                        },
                        Ok(false) => true,
                        Err(err) => {
                            tracing::error!(error = %err, "Terminal poll failed");
                            let _ = event_tx.send(AppEvent::InputClosed);
                            false
                        }
                    };
                    // Receiver gone or terminal unusable.
                    if !forwarded {
                        break;
                    }

                    if last_tick.elapsed() >= tick_rate {
                        if event_tx.send(AppEvent::Tick).is_err() {
                            break;
                        }
                        last_tick = Instant::now();
                    }
                }
            })?;

        Ok(Self { rx, tx })
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}
