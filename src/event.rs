use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior};

#[derive(Clone, Debug)]
pub enum Event {
    Key(KeyEvent),
    Tick,
    Resize,
    Interrupt,
}

#[cfg(unix)]
struct InterruptListener(tokio::signal::unix::Signal);

#[cfg(unix)]
impl InterruptListener {
    fn register() -> std::io::Result<Self> {
        use tokio::signal::unix::{SignalKind, signal};
        signal(SignalKind::interrupt()).map(Self)
    }

    async fn recv(&mut self) -> Option<()> {
        self.0.recv().await
    }
}

#[cfg(windows)]
struct InterruptListener(tokio::signal::windows::CtrlC);

#[cfg(windows)]
impl InterruptListener {
    fn register() -> std::io::Result<Self> {
        tokio::signal::windows::ctrl_c().map(Self)
    }

    async fn recv(&mut self) -> Option<()> {
        self.0.recv().await
    }
}

async fn next_interrupt(listener: &mut Option<InterruptListener>) -> Option<()> {
    match listener {
        Some(listener) => listener.recv().await,
        None => std::future::pending().await,
    }
}

pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
    _task: tokio::task::JoinHandle<()>,
}

impl EventHandler {
    /// The first tick fires one full `refresh` after construction; the caller
    /// draws the initial frame itself. SIGINT is caught from this call on, even
    /// before the event task is first polled.
    pub fn new(refresh: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel::<Event>();
        let mut interrupts = match InterruptListener::register() {
            Ok(listener) => Some(listener),
            Err(err) => {
                tracing::warn!(error = %err, "could not listen for interrupt signal");
                None
            }
        };

        let task = tokio::spawn(async move {
            let mut reader = event::EventStream::new();
            let mut refresh_interval = tokio::time::interval_at(Instant::now() + refresh, refresh);
            refresh_interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    maybe_event = reader.next() => {
                        match maybe_event {
                            Some(Ok(evt)) => {
                                let mapped = match evt {
                                    CrosstermEvent::Key(key) => Some(Event::Key(key)),
                                    CrosstermEvent::Resize(_, _) => Some(Event::Resize),
                                    _ => None,
                                };
                                if let Some(e) = mapped
                                    && tx.send(e).is_err()
                                {
                                    break;
                                }
                            }
                            Some(Err(_)) => break,
                            None => break,
                        }
                    }
                    _ = refresh_interval.tick() => {
                        if tx.send(Event::Tick).is_err() {
                            break;
                        }
                    }
                    signal = next_interrupt(&mut interrupts), if interrupts.is_some() => {
                        match signal {
                            Some(()) => {
                                if tx.send(Event::Interrupt).is_err() {
                                    break;
                                }
                            }
                            None => interrupts = None,
                        }
                    }
                }
            }
        });

        Self { rx, _task: task }
    }

    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}
