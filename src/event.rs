use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};

/// What the input threads hand to the main loop. The engine never schedules
/// anything itself; `Tick` is the external clock that paces the word-rain
/// simulation.
pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(#[allow(dead_code)] u16, #[allow(dead_code)] u16),
}

pub struct EventHandler {
    rx: mpsc::Receiver<AppEvent>,
}

impl EventHandler {
    /// Two producer threads: one polls the terminal for keys, one emits a
    /// tick every `tick_rate`. A separate ticker keeps the simulation step
    /// steady even while keys arrive faster than the tick interval.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        let key_tx = tx.clone();
        thread::spawn(move || {
            loop {
                if event::poll(Duration::from_millis(250)).unwrap_or(false) {
                    let sent = match event::read() {
                        Ok(Event::Key(key)) => key_tx.send(AppEvent::Key(key)),
                        Ok(Event::Resize(w, h)) => key_tx.send(AppEvent::Resize(w, h)),
                        _ => Ok(()),
                    };
                    if sent.is_err() {
                        return;
                    }
                }
            }
        });

        thread::spawn(move || {
            loop {
                thread::sleep(tick_rate);
                if tx.send(AppEvent::Tick).is_err() {
                    return;
                }
            }
        });

        Self { rx }
    }

    pub fn next(&self) -> anyhow::Result<AppEvent> {
        Ok(self.rx.recv()?)
    }
}
