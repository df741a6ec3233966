//! Worker thread that plays a [`Timeline`]
//!
//! The worker sleeps through each delay and sends the event to the UI
//! thread, which applies it to [`DemoState`](super::DemoState). Events are
//! sent strictly in timeline order; the worker never applies anything itself.

use super::timeline::{DemoEvent, Timeline};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread::{self, JoinHandle};
use tracing::debug;

/// Handle to a timeline being played on a worker thread
pub struct DemoRunner {
    rx: Receiver<DemoEvent>,
    handle: Option<JoinHandle<()>>,
    finished: bool,
}

impl DemoRunner {
    /// Start playing `timeline` on a new worker thread
    pub fn spawn(timeline: Timeline) -> Self {
        let (tx, rx) = mpsc::channel();
        let entries = timeline.into_entries();
        debug!(events = entries.len(), "Spawning demo runner");

        let handle = thread::spawn(move || {
            for entry in entries {
                if !entry.delay.is_zero() {
                    thread::sleep(entry.delay);
                }
                if tx.send(entry.event).is_err() {
                    // Receiver dropped: the UI went away mid-run
                    debug!("Demo runner receiver closed, stopping");
                    return;
                }
            }
        });

        Self {
            rx,
            handle: Some(handle),
            finished: false,
        }
    }

    /// Collect every event that has arrived, without blocking
    pub fn poll(&mut self) -> Vec<DemoEvent> {
        let mut events = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(event) => events.push(event),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.finished = true;
                    break;
                }
            }
        }
        events
    }

    /// Block until the next event, or `None` once the timeline is exhausted
    pub fn next_blocking(&mut self) -> Option<DemoEvent> {
        match self.rx.recv() {
            Ok(event) => Some(event),
            Err(_) => {
                self.finished = true;
                None
            }
        }
    }

    /// True once the worker has sent its last event and exited
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl Drop for DemoRunner {
    fn drop(&mut self) {
        // Only join a worker that is already done; a sleeping worker exits on
        // its own at the next send once the receiver is gone.
        if self.finished {
            if let Some(handle) = self.handle.take() {
                let _ = handle.join();
            }
        }
    }
}
