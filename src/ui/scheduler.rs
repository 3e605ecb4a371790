//! One-shot redraw timer for the mark cooldown
//!
//! At most one timer is pending. Scheduling replaces whatever was pending, so
//! the redraw always lines up with the latest mark.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::ui::events::AppEvent;

pub struct CooldownTimer {
    event_tx: mpsc::UnboundedSender<AppEvent>,
    pending: Option<JoinHandle<()>>,
}

impl CooldownTimer {
    pub fn new(event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            event_tx,
            pending: None,
        }
    }

    /// Send [`AppEvent::CooldownElapsed`] after `delay`, cancelling any earlier timer.
    pub fn schedule(&mut self, delay: Duration) {
        self.cancel();
        let tx = self.event_tx.clone();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the app is shutting down.
            let _ = tx.send(AppEvent::CooldownElapsed);
        }));
        tracing::debug!(delay_ms = delay.as_millis() as u64, "Scheduled cooldown redraw");
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for CooldownTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
