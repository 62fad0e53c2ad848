//! Repeating status refresh timer

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

use crate::message::Message;

/// Send [`Message::StatusPollTick`] every `interval` until shutdown.
///
/// The first tick fires one interval after start; the initial refresh is
/// issued by the engine itself.
pub fn spawn_status_poller(
    interval: Duration,
    msg_tx: mpsc::Sender<Message>,
    mut shutdown_rx: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval_at(tokio::time::Instant::now() + interval, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        debug!("Status poller started ({}ms)", interval.as_millis());

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if msg_tx.send(Message::StatusPollTick).await.is_err() {
                        break;
                    }
                }
                changed = shutdown_rx.changed() => {
                    if changed.is_err() || *shutdown_rx.borrow() {
                        break;
                    }
                }
            }
        }

        debug!("Status poller stopped");
    })
}
