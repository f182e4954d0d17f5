//! Tokio-backed tick source.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::core::Scheduler;
use crate::driver::Command;

/// Periodic task that posts [`Command::Tick`] into the driver channel.
///
/// Must be started from inside a tokio runtime. Dropping the ticker cancels
/// the task.
#[derive(Debug)]
pub struct TokioTicker {
    tx: UnboundedSender<Command>,
    task: Option<JoinHandle<()>>,
}

impl TokioTicker {
    pub fn new(tx: UnboundedSender<Command>) -> Self {
        Self { tx, task: None }
    }
}

impl Scheduler for TokioTicker {
    fn start(&mut self, interval_ms: u32, epoch: u64) {
        self.cancel();

        let tx = self.tx.clone();
        let period = Duration::from_millis(interval_ms.max(1) as u64);
        log::debug!("ticker {} started ({}ms)", epoch, interval_ms);
        self.task = Some(tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(Command::Tick { epoch }).is_err() {
                    log::debug!("driver gone, ticker {} exiting", epoch);
                    break;
                }
            }
        }));
    }

    fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            log::debug!("ticker cancelled");
        }
    }

    fn is_active(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }
}

impl Drop for TokioTicker {
    fn drop(&mut self) {
        self.cancel();
    }
}
