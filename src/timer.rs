use std::time::Duration;

use log::debug;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};

/// One unit of workout time, tagged with the session it was started for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub generation: u64,
}

/// The single periodic timer source. At most one task is alive at a time.
pub struct Ticker {
    period: Duration,
    tx: UnboundedSender<Tick>,
    task: Option<JoinHandle<()>>,
}

impl Ticker {
    pub fn new(period: Duration, tx: UnboundedSender<Tick>) -> Self {
        Self {
            period,
            tx,
            task: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Cancel the running task, then start a fresh one for `generation`.
    /// Must be called from inside a tokio runtime.
    pub fn restart(&mut self, generation: u64) {
        self.cancel();

        let period = self.period;
        let tx = self.tx.clone();
        self.task = Some(tokio::spawn(async move {
            let mut every = interval(period);
            every.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick of an interval completes immediately.
            every.tick().await;

            loop {
                every.tick().await;
                if tx.send(Tick { generation }).is_err() {
                    break;
                }
            }
        }));
        debug!("ticker started for session {generation} every {:?}", period);
    }

    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}
