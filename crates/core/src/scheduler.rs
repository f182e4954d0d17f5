//! Tick scheduling
//!
//! The game loop never talks to a timer directly. It starts and cancels a
//! [`Scheduler`], tagging each start with an epoch. The tick source must hand
//! that epoch back with every tick so the loop can drop ticks that were
//! already in flight when it paused or reset.

/// A cancellable periodic tick source.
pub trait Scheduler {
    /// Begin firing ticks every `interval_ms`, tagged with `epoch`.
    ///
    /// Any previously running schedule is replaced. The first tick fires one
    /// full interval after the call.
    fn start(&mut self, interval_ms: u32, epoch: u64);

    /// Stop firing ticks. A no-op when nothing is scheduled.
    fn cancel(&mut self);

    fn is_active(&self) -> bool;
}

/// Deterministic scheduler driven by explicit elapsed time.
///
/// Used by tests and headless drivers: call [`ManualScheduler::advance`] with
/// the time that passed and feed the returned number of ticks to the loop
/// under [`ManualScheduler::epoch`].
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    interval_ms: u32,
    epoch: Option<u64>,
    elapsed_ms: u32,
    starts: u32,
    cancels: u32,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Epoch of the running schedule, if any
    pub fn epoch(&self) -> Option<u64> {
        self.epoch
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Number of times `start` was called
    pub fn starts(&self) -> u32 {
        self.starts
    }

    /// Number of times a running schedule was cancelled
    pub fn cancels(&self) -> u32 {
        self.cancels
    }

    /// Let `elapsed_ms` pass and return how many ticks came due.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if self.epoch.is_none() || self.interval_ms == 0 {
            return 0;
        }

        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        let due = self.elapsed_ms / self.interval_ms;
        self.elapsed_ms %= self.interval_ms;
        due
    }
}

impl Scheduler for ManualScheduler {
    fn start(&mut self, interval_ms: u32, epoch: u64) {
        self.interval_ms = interval_ms;
        self.epoch = Some(epoch);
        self.elapsed_ms = 0;
        self.starts += 1;
    }

    fn cancel(&mut self) {
        if self.epoch.take().is_some() {
            self.cancels += 1;
        }
        self.elapsed_ms = 0;
    }

    fn is_active(&self) -> bool {
        self.epoch.is_some()
    }
}
