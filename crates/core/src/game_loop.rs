//! Game loop - the state machine that ties rules to a tick source
//!
//! States: `Running` (ticks descend the piece), `Paused` (tick source
//! cancelled) and the transient `GameOver`, which notifies the collaborator
//! and immediately resets back to `Running`.
//!
//! Each handler runs to completion on `&mut self`, so a tick and an input can
//! never interleave. Ticks carry the epoch they were scheduled under; any tick
//! from an older epoch (one that was queued before a pause or reset) is
//! ignored.

use crate::game_state::GameState;
use crate::scheduler::Scheduler;
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, StepOutcome};

/// Receives the one-shot game over notification.
///
/// Called with the final board (and the blocked spawn) before the reset.
pub trait GameOverNotifier {
    fn game_over(&mut self, snapshot: &GameSnapshot);
}

impl<F> GameOverNotifier for F
where
    F: FnMut(&GameSnapshot),
{
    fn game_over(&mut self, snapshot: &GameSnapshot) {
        self(snapshot)
    }
}

/// Drives a [`GameState`] from a [`Scheduler`].
#[derive(Debug)]
pub struct GameLoop<S: Scheduler> {
    state: GameState,
    scheduler: S,
    interval_ms: u32,
    epoch: u64,
    ticking: bool,
}

impl<S: Scheduler> GameLoop<S> {
    /// Create the loop with an empty board and a spawned piece. Call
    /// [`GameLoop::start`] to begin ticking.
    pub fn new(seed: u32, interval_ms: u32, scheduler: S) -> Self {
        Self {
            state: GameState::new(seed),
            scheduler,
            interval_ms: interval_ms.max(1),
            epoch: 0,
            ticking: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable state access for scripted setups
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Epoch that live ticks must carry
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn is_ticking(&self) -> bool {
        self.ticking
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.state.snapshot_into(out);
    }

    /// Begin ticking at the fixed interval
    pub fn start(&mut self) {
        self.start_ticking();
    }

    fn start_ticking(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
        self.scheduler.start(self.interval_ms, self.epoch);
        self.ticking = true;
        log::debug!("ticking every {}ms (epoch {})", self.interval_ms, self.epoch);
    }

    fn stop_ticking(&mut self) {
        self.scheduler.cancel();
        self.ticking = false;
    }

    /// Handle a tick fired under `epoch`
    pub fn on_tick<N>(&mut self, epoch: u64, notifier: &mut N) -> StepOutcome
    where
        N: GameOverNotifier + ?Sized,
    {
        if !self.ticking || epoch != self.epoch {
            log::trace!("dropping stale tick (epoch {}, live {})", epoch, self.epoch);
            return StepOutcome::Ignored;
        }

        let outcome = self.state.tick();
        self.finish(outcome, notifier)
    }

    pub fn move_left(&mut self) -> StepOutcome {
        self.state.move_left()
    }

    pub fn move_right(&mut self) -> StepOutcome {
        self.state.move_right()
    }

    /// Manual single-step descent; same landing rules as a tick
    pub fn move_down<N>(&mut self, notifier: &mut N) -> StepOutcome
    where
        N: GameOverNotifier + ?Sized,
    {
        let outcome = self.state.move_down();
        self.finish(outcome, notifier)
    }

    pub fn rotate(&mut self) -> StepOutcome {
        self.state.rotate()
    }

    /// Stop the tick source. Board and piece are left as they are.
    pub fn pause(&mut self) -> StepOutcome {
        if !self.state.set_paused(true) {
            return StepOutcome::Ignored;
        }
        self.stop_ticking();
        StepOutcome::Applied
    }

    /// Restart the tick source at the same interval
    pub fn resume(&mut self) -> StepOutcome {
        if !self.state.set_paused(false) {
            return StepOutcome::Ignored;
        }
        self.start_ticking();
        StepOutcome::Applied
    }

    /// Cancel pending ticks, empty the board, spawn a piece and tick again
    pub fn reset(&mut self) -> StepOutcome {
        self.stop_ticking();
        self.state.restart();
        self.start_ticking();
        StepOutcome::Applied
    }

    pub fn apply_action<N>(&mut self, action: GameAction, notifier: &mut N) -> StepOutcome
    where
        N: GameOverNotifier + ?Sized,
    {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::MoveDown => self.move_down(notifier),
            GameAction::Rotate => self.rotate(),
            GameAction::TogglePause => {
                if self.state.paused() {
                    self.resume()
                } else {
                    self.pause()
                }
            }
            GameAction::Reset => self.reset(),
        }
    }

    fn finish<N>(&mut self, outcome: StepOutcome, notifier: &mut N) -> StepOutcome
    where
        N: GameOverNotifier + ?Sized,
    {
        if let StepOutcome::GameOver { .. } = outcome {
            notifier.game_over(&self.state.snapshot());
            self.reset();
        }
        outcome
    }
}
