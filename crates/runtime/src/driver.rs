//! Command driver.
//!
//! Ticks and input arrive on one unbounded channel and are handled strictly in
//! arrival order by a single task that owns the [`GameLoop`]. Each command is
//! applied to completion and followed by a redraw, so the frontend always sees
//! a consistent snapshot.

use anyhow::Result;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

use crate::config::GameConfig;
use crate::core::{GameLoop, GameOverNotifier, GameSnapshot};
use crate::ticker::TokioTicker;
use crate::types::{GameAction, StepOutcome};

/// Everything the driver reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Scheduled descent, tagged with the epoch it was scheduled under
    Tick { epoch: u64 },
    /// Player input
    Action(GameAction),
    /// Redraw without changing state (e.g. after a terminal resize)
    Redraw,
    /// Stop the driver
    Quit,
}

/// Where snapshots go: the render collaborator plus the game over notice.
pub trait Frontend: GameOverNotifier {
    fn draw(&mut self, snapshot: &GameSnapshot) -> Result<()>;
}

/// Counters reported when the driver stops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub actions: u64,
    pub pieces_landed: u64,
    pub lines_cleared: u64,
    pub game_overs: u64,
}

impl RunSummary {
    fn record(&mut self, outcome: StepOutcome) {
        if outcome.landed() {
            self.pieces_landed += 1;
        }
        match outcome {
            StepOutcome::Landed { lines_cleared } => {
                self.lines_cleared += lines_cleared as u64;
            }
            StepOutcome::GameOver { lines_cleared } => {
                self.lines_cleared += lines_cleared as u64;
                self.game_overs += 1;
            }
            _ => {}
        }
    }
}

/// Run the game until [`Command::Quit`] arrives.
///
/// `tx` is the sending half of `rx`; the ticker posts ticks through it, so the
/// channel stays open for as long as the driver runs.
pub async fn run<F: Frontend>(
    config: &GameConfig,
    tx: UnboundedSender<Command>,
    mut rx: UnboundedReceiver<Command>,
    frontend: &mut F,
) -> Result<RunSummary> {
    log::info!(
        "starting game (seed {}, tick {}ms)",
        config.seed,
        config.tick_ms
    );

    let mut game = GameLoop::new(config.seed, config.tick_ms, TokioTicker::new(tx));
    game.start();

    let mut summary = RunSummary::default();
    let mut snapshot = GameSnapshot::default();
    game.snapshot_into(&mut snapshot);
    frontend.draw(&snapshot)?;

    while let Some(command) = rx.recv().await {
        let outcome = match command {
            Command::Tick { epoch } => {
                let outcome = game.on_tick(epoch, frontend);
                if outcome == StepOutcome::Ignored {
                    continue;
                }
                summary.ticks += 1;
                outcome
            }
            Command::Action(action) => {
                summary.actions += 1;
                let outcome = game.apply_action(action, frontend);
                log::debug!("{:?} -> {:?}", action, outcome);
                outcome
            }
            Command::Redraw => StepOutcome::Ignored,
            Command::Quit => break,
        };
        summary.record(outcome);

        game.snapshot_into(&mut snapshot);
        frontend.draw(&snapshot)?;
    }

    log::info!("driver stopped: {:?}", summary);
    Ok(summary)
}
