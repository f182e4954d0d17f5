//! Terminal runner (default binary).
//!
//! Reads keys on a blocking input thread and drives the game on a
//! single-threaded tokio runtime. Rendering goes through the framebuffer
//! renderer in `blockdrop::term`.

use std::fs::File;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use tokio::sync::mpsc::{self, UnboundedSender};

use blockdrop::core::{GameOverNotifier, GameSnapshot};
use blockdrop::input::{handle_key_event, should_quit};
use blockdrop::runtime::{self, Command, Frontend, GameConfig};
use blockdrop::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

/// How long the game over banner stays up after the automatic reset
const GAME_OVER_BANNER: Duration = Duration::from_millis(1500);

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    init_logging(&config)?;

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("failed to build tokio runtime")?;

    let mut frontend = TerminalFrontend::new();
    frontend.term.enter()?;

    let result = rt.block_on(play(&config, &mut frontend));

    // Always try to restore terminal state.
    let _ = frontend.term.exit();
    result
}

async fn play(config: &GameConfig, frontend: &mut TerminalFrontend) -> Result<()> {
    let (tx, rx) = mpsc::unbounded_channel();
    spawn_input_thread(tx.clone());

    let summary = runtime::run(config, tx, rx, frontend).await?;
    log::info!(
        "session over: {} pieces, {} lines, {} game overs",
        summary.pieces_landed,
        summary.lines_cleared,
        summary.game_overs
    );
    Ok(())
}

fn init_logging(config: &GameConfig) -> Result<()> {
    // Logging to stderr would scribble over the alternate screen, so it is
    // off unless RUST_LOG asks for it or a log file is configured.
    let default_filter = if config.log_path.is_some() { "info" } else { "off" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));

    if let Some(path) = &config.log_path {
        let file = File::create(path).with_context(|| format!("failed to open log file {path}"))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

fn spawn_input_thread(tx: UnboundedSender<Command>) {
    thread::spawn(move || loop {
        let command = match event::read() {
            Ok(Event::Key(key)) if should_quit(key) => Command::Quit,
            Ok(Event::Key(key)) => match handle_key_event(key) {
                Some(action) => Command::Action(action),
                None => continue,
            },
            Ok(Event::Resize(_, _)) => Command::Redraw,
            Ok(_) => continue,
            Err(e) => {
                log::error!("reading terminal events failed: {e}");
                Command::Quit
            }
        };

        let quit = command == Command::Quit;
        if tx.send(command).is_err() || quit {
            break;
        }
    });
}

struct TerminalFrontend {
    term: TerminalRenderer,
    view: GameView,
    fb: FrameBuffer,
    banner_until: Option<Instant>,
}

impl TerminalFrontend {
    fn new() -> Self {
        Self {
            term: TerminalRenderer::new(),
            view: GameView::default(),
            fb: FrameBuffer::new(0, 0),
            banner_until: None,
        }
    }

    fn paint(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));

        if self.banner_until.is_some_and(|until| Instant::now() >= until) {
            self.banner_until = None;
        }
        let banner = self.banner_until.map(|_| "GAME OVER");

        self.view
            .render_into_with_banner(snapshot, banner, Viewport::new(w, h), &mut self.fb);
        self.term.draw(&self.fb)
    }
}

impl GameOverNotifier for TerminalFrontend {
    fn game_over(&mut self, snapshot: &GameSnapshot) {
        self.banner_until = Some(Instant::now() + GAME_OVER_BANNER);
        if let Err(e) = self.paint(snapshot) {
            log::warn!("failed to draw game over frame: {e}");
        }
    }
}

impl Frontend for TerminalFrontend {
    fn draw(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        self.paint(snapshot)
    }
}
