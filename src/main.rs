//! Terminal falling-block game (default binary).
//!
//! Runs a fixed 16ms tick loop: draw the current snapshot, wait for input
//! until the next tick is due, then advance the game.

use std::fs::File;
use std::io::BufWriter;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use blockfall::core::{GameSnapshot, GameState};
use blockfall::input::{
    dismisses_alert, handle_key_event, handle_mouse_event, is_actionable, is_click, should_quit,
};
use blockfall::logging;
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::TICK_MS;
use blockfall::{Config, EventLog};

type FileEventLog = EventLog<BufWriter<File>>;

fn main() -> Result<()> {
    // Configuration errors are reported before the terminal is taken over.
    let config = Config::try_from_env()?;
    logging::init(config.log_path.as_deref())?;
    let mut event_log = match &config.event_log_path {
        Some(path) => Some(EventLog::create(path)?),
        None => None,
    };

    log::info!(
        "starting {} variant, seed {}",
        config.variant.as_str(),
        config.seed
    );

    let mut term = TerminalRenderer::new().with_mouse_capture(config.variant.has_controls());
    term.enter()?;

    let result = run(&mut term, &config, &mut event_log);

    // Always try to restore terminal state.
    let _ = term.exit();

    if let Some(log) = event_log.as_mut() {
        log.flush()?;
    }
    if let Err(err) = &result {
        log::error!("game loop failed: {err:#}");
    }
    result
}

fn run(
    term: &mut TerminalRenderer,
    config: &Config,
    event_log: &mut Option<FileEventLog>,
) -> Result<()> {
    let mut game = GameState::new(config.variant, config.seed);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let started = Instant::now();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        game.snapshot_into(&mut snap);
        view.render_into(&snap, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if is_actionable(&key) => {
                    if should_quit(key) {
                        log::info!("quit, score {}", game.score());
                        return Ok(());
                    }
                    if game.alert().is_some() {
                        if dismisses_alert(key) {
                            game.dismiss_alert();
                        }
                    } else if let Some(action) = handle_key_event(key, config.variant) {
                        let applied = game.apply_action(action);
                        log::trace!("key {} applied={applied}", action.as_str());
                    }
                }
                Event::Mouse(ev) if is_click(&ev) => {
                    if game.alert().is_some() {
                        game.dismiss_alert();
                    } else if let Some(button) =
                        handle_mouse_event(ev, &view.button_layout(&snap, viewport))
                    {
                        let applied = game.apply_action(button.action());
                        log::debug!("button {} applied={applied}", button.action().as_str());
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.tick(TICK_MS);
        }

        for event in game.take_events() {
            log::debug!("event {:?}", event);
            if let Some(log) = event_log.as_mut() {
                log.record(started.elapsed().as_millis() as u64, event)?;
            }
        }
    }
}
