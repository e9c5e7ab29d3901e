//! Terminal calc-match runner (default binary).
//!
//! Interactive mode drives the session from keyboard input on a fixed
//! timestep. The `auto` subcommand plays a session headlessly and prints
//! the event stream as line-delimited JSON.

use std::io::{self, Write};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event, KeyEventKind};

use calc_match::core::GameSession;
use calc_match::input::{action_for_key, UiAction};
use calc_match::protocol::event_to_json_line;
use calc_match::term::{GameView, TerminalRenderer, UiState};
use calc_match::types::{PairStatus, Role, TICK_MS};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Some(config) = parse_auto_args(&args)? {
        return run_auto(&config);
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn seed_from_clock() -> u32 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.subsec_nanos() ^ elapsed.as_secs() as u32,
        Err(_) => 1,
    }
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut session = GameSession::new(seed_from_clock());
    let view = GameView;
    let mut ui = UiState::new();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(u64::from(TICK_MS));

    loop {
        let lines = view.render(&session, &ui);
        term.draw(&lines)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match action_for_key(key) {
                        Some(UiAction::Quit) => return Ok(()),
                        Some(UiAction::Restart) => {
                            session.start()?;
                            ui.reset();
                        }
                        Some(UiAction::Activate) => {
                            if session.is_running() {
                                if let Some(tile) = session.board().get(ui.cursor()) {
                                    session.select_tile(tile.pair_id, tile.role);
                                }
                            } else {
                                session.start()?;
                                ui.reset();
                            }
                        }
                        Some(UiAction::CursorLeft) => ui.move_cursor(-1, 0),
                        Some(UiAction::CursorRight) => ui.move_cursor(1, 0),
                        Some(UiAction::CursorUp) => ui.move_cursor(0, -1),
                        Some(UiAction::CursorDown) => ui.move_cursor(0, 1),
                        None => {}
                    }
                }
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            let elapsed_ms = elapsed.as_millis().min(u128::from(u32::MAX)) as u32;
            session.tick(elapsed_ms)?;
            ui.advance(elapsed_ms);
            for event in session.drain_events() {
                ui.apply_event(&event, &session);
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AutoConfig {
    seed: u32,
    max_ticks: u32,
}

/// Parse `auto [--seed N] [--ticks N]`; `Ok(None)` means interactive mode.
fn parse_auto_args(args: &[String]) -> Result<Option<AutoConfig>> {
    if args.is_empty() || args[0] != "auto" {
        return Ok(None);
    }

    let mut seed = seed_from_clock();
    let mut max_ticks: u32 = 5000;
    let mut i = 1usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("auto: missing value for --seed"))?;
                seed = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("auto: invalid --seed value: {}", v))?;
            }
            "--ticks" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("auto: missing value for --ticks"))?;
                max_ticks = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("auto: invalid --ticks value: {}", v))?;
            }
            other => {
                return Err(anyhow!("auto: unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(Some(AutoConfig { seed, max_ticks }))
}

/// Headless bot: matches the first active pair twice a second and prints
/// every session event as one JSON line.
fn run_auto(config: &AutoConfig) -> Result<()> {
    const AUTO_TICK_MS: u32 = 100;
    const TICKS_PER_MOVE: u32 = 5;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut session = GameSession::new(config.seed);
    session.start()?;
    flush_events(&mut session, &mut out)?;

    let mut ticks: u32 = 0;
    while session.is_running() && ticks < config.max_ticks {
        if ticks % TICKS_PER_MOVE == 0 {
            if let Some(id) = session
                .pairs()
                .pairs()
                .iter()
                .find(|p| p.status == PairStatus::Active)
                .map(|p| p.id)
            {
                session.select_tile(id, Role::Calc);
                session.select_tile(id, Role::Answer);
            }
        }
        session.tick(AUTO_TICK_MS)?;
        flush_events(&mut session, &mut out)?;
        ticks += 1;
    }

    out.flush()?;
    Ok(())
}

fn flush_events(session: &mut GameSession, out: &mut impl Write) -> Result<()> {
    for event in session.drain_events() {
        writeln!(out, "{}", event_to_json_line(&event)?)?;
    }
    Ok(())
}
