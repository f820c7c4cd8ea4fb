//! Runtime: event loop and input routing for the navigation shell.
//!
//! - Owns the terminal lifecycle (alternate screen, raw mode, mouse capture).
//! - A dedicated input task forwards crossterm events over a channel.
//! - Session store changes arrive over a watch channel and become
//!   `Msg::SessionChanged`, so every view re-reads the identity.
//! - Effects returned by components are executed by `cmd` right after the
//!   event that produced them; async work (logout, delayed reload) is joined
//!   back through a `FuturesUnordered` of task handles.
//! - Ticking is fast only while toasts are visible.
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures_util::{StreamExt, stream::FuturesUnordered};
use ratatui::{Terminal, prelude::*};
use tokio::{
    signal,
    sync::mpsc,
    task::JoinHandle,
    time::{self, MissedTickBehavior},
};
use tracing::{debug, info, warn};
use vassa_types::{Effect, Msg};

use crate::app::App;
use crate::cmd;
use crate::ui::components::component::Component;
use crate::ui::main_component::MainView;

/// Upper bound on effect rounds per event; effects that keep producing
/// effects beyond this are dropped with a warning.
const MAX_EFFECT_ROUNDS: usize = 16;

/// Spawns the input task that blocks on terminal input and forwards events.
fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(500);
    let mut last_mouse_move = Instant::now();

    tokio::task::spawn_blocking(move || {
        let sixteen_ms = Duration::from_millis(16);
        loop {
            match event::poll(sixteen_ms) {
                Ok(false) => {
                    if sender.is_closed() {
                        break;
                    }
                    continue;
                }
                Ok(true) => {}
                Err(error) => {
                    warn!("Failed to poll terminal input: {}", error);
                    break;
                }
            }
            match event::read() {
                Ok(event) => {
                    // Mouse moves are throttled to one per 16 ms; nothing in the shell tracks hover.
                    let is_mouse_move = event.as_mouse_event().is_some_and(|e| e.kind == MouseEventKind::Moved);
                    if is_mouse_move {
                        if last_mouse_move.elapsed() < sixteen_ms {
                            continue;
                        }
                        last_mouse_move = Instant::now();
                    }
                    if let Err(error) = sender.blocking_send(event) {
                        debug!("Input receiver dropped: {}", error);
                        break;
                    }
                }
                Err(error) => {
                    warn!("Failed to read terminal input: {}", error);
                    break;
                }
            }
        }
    });
    receiver
}

/// Puts the terminal into raw mode and enters the alternate screen.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    let entered = execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .map_err(anyhow::Error::from)
        .and_then(|_| Terminal::new(CrosstermBackend::new(stdout)).map_err(anyhow::Error::from));
    if entered.is_err() {
        let mut stdout = std::io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
        let _ = disable_raw_mode();
    }
    entered
}

/// Restores terminal settings and leaves the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

fn render(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App, main_view: &mut MainView) -> Result<()> {
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> Vec<Effect> {
    match input_event {
        Event::Key(key_event) => main_view.handle_key_events(app, key_event),
        Event::Mouse(mouse_event) => main_view.handle_mouse_events(app, mouse_event),
        Event::Resize(width, height) => main_view.handle_message(app, Msg::Resize(width, height)),
        Event::FocusGained | Event::FocusLost | Event::Paste(_) => Vec::new(),
    }
}

/// Executes effects until no more are produced. Immediate messages are fed
/// back through the view; spawned tasks are queued on `pending`.
fn process_effects(
    app: &mut App,
    main_view: &mut MainView,
    mut effects: Vec<Effect>,
    pending: &mut FuturesUnordered<JoinHandle<Msg>>,
) {
    let mut rounds = 0;
    while !effects.is_empty() {
        rounds += 1;
        if rounds > MAX_EFFECT_ROUNDS {
            warn!(dropped = effects.len(), "effect chain did not settle");
            return;
        }
        let batch = cmd::run_from_effects(app, std::mem::take(&mut effects));
        pending.extend(batch.pending);
        for msg in batch.immediate {
            effects.extend(main_view.handle_message(app, msg));
        }
    }
}

/// Entry point for the shell runtime: sets up the terminal, runs the event
/// loop, and tears everything down on exit, including when the loop fails.
pub async fn run_app(mut app: App) -> Result<()> {
    let mut main_view = MainView::new();
    let mut pending: FuturesUnordered<JoinHandle<Msg>> = FuturesUnordered::new();

    let mut terminal = match setup_terminal() {
        Ok(terminal) => terminal,
        Err(error) => return shutdown(&mut app, &mut pending, Err(error), || Ok(())),
    };
    let outcome = event_loop(&mut terminal, &mut app, &mut main_view, &mut pending).await;
    shutdown(&mut app, &mut pending, outcome, || cleanup_terminal(&mut terminal))
}

/// Tears the shell down and restores the terminal whatever the loop returned.
/// The loop's error wins over a cleanup error.
fn shutdown(
    app: &mut App,
    pending: &mut FuturesUnordered<JoinHandle<Msg>>,
    outcome: Result<()>,
    cleanup: impl FnOnce() -> Result<()>,
) -> Result<()> {
    app.teardown();
    for task in pending.iter() {
        task.abort();
    }
    let cleaned = cleanup();
    if let Err(error) = &outcome {
        warn!("navigation shell stopped with an error: {:#}", error);
    } else {
        info!("navigation shell stopped");
    }
    outcome.and(cleaned)
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    main_view: &mut MainView,
    pending: &mut FuturesUnordered<JoinHandle<Msg>>,
) -> Result<()> {
    let mut input_receiver = spawn_input_thread();
    let mut session_changes = app.ctx.session.subscribe();
    session_changes.mark_unchanged();

    if let Ok((width, height)) = crossterm::terminal::size() {
        let effects = main_view.handle_message(app, Msg::Resize(width, height));
        process_effects(app, main_view, effects, pending);
    }

    let fast_interval = Duration::from_millis(250);
    let idle_interval = Duration::from_millis(5000);
    let mut current_interval = idle_interval;
    let mut ticker = time::interval(current_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    render(terminal, app, main_view)?;
    info!("navigation shell running");

    loop {
        let target_interval = if app.notifications.is_empty() {
            idle_interval
        } else {
            fast_interval
        };
        if target_interval != current_interval {
            current_interval = target_interval;
            ticker = time::interval(current_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        }

        let mut effects = Vec::new();
        let mut needs_render = false;
        tokio::select! {
            maybe_event = input_receiver.recv() => {
                let Some(event) = maybe_event else {
                    debug!("input channel closed");
                    break;
                };
                if let Event::Key(key_event) = event
                    && key_event.code == KeyCode::Char('c')
                    && key_event.modifiers.contains(KeyModifiers::CONTROL)
                {
                    break;
                }
                effects.extend(handle_input_event(app, main_view, event));
                needs_render = true;
            }

            changed = session_changes.changed() => {
                if changed.is_err() {
                    debug!("session store dropped");
                    break;
                }
                effects.extend(main_view.handle_message(app, Msg::SessionChanged));
                needs_render = true;
            }

            Some(joined) = pending.next(), if !pending.is_empty() => {
                match joined {
                    Ok(msg) => effects.extend(main_view.handle_message(app, msg)),
                    Err(error) if error.is_cancelled() => debug!("background task cancelled"),
                    Err(error) => warn!("background task failed: {}", error),
                }
                needs_render = true;
            }

            _ = ticker.tick() => {
                let had_toasts = !app.notifications.is_empty();
                effects.extend(main_view.handle_message(app, Msg::Tick));
                needs_render = had_toasts;
            }

            _ = signal::ctrl_c() => { break; }
        }

        if !effects.is_empty() {
            process_effects(app, main_view, effects, pending);
            needs_render = true;
        }
        if app.should_quit {
            break;
        }
        if needs_render {
            render(terminal, app, main_view)?;
        }
    }
    Ok(())
}
