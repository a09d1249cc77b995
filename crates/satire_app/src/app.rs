use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use chrono::{DateTime, Local};
use satire_client::{ClientConfig, ClientHandle};
use satire_core::{update, AppState, Msg};

use crate::effects::{map_event, EffectRunner};
use crate::input::{parse_line, Input};
use crate::render;

/// Cadence of the background list poll.
const POLL_INTERVAL: Duration = Duration::from_secs(30);
/// Cadence of the connection probe.
const PROBE_INTERVAL: Duration = Duration::from_secs(10);

pub fn run(config: ClientConfig) -> anyhow::Result<()> {
    let (client, event_rx) = ClientHandle::new(config)?;
    let runner = EffectRunner::new(client);

    let (input_tx, input_rx) = mpsc::channel::<Input>();

    // Client events feed back into the update loop.
    let event_feed = input_tx.clone();
    thread::spawn(move || {
        while let Ok(event) = event_rx.recv() {
            if event_feed.send(Input::Core(map_event(event))).is_err() {
                break;
            }
        }
    });

    spawn_timer(input_tx.clone(), POLL_INTERVAL, || Msg::PollElapsed);
    spawn_timer(input_tx.clone(), PROBE_INTERVAL, || Msg::ProbeElapsed);
    spawn_stdin_reader(input_tx);

    let mut state = AppState::new();
    let mut last_refresh: Option<DateTime<Local>> = None;

    render::print_help();
    // First probe and fetch happen right away, ahead of the timers.
    dispatch(&mut state, &runner, Msg::ProbeElapsed, &mut last_refresh);
    dispatch(&mut state, &runner, Msg::RefreshClicked, &mut last_refresh);

    while let Ok(input) = input_rx.recv() {
        match input {
            Input::Quit => break,
            Input::Help => render::print_help(),
            Input::Status => render::render(&state.view(), last_refresh),
            Input::Submit(prompt) => {
                dispatch(&mut state, &runner, Msg::PromptChanged(prompt), &mut last_refresh);
                dispatch(&mut state, &runner, Msg::PromptSubmitted, &mut last_refresh);
            }
            Input::Core(Msg::VoteClicked { id, direction }) => {
                match resolve_vote_target(&state, &id) {
                    Some(id) => dispatch(
                        &mut state,
                        &runner,
                        Msg::VoteClicked { id, direction },
                        &mut last_refresh,
                    ),
                    None => println!("no unique article matches '{id}'"),
                }
            }
            Input::Core(msg) => dispatch(&mut state, &runner, msg, &mut last_refresh),
        }
    }
    Ok(())
}

fn dispatch(
    state: &mut AppState,
    runner: &EffectRunner,
    msg: Msg,
    last_refresh: &mut Option<DateTime<Local>>,
) {
    if matches!(msg, Msg::RefreshArrived(_)) {
        *last_refresh = Some(Local::now());
    }
    let current = std::mem::take(state);
    let (mut next, effects) = update(current, msg);
    runner.run(effects);
    if next.consume_dirty() {
        render::render(&next.view(), *last_refresh);
    }
    *state = next;
}

/// Resolves a vote target from an id prefix; `None` unless exactly one
/// visible article matches.
fn resolve_vote_target(state: &AppState, prefix: &str) -> Option<String> {
    let view = state.view();
    let mut matches = view
        .articles
        .iter()
        .filter(|row| row.id.starts_with(prefix));
    match (matches.next(), matches.next()) {
        (Some(row), None) => Some(row.id.clone()),
        _ => None,
    }
}

fn spawn_timer(tx: mpsc::Sender<Input>, interval: Duration, msg: fn() -> Msg) {
    thread::spawn(move || loop {
        thread::sleep(interval);
        if tx.send(Input::Core(msg())).is_err() {
            break;
        }
    });
}

fn spawn_stdin_reader(tx: mpsc::Sender<Input>) {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        let mut line = String::new();
        loop {
            line.clear();
            match stdin.read_line(&mut line) {
                Ok(0) | Err(_) => {
                    let _ = tx.send(Input::Quit);
                    break;
                }
                Ok(_) => {
                    if tx.send(parse_line(&line)).is_err() {
                        break;
                    }
                }
            }
        }
    });
}
