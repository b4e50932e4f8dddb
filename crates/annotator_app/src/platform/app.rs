use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use annotator_api::{ApiHandle, ApiScope, ApiSettings, RestClient};
use annotator_core::{update, EditorPhase, EditorState, Msg};
use client_logging::{client_error, client_info};

use super::command::{self, Command};
use super::config;
use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::presenter::TerminalPresenter;
use super::render;

pub fn run_app() {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = config::load_config(&cwd);
    logging::initialize(if config.log_to_file {
        LogDestination::Both
    } else {
        LogDestination::Terminal
    });
    // Scaffold a config file on first run so the scope is easy to edit.
    if !cwd.join(config::CONFIG_FILENAME).exists() {
        config::save_config(&cwd, &config);
    }
    client_info!(
        "annotator starting: project={} coding_job={} coder={}",
        config.project,
        config.coding_job,
        config.coder
    );

    let scope = ApiScope {
        base_url: config.base_url.clone(),
        project: config.project,
        coding_job: config.coding_job,
        coder: config.coder,
    };
    let client = match RestClient::new(&scope, ApiSettings::default()) {
        Ok(client) => client,
        Err(err) => {
            client_error!("invalid API configuration: {}", err);
            return;
        }
    };

    let runner = EffectRunner::new(ApiHandle::new(Arc::new(client)));
    let mut presenter = TerminalPresenter::new();

    let mut state = EditorState::new();
    let mut queue = VecDeque::from([Msg::TableRefreshRequested]);
    let mut quit_requested = false;
    let mut last_view = state.view();

    println!("{}", command::help_text());

    loop {
        for msg in runner.poll_events() {
            queue.push_back(msg);
        }
        while let Some(line) = presenter.try_read_command() {
            if line.trim().is_empty() {
                continue;
            }
            match command::parse(&line) {
                Command::Msg(msg) => queue.push_back(msg),
                Command::Help => println!("{}", command::help_text()),
                Command::Quit => {
                    quit_requested = true;
                    queue.push_back(Msg::CloseRequested);
                }
                Command::Unknown(input) => {
                    println!("unknown command: {input} (try 'help')");
                }
            }
        }

        while let Some(msg) = queue.pop_front() {
            let (next, effects) = update(std::mem::take(&mut state), msg);
            state = next;
            // Prompt answers come back as messages and are handled in order.
            for reply in runner.run(effects, &mut presenter) {
                queue.push_back(reply);
            }
        }

        if quit_requested {
            if state.phase() == EditorPhase::Empty {
                break;
            }
            // A save triggered by the guard keeps the close parked; anything
            // else means the user cancelled the quit.
            if !state.has_pending() {
                quit_requested = false;
            }
        }

        let view = state.view();
        if view != last_view {
            println!("{}", render::render(&view));
            last_view = view;
        }

        thread::sleep(Duration::from_millis(20));
    }

    client_info!("annotator exiting");
}
