// This file is part of simple-color-picker and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2024 Michael Ripley

#![windows_subsystem = "windows"] // necessary to remove the console window on Windows

use std::io;
use std::process::ExitCode;
use std::time::Duration;

use debug_print::debug_println;
use winit::event_loop::EventLoop;

use simple_color_picker::private::error::InitError;
use simple_color_picker::private::settings::{Settings, CONFIG_PATH};
use simple_color_picker::private::util::dialog;

use crate::window::{State, UserEvent};

mod window;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            dialog::show_fatal_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), InitError> {
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) if e.kind() == io::ErrorKind::NotFound => Settings::default(), // generate new settings file when it doesn't exist
        Err(e) => {
            dialog::show_warning(format!(
                "Error loading settings file \"{}\". Resetting to default settings.\n\n{}",
                CONFIG_PATH.display(),
                e
            ));
            Settings::default()
        }
    };

    let event_loop = EventLoop::<UserEvent>::with_user_event().build()?;
    spawn_tick_sender(&event_loop, settings.tick_interval)?;

    let dialog_worker = dialog::spawn_worker().map_err(|e| InitError::thread("dialog-worker", e))?;
    let mut state = State::new(settings, dialog_worker);
    event_loop.run_app(&mut state)?;

    // window creation happens inside the event loop, so its failure comes out here
    match state.take_fatal_error() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// Pokes the event loop at a fixed rate so dirty state gets redrawn. The thread stops on its own
/// once the event loop is gone.
fn spawn_tick_sender(event_loop: &EventLoop<UserEvent>, tick_interval: Duration) -> Result<(), InitError> {
    let user_event_sender = event_loop.create_proxy();
    std::thread::Builder::new()
        .name("tick-sender".to_string())
        .spawn(move || {
            while user_event_sender.send_event(()).is_ok() {
                std::thread::sleep(tick_interval);
            }
            debug_println!("event loop closed, tick-sender stopping");
        })
        .map(|_| ())
        .map_err(|e| InitError::thread("tick-sender", e))
}
