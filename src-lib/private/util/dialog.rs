// This file is part of simple-color-picker and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2024 Michael Ripley

//! Native popups. Regular popups are queued onto a worker thread so they never stall rendering.

use std::fmt::Display;
use std::io;
use std::sync::mpsc;
use std::sync::{Mutex, PoisonError};
use std::thread::JoinHandle;

use debug_print::debug_println;
use lazy_static::lazy_static;
use native_dialog::{MessageDialog, MessageType};

use crate::private::APPLICATION_NAME;

lazy_static! {
    // this is some arcane bullshit to get a global mpsc
    // the sender can be cloned, and we'll do that via a thread_local later
    // the receiver can't be cloned, so just shove it in an Option so we can take() it later.
    static ref DIALOG_REQUEST_CHANNEL: (Mutex<mpsc::Sender<DialogRequest>>, Mutex<Option<mpsc::Receiver<DialogRequest>>>) = {
        let (sender, receiver) = mpsc::channel();
        let sender = Mutex::new(sender);
        let receiver = Mutex::new(Some(receiver));
        (sender, receiver)
    };
}

thread_local! {
    // We only need one of these per thread. As we don't use any thread pools this should be a one-time cost on application startup.
    static DIALOG_REQUEST_SENDER: mpsc::Sender<DialogRequest> = DIALOG_REQUEST_CHANNEL.0.lock().unwrap_or_else(PoisonError::into_inner).clone();
}

/// The different types of requests the dialog worker thread can process
enum DialogRequest {
    /// Show a warning popup with the provided text
    Warning(String),
    /// Stop the dialog worker thread
    Terminate,
}

pub struct DialogWorker {
    join_handle: Option<JoinHandle<()>>,
}

impl DialogWorker {
    /// signal the dialog worker thread to shut down once it's done processing its queue, then wait
    /// for that to happen. Returns `None` if the worker was already shut down or panicked.
    pub fn shutdown(&mut self) -> Option<()> {
        let _ = DIALOG_REQUEST_SENDER.with(|sender| sender.send(DialogRequest::Terminate));
        self.join_handle.take()?.join().ok()
    }
}

/// show a native popup with a warning icon + sound.
/// Warnings sent before the worker is spawned wait in the queue.
pub fn show_warning(text: String) {
    debug_println!("warning: {}", text);
    let _ = DIALOG_REQUEST_SENDER.with(|sender| sender.send(DialogRequest::Warning(text)));
}

/// Report an error we can't recover from. This bypasses the worker and blocks until the user
/// dismisses the popup, as the process is about to exit anyways.
pub fn show_fatal_error(error: &dyn Display) {
    eprintln!("{APPLICATION_NAME} failed to start:\n\t{error}");
    let result = MessageDialog::new()
        .set_type(MessageType::Error)
        .set_title(APPLICATION_NAME)
        .set_text(&format!("{error}"))
        .show_alert();
    if let Err(e) = result {
        debug_println!("could not show fatal error popup: {}", e);
    }
}

/// Start the worker thread. This can only be done once; later calls fail.
pub fn spawn_worker() -> io::Result<DialogWorker> {
    let dialog_request_receiver = DIALOG_REQUEST_CHANNEL.1
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .take()
        .ok_or_else(|| io::Error::new(io::ErrorKind::AlreadyExists, "dialog worker was already spawned"))?;

    // native dialogs block a thread, so we'll spin up a single thread to loop through queued dialogs.
    // If we ever need to show multiple dialogs, they just get queued.
    let join_handle = std::thread::Builder::new()
        .name("dialog-worker".to_string())
        .spawn(move || {
            // block waiting for a request. Errors mean every sender is gone, so we're done either way.
            while let Ok(request) = dialog_request_receiver.recv() {
                match request {
                    DialogRequest::Warning(text) => {
                        let result = MessageDialog::new()
                            .set_type(MessageType::Warning)
                            .set_title(APPLICATION_NAME)
                            .set_text(&text)
                            .show_alert();
                        if let Err(e) = result {
                            debug_println!("could not show warning popup: {}", e);
                        }
                    }
                    DialogRequest::Terminate => break,
                }
            }
        })?;

    Ok(DialogWorker {
        join_handle: Some(join_handle), // we take() from this later
    })
}
