// This file is part of simple-color-picker and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2024 Michael Ripley

//! Startup failures. Anything in here ends the process.

use std::io;

use thiserror::Error;
use winit::error::{EventLoopError, OsError};

#[derive(Error, Debug)]
pub enum InitError {
    #[error("Trouble initializing the event loop.\n\n{0}")]
    EventLoop(#[from] EventLoopError),

    #[error("Trouble creating the window.\n\n{0}")]
    Window(#[from] OsError),

    #[error("Trouble creating the window surface.\n\n{0}")]
    Surface(#[from] softbuffer::SoftBufferError),

    #[error("Trouble starting the {name} thread.\n\n{source}")]
    Thread {
        name: &'static str,
        #[source]
        source: io::Error,
    },
}

impl InitError {
    pub fn thread(name: &'static str, source: io::Error) -> Self {
        InitError::Thread { name, source }
    }
}
