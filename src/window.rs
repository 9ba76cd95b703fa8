// This file is part of simple-color-picker and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2024 Michael Ripley

use std::num::NonZeroU32;
use std::rc::Rc;

use debug_print::debug_println;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalPosition;
use winit::error::OsError;
use winit::event::{ElementState, MouseButton, StartCause, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::window::{CursorIcon, Window, WindowId};

use simple_color_picker::private::error::InitError;
use simple_color_picker::private::picker::PickerState;
use simple_color_picker::private::settings::{Settings, CONFIG_PATH};
use simple_color_picker::private::util::dialog::DialogWorker;
use simple_color_picker::private::util::{dialog, image};
use simple_color_picker::private::APPLICATION_NAME;

pub type UserEvent = ();
type Surface = softbuffer::Surface<Rc<Window>, Rc<Window>>;

pub struct State {
    context: Option<Context>,
    settings: Settings,
    picker: PickerState,
    /// native dialogs block a thread, so we'll spin up a single thread to loop through queued dialogs.
    dialog_worker: DialogWorker,
    /// last thing written to the title bar, so we only touch it when the readout changes
    title: String,
    /// startup failure to hand back to main once the event loop stops
    fatal_error: Option<InitError>,
}

/// Window context
struct Context {
    window: Rc<Window>,
    surface: Surface,
}

impl Context {
    fn new(active_event_loop: &ActiveEventLoop, settings: &Settings) -> Result<Self, InitError> {
        // unsafe note: these three structs MUST live and die together.
        // The softbuffer context only gets used right here, and the window and surface live side by side in this struct,
        // so they all get dropped at the same time.
        let window = Rc::new(init_window(active_event_loop, settings)?);
        let context = softbuffer::Context::new(window.clone())?;
        let surface: Surface = Surface::new(&context, window.clone())?;
        Ok(Context { window, surface })
    }
}

impl State {
    pub fn new(settings: Settings, dialog_worker: DialogWorker) -> Self {
        let picker = PickerState::new(settings.initial_color());
        State {
            context: None,
            settings,
            picker,
            dialog_worker,
            title: String::new(),
            fatal_error: None,
        }
    }

    pub fn take_fatal_error(&mut self) -> Option<InitError> {
        self.fatal_error.take()
    }

    /// Push a changed color out to the screen: schedule a redraw and refresh the title readout
    fn on_color_change(&mut self) {
        let Some(context) = self.context.as_ref() else {
            return;
        };

        let title = format!(
            "{APPLICATION_NAME} - {}  |  {}",
            self.picker.rgb_label(),
            self.picker.hsv_label()
        );
        if title != self.title {
            context.window.set_title(&title);
            self.title = title;
        }

        context.window.request_redraw();
    }

    fn save_settings(&mut self) {
        self.settings.remember(self.picker.color());
        if let Err(e) = self.settings.save() {
            dialog::show_warning(format!(
                "Error saving settings to \"{}\".\n\n{}",
                CONFIG_PATH.display(),
                e
            ));
        }
    }
}

impl ApplicationHandler<UserEvent> for State {
    fn new_events(&mut self, event_loop: &ActiveEventLoop, cause: StartCause) {
        if matches!(cause, StartCause::Init) {
            match Context::new(event_loop, &self.settings) {
                Ok(context) => self.context = Some(context),
                Err(e) => {
                    self.fatal_error = Some(e);
                    event_loop.exit();
                }
            }
        }
    }

    fn resumed(&mut self, _event_loop: &ActiveEventLoop) {
        // only used on iOS/Android/Web
    }

    /// tick from the tick-sender thread
    fn user_event(&mut self, _event_loop: &ActiveEventLoop, _event: UserEvent) {
        if self.picker.take_dirty() {
            self.on_color_change();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(context) = self.context.as_mut() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                context.window.set_visible(false);
                self.save_settings();
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = draw_window(context, &self.settings, &self.picker) {
                    debug_println!("skipped a frame: {}", e);
                }
            }
            WindowEvent::Resized(size) => {
                // the window isn't resizable, but the platform may disagree
                debug_println!("window size changed to {:?}", size);
                if size != self.settings.size() {
                    let _ = context.window.request_inner_size(self.settings.size());
                }
                self.picker.mark_dirty();
            }
            WindowEvent::CursorMoved { position, .. } => {
                let PhysicalPosition { x, y } = position;
                self.picker.cursor_moved(x, y, &self.settings.layout);
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                self.picker.button_pressed(&self.settings.layout);
            }
            WindowEvent::MouseInput {
                state: ElementState::Released,
                button: MouseButton::Left,
                ..
            } => {
                self.picker.release();
            }
            WindowEvent::Focused(false) => {
                // we'll never hear about the button coming back up
                self.picker.release();
            }
            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        // kill the dialog worker and wait for it to finish
        // this makes the application remain open until the user has clicked through any queued dialogs
        if self.dialog_worker.shutdown().is_none() {
            debug_println!("dialog worker was already gone");
        }
    }
}

/// Render the picker into the window surface and present it
fn draw_window(context: &mut Context, settings: &Settings, picker: &PickerState) -> Result<(), softbuffer::SoftBufferError> {
    let layout = &settings.layout;
    let (Some(width), Some(height)) = (NonZeroU32::new(layout.width), NonZeroU32::new(layout.height)) else {
        return Ok(());
    };
    context.surface.resize(width, height)?;

    let mut buffer = context.surface.buffer_mut()?;
    image::draw_frame(&mut buffer, layout, picker);
    buffer.present()
}

/// Initialize the window: fixed size, crosshair cursor, shown once it's set up
fn init_window(active_event_loop: &ActiveEventLoop, settings: &Settings) -> Result<Window, OsError> {
    let window_attributes = Window::default_attributes()
        .with_visible(false)
        .with_resizable(false)
        .with_title(APPLICATION_NAME)
        .with_inner_size(settings.size());

    let window = active_event_loop.create_window(window_attributes)?;
    window.set_cursor(CursorIcon::Crosshair);

    // once the window is ready, show it
    window.set_visible(true);

    Ok(window)
}
