use std::{io, path::PathBuf};

use tile_engine::{ScreenBuffer, TextPane, read_map_file, write_map_file};

use crate::{
    DisplaySurface, EditState, EditorCommand, EditorEvent, EditorMode, Frame, InputSource, KeyBindings, KeyEvent, ModeHandler, Notification,
    TileModeHandler, WalkabilityModeHandler, compose,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlFlow {
    Continue,
    Quit,
}

/// One editing session: owns the edit state, the active mode and its handlers.
///
/// Input goes through [`EditSession::handle_event`], which dispatches to the
/// handler of the current mode. [`EditSession::compose`] rebuilds the screen.
pub struct EditSession {
    state: EditState,
    mode: EditorMode,
    tile_handler: Box<dyn ModeHandler>,
    walkability_handler: Box<dyn ModeHandler>,
    keys: KeyBindings,
    map_path: PathBuf,
    screen: ScreenBuffer,
    notification: Option<Notification>,
}

impl EditSession {
    pub fn new(map_path: impl Into<PathBuf>, keys: KeyBindings) -> Self {
        Self::with_state(EditState::default(), map_path, keys)
    }

    pub fn with_state(state: EditState, map_path: impl Into<PathBuf>, keys: KeyBindings) -> Self {
        let screen = ScreenBuffer::new(state.layout().screen_size());
        Self {
            state,
            mode: EditorMode::default(),
            tile_handler: Box::new(TileModeHandler::new(keys)),
            walkability_handler: Box::new(WalkabilityModeHandler::new(keys)),
            keys,
            map_path: map_path.into(),
            screen,
            notification: None,
        }
    }

    /// Swaps in different mode handlers.
    pub fn with_handlers(mut self, tile_handler: Box<dyn ModeHandler>, walkability_handler: Box<dyn ModeHandler>) -> Self {
        debug_assert_eq!(tile_handler.mode(), EditorMode::Tile);
        debug_assert_eq!(walkability_handler.mode(), EditorMode::Walkability);
        self.tile_handler = tile_handler;
        self.walkability_handler = walkability_handler;
        self
    }

    pub fn state(&self) -> &EditState {
        &self.state
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn keys(&self) -> &KeyBindings {
        &self.keys
    }

    pub fn map_path(&self) -> &std::path::Path {
        &self.map_path
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// The last composed frame.
    pub fn screen(&self) -> &ScreenBuffer {
        &self.screen
    }

    /// Loads the map file. On any error the current map is kept unchanged.
    pub fn load(&mut self) -> tile_engine::Result<()> {
        match read_map_file(&self.map_path, self.state.map().size()).and_then(|map| self.state.replace_map(map)) {
            Ok(()) => {
                log::info!("Loaded map {}", self.map_path.display());
                Ok(())
            }
            Err(err) => {
                if err.is_not_found() {
                    log::info!("No map at {}, starting with a blank map", self.map_path.display());
                } else {
                    log::warn!("Could not load {}: {err}", self.map_path.display());
                }
                Err(err)
            }
        }
    }

    /// Writes map and walkability to the map file and notifies the user either way.
    pub fn save(&mut self) -> tile_engine::Result<()> {
        match write_map_file(self.state.map(), &self.map_path) {
            Ok(()) => {
                self.notification = Some(Notification::Info("File Saved.".to_string()));
                Ok(())
            }
            Err(err) => {
                log::error!("Saving failed: {err}");
                self.notification = Some(Notification::Error(format!("Save failed: {err}")));
                Err(err)
            }
        }
    }

    pub fn switch_mode(&mut self) {
        self.mode = self.mode.toggle();
        log::info!("Switched to {} mode", self.mode);
    }

    pub fn handle_event(&mut self, event: &EditorEvent) -> ControlFlow {
        match event {
            EditorEvent::Mouse(mouse) => self.state.set_cursor(mouse.position),
            EditorEvent::Key(KeyEvent { key, is_down: true }) if *key == self.keys.quit => return ControlFlow::Quit,
            EditorEvent::Key(_) => {}
        }

        let handler = match self.mode {
            EditorMode::Tile => &self.tile_handler,
            EditorMode::Walkability => &self.walkability_handler,
        };
        match handler.handle(&mut self.state, event) {
            EditorCommand::None => {}
            EditorCommand::Save => {
                // failures are reported through the notification
                let _ = self.save();
            }
            EditorCommand::SwitchMode => self.switch_mode(),
        }
        ControlFlow::Continue
    }

    /// Rebuilds the screen buffer for the current mode.
    pub fn compose(&mut self) -> &ScreenBuffer {
        compose(&self.state, self.mode, &mut self.screen);
        &self.screen
    }

    /// One loop iteration: handle at most one pending event, then redraw.
    pub fn run_frame(&mut self, input: &mut dyn InputSource, display: &mut dyn DisplaySurface) -> io::Result<ControlFlow> {
        if let Some(event) = input.poll_event()? {
            if self.handle_event(&event) == ControlFlow::Quit {
                return Ok(ControlFlow::Quit);
            }
        }
        compose(&self.state, self.mode, &mut self.screen);
        display.render(&Frame {
            screen: &self.screen,
            mode: self.mode,
            notification: self.notification.as_ref(),
        })?;
        Ok(ControlFlow::Continue)
    }
}
