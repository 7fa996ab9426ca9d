//! Per-mode input handling.
//!
//! Each [`crate::EditorMode`] has its own handler. Handlers mutate the
//! [`EditState`] directly and report anything that needs the session (saving,
//! switching modes) as an [`EditorCommand`].

use crate::{EditState, EditorEvent, EditorMode, KeyBindings, KeyEvent, MouseButton, MouseEvent, Region};

/// Follow-up work a handler asks the session to perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorCommand {
    None,
    Save,
    SwitchMode,
}

pub trait ModeHandler {
    /// The mode this handler serves.
    fn mode(&self) -> EditorMode;

    fn handle(&self, state: &mut EditState, event: &EditorEvent) -> EditorCommand;
}

fn handle_key(keys: &KeyBindings, event: KeyEvent) -> EditorCommand {
    if !event.is_down {
        return EditorCommand::None;
    }
    if event.key == keys.switch_mode {
        EditorCommand::SwitchMode
    } else if event.key == keys.save {
        EditorCommand::Save
    } else {
        EditorCommand::None
    }
}

/// Palette picks and painting.
///
/// * left click on the palette picks a glyph or color
/// * left click on the map commits the brush, if one is held
/// * right click anywhere drops the brush
#[derive(Clone, Debug, Default)]
pub struct TileModeHandler {
    keys: KeyBindings,
}

impl TileModeHandler {
    pub fn new(keys: KeyBindings) -> Self {
        Self { keys }
    }

    fn handle_mouse(state: &mut EditState, event: MouseEvent) {
        match event.kind.pressed_button() {
            Some(MouseButton::Left) => match state.cursor_region() {
                Some(Region::Palette(pos)) => {
                    state.pick_at(pos);
                }
                Some(Region::Map(pos)) => {
                    state.paint(pos);
                }
                None => {}
            },
            Some(MouseButton::Right) => state.clear_brush(),
            None => {}
        }
    }
}

impl ModeHandler for TileModeHandler {
    fn mode(&self) -> EditorMode {
        EditorMode::Tile
    }

    fn handle(&self, state: &mut EditState, event: &EditorEvent) -> EditorCommand {
        match *event {
            EditorEvent::Key(key) => handle_key(&self.keys, key),
            EditorEvent::Mouse(mouse) => {
                Self::handle_mouse(state, mouse);
                EditorCommand::None
            }
        }
    }
}

/// Walkability marking: left click blocks a map cell, right click frees it.
/// The palette does not react in this mode.
#[derive(Clone, Debug, Default)]
pub struct WalkabilityModeHandler {
    keys: KeyBindings,
}

impl WalkabilityModeHandler {
    pub fn new(keys: KeyBindings) -> Self {
        Self { keys }
    }
}

impl ModeHandler for WalkabilityModeHandler {
    fn mode(&self) -> EditorMode {
        EditorMode::Walkability
    }

    fn handle(&self, state: &mut EditState, event: &EditorEvent) -> EditorCommand {
        match *event {
            EditorEvent::Key(key) => handle_key(&self.keys, key),
            EditorEvent::Mouse(mouse) => {
                if let Some(Region::Map(pos)) = state.cursor_region() {
                    match mouse.kind.pressed_button() {
                        Some(MouseButton::Left) => state.set_walkable(pos, false),
                        Some(MouseButton::Right) => state.set_walkable(pos, true),
                        None => {}
                    }
                }
                EditorCommand::None
            }
        }
    }
}
