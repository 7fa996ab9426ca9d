#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::must_use_candidate, clippy::missing_errors_doc, clippy::missing_panics_doc, clippy::return_self_not_must_use)]
mod brush;
pub use brush::Brush;

mod compositor;
pub use compositor::{compose, compose_new};

mod edit_state;
pub use edit_state::EditState;

mod event;
pub use event::*;

mod handlers;
pub use handlers::{EditorCommand, ModeHandler, TileModeHandler, WalkabilityModeHandler};

mod layout;
pub use layout::{Layout, Region};

mod mode;
pub use mode::EditorMode;

mod session;
pub use session::{ControlFlow, EditSession};

mod surface;
pub use surface::{DisplaySurface, Frame, InputSource, Notification};

// Re-export the engine types the editing API is expressed in
pub use tile_engine::{
    Cell, DEFAULT_MAP_FILE, EngineError, MapGrid, PaletteGrid, Position, Rectangle, Result, ScreenBuffer, Size, Swatch, TextAttribute, TextPane,
};
