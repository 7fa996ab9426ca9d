//! Editor modes
//!
//! The editor is always in exactly one of two modes. A single toggle key flips
//! between them, so left and right clicks can mean different things per mode.

/// Active editing mode
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EditorMode {
    /// Paint glyphs and colors from the palette onto the map
    #[default]
    Tile,
    /// Mark map cells as walkable or blocked
    Walkability,
}

impl EditorMode {
    pub const ALL: [EditorMode; 2] = [EditorMode::Tile, EditorMode::Walkability];

    /// The other mode. There are no guards, every toggle succeeds.
    pub fn toggle(self) -> Self {
        match self {
            EditorMode::Tile => EditorMode::Walkability,
            EditorMode::Walkability => EditorMode::Tile,
        }
    }

    /// Get the display name
    pub fn name(self) -> &'static str {
        match self {
            EditorMode::Tile => "Tile",
            EditorMode::Walkability => "Walkability",
        }
    }

    /// Window title while this mode is active
    pub fn title(self) -> &'static str {
        match self {
            EditorMode::Tile => "Map Editor - Tile Mode",
            EditorMode::Walkability => "Map Editor - Walkability Mode",
        }
    }
}

impl std::fmt::Display for EditorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
