//! Per-session dispatch state.

/// Base vertical offset for controller spawns, in world units.
pub const BASE_SPAWN_HEIGHT: f32 = 4.0;

/// Offset increase per handled spawn, so consecutive spawns do not land on
/// top of one another.
pub const SPAWN_HEIGHT_STEP: f32 = 4.0;

/// Mutable state shared between the dispatcher's handlers and the external
/// reset trigger. Only ever touched from the dispatch context.
#[derive(Debug)]
pub struct SessionState {
    spawn_height_offset: f32,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            spawn_height_offset: BASE_SPAWN_HEIGHT,
        }
    }

    /// Current vertical spawn offset.
    pub fn offset(&self) -> f32 {
        self.spawn_height_offset
    }

    /// Step the offset after a handled spawn.
    pub fn advance(&mut self) {
        self.spawn_height_offset += SPAWN_HEIGHT_STEP;
    }

    /// Return the offset to its base value.
    pub fn reset(&mut self) {
        self.spawn_height_offset = BASE_SPAWN_HEIGHT;
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
