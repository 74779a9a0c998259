//! Cursor lock toggle
//!
//! Two modes only: Locked (grabbed + hidden) and Free (visible).
//! The cancel edge flips the mode; `sync_cursor_to_window` mirrors it onto
//! the primary window when the host has one.

use bevy::prelude::*;
use bevy::window::{CursorGrabMode, PrimaryWindow};

use crate::config::ControllerConfig;
use crate::input::InputState;
use crate::logger;
use crate::ControllerSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorMode {
    /// Grabbed by the window, hidden (mouse drives the camera)
    Locked,
    /// Released and visible
    #[default]
    Free,
}

impl CursorMode {
    pub fn toggled(self) -> Self {
        match self {
            CursorMode::Locked => CursorMode::Free,
            CursorMode::Free => CursorMode::Locked,
        }
    }

    pub fn grab_mode(self) -> CursorGrabMode {
        match self {
            CursorMode::Locked => CursorGrabMode::Locked,
            CursorMode::Free => CursorGrabMode::None,
        }
    }

    pub fn visible(self) -> bool {
        matches!(self, CursorMode::Free)
    }
}

/// Current cursor mode
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CursorState {
    pub mode: CursorMode,
    /// Number of toggles so far (handy for hosts/tests)
    pub toggles: u32,
}

impl CursorState {
    pub fn toggle(&mut self) {
        self.mode = self.mode.toggled();
        self.toggles += 1;
    }
}

/// Flip the cursor mode on the tick cancel was pressed
pub fn toggle_cursor_on_cancel(input: Res<InputState>, mut cursor: ResMut<CursorState>) {
    if !input.cancel_pressed_this_frame() {
        return;
    }
    cursor.toggle();
    logger::log(&format!("Cursor → {:?}", cursor.mode));
}

/// Mirror CursorState onto the primary window (no window → no-op)
pub fn sync_cursor_to_window(
    cursor: Res<CursorState>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    if !cursor.is_changed() {
        return;
    }
    let Ok(mut window) = windows.single_mut() else {
        return;
    };
    window.cursor_options.grab_mode = cursor.mode.grab_mode();
    window.cursor_options.visible = cursor.mode.visible();
}

/// Cursor plugin
pub struct CursorPlugin;

impl Plugin for CursorPlugin {
    fn build(&self, app: &mut App) {
        let start_locked = app
            .world()
            .get_resource::<ControllerConfig>()
            .is_some_and(|config| config.cursor.start_locked);

        app.insert_resource(CursorState {
            mode: if start_locked {
                CursorMode::Locked
            } else {
                CursorMode::Free
            },
            toggles: 0,
        })
        .add_systems(
            Update,
            (toggle_cursor_on_cancel, sync_cursor_to_window)
                .chain()
                .in_set(ControllerSet::Cursor),
        );
    }
}
