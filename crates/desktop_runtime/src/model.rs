use serde::{Deserialize, Serialize};

use crate::{
    config::DesktopConfig, icon_layout::IconLayout, responsive::ViewportMode,
    window_manager::WindowManager,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub u64);

impl WindowId {
    /// DOM-friendly token for element ids and test hooks.
    pub fn dom_id(self) -> String {
        format!("win-{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppId {
    About,
    Projects,
    AppInfo,
    Notepad,
    Sketchpad,
}

impl AppId {
    pub const ALL: [AppId; 5] = [
        Self::About,
        Self::Projects,
        Self::AppInfo,
        Self::Notepad,
        Self::Sketchpad,
    ];

    pub fn token(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Projects => "projects",
            Self::AppInfo => "app-info",
            Self::Notepad => "notepad",
            Self::Sketchpad => "sketchpad",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconGlyph {
    Person,
    Folder,
    App,
    Notepad,
    Sketchpad,
}

impl IconGlyph {
    pub fn token(self) -> &'static str {
        match self {
            Self::Person => "person",
            Self::Folder => "folder",
            Self::App => "app",
            Self::Notepad => "notepad",
            Self::Sketchpad => "sketchpad",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    pub fn at(self, x: i32, y: i32) -> Self {
        Self { x, y, ..self }
    }
}

impl Default for WindowRect {
    /// Bounds a maximized window falls back to when it has no saved snapshot.
    fn default() -> Self {
        Self {
            x: 100,
            y: 80,
            w: 400,
            h: 300,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    pub app_id: AppId,
    pub title: String,
    pub rect: WindowRect,
    pub z_index: u64,
    pub maximized: bool,
    /// Floating bounds captured on maximize; present only while maximized.
    pub restore_rect: Option<WindowRect>,
}

impl WindowRecord {
    /// Bounds the host should paint: the whole surface while maximized, the real rect otherwise.
    pub fn rendered_rect(&self, surface: WindowRect) -> WindowRect {
        if self.maximized {
            surface
        } else {
            self.rect
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IconPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconRecord {
    pub app_id: AppId,
    pub label: String,
    pub glyph: IconGlyph,
    pub position: IconPosition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

impl PointerPosition {
    pub fn delta_from(self, origin: PointerPosition) -> (i32, i32) {
        (self.x - origin.x, self.y - origin.y)
    }
}

/// Corner handle a resize gesture is dragging. The opposite corner stays anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeHandle {
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

impl ResizeHandle {
    pub const ALL: [ResizeHandle; 4] = [
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthWest,
        Self::SouthEast,
    ];

    pub fn token(self) -> &'static str {
        match self {
            Self::NorthWest => "nw",
            Self::NorthEast => "ne",
            Self::SouthWest => "sw",
            Self::SouthEast => "se",
        }
    }

    /// Whether this handle moves the left edge.
    pub fn moves_left_edge(self) -> bool {
        matches!(self, Self::NorthWest | Self::SouthWest)
    }

    /// Whether this handle moves the top edge.
    pub fn moves_top_edge(self) -> bool {
        matches!(self, Self::NorthWest | Self::NorthEast)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub window_id: WindowId,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeSession {
    pub window_id: WindowId,
    pub handle: ResizeHandle,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconDragSession {
    pub app_id: AppId,
    pub pointer_start: PointerPosition,
    pub icon_start: IconPosition,
    /// Set once pointer travel crosses the drag threshold; a session that never moved is a click.
    pub moved: bool,
}

/// The single in-flight pointer gesture, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerSession {
    WindowMove(DragSession),
    WindowResize(ResizeSession),
    IconDrag(IconDragSession),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub session: Option<PointerSession>,
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        self.session.is_none()
    }
}

/// Everything the reducer mutates: open windows, desktop icons, and the current viewport mode.
#[derive(Debug, Clone, PartialEq)]
pub struct DesktopState {
    pub windows: WindowManager,
    pub icons: IconLayout,
    pub viewport: ViewportMode,
    narrow_breakpoint: i32,
}

impl DesktopState {
    pub fn new(config: &DesktopConfig, viewport_width: i32) -> Self {
        let narrow_breakpoint = config.responsive.narrow_breakpoint;
        Self {
            windows: WindowManager::new(config.window.clone()),
            icons: IconLayout::new(config.icons.clone()),
            viewport: ViewportMode::from_width(viewport_width, narrow_breakpoint),
            narrow_breakpoint,
        }
    }

    /// Mode a viewport of `width` pixels would use under this desktop's breakpoint.
    pub fn mode_for_width(&self, width: i32) -> ViewportMode {
        ViewportMode::from_width(width, self.narrow_breakpoint)
    }
}
