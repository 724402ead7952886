//! Desktop icon positions, selection, and the click/drag gesture rules.

use crate::{
    apps::app_registry,
    config::IconConfig,
    model::{AppId, IconDragSession, IconPosition, IconRecord, PointerPosition},
    responsive::ViewportMode,
};

/// Last clean click, used to pair two clicks into a double click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LastClick {
    app_id: AppId,
    at_ms: u64,
}

/// Remembers the previous clean click on an icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickTracker {
    window_ms: u64,
    last: Option<LastClick>,
}

impl ClickTracker {
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            last: None,
        }
    }

    /// Records a clean click and reports whether it completes a double click.
    ///
    /// A completed pair resets the memory, so a third click starts a new pair. Timestamps that
    /// go backwards never pair.
    pub fn register(&mut self, app_id: AppId, now_ms: u64) -> bool {
        let paired = self.last.is_some_and(|last| {
            last.app_id == app_id
                && now_ms >= last.at_ms
                && now_ms - last.at_ms < self.window_ms
        });
        self.last = if paired {
            None
        } else {
            Some(LastClick {
                app_id,
                at_ms: now_ms,
            })
        };
        paired
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// How the host should place icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconArrangement {
    /// Absolute positions from the layout.
    Free,
    /// A flowing grid that ignores stored positions.
    Grid,
}

/// Result of releasing the pointer on an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconRelease {
    /// The gesture moved the icon; nothing opens.
    Dragged,
    /// A clean click was remembered as the first half of a potential double click.
    Recorded,
    /// The app should be opened.
    Open(AppId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct IconLayout {
    config: IconConfig,
    icons: Vec<IconRecord>,
    selected: Option<AppId>,
    clicks: ClickTracker,
}

impl IconLayout {
    /// One icon per registered app, stacked in a single column below the menu bar.
    pub fn new(config: IconConfig) -> Self {
        let icons = app_registry()
            .iter()
            .enumerate()
            .map(|(index, entry)| IconRecord {
                app_id: entry.app_id,
                label: entry.desktop_icon_label.to_string(),
                glyph: entry.glyph,
                position: IconPosition {
                    x: config.origin_x,
                    y: config.origin_y + index as i32 * config.spacing,
                },
            })
            .collect();
        Self {
            clicks: ClickTracker::new(config.double_click_window_ms),
            config,
            icons,
            selected: None,
        }
    }

    pub fn icons(&self) -> &[IconRecord] {
        &self.icons
    }

    pub fn icon(&self, app_id: AppId) -> Option<&IconRecord> {
        self.icons.iter().find(|icon| icon.app_id == app_id)
    }

    pub fn position(&self, app_id: AppId) -> Option<IconPosition> {
        self.icon(app_id).map(|icon| icon.position)
    }

    pub fn selected(&self) -> Option<AppId> {
        self.selected
    }

    pub fn clear_selection(&mut self) -> bool {
        self.selected.take().is_some()
    }

    /// Starts a gesture on `app_id`, selecting it.
    ///
    /// Narrow viewports have no icon drag and no selection, so no session is returned.
    pub fn pointer_down(
        &mut self,
        app_id: AppId,
        pointer: PointerPosition,
        mode: ViewportMode,
    ) -> Option<IconDragSession> {
        if mode.is_narrow() {
            return None;
        }
        let icon_start = self.position(app_id)?;
        self.selected = Some(app_id);
        Some(IconDragSession {
            app_id,
            pointer_start: pointer,
            icon_start,
            moved: false,
        })
    }

    /// Applies pointer travel to the session's icon once it exceeds the drag threshold.
    ///
    /// Positions never go negative; there is no upper bound.
    pub fn pointer_move(&mut self, session: &mut IconDragSession, pointer: PointerPosition) {
        let (dx, dy) = pointer.delta_from(session.pointer_start);
        let threshold = self.config.drag_threshold;
        if !session.moved && (dx.abs() > threshold || dy.abs() > threshold) {
            session.moved = true;
        }
        if !session.moved {
            return;
        }
        let next = IconPosition {
            x: (session.icon_start.x + dx).max(0),
            y: (session.icon_start.y + dy).max(0),
        };
        if let Some(icon) = self.icons.iter_mut().find(|i| i.app_id == session.app_id) {
            icon.position = next;
        }
    }

    /// Ends a gesture and decides whether it opens the app.
    pub fn pointer_up(
        &mut self,
        session: &IconDragSession,
        now_ms: u64,
        mode: ViewportMode,
    ) -> IconRelease {
        if session.moved {
            return IconRelease::Dragged;
        }
        self.activate(session.app_id, now_ms, mode)
    }

    /// A clean click or tap on an icon outside of any drag session.
    ///
    /// Every open clears the click memory, including single-tap opens.
    pub fn activate(&mut self, app_id: AppId, now_ms: u64, mode: ViewportMode) -> IconRelease {
        if mode.opens_on_single_tap() {
            self.clicks.reset();
            return IconRelease::Open(app_id);
        }
        if self.clicks.register(app_id, now_ms) {
            IconRelease::Open(app_id)
        } else {
            IconRelease::Recorded
        }
    }
}
