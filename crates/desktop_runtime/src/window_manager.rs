//! Window collection, stacking order, and geometry transitions used by the desktop reducer.
//!
//! Every operation addressed to an id that is not open is a silent no-op: the boolean or
//! `Option` results only tell the caller whether anything changed, so it can decide whether to
//! report a lifecycle event.

use crate::{
    apps::app_descriptor,
    config::WindowConfig,
    model::{AppId, ResizeHandle, WindowId, WindowRecord, WindowRect},
};

/// First id handed out by a fresh manager.
const FIRST_WINDOW_ID: u64 = 1;
/// First z value handed out by a fresh manager. The desktop surface itself sits at 1.
const FIRST_Z_INDEX: u64 = 2;

/// Monotonic counter owned by a [`WindowManager`]; values are never reused.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SequenceGenerator {
    next: u64,
}

impl SequenceGenerator {
    fn starting_at(first: u64) -> Self {
        Self { next: first }
    }

    fn next_value(&mut self) -> u64 {
        let value = self.next;
        self.next = self.next.saturating_add(1);
        value
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowManager {
    config: WindowConfig,
    window_ids: SequenceGenerator,
    z_order: SequenceGenerator,
    windows: Vec<WindowRecord>,
}

impl WindowManager {
    pub fn new(config: WindowConfig) -> Self {
        Self {
            config,
            window_ids: SequenceGenerator::starting_at(FIRST_WINDOW_ID),
            z_order: SequenceGenerator::starting_at(FIRST_Z_INDEX),
            windows: Vec::new(),
        }
    }

    /// Opens a window for `app_id` on top of the stack.
    ///
    /// New windows are staggered from the base origin by `(id mod slots) * step` so repeated
    /// opens fan out and wrap instead of drifting off the surface.
    pub fn open(&mut self, app_id: AppId, start_maximized: bool) -> WindowId {
        let id = WindowId(self.window_ids.next_value());
        let z_index = self.z_order.next_value();
        let descriptor = app_descriptor(app_id);
        let slots = u64::from(self.config.stagger_slots.max(1));
        let offset = (id.0 % slots) as i32 * self.config.stagger_step;

        self.windows.push(WindowRecord {
            id,
            app_id,
            title: descriptor.window_title.to_string(),
            rect: WindowRect {
                x: self.config.base_x + offset,
                y: self.config.base_y + offset,
                w: descriptor.default_width,
                h: descriptor.default_height,
            },
            z_index,
            maximized: start_maximized,
            restore_rect: None,
        });
        id
    }

    pub fn close(&mut self, id: WindowId) -> bool {
        let before = self.windows.len();
        self.windows.retain(|w| w.id != id);
        self.windows.len() != before
    }

    /// Raises `id` above every other window. Returns `false` when absent or already on top.
    pub fn focus(&mut self, id: WindowId) -> bool {
        let top = self.windows.iter().map(|w| w.z_index).max();
        let Some(window) = self.windows.iter().find(|w| w.id == id) else {
            return false;
        };
        if Some(window.z_index) == top {
            return false;
        }
        let z_index = self.z_order.next_value();
        if let Some(window) = self.find_mut(id) {
            window.z_index = z_index;
        }
        true
    }

    /// Overwrites the position. Windows may be placed partially off-surface.
    pub fn move_to(&mut self, id: WindowId, x: i32, y: i32) -> bool {
        let Some(window) = self.find_mut(id) else {
            return false;
        };
        window.rect = window.rect.at(x, y);
        true
    }

    /// Overwrites the bounds. Minimum size is the caller's responsibility.
    pub fn set_bounds(&mut self, id: WindowId, rect: WindowRect) -> bool {
        let Some(window) = self.find_mut(id) else {
            return false;
        };
        window.rect = rect;
        true
    }

    /// Flips between floating and maximized, returning the new maximized flag.
    pub fn toggle_maximize(&mut self, id: WindowId) -> Option<bool> {
        let fallback = self.config.restore_fallback;
        let window = self.find_mut(id)?;
        if window.maximized {
            window.rect = window.restore_rect.take().unwrap_or(fallback);
            window.maximized = false;
        } else {
            window.restore_rect = Some(window.rect);
            window.maximized = true;
        }
        Some(window.maximized)
    }

    pub fn get(&self, id: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == id)
    }

    /// Open windows in the order they were opened.
    pub fn windows(&self) -> &[WindowRecord] {
        &self.windows
    }

    /// Open windows back-to-front.
    pub fn render_order(&self) -> Vec<&WindowRecord> {
        let mut ordered: Vec<&WindowRecord> = self.windows.iter().collect();
        ordered.sort_by_key(|w| w.z_index);
        ordered
    }

    pub fn topmost(&self) -> Option<&WindowRecord> {
        self.windows.iter().max_by_key(|w| w.z_index)
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Bounds for a resize gesture on `handle`, relative to the bounds captured at its start.
    pub fn resized_bounds(
        &self,
        start: WindowRect,
        handle: ResizeHandle,
        dx: i32,
        dy: i32,
    ) -> WindowRect {
        resize_rect(
            start,
            handle,
            dx,
            dy,
            self.config.min_width,
            self.config.min_height,
        )
    }

    fn find_mut(&mut self, id: WindowId) -> Option<&mut WindowRecord> {
        self.windows.iter_mut().find(|w| w.id == id)
    }
}

/// Applies a corner-handle drag of `(dx, dy)` to `start`, keeping the opposite corner fixed.
///
/// When a dimension falls below its minimum it is clamped, and if the dragged handle owns the
/// moving edge for that axis the position is re-derived from the fixed edge, so the anchored
/// corner never shifts.
pub fn resize_rect(
    start: WindowRect,
    handle: ResizeHandle,
    dx: i32,
    dy: i32,
    min_w: i32,
    min_h: i32,
) -> WindowRect {
    let mut rect = match handle {
        ResizeHandle::NorthWest => WindowRect {
            x: start.x + dx,
            y: start.y + dy,
            w: start.w - dx,
            h: start.h - dy,
        },
        ResizeHandle::NorthEast => WindowRect {
            y: start.y + dy,
            w: start.w + dx,
            h: start.h - dy,
            ..start
        },
        ResizeHandle::SouthWest => WindowRect {
            x: start.x + dx,
            w: start.w - dx,
            h: start.h + dy,
            ..start
        },
        ResizeHandle::SouthEast => WindowRect {
            w: start.w + dx,
            h: start.h + dy,
            ..start
        },
    };

    if rect.w < min_w {
        if handle.moves_left_edge() {
            rect.x = start.x + start.w - min_w;
        }
        rect.w = min_w;
    }
    if rect.h < min_h {
        if handle.moves_top_edge() {
            rect.y = start.y + start.h - min_h;
        }
        rect.h = min_h;
    }
    rect
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const START: WindowRect = WindowRect {
        x: 100,
        y: 100,
        w: 300,
        h: 200,
    };

    fn manager() -> WindowManager {
        WindowManager::new(WindowConfig::default())
    }

    #[test]
    fn open_assigns_fresh_ids_titles_and_sizes() {
        let mut wm = manager();
        let about = wm.open(AppId::About, false);
        let sketch = wm.open(AppId::Sketchpad, false);

        assert_eq!(about, WindowId(1));
        assert_eq!(sketch, WindowId(2));
        let record = wm.get(sketch).expect("sketchpad window");
        assert_eq!(record.title, "Sketchpad");
        assert_eq!((record.rect.w, record.rect.h), (560, 450));
        assert!(record.z_index > wm.get(about).expect("about").z_index);
    }

    #[test]
    fn open_staggers_and_wraps_every_five_windows() {
        let mut wm = manager();
        let origins: Vec<(i32, i32)> = (0..6)
            .map(|_| {
                let id = wm.open(AppId::Notepad, false);
                let rect = wm.get(id).expect("window").rect;
                (rect.x, rect.y)
            })
            .collect();
        assert_eq!(
            origins,
            vec![(150, 110), (180, 140), (210, 170), (240, 200), (120, 80), (150, 110)]
        );
    }

    #[test]
    fn open_honours_start_maximized_flag() {
        let mut wm = manager();
        let id = wm.open(AppId::About, true);
        let record = wm.get(id).expect("window");
        assert!(record.maximized);
        assert_eq!(record.restore_rect, None);
    }

    #[test]
    fn ids_are_never_reused_after_close() {
        let mut wm = manager();
        let first = wm.open(AppId::About, false);
        assert!(wm.close(first));
        let second = wm.open(AppId::About, false);
        assert_ne!(first, second);
        assert!(wm.get(first).is_none());
    }

    #[test]
    fn operations_on_missing_ids_are_noops() {
        let mut wm = manager();
        let id = wm.open(AppId::About, false);
        let before = wm.clone();
        let ghost = WindowId(99);

        assert!(!wm.close(ghost));
        assert!(!wm.focus(ghost));
        assert!(!wm.move_to(ghost, 1, 2));
        assert!(!wm.set_bounds(ghost, START));
        assert_eq!(wm.toggle_maximize(ghost), None);
        assert_eq!(wm, before);
        assert!(wm.get(id).is_some());
    }

    #[test]
    fn focus_raises_window_above_all_others() {
        let mut wm = manager();
        let a = wm.open(AppId::About, false);
        let b = wm.open(AppId::Projects, false);
        let c = wm.open(AppId::Notepad, false);

        assert!(wm.focus(a));
        assert_eq!(wm.topmost().map(|w| w.id), Some(a));
        let order: Vec<WindowId> = wm.render_order().iter().map(|w| w.id).collect();
        assert_eq!(order, vec![b, c, a]);
    }

    #[test]
    fn focusing_topmost_window_keeps_stack_unchanged() {
        let mut wm = manager();
        wm.open(AppId::About, false);
        let top = wm.open(AppId::Projects, false);
        let before = wm.clone();
        assert!(!wm.focus(top));
        assert_eq!(wm, before);
    }

    #[test]
    fn move_does_not_clamp_to_surface() {
        let mut wm = manager();
        let id = wm.open(AppId::About, false);
        assert!(wm.move_to(id, -500, -20));
        let rect = wm.get(id).expect("window").rect;
        assert_eq!((rect.x, rect.y, rect.w, rect.h), (-500, -20, 400, 300));
    }

    #[test]
    fn maximize_round_trip_restores_exact_bounds() {
        let mut wm = manager();
        let id = wm.open(AppId::Notepad, false);
        wm.set_bounds(id, START);

        assert_eq!(wm.toggle_maximize(id), Some(true));
        let maximized = wm.get(id).expect("window");
        assert_eq!(maximized.restore_rect, Some(START));
        assert_eq!(
            maximized.rendered_rect(WindowRect { x: 0, y: 0, w: 1024, h: 768 }),
            WindowRect { x: 0, y: 0, w: 1024, h: 768 }
        );

        assert_eq!(wm.toggle_maximize(id), Some(false));
        let restored = wm.get(id).expect("window");
        assert_eq!(restored.rect, START);
        assert_eq!(restored.restore_rect, None);
    }

    #[test]
    fn restoring_without_snapshot_uses_fallback_bounds() {
        let mut wm = manager();
        let id = wm.open(AppId::Sketchpad, true);
        assert_eq!(wm.toggle_maximize(id), Some(false));
        assert_eq!(
            wm.get(id).expect("window").rect,
            WindowRect {
                x: 100,
                y: 80,
                w: 400,
                h: 300
            }
        );
    }

    #[test]
    fn se_shrink_below_minimum_keeps_origin() {
        let rect = resize_rect(START, ResizeHandle::SouthEast, -200, 0, 240, 160);
        assert_eq!(rect, WindowRect { x: 100, y: 100, w: 240, h: 200 });
    }

    #[test]
    fn nw_unclamped_moves_origin_with_pointer() {
        let rect = resize_rect(START, ResizeHandle::NorthWest, 90, 0, 240, 160);
        assert_eq!(rect, WindowRect { x: 190, y: 100, w: 210, h: 200 });
    }

    #[test]
    fn nw_clamp_reanchors_to_fixed_bottom_right_corner() {
        let rect = resize_rect(START, ResizeHandle::NorthWest, 200, 150, 240, 160);
        assert_eq!(rect, WindowRect { x: 160, y: 140, w: 240, h: 160 });
        assert_eq!(rect.x + rect.w, START.x + START.w);
        assert_eq!(rect.y + rect.h, START.y + START.h);
    }

    #[test]
    fn ne_and_sw_keep_their_opposite_corners() {
        let ne = resize_rect(START, ResizeHandle::NorthEast, -100, 100, 240, 160);
        assert_eq!(ne, WindowRect { x: 100, y: 140, w: 240, h: 160 });
        assert_eq!(ne.y + ne.h, START.y + START.h);

        let sw = resize_rect(START, ResizeHandle::SouthWest, 100, -100, 240, 160);
        assert_eq!(sw, WindowRect { x: 160, y: 100, w: 240, h: 160 });
        assert_eq!(sw.x + sw.w, START.x + START.w);
    }

    #[test]
    fn growing_is_unbounded() {
        let rect = resize_rect(START, ResizeHandle::SouthEast, 500, 400, 240, 160);
        assert_eq!(rect, WindowRect { x: 100, y: 100, w: 800, h: 600 });
    }
}
