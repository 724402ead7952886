//! Reducer actions, lifecycle events, and transition logic for the desktop runtime.

use crate::{
    icon_layout::IconRelease,
    model::{
        AppId, DesktopState, DragSession, IconPosition, InteractionState, PointerPosition,
        PointerSession, ResizeHandle, ResizeSession, WindowId, WindowRect,
    },
    responsive::ViewportMode,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open a new window for an app kind.
    OpenApp {
        /// App to open.
        app_id: AppId,
    },
    /// Close a window by id.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Raise a window above all others.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Flip a window between floating and maximized.
    ToggleMaximize {
        /// Window to toggle.
        window_id: WindowId,
    },
    /// Overwrite a window position.
    SetWindowPosition {
        /// Window to move.
        window_id: WindowId,
        /// New left edge.
        x: i32,
        /// New top edge.
        y: i32,
    },
    /// Overwrite a window's bounds.
    SetWindowBounds {
        /// Window to resize.
        window_id: WindowId,
        /// New bounds; minimum size is not enforced.
        rect: WindowRect,
    },
    /// Pointer-down on a window title bar.
    BeginMove {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Update an in-progress window drag.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window drag.
    EndMove,
    /// Pointer-down on a window resize handle.
    BeginResize {
        /// Window being resized.
        window_id: WindowId,
        /// Corner being dragged.
        handle: ResizeHandle,
        /// Pointer position at resize start.
        pointer: PointerPosition,
    },
    /// Update an in-progress window resize.
    UpdateResize {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window resize.
    EndResize,
    /// Abandon whatever gesture is in flight without committing anything further.
    CancelPointerSession,
    /// Pointer-down on a desktop icon.
    IconPointerDown {
        /// Icon under the pointer.
        app_id: AppId,
        /// Pointer position at gesture start.
        pointer: PointerPosition,
    },
    /// Pointer travel during an icon gesture.
    IconPointerMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// Pointer-up (or tap) on a desktop icon.
    IconPointerUp {
        /// Icon the gesture ended on.
        app_id: AppId,
        /// Event timestamp in milliseconds.
        now_ms: u64,
    },
    /// A click reached the desktop background.
    DesktopSurfaceClick {
        /// Whether the click target is the surface itself rather than a descendant.
        target_is_surface: bool,
    },
    /// The host viewport was resized.
    SetViewportWidth {
        /// New viewport width in CSS pixels.
        width: i32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// State changes reported by [`reduce_desktop`] for the host to observe.
pub enum DesktopEvent {
    /// An icon gesture resolved to launching an app.
    AppLaunchRequested {
        /// App being launched.
        app_id: AppId,
    },
    /// A window was added on top of the stack.
    WindowOpened {
        /// New window.
        window_id: WindowId,
        /// App it hosts.
        app_id: AppId,
    },
    /// A window was removed.
    WindowClosed {
        /// Removed window.
        window_id: WindowId,
    },
    /// A window was raised above all others.
    WindowFocused {
        /// Raised window.
        window_id: WindowId,
    },
    /// A window now fills the surface.
    WindowMaximized {
        /// Maximized window.
        window_id: WindowId,
    },
    /// A window is floating again.
    WindowRestored {
        /// Restored window.
        window_id: WindowId,
        /// Bounds it was restored to.
        rect: WindowRect,
    },
    /// A window's floating bounds were committed.
    WindowBoundsChanged {
        /// Affected window.
        window_id: WindowId,
        /// New bounds.
        rect: WindowRect,
    },
    /// An icon drag was committed.
    IconMoved {
        /// Dragged icon.
        app_id: AppId,
        /// Final position.
        position: IconPosition,
    },
    /// The selected icon changed.
    IconSelectionChanged {
        /// Newly selected icon, if any.
        selected: Option<AppId>,
    },
    /// The viewport crossed the narrow breakpoint.
    ViewportModeChanged {
        /// Mode now in effect.
        mode: ViewportMode,
    },
}

/// Applies a [`DesktopAction`] to the desktop state and reports what changed.
///
/// This function is the authoritative transition engine for windows, icons, and pointer
/// sessions. It never fails: actions addressed to missing windows, and session updates with no
/// matching session, are silent no-ops that report nothing.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Vec<DesktopEvent> {
    let mut events = Vec::new();
    match action {
        DesktopAction::OpenApp { app_id } => {
            open_app(state, app_id, &mut events);
        }
        DesktopAction::CloseWindow { window_id } => {
            if state.windows.close(window_id) {
                events.push(DesktopEvent::WindowClosed { window_id });
            }
        }
        DesktopAction::FocusWindow { window_id } => {
            focus_window(state, window_id, &mut events);
        }
        DesktopAction::ToggleMaximize { window_id } => {
            match state.windows.toggle_maximize(window_id) {
                Some(true) => events.push(DesktopEvent::WindowMaximized { window_id }),
                Some(false) => {
                    if let Some(window) = state.windows.get(window_id) {
                        events.push(DesktopEvent::WindowRestored {
                            window_id,
                            rect: window.rect,
                        });
                    }
                }
                None => {}
            }
        }
        DesktopAction::SetWindowPosition { window_id, x, y } => {
            if state.windows.move_to(window_id, x, y) {
                push_bounds_changed(state, window_id, &mut events);
            }
        }
        DesktopAction::SetWindowBounds { window_id, rect } => {
            if state.windows.set_bounds(window_id, rect) {
                push_bounds_changed(state, window_id, &mut events);
            }
        }
        DesktopAction::BeginMove { window_id, pointer } => {
            let Some(window) = state.windows.get(window_id) else {
                return events;
            };
            let rect_start = window.rect;
            let draggable = !window.maximized && state.viewport.allows_window_drag();
            focus_window(state, window_id, &mut events);
            if draggable {
                interaction.session = Some(PointerSession::WindowMove(DragSession {
                    window_id,
                    pointer_start: pointer,
                    rect_start,
                }));
            }
        }
        DesktopAction::UpdateMove { pointer } => {
            if let Some(PointerSession::WindowMove(session)) = interaction.session.as_ref() {
                let floating = state
                    .windows
                    .get(session.window_id)
                    .is_some_and(|w| !w.maximized);
                if floating {
                    let (dx, dy) = pointer.delta_from(session.pointer_start);
                    let next = session.rect_start.offset(dx, dy);
                    state.windows.move_to(session.window_id, next.x, next.y);
                }
            }
        }
        DesktopAction::EndMove => {
            if let Some(PointerSession::WindowMove(session)) = interaction.session.take() {
                commit_window_gesture(state, session.window_id, session.rect_start, &mut events);
            }
        }
        DesktopAction::BeginResize {
            window_id,
            handle,
            pointer,
        } => {
            let Some(window) = state.windows.get(window_id) else {
                return events;
            };
            let rect_start = window.rect;
            let resizable = !window.maximized;
            focus_window(state, window_id, &mut events);
            if resizable {
                interaction.session = Some(PointerSession::WindowResize(ResizeSession {
                    window_id,
                    handle,
                    pointer_start: pointer,
                    rect_start,
                }));
            }
        }
        DesktopAction::UpdateResize { pointer } => {
            if let Some(PointerSession::WindowResize(session)) = interaction.session.as_ref() {
                let floating = state
                    .windows
                    .get(session.window_id)
                    .is_some_and(|w| !w.maximized);
                if floating {
                    let (dx, dy) = pointer.delta_from(session.pointer_start);
                    let next = state.windows.resized_bounds(
                        session.rect_start,
                        session.handle,
                        dx,
                        dy,
                    );
                    state.windows.set_bounds(session.window_id, next);
                }
            }
        }
        DesktopAction::EndResize => {
            if let Some(PointerSession::WindowResize(session)) = interaction.session.take() {
                commit_window_gesture(state, session.window_id, session.rect_start, &mut events);
            }
        }
        DesktopAction::CancelPointerSession => {
            interaction.session = None;
        }
        DesktopAction::IconPointerDown { app_id, pointer } => {
            let previous = state.icons.selected();
            if let Some(session) = state.icons.pointer_down(app_id, pointer, state.viewport) {
                interaction.session = Some(PointerSession::IconDrag(session));
            }
            push_selection_change(state, previous, &mut events);
        }
        DesktopAction::IconPointerMove { pointer } => {
            if let Some(PointerSession::IconDrag(session)) = interaction.session.as_mut() {
                state.icons.pointer_move(session, pointer);
            }
        }
        DesktopAction::IconPointerUp { app_id, now_ms } => {
            let release = match interaction.session.take() {
                Some(PointerSession::IconDrag(session)) if session.app_id == app_id => {
                    Some(state.icons.pointer_up(&session, now_ms, state.viewport))
                }
                Some(other) => {
                    interaction.session = Some(other);
                    None
                }
                None if state.viewport.opens_on_single_tap() => {
                    Some(state.icons.activate(app_id, now_ms, state.viewport))
                }
                None => None,
            };
            match release {
                Some(IconRelease::Open(app_id)) => {
                    events.push(DesktopEvent::AppLaunchRequested { app_id });
                    open_app(state, app_id, &mut events);
                }
                Some(IconRelease::Dragged) => {
                    if let Some(position) = state.icons.position(app_id) {
                        events.push(DesktopEvent::IconMoved { app_id, position });
                    }
                }
                Some(IconRelease::Recorded) | None => {}
            }
        }
        DesktopAction::DesktopSurfaceClick { target_is_surface } => {
            if target_is_surface && state.icons.clear_selection() {
                events.push(DesktopEvent::IconSelectionChanged { selected: None });
            }
        }
        DesktopAction::SetViewportWidth { width } => {
            let mode = state.mode_for_width(width);
            if mode != state.viewport {
                state.viewport = mode;
                events.push(DesktopEvent::ViewportModeChanged { mode });
            }
        }
    }
    events
}

fn open_app(state: &mut DesktopState, app_id: AppId, events: &mut Vec<DesktopEvent>) {
    let start_maximized = state.viewport.windows_start_maximized();
    let window_id = state.windows.open(app_id, start_maximized);
    events.push(DesktopEvent::WindowOpened { window_id, app_id });
}

fn focus_window(state: &mut DesktopState, window_id: WindowId, events: &mut Vec<DesktopEvent>) {
    if state.windows.focus(window_id) {
        events.push(DesktopEvent::WindowFocused { window_id });
    }
}

fn push_bounds_changed(state: &DesktopState, window_id: WindowId, events: &mut Vec<DesktopEvent>) {
    if let Some(window) = state.windows.get(window_id) {
        events.push(DesktopEvent::WindowBoundsChanged {
            window_id,
            rect: window.rect,
        });
    }
}

fn commit_window_gesture(
    state: &DesktopState,
    window_id: WindowId,
    rect_start: WindowRect,
    events: &mut Vec<DesktopEvent>,
) {
    let changed = state
        .windows
        .get(window_id)
        .is_some_and(|w| w.rect != rect_start);
    if changed {
        push_bounds_changed(state, window_id, events);
    }
}

fn push_selection_change(
    state: &DesktopState,
    previous: Option<AppId>,
    events: &mut Vec<DesktopEvent>,
) {
    let selected = state.icons.selected();
    if selected != previous {
        events.push(DesktopEvent::IconSelectionChanged { selected });
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::config::DesktopConfig;

    const WIDE_WIDTH: i32 = 1280;
    const NARROW_WIDTH: i32 = 400;

    fn desktop(width: i32) -> (DesktopState, InteractionState) {
        (
            DesktopState::new(&DesktopConfig::default(), width),
            InteractionState::default(),
        )
    }

    fn state_wide() -> (DesktopState, InteractionState) {
        desktop(WIDE_WIDTH)
    }

    fn at(x: i32, y: i32) -> PointerPosition {
        PointerPosition { x, y }
    }

    fn open(state: &mut DesktopState, interaction: &mut InteractionState, app_id: AppId) -> WindowId {
        let events = reduce_desktop(state, interaction, DesktopAction::OpenApp { app_id });
        match events.as_slice() {
            [DesktopEvent::WindowOpened { window_id, .. }] => *window_id,
            other => panic!("unexpected events {other:?}"),
        }
    }

    #[test]
    fn open_in_narrow_mode_starts_maximized() {
        let (mut state, mut interaction) = desktop(NARROW_WIDTH);
        let id = open(&mut state, &mut interaction, AppId::Notepad);
        assert!(state.windows.get(id).expect("window").maximized);

        let (mut state, mut interaction) = state_wide();
        let id = open(&mut state, &mut interaction, AppId::Notepad);
        assert!(!state.windows.get(id).expect("window").maximized);
    }

    #[test]
    fn missing_window_actions_report_nothing() {
        let (mut state, mut interaction) = state_wide();
        let ghost = WindowId(42);
        for action in [
            DesktopAction::CloseWindow { window_id: ghost },
            DesktopAction::FocusWindow { window_id: ghost },
            DesktopAction::ToggleMaximize { window_id: ghost },
            DesktopAction::SetWindowPosition {
                window_id: ghost,
                x: 1,
                y: 1,
            },
            DesktopAction::BeginMove {
                window_id: ghost,
                pointer: at(0, 0),
            },
            DesktopAction::UpdateMove { pointer: at(5, 5) },
            DesktopAction::EndMove,
            DesktopAction::EndResize,
        ] {
            assert_eq!(reduce_desktop(&mut state, &mut interaction, action), vec![]);
        }
        assert!(state.windows.is_empty());
        assert!(interaction.is_idle());
    }

    #[test]
    fn title_bar_drag_moves_relative_to_start_and_commits_on_end() {
        let (mut state, mut interaction) = state_wide();
        let id = open(&mut state, &mut interaction, AppId::About);
        let start = state.windows.get(id).expect("window").rect;

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: id,
                pointer: at(200, 100),
            },
        );
        for pointer in [at(210, 100), at(260, 140)] {
            reduce_desktop(&mut state, &mut interaction, DesktopAction::UpdateMove { pointer });
        }
        assert_eq!(state.windows.get(id).expect("window").rect, start.offset(60, 40));

        let events = reduce_desktop(&mut state, &mut interaction, DesktopAction::EndMove);
        assert_eq!(
            events,
            vec![DesktopEvent::WindowBoundsChanged {
                window_id: id,
                rect: start.offset(60, 40)
            }]
        );
        assert!(interaction.is_idle());
    }

    #[test]
    fn begin_move_focuses_even_when_drag_is_not_allowed() {
        let (mut state, mut interaction) = state_wide();
        let first = open(&mut state, &mut interaction, AppId::About);
        open(&mut state, &mut interaction, AppId::Projects);
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize { window_id: first },
        );

        let events = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: first,
                pointer: at(0, 0),
            },
        );
        assert_eq!(events, vec![DesktopEvent::WindowFocused { window_id: first }]);
        assert!(interaction.is_idle(), "maximized windows do not drag");
    }

    #[test]
    fn narrow_viewport_disables_window_drag() {
        let (mut state, mut interaction) = desktop(NARROW_WIDTH);
        let id = open(&mut state, &mut interaction, AppId::About);
        reduce_desktop(&mut state, &mut interaction, DesktopAction::ToggleMaximize { window_id: id });
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: id,
                pointer: at(0, 0),
            },
        );
        assert!(interaction.is_idle());
    }

    #[test]
    fn resize_uses_start_bounds_and_minimum_size() {
        let (mut state, mut interaction) = state_wide();
        let id = open(&mut state, &mut interaction, AppId::About);
        let start = WindowRect {
            x: 100,
            y: 100,
            w: 300,
            h: 200,
        };
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::SetWindowBounds {
                window_id: id,
                rect: start,
            },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize {
                window_id: id,
                handle: ResizeHandle::NorthWest,
                pointer: at(100, 100),
            },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateResize {
                pointer: at(500, 100),
            },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateResize {
                pointer: at(190, 100),
            },
        );
        assert_eq!(
            state.windows.get(id).expect("window").rect,
            WindowRect {
                x: 190,
                y: 100,
                w: 210,
                h: 200
            }
        );
    }

    #[test]
    fn cancel_abandons_session_without_commit() {
        let (mut state, mut interaction) = state_wide();
        let id = open(&mut state, &mut interaction, AppId::About);
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: id,
                pointer: at(0, 0),
            },
        );
        let events =
            reduce_desktop(&mut state, &mut interaction, DesktopAction::CancelPointerSession);
        assert_eq!(events, vec![]);
        assert!(interaction.is_idle());
        assert_eq!(
            reduce_desktop(&mut state, &mut interaction, DesktopAction::EndMove),
            vec![]
        );
    }

    #[test]
    fn toggle_maximize_reports_both_directions() {
        let (mut state, mut interaction) = state_wide();
        let id = open(&mut state, &mut interaction, AppId::About);
        let rect = state.windows.get(id).expect("window").rect;
        assert_eq!(
            reduce_desktop(&mut state, &mut interaction, DesktopAction::ToggleMaximize { window_id: id }),
            vec![DesktopEvent::WindowMaximized { window_id: id }]
        );
        assert_eq!(
            reduce_desktop(&mut state, &mut interaction, DesktopAction::ToggleMaximize { window_id: id }),
            vec![DesktopEvent::WindowRestored { window_id: id, rect }]
        );
    }

    #[test]
    fn icon_double_click_launches_app() {
        let (mut state, mut interaction) = state_wide();
        for now_ms in [0, 250] {
            reduce_desktop(
                &mut state,
                &mut interaction,
                DesktopAction::IconPointerDown {
                    app_id: AppId::Projects,
                    pointer: at(20, 120),
                },
            );
            let events = reduce_desktop(
                &mut state,
                &mut interaction,
                DesktopAction::IconPointerUp {
                    app_id: AppId::Projects,
                    now_ms,
                },
            );
            if now_ms == 0 {
                assert_eq!(events, vec![]);
            } else {
                assert_eq!(
                    events,
                    vec![
                        DesktopEvent::AppLaunchRequested {
                            app_id: AppId::Projects
                        },
                        DesktopEvent::WindowOpened {
                            window_id: WindowId(1),
                            app_id: AppId::Projects
                        },
                    ]
                );
            }
        }
        assert_eq!(state.windows.len(), 1);
    }

    #[test]
    fn narrow_tap_opens_without_session_or_selection() {
        let (mut state, mut interaction) = desktop(NARROW_WIDTH);
        let events = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::IconPointerDown {
                app_id: AppId::About,
                pointer: at(0, 0),
            },
        );
        assert_eq!(events, vec![]);
        assert!(interaction.is_idle());

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::IconPointerUp {
                app_id: AppId::About,
                now_ms: 0,
            },
        );
        let window = state.windows.topmost().expect("window");
        assert_eq!(window.app_id, AppId::About);
        assert!(window.maximized);
    }

    #[test]
    fn narrow_tap_between_wide_clicks_breaks_the_pair() {
        let (mut state, mut interaction) = state_wide();
        let mut click = |state: &mut DesktopState, app_id: AppId, now_ms: u64| {
            reduce_desktop(
                state,
                &mut interaction,
                DesktopAction::IconPointerDown {
                    app_id,
                    pointer: at(20, 40),
                },
            );
            reduce_desktop(
                state,
                &mut interaction,
                DesktopAction::IconPointerUp { app_id, now_ms },
            )
        };

        click(&mut state, AppId::About, 0);
        state.viewport = state.mode_for_width(NARROW_WIDTH);
        click(&mut state, AppId::Notepad, 100);
        state.viewport = state.mode_for_width(WIDE_WIDTH);
        let events = click(&mut state, AppId::About, 300);

        assert_eq!(events, vec![]);
        let about_windows = state
            .windows
            .windows()
            .iter()
            .filter(|w| w.app_id == AppId::About)
            .count();
        assert_eq!(about_windows, 0);
        assert_eq!(state.windows.len(), 1, "only the narrow tap opened a window");
    }

    #[test]
    fn icon_drag_reports_final_position() {
        let (mut state, mut interaction) = state_wide();
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::IconPointerDown {
                app_id: AppId::About,
                pointer: at(20, 40),
            },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::IconPointerMove {
                pointer: at(120, 240),
            },
        );
        let events = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::IconPointerUp {
                app_id: AppId::About,
                now_ms: 5,
            },
        );
        assert_eq!(
            events,
            vec![DesktopEvent::IconMoved {
                app_id: AppId::About,
                position: IconPosition { x: 116, y: 232 }
            }]
        );
    }

    #[test]
    fn surface_click_clears_selection_only_on_surface_target() {
        let (mut state, mut interaction) = state_wide();
        let events = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::IconPointerDown {
                app_id: AppId::Notepad,
                pointer: at(0, 0),
            },
        );
        assert_eq!(
            events,
            vec![DesktopEvent::IconSelectionChanged {
                selected: Some(AppId::Notepad)
            }]
        );
        reduce_desktop(&mut state, &mut interaction, DesktopAction::CancelPointerSession);

        assert_eq!(
            reduce_desktop(
                &mut state,
                &mut interaction,
                DesktopAction::DesktopSurfaceClick {
                    target_is_surface: false
                }
            ),
            vec![]
        );
        assert_eq!(
            reduce_desktop(
                &mut state,
                &mut interaction,
                DesktopAction::DesktopSurfaceClick {
                    target_is_surface: true
                }
            ),
            vec![DesktopEvent::IconSelectionChanged { selected: None }]
        );
        assert_eq!(state.icons.selected(), None);
    }

    #[test]
    fn viewport_change_reports_only_mode_crossings() {
        let (mut state, mut interaction) = state_wide();
        let id = open(&mut state, &mut interaction, AppId::About);
        let before = state.windows.clone();

        assert_eq!(
            reduce_desktop(&mut state, &mut interaction, DesktopAction::SetViewportWidth { width: 1000 }),
            vec![]
        );
        assert_eq!(
            reduce_desktop(&mut state, &mut interaction, DesktopAction::SetViewportWidth { width: 640 }),
            vec![DesktopEvent::ViewportModeChanged {
                mode: ViewportMode::Narrow
            }]
        );
        assert_eq!(state.windows, before, "mode switch leaves windows alone");
        assert!(!state.windows.get(id).expect("window").maximized);
    }
}
