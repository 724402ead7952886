use desktop_runtime::boot::{BootPhase, BootSequence, BootSignal};
use desktop_runtime::{
    reduce_desktop, reveal, AppId, ContentNode, DesktopAction, DesktopConfig,
    DesktopEvent, DesktopState, InteractionState, PointerPosition, ResizeHandle, StyleTag,
    WindowId, WindowRect,
};
use pretty_assertions::assert_eq;

struct Desktop {
    state: DesktopState,
    interaction: InteractionState,
}

impl Desktop {
    fn wide() -> Self {
        Self {
            state: DesktopState::new(&DesktopConfig::default(), 1280),
            interaction: InteractionState::default(),
        }
    }

    fn apply(&mut self, action: DesktopAction) -> Vec<DesktopEvent> {
        reduce_desktop(&mut self.state, &mut self.interaction, action)
    }

    fn open(&mut self, app_id: AppId) -> WindowId {
        self.apply(DesktopAction::OpenApp { app_id });
        self.state.windows.topmost().expect("opened window").id
    }

    fn click_icon(&mut self, app_id: AppId, now_ms: u64) -> Vec<DesktopEvent> {
        self.apply(DesktopAction::IconPointerDown {
            app_id,
            pointer: PointerPosition { x: 30, y: 50 },
        });
        self.apply(DesktopAction::IconPointerUp { app_id, now_ms })
    }

    fn resize(&mut self, window_id: WindowId, handle: ResizeHandle, dx: i32, dy: i32) -> WindowRect {
        let start = PointerPosition { x: 500, y: 500 };
        self.apply(DesktopAction::BeginResize {
            window_id,
            handle,
            pointer: start,
        });
        self.apply(DesktopAction::UpdateResize {
            pointer: PointerPosition {
                x: start.x + dx,
                y: start.y + dy,
            },
        });
        self.apply(DesktopAction::EndResize);
        self.state.windows.get(window_id).expect("window").rect
    }
}

const START: WindowRect = WindowRect {
    x: 100,
    y: 100,
    w: 300,
    h: 200,
};

#[test]
fn most_recently_focused_window_is_strictly_on_top() {
    let mut desktop = Desktop::wide();
    let ids: Vec<WindowId> = [AppId::About, AppId::Projects, AppId::Notepad, AppId::Sketchpad]
        .into_iter()
        .map(|app_id| desktop.open(app_id))
        .collect();

    for &focus in [ids[1], ids[0], ids[3], ids[1]].iter() {
        desktop.apply(DesktopAction::FocusWindow { window_id: focus });
        let focused_z = desktop.state.windows.get(focus).expect("window").z_index;
        for other in desktop.state.windows.windows().iter().filter(|w| w.id != focus) {
            assert!(focused_z > other.z_index);
        }
    }

    let latest = desktop.open(AppId::AppInfo);
    assert_eq!(desktop.state.windows.topmost().map(|w| w.id), Some(latest));
}

#[test]
fn south_east_shrink_clamps_width_and_keeps_origin() {
    let mut desktop = Desktop::wide();
    let id = desktop.open(AppId::About);
    desktop.apply(DesktopAction::SetWindowBounds {
        window_id: id,
        rect: START,
    });
    let rect = desktop.resize(id, ResizeHandle::SouthEast, -200, 0);
    assert_eq!(rect, WindowRect { x: 100, y: 100, w: 240, h: 200 });
}

#[test]
fn north_west_resize_moves_origin() {
    let mut desktop = Desktop::wide();
    let id = desktop.open(AppId::About);
    desktop.apply(DesktopAction::SetWindowBounds {
        window_id: id,
        rect: START,
    });
    let rect = desktop.resize(id, ResizeHandle::NorthWest, 90, 0);
    assert_eq!(rect, WindowRect { x: 190, y: 100, w: 210, h: 200 });
}

#[test]
fn maximize_twice_restores_bounds() {
    let mut desktop = Desktop::wide();
    let id = desktop.open(AppId::Notepad);
    desktop.apply(DesktopAction::SetWindowBounds {
        window_id: id,
        rect: START,
    });
    desktop.apply(DesktopAction::ToggleMaximize { window_id: id });
    let maximized_rect = desktop.resize(id, ResizeHandle::SouthEast, 50, 50);
    assert_eq!(maximized_rect, START, "resize is ignored while maximized");
    desktop.apply(DesktopAction::ToggleMaximize { window_id: id });

    let window = desktop.state.windows.get(id).expect("window");
    assert!(!window.maximized);
    assert_eq!(window.rect, START);
}

#[test]
fn double_click_within_window_opens_once() {
    let mut desktop = Desktop::wide();
    desktop.click_icon(AppId::About, 0);
    desktop.click_icon(AppId::About, 399);
    assert_eq!(desktop.state.windows.len(), 1);
    assert_eq!(desktop.state.windows.windows()[0].app_id, AppId::About);
}

#[test]
fn clicks_on_different_icons_open_nothing() {
    let mut desktop = Desktop::wide();
    desktop.click_icon(AppId::About, 0);
    desktop.click_icon(AppId::Projects, 100);
    assert!(desktop.state.windows.is_empty());
}

#[test]
fn tiny_icon_travel_is_a_click_not_a_drag() {
    let mut desktop = Desktop::wide();
    let before = desktop.state.icons.position(AppId::About);
    desktop.apply(DesktopAction::IconPointerDown {
        app_id: AppId::About,
        pointer: PointerPosition { x: 30, y: 50 },
    });
    desktop.apply(DesktopAction::IconPointerMove {
        pointer: PointerPosition { x: 33, y: 53 },
    });
    let events = desktop.apply(DesktopAction::IconPointerUp {
        app_id: AppId::About,
        now_ms: 1_000,
    });
    assert_eq!(events, vec![]);
    assert_eq!(desktop.state.icons.position(AppId::About), before);

    // The release counted as the first click of a pair.
    desktop.click_icon(AppId::About, 1_200);
    assert_eq!(desktop.state.windows.len(), 1);
}

#[test]
fn reveal_prefixes_grow_with_budget() {
    let page = desktop_runtime::apps::pages::about_page();
    let total = page.char_count();
    assert_eq!(reveal(&page, total), page);

    let small = reveal(&page, total / 3).plain_text();
    let large = reveal(&page, total / 2).plain_text();
    assert!(large.starts_with(&small));

    let empty = ContentNode::styled(StyleTag::Section, vec![]);
    let revealer = desktop_runtime::Revealer::new(empty.clone());
    assert!(revealer.is_complete());
    assert!(!revealer.shows_cursor());
    assert_eq!(revealer.visible(), empty);
}

#[test]
fn boot_reaches_exactly_100_and_readies_once() {
    let mut boot = BootSequence::new(&DesktopConfig::default().boot);
    let mut last = 0.0;
    while boot.phase() == BootPhase::Loading {
        boot.on_progress_tick();
        assert!(boot.progress() >= last && boot.progress() <= 100.0);
        last = boot.progress();
    }
    assert_eq!(boot.progress(), 100.0);
    boot.on_fade_timer();

    let ready: Vec<BootSignal> = (0..3).filter_map(|_| boot.on_ready_timer()).collect();
    assert_eq!(ready, vec![BootSignal::DesktopReady]);
}
