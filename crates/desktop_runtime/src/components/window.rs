use super::*;
use crate::{
    apps::render_window_contents,
    model::{ResizeHandle, WindowRecord},
    responsive::CloseAffordance,
};

fn window_style(win: &WindowRecord) -> String {
    if win.maximized {
        format!("z-index:{};", win.z_index)
    } else {
        format!(
            "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
            win.rect.x, win.rect.y, win.rect.w, win.rect.h, win.z_index
        )
    }
}

fn swallow_pointer(ev: web_sys::PointerEvent) {
    ev.stop_propagation();
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let window = Signal::derive(move || state.with(|desktop| desktop.windows.get(window_id).cloned()));
    let mode = Signal::derive(move || state.with(|desktop| desktop.viewport));
    let is_topmost = Signal::derive(move || {
        state.with(|desktop| desktop.windows.topmost().map(|w| w.id) == Some(window_id))
    });

    let Some(initial) = state.with_untracked(|desktop| desktop.windows.get(window_id).cloned())
    else {
        return ().into_view();
    };
    // Mounted once per window; geometry changes only touch the frame around it.
    let contents = render_window_contents(
        &initial,
        &runtime.config.get_value(),
        runtime.app_services(window_id),
    );

    let focus = move |_: web_sys::PointerEvent| {
        runtime.dispatch_action(DesktopAction::FocusWindow { window_id });
    };
    let close = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(DesktopAction::CloseWindow { window_id });
    };
    let toggle_maximize = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(DesktopAction::ToggleMaximize { window_id });
    };
    let begin_move = move |ev: web_sys::PointerEvent| {
        if !is_primary_pointer(&ev) || !mode.get_untracked().allows_window_drag() {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginMove {
            window_id,
            pointer: pointer_from_pointer_event(&ev),
        });
    };
    let titlebar_double_click = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        if mode.get_untracked().titlebar_double_click_toggles() {
            runtime.dispatch_action(DesktopAction::ToggleMaximize { window_id });
        }
    };

    view! {
        <section
            id=window_id.dom_id()
            class="desktop-window"
            class:maximized=move || window.get().is_some_and(|w| w.maximized)
            class:focused=move || is_topmost.get()
            style=move || window.get().map(|w| window_style(&w)).unwrap_or_default()
            data-app=initial.app_id.token()
            on:pointerdown=focus
            role="dialog"
            aria-label=initial.title.clone()
        >
            <header
                class="titlebar"
                on:pointerdown=begin_move
                on:dblclick=titlebar_double_click
            >
                <span class="titlebar-title">{initial.title.clone()}</span>
                <div class="titlebar-controls">
                    <button
                        class="titlebar-maximize"
                        aria-label=move || {
                            if window.get().is_some_and(|w| w.maximized) {
                                "Restore window"
                            } else {
                                "Maximize window"
                            }
                        }
                        on:pointerdown=swallow_pointer
                        on:click=toggle_maximize
                    >
                        {move || if window.get().is_some_and(|w| w.maximized) { "❐" } else { "□" }}
                    </button>
                    <button
                        class="titlebar-close"
                        class:back=move || mode.get().close_affordance() == CloseAffordance::Back
                        aria-label=move || match mode.get().close_affordance() {
                            CloseAffordance::Back => "Back",
                            CloseAffordance::Close => "Close window",
                        }
                        on:pointerdown=swallow_pointer
                        on:click=close
                    >
                        {move || match mode.get().close_affordance() {
                            CloseAffordance::Back => "‹ Back",
                            CloseAffordance::Close => "×",
                        }}
                    </button>
                </div>
            </header>
            <div class="window-body">{contents}</div>
            <Show when=move || window.get().is_some_and(|w| !w.maximized) fallback=|| ()>
                {ResizeHandle::ALL
                    .into_iter()
                    .map(|handle| view! { <WindowResizeHandle window_id=window_id handle=handle /> })
                    .collect_view()}
            </Show>
        </section>
    }
    .into_view()
}

#[component]
fn WindowResizeHandle(window_id: WindowId, handle: ResizeHandle) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let class_name = format!("window-resize-handle {}", handle.token());

    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        if !is_primary_pointer(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginResize {
            window_id,
            handle,
            pointer: pointer_from_pointer_event(&ev),
        });
    };

    view! { <div class=class_name aria-hidden="true" on:pointerdown=on_pointerdown /> }
}
