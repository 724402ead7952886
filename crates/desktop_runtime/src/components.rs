//! Desktop shell UI composition and interaction surfaces.

mod boot_screen;
mod desktop_icon;
mod menu_bar;
mod typed_page;
mod window;

use leptos::*;
use wasm_bindgen::JsValue;

pub use self::typed_page::TypedPage;
use self::{
    boot_screen::BootScreen, desktop_icon::DesktopIcon, menu_bar::MenuBar, window::DesktopWindow,
};
use crate::{
    icon_layout::IconArrangement,
    model::{PointerPosition, PointerSession, WindowId},
    reducer::DesktopAction,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

#[component]
/// Renders the boot screen, then the desktop surface with its icons and windows.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let booted = runtime.booted;

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        let pointer = pointer_from_pointer_event(&ev);
        let action = match runtime.interaction.get_untracked().session {
            Some(PointerSession::WindowMove(_)) => DesktopAction::UpdateMove { pointer },
            Some(PointerSession::WindowResize(_)) => DesktopAction::UpdateResize { pointer },
            Some(PointerSession::IconDrag(_)) => DesktopAction::IconPointerMove { pointer },
            None => return,
        };
        runtime.dispatch_action(action);
    };
    let on_pointer_up = move |_: web_sys::PointerEvent| end_active_pointer_interaction(runtime);
    let on_pointer_cancel = move |_: web_sys::PointerEvent| {
        if !runtime.interaction.get_untracked().is_idle() {
            runtime.dispatch_action(DesktopAction::CancelPointerSession);
        }
    };
    let on_surface_click = move |ev: web_sys::MouseEvent| {
        runtime.dispatch_action(DesktopAction::DesktopSurfaceClick {
            target_is_surface: event_targets_itself(&ev),
        });
    };
    let finish_boot = Callback::new(move |_: ()| booted.set(true));

    let window_ids = move || {
        state.with(|desktop| {
            desktop
                .windows
                .windows()
                .iter()
                .map(|w| w.id)
                .collect::<Vec<WindowId>>()
        })
    };

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            data-viewport=move || state.with(|desktop| desktop.viewport.token())
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointercancel=on_pointer_cancel
        >
            <Show when=move || booted.get() fallback=move || view! { <BootScreen on_ready=finish_boot /> }>
                <MenuBar />
                <div
                    class="desktop-surface"
                    class:icon-grid=move || {
                        state.with(|desktop| desktop.viewport.icon_arrangement())
                            == IconArrangement::Grid
                    }
                    on:click=on_surface_click
                >
                    <For
                        each=move || state.with(|desktop| desktop.icons.icons().to_vec())
                        key=|icon| icon.app_id
                        let:icon
                    >
                        <DesktopIcon app_id=icon.app_id />
                    </For>
                </div>
                <div class="desktop-window-layer">
                    <For each=window_ids key=|id| id.0 let:window_id>
                        <DesktopWindow window_id=window_id />
                    </For>
                </div>
            </Show>
        </div>
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

/// Primary button for mice, primary contact for touch and pen.
fn is_primary_pointer(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    use wasm_bindgen::JsCast;

    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn event_targets_itself(ev: &web_sys::MouseEvent) -> bool {
    match (ev.target(), ev.current_target()) {
        (Some(target), Some(current)) => JsValue::from(target) == JsValue::from(current),
        _ => false,
    }
}

fn end_active_pointer_interaction(runtime: DesktopRuntimeContext) {
    match runtime.interaction.get_untracked().session {
        Some(PointerSession::WindowMove(_)) => runtime.dispatch_action(DesktopAction::EndMove),
        Some(PointerSession::WindowResize(_)) => runtime.dispatch_action(DesktopAction::EndResize),
        // Icon gestures end on the icon itself, which holds pointer capture.
        Some(PointerSession::IconDrag(_)) | None => {}
    }
}
