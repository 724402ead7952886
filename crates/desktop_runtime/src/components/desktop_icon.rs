use platform_host::unix_time_ms_now;

use super::*;
use crate::model::{AppId, IconPosition};

fn icon_style(position: Option<IconPosition>, arrangement: IconArrangement) -> String {
    match (arrangement, position) {
        (IconArrangement::Free, Some(position)) => {
            format!("left:{}px;top:{}px;", position.x, position.y)
        }
        _ => String::new(),
    }
}

#[component]
pub(super) fn DesktopIcon(app_id: AppId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let Some(record) = state.with_untracked(|desktop| desktop.icons.icon(app_id).cloned()) else {
        return ().into_view();
    };
    let position = Signal::derive(move || state.with(|desktop| desktop.icons.position(app_id)));
    let arrangement =
        Signal::derive(move || state.with(|desktop| desktop.viewport.icon_arrangement()));
    let selected =
        Signal::derive(move || state.with(|desktop| desktop.icons.selected() == Some(app_id)));

    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        if !is_primary_pointer(&ev) {
            return;
        }
        ev.stop_propagation();
        if !state.with_untracked(|desktop| desktop.viewport.is_narrow()) {
            try_set_pointer_capture(&ev);
            ev.prevent_default();
        }
        runtime.dispatch_action(DesktopAction::IconPointerDown {
            app_id,
            pointer: pointer_from_pointer_event(&ev),
        });
    };
    let on_pointerup = move |ev: web_sys::PointerEvent| {
        if !is_primary_pointer(&ev) {
            return;
        }
        runtime.dispatch_action(DesktopAction::IconPointerUp {
            app_id,
            now_ms: unix_time_ms_now(),
        });
    };

    view! {
        <div
            class="desktop-icon"
            class:selected=move || selected.get()
            style=move || icon_style(position.get(), arrangement.get())
            data-app=app_id.token()
            role="button"
            aria-label=record.label.clone()
            on:pointerdown=on_pointerdown
            on:pointerup=on_pointerup
        >
            <span class="desktop-icon-glyph" data-glyph=record.glyph.token() aria-hidden="true" />
            <span class="desktop-icon-label">{record.label.clone()}</span>
        </div>
    }
    .into_view()
}
