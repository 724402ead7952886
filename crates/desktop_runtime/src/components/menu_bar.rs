use super::*;
use crate::clock::current_clock_label;

#[component]
pub(super) fn MenuBar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let clock = create_rw_signal(current_clock_label());

    match set_interval_with_handle(
        move || clock.set(current_clock_label()),
        runtime.config.with_value(|config| config.clock.tick()),
    ) {
        Ok(interval) => on_cleanup(move || interval.clear()),
        Err(err) => logging::warn!("menu bar clock timer unavailable: {err:?}"),
    }

    view! {
        <div class="menu-bar">
            <span class="menu-bar-brand">"Desktop"</span>
            <span class="menu-bar-clock">{move || clock.get()}</span>
        </div>
    }
}
