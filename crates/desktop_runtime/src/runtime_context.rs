//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container, the embedded configuration, and the
//! browser storage handed to apps. UI composition stays in [`crate::components`].

use std::rc::Rc;

use desktop_app_contract::{AppServices, BestEffortStore};
use leptos::*;
use platform_host_web::{viewport_width, WebLocalStore};

use crate::{
    config::DesktopConfig,
    model::{DesktopState, InteractionState, WindowId},
    reducer::{reduce_desktop, DesktopAction, DesktopEvent},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Configuration embedded at build time.
    pub config: StoredValue<DesktopConfig>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Reactive pointer session signal.
    pub interaction: RwSignal<InteractionState>,
    /// Whether the boot sequence has finished for this session.
    pub booted: RwSignal<bool>,
    /// Best-effort store shared by every mounted app.
    pub storage: StoredValue<BestEffortStore>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Services for the app mounted in `window_id`.
    pub fn app_services(&self, window_id: WindowId) -> AppServices {
        AppServices::new(window_id.0, self.storage.get_value())
    }
}

fn log_event(event: &DesktopEvent) {
    match event {
        DesktopEvent::IconSelectionChanged { .. } | DesktopEvent::WindowBoundsChanged { .. } => {}
        other => logging::log!("desktop: {other:?}"),
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
pub fn DesktopProvider(children: Children) -> impl IntoView {
    let config = DesktopConfig::builtin();
    let state = create_rw_signal(DesktopState::new(&config, viewport_width()));
    let interaction = create_rw_signal(InteractionState::default());
    let booted = create_rw_signal(false);
    let storage = store_value(BestEffortStore::new(Rc::new(WebLocalStore)));
    let config = store_value(config);

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut ui = interaction.get_untracked();
        let previous_desktop = desktop.clone();
        let previous_ui = ui.clone();

        let events = reduce_desktop(&mut desktop, &mut ui, action);
        for event in &events {
            log_event(event);
        }
        if desktop != previous_desktop {
            state.set(desktop);
        }
        if ui != previous_ui {
            interaction.set(ui);
        }
    });

    let resize_listener = window_event_listener(ev::resize, move |_| {
        dispatch.call(DesktopAction::SetViewportWidth {
            width: viewport_width(),
        });
    });
    on_cleanup(move || resize_listener.remove());

    provide_context(DesktopRuntimeContext {
        config,
        state,
        interaction,
        booted,
        storage,
        dispatch,
    });

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
