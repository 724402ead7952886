use leptos::leptos_dom::helpers::{IntervalHandle, TimeoutHandle};

use super::*;
use crate::boot::{BootPhase, BootSequence, BootSignal};

#[component]
pub(super) fn BootScreen(on_ready: Callback<()>) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let boot_config = runtime.config.with_value(|config| config.boot.clone());
    let sequence = create_rw_signal(BootSequence::new(&boot_config));
    let progress_timer = store_value(None::<IntervalHandle>);
    let phase_timers = store_value(Vec::<TimeoutHandle>::new());

    let fade_delay = boot_config.fade_delay();
    let ready_delay = boot_config.ready_delay();
    let on_welcome = move || {
        if let Some(handle) = progress_timer.get_value() {
            handle.clear();
        }
        progress_timer.set_value(None);

        let fade = set_timeout_with_handle(
            move || {
                sequence.update(|seq| {
                    seq.on_fade_timer();
                })
            },
            fade_delay,
        );
        let ready = set_timeout_with_handle(
            move || {
                let mut signal = None;
                sequence.update(|seq| signal = seq.on_ready_timer());
                if signal == Some(BootSignal::DesktopReady) {
                    on_ready.call(());
                }
            },
            ready_delay,
        );
        for timer in [fade, ready] {
            match timer {
                Ok(handle) => phase_timers.update_value(|timers| timers.push(handle)),
                Err(err) => logging::warn!("boot timer could not be scheduled: {err:?}"),
            }
        }
    };

    match set_interval_with_handle(
        move || {
            let mut signal = None;
            sequence.update(|seq| signal = seq.on_progress_tick());
            if signal == Some(BootSignal::EnteredWelcome) {
                on_welcome();
            }
        },
        boot_config.tick(),
    ) {
        Ok(handle) => progress_timer.set_value(Some(handle)),
        Err(err) => {
            logging::warn!("boot progress timer unavailable, skipping boot screen: {err:?}");
            match set_timeout_with_handle(move || on_ready.call(()), std::time::Duration::ZERO) {
                Ok(handle) => phase_timers.update_value(|timers| timers.push(handle)),
                Err(err) => {
                    logging::warn!("boot fallback timer unavailable, showing desktop now: {err:?}");
                    on_ready.call(());
                }
            }
        }
    }

    on_cleanup(move || {
        if let Some(handle) = progress_timer.get_value() {
            handle.clear();
        }
        phase_timers.with_value(|timers| timers.iter().for_each(|handle| handle.clear()));
    });

    let phase = move || sequence.with(BootSequence::phase);

    view! {
        <div
            class="boot-screen"
            class:fade-out=move || matches!(phase(), BootPhase::Fading | BootPhase::Ready)
            data-phase=move || phase().token()
        >
            <div class="boot-content">
                <div class="boot-logo">"Desktop"</div>
                <Show
                    when=move || phase() == BootPhase::Loading
                    fallback=|| view! { <div class="boot-welcome">"Welcome"</div> }
                >
                    <div class="boot-progress">
                        <div class="boot-progress-bar">
                            <div
                                class="boot-progress-fill"
                                style=move || format!("width:{}%;", sequence.with(BootSequence::progress))
                            />
                        </div>
                        <div class="boot-status">"Loading..."</div>
                    </div>
                </Show>
            </div>
        </div>
    }
}
