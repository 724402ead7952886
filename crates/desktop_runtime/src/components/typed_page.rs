use std::time::Duration;

use leptos::leptos_dom::helpers::IntervalHandle;

use super::*;
use crate::{
    content::{ContentNode, StyleTag},
    reveal::{Revealer, REVEAL_CURSOR},
};

fn render_content(node: &ContentNode) -> View {
    match node {
        ContentNode::Empty => ().into_view(),
        ContentNode::Text(text) => text.clone().into_view(),
        ContentNode::Group { style, children } => {
            let inner = children.iter().map(render_content).collect_view();
            let Some(style) = style else {
                return inner;
            };
            match style {
                StyleTag::Section => view! { <section class="page-section">{inner}</section> }.into_view(),
                StyleTag::Title => view! { <h1 class="page-title">{inner}</h1> }.into_view(),
                StyleTag::Subtitle => view! { <p class="page-subtitle">{inner}</p> }.into_view(),
                StyleTag::Heading => view! { <h2 class="page-heading">{inner}</h2> }.into_view(),
                StyleTag::Paragraph => view! { <p>{inner}</p> }.into_view(),
                StyleTag::List => view! { <ul class="page-list">{inner}</ul> }.into_view(),
                StyleTag::ListItem => view! { <li>{inner}</li> }.into_view(),
                StyleTag::Link { href } => view! {
                    <a href=href.clone() target="_blank" rel="noopener noreferrer">{inner}</a>
                }
                .into_view(),
                StyleTag::Emphasis => view! { <em>{inner}</em> }.into_view(),
            }
        }
    }
}

#[component]
/// Reveals `content` one character per `tick`, with a trailing cursor until complete.
pub fn TypedPage(content: ContentNode, tick: Duration) -> impl IntoView {
    let revealer = create_rw_signal(Revealer::new(content));
    let interval = store_value(None::<IntervalHandle>);

    let stop = move || {
        if let Some(handle) = interval.get_value() {
            handle.clear();
        }
        interval.set_value(None);
    };

    if !revealer.with_untracked(Revealer::is_complete) {
        match set_interval_with_handle(
            move || {
                revealer.update(|r| {
                    r.tick();
                });
                if revealer.with_untracked(Revealer::is_complete) {
                    stop();
                }
            },
            tick,
        ) {
            Ok(handle) => interval.set_value(Some(handle)),
            Err(err) => {
                logging::warn!("reveal timer unavailable, showing full page: {err:?}");
                revealer.update(Revealer::finish);
            }
        }
    }
    on_cleanup(stop);

    view! {
        <div class="typed-page">
            {move || revealer.with(|r| render_content(&r.visible()))}
            <Show when=move || revealer.with(Revealer::shows_cursor) fallback=|| ()>
                <span class="typed-cursor" aria-hidden="true">{REVEAL_CURSOR}</span>
            </Show>
        </div>
    }
}
