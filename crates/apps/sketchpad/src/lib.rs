//! Sketchpad desktop app: freehand vector drawing with a small palette, an eraser, and undo.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod sketch;
mod undo;

pub use sketch::{
    download_file_name, SketchDocument, SketchPoint, SketchSurface, Stroke, Tool, ERASER_COLOR,
    ERASER_WIDTH, MAX_UNDO_STATES, PALETTE, PEN_WIDTH, SKETCH_MIME_TYPE, SKETCH_SCHEMA_VERSION,
};
pub use undo::BoundedUndoStack;

use desktop_app_contract::{AppServices, BestEffortStore};
use leptos::*;
use platform_host::date_stamp_now;
use platform_host_web::download_text_file;

#[component]
/// Sketchpad app window contents.
///
/// The drawing is loaded from `storage_key` on mount and saved after every finished stroke,
/// clear, and undo.
pub fn SketchpadApp(
    /// Services injected by the window manager.
    services: AppServices,
    /// Local store key holding the serialized [`SketchDocument`].
    storage_key: String,
) -> impl IntoView {
    let storage = services.storage;
    let initial = load_surface(&storage, &storage_key);
    let surface = create_rw_signal(initial);
    let tool = create_rw_signal(Tool::default());
    let svg_ref = create_node_ref::<svg::Svg>();
    let storage_key = store_value(storage_key);
    let storage = store_value(storage);

    let persist = move || {
        let document = surface.with_untracked(SketchSurface::document);
        storage.with_value(|store| {
            storage_key.with_value(|key| {
                store.save_typed(key, &document);
            })
        });
    };

    let on_pointer_down = move |ev: web_sys::PointerEvent| {
        if ev.pointer_type() == "mouse" && ev.button() != 0 {
            return;
        }
        ev.prevent_default();
        try_set_pointer_capture(&ev);
        let point = point_from_event(&ev);
        let active = tool.get_untracked();
        surface.update(|s| s.begin_stroke(active, point));
    };

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        if !surface.with_untracked(SketchSurface::is_drawing) {
            return;
        }
        let point = point_from_event(&ev);
        surface.update(|s| {
            s.extend_stroke(point);
        });
    };

    let finish_stroke = move || {
        let mut ended = false;
        surface.update(|s| ended = s.end_stroke());
        if ended {
            persist();
        }
    };

    let on_undo = move |_: ev::MouseEvent| {
        let mut changed = false;
        surface.update(|s| changed = s.undo());
        if changed {
            persist();
        }
    };

    let on_clear = move |_: ev::MouseEvent| {
        surface.update(SketchSurface::clear);
        persist();
    };

    let on_download = move |_: ev::MouseEvent| {
        let (width, height) = svg_ref
            .get_untracked()
            .map(|el| (el.client_width(), el.client_height()))
            .filter(|&(w, h)| w > 0 && h > 0)
            .map(|(w, h)| (w as u32, h as u32))
            .unwrap_or_else(|| surface.with_untracked(SketchSurface::content_size));
        let markup = surface.with_untracked(|s| s.to_svg_markup(width, height));
        let file_name = download_file_name(&date_stamp_now());
        if let Err(err) = download_text_file(&file_name, SKETCH_MIME_TYPE, &markup) {
            logging::warn!("sketchpad download failed: {err}");
        }
    };

    let palette = PALETTE
        .iter()
        .map(|&color| {
            let pen = Tool::Pen { color };
            view! {
                <button
                    class="swatch"
                    class:active=move || tool.get() == pen
                    style=format!("background:{color}")
                    title=color
                    aria-label=format!("Pen color {color}")
                    on:click=move |_| tool.set(pen)
                ></button>
            }
        })
        .collect_view();

    view! {
        <div class="sketchpad" data-window=services.window_id>
            <div class="sketchpad-toolbar">
                <div class="sketchpad-palette">{palette}</div>
                <button
                    class="toolbar-button"
                    class:active=move || tool.get().is_eraser()
                    on:click=move |_| tool.set(Tool::Eraser)
                >
                    "Eraser"
                </button>
                <button
                    class="toolbar-button"
                    disabled=move || surface.with(|s| s.undo_depth() == 0)
                    on:click=on_undo
                >
                    "Undo"
                </button>
                <button class="toolbar-button" on:click=on_clear>
                    "Clear"
                </button>
                <button class="toolbar-button" title="Download as .svg" on:click=on_download>
                    "Download"
                </button>
            </div>
            <svg
                node_ref=svg_ref
                class="sketchpad-surface"
                xmlns="http://www.w3.org/2000/svg"
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=move |_| finish_stroke()
                on:pointercancel=move |_| finish_stroke()
                on:pointerleave=move |_| finish_stroke()
            >
                <rect width="100%" height="100%" fill="#ffffff" pointer-events="none"></rect>
                {move || {
                    surface
                        .with(|s| {
                            s.strokes()
                                .iter()
                                .map(|stroke| {
                                    view! {
                                        <polyline
                                            points=stroke.svg_points()
                                            fill="none"
                                            stroke=stroke.color.clone()
                                            stroke-width=stroke.width
                                            stroke-linecap="round"
                                            stroke-linejoin="round"
                                            pointer-events="none"
                                        ></polyline>
                                    }
                                })
                                .collect_view()
                        })
                }}
            </svg>
        </div>
    }
}

fn load_surface(storage: &BestEffortStore, key: &str) -> SketchSurface {
    match storage.load_typed::<SketchDocument>(key) {
        Some(document) if document.schema_version != SKETCH_SCHEMA_VERSION => {
            logging::warn!(
                "ignoring sketch `{key}` with unsupported schema version {}",
                document.schema_version
            );
            SketchSurface::default()
        }
        Some(document) => SketchSurface::from_document(document),
        None => SketchSurface::default(),
    }
}

fn point_from_event(ev: &web_sys::PointerEvent) -> SketchPoint {
    SketchPoint {
        x: ev.offset_x(),
        y: ev.offset_y(),
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
