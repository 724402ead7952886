//! Notepad desktop app: a single free-text document kept in the local store.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod document;

pub use document::{download_file_name, NotepadDocument, NOTES_MIME_TYPE};

use desktop_app_contract::AppServices;
use leptos::*;
use platform_host::date_stamp_now;
use platform_host_web::download_text_file;

#[component]
/// Notepad app window contents.
///
/// Text is loaded from `storage_key` on mount and written back on every edit. Storage failures
/// are logged by the store and the editor keeps working from memory.
pub fn NotepadApp(
    /// Services injected by the window manager.
    services: AppServices,
    /// Local store key holding the note text.
    storage_key: String,
) -> impl IntoView {
    let storage = services.storage;
    let initial = storage.load_string(&storage_key).unwrap_or_default();
    let document = create_rw_signal(NotepadDocument::new(initial));
    let storage_key = store_value(storage_key);
    let storage = store_value(storage);

    let on_input = move |ev: ev::Event| {
        let text = event_target_value(&ev);
        storage.with_value(|store| {
            storage_key.with_value(|key| {
                store.save_string(key, &text);
            })
        });
        document.update(|doc| doc.set_text(text));
    };

    let on_download = move |_: ev::MouseEvent| {
        let file_name = download_file_name(&date_stamp_now());
        let result = document
            .with_untracked(|doc| download_text_file(&file_name, NOTES_MIME_TYPE, doc.text()));
        if let Err(err) = result {
            logging::warn!("notepad download failed: {err}");
        }
    };

    view! {
        <div class="notepad" data-window=services.window_id>
            <div class="notepad-toolbar">
                <span class="notepad-stats">{move || document.with(NotepadDocument::stats_label)}</span>
                <button class="toolbar-button" title="Download as .md" on:click=on_download>
                    "Download"
                </button>
            </div>
            <textarea
                class="notepad-textarea"
                prop:value=move || document.with(|doc| doc.text().to_string())
                on:input=on_input
                placeholder="Type your notes here..."
                spellcheck="false"
                aria-label="Notepad document editor"
            />
        </div>
    }
}
