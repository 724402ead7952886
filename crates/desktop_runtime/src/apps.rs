//! Fixed app registry and the window content slot each app kind renders into.

pub mod pages;

use desktop_app_contract::AppServices;
use desktop_app_notepad::NotepadApp;
use desktop_app_sketchpad::SketchpadApp;
use leptos::*;

use crate::{
    components::TypedPage,
    config::DesktopConfig,
    model::{AppId, IconGlyph, WindowRecord},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppDescriptor {
    pub app_id: AppId,
    pub window_title: &'static str,
    pub desktop_icon_label: &'static str,
    pub glyph: IconGlyph,
    pub default_width: i32,
    pub default_height: i32,
}

const APP_REGISTRY: [AppDescriptor; 5] = [
    AppDescriptor {
        app_id: AppId::About,
        window_title: "About",
        desktop_icon_label: "about.me",
        glyph: IconGlyph::Person,
        default_width: 400,
        default_height: 300,
    },
    AppDescriptor {
        app_id: AppId::Projects,
        window_title: "Projects",
        desktop_icon_label: "projects",
        glyph: IconGlyph::Folder,
        default_width: 400,
        default_height: 300,
    },
    AppDescriptor {
        app_id: AppId::AppInfo,
        window_title: "App Info",
        desktop_icon_label: "app-info",
        glyph: IconGlyph::App,
        default_width: 400,
        default_height: 300,
    },
    AppDescriptor {
        app_id: AppId::Notepad,
        window_title: "Notepad",
        desktop_icon_label: "notepad",
        glyph: IconGlyph::Notepad,
        default_width: 480,
        default_height: 400,
    },
    AppDescriptor {
        app_id: AppId::Sketchpad,
        window_title: "Sketchpad",
        desktop_icon_label: "sketchpad",
        glyph: IconGlyph::Sketchpad,
        default_width: 560,
        default_height: 450,
    },
];

pub fn app_registry() -> &'static [AppDescriptor] {
    &APP_REGISTRY
}

pub fn app_descriptor(app_id: AppId) -> &'static AppDescriptor {
    match app_id {
        AppId::About => &APP_REGISTRY[0],
        AppId::Projects => &APP_REGISTRY[1],
        AppId::AppInfo => &APP_REGISTRY[2],
        AppId::Notepad => &APP_REGISTRY[3],
        AppId::Sketchpad => &APP_REGISTRY[4],
    }
}

/// Mounts the app matching `window.app_id` into the window's content slot.
pub fn render_window_contents(
    window: &WindowRecord,
    config: &DesktopConfig,
    services: AppServices,
) -> View {
    let reveal_tick = config.reveal.tick();
    match window.app_id {
        AppId::About => {
            view! { <TypedPage content=pages::about_page() tick=reveal_tick /> }.into_view()
        }
        AppId::Projects => {
            view! { <TypedPage content=pages::projects_page() tick=reveal_tick /> }.into_view()
        }
        AppId::AppInfo => {
            view! { <TypedPage content=pages::app_info_page() tick=reveal_tick /> }.into_view()
        }
        AppId::Notepad => view! {
            <NotepadApp services=services storage_key=config.storage.notepad_key.clone() />
        }
        .into_view(),
        AppId::Sketchpad => view! {
            <SketchpadApp services=services storage_key=config.storage.sketchpad_key.clone() />
        }
        .into_view(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_has_one_entry_per_app_kind_in_order() {
        let ids: Vec<AppId> = app_registry().iter().map(|entry| entry.app_id).collect();
        assert_eq!(ids, AppId::ALL.to_vec());
        for app_id in AppId::ALL {
            assert_eq!(app_descriptor(app_id).app_id, app_id);
        }
    }

    #[test]
    fn default_sizes_respect_minimum_window_size() {
        let config = DesktopConfig::default();
        for entry in app_registry() {
            assert!(entry.default_width >= config.window.min_width);
            assert!(entry.default_height >= config.window.min_height);
        }
    }
}
