pub mod apps;
pub mod boot;
pub mod clock;
pub mod components;
pub mod config;
pub mod content;
pub mod icon_layout;
pub mod model;
pub mod reducer;
pub mod responsive;
pub mod reveal;
mod runtime_context;
pub mod window_manager;

pub use components::{DesktopProvider, DesktopRuntimeContext, DesktopShell, TypedPage};
pub use config::{ConfigError, DesktopConfig};
pub use content::{reveal, reveal_prefix, ContentNode, StyleTag};
pub use icon_layout::{ClickTracker, IconArrangement, IconLayout, IconRelease};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, DesktopEvent};
pub use responsive::{CloseAffordance, ViewportMode};
pub use reveal::Revealer;
pub use window_manager::{resize_rect, WindowManager};
