//! Desktop shell configuration.
//!
//! Tunables live in `desktop.toml` next to the crate manifest. The build script validates the
//! schema version and embeds the file as JSON; [`DesktopConfig::builtin`] decodes it at runtime.
//! Every section and key is optional and falls back to the values in [`Default`].

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::WindowRect;

include!(concat!(env!("OUT_DIR"), "/desktop_config_generated.rs"));

/// Config schema version understood by this runtime.
pub const DESKTOP_CONFIG_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reasons a desktop configuration document is rejected.
pub enum ConfigError {
    /// The document is not valid JSON or has mistyped fields.
    #[error("desktop config could not be decoded: {0}")]
    Decode(String),
    /// The document declares a schema this runtime does not understand.
    #[error("unsupported desktop config schema version {0}")]
    SchemaVersion(u32),
    /// A numeric tunable that must be positive is zero or negative.
    #[error("`{field}` must be positive (found {value})")]
    NonPositive {
        /// Dotted path of the offending field.
        field: &'static str,
        /// Value found in the document.
        value: i64,
    },
    /// A storage key is blank.
    #[error("storage key `{0}` must not be empty")]
    EmptyStorageKey(&'static str),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Window placement and sizing tunables.
pub struct WindowConfig {
    /// Minimum width enforced by resize.
    pub min_width: i32,
    /// Minimum height enforced by resize.
    pub min_height: i32,
    /// X origin of newly opened windows before stagger.
    pub base_x: i32,
    /// Y origin of newly opened windows before stagger.
    pub base_y: i32,
    /// Offset added per stagger slot on both axes.
    pub stagger_step: i32,
    /// Number of stagger slots before the offset wraps.
    pub stagger_slots: u32,
    /// Bounds used when restoring a maximized window that has no saved snapshot.
    pub restore_fallback: WindowRect,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            min_width: 240,
            min_height: 160,
            base_x: 120,
            base_y: 80,
            stagger_step: 30,
            stagger_slots: 5,
            restore_fallback: WindowRect::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Desktop icon layout and gesture tunables.
pub struct IconConfig {
    /// X coordinate of the default icon column.
    pub origin_x: i32,
    /// Y coordinate of the first default icon (below the menu bar).
    pub origin_y: i32,
    /// Vertical distance between default icon slots.
    pub spacing: i32,
    /// Pointer travel (exclusive) before a press becomes a drag.
    pub drag_threshold: i32,
    /// Maximum gap (exclusive) between two clean clicks to count as a double click.
    pub double_click_window_ms: u64,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            origin_x: 16,
            origin_y: 32,
            spacing: 80,
            drag_threshold: 5,
            double_click_window_ms: 400,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Viewport breakpoint tunables.
pub struct ResponsiveConfig {
    /// Viewports at or below this width use the narrow (touch) policy.
    pub narrow_breakpoint: i32,
}

impl Default for ResponsiveConfig {
    fn default() -> Self {
        Self {
            narrow_breakpoint: 640,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Typewriter reveal tunables.
pub struct RevealConfig {
    /// Interval between one-character reveal steps.
    pub tick_ms: u64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self { tick_ms: 12 }
    }
}

impl RevealConfig {
    /// Reveal interval as a [`Duration`].
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Boot screen timing tunables.
pub struct BootConfig {
    /// Time the progress bar takes to fill.
    pub duration_ms: u64,
    /// Interval between progress steps.
    pub tick_ms: u64,
    /// Pause between reaching 100% and starting the fade.
    pub welcome_pause_ms: u64,
    /// Fade length before the desktop is revealed.
    pub fade_ms: u64,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            duration_ms: 1800,
            tick_ms: 20,
            welcome_pause_ms: 300,
            fade_ms: 300,
        }
    }
}

impl BootConfig {
    /// Progress added per tick so the bar fills in `duration_ms`.
    pub fn progress_increment(&self) -> f64 {
        100.0 / (self.duration_ms as f64 / self.tick_ms as f64)
    }

    /// Progress interval as a [`Duration`].
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Delay from reaching 100% until the fade starts.
    pub fn fade_delay(&self) -> Duration {
        Duration::from_millis(self.welcome_pause_ms)
    }

    /// Delay from reaching 100% until the desktop-ready signal.
    pub fn ready_delay(&self) -> Duration {
        Duration::from_millis(self.welcome_pause_ms + self.fade_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Menu bar clock tunables.
pub struct ClockConfig {
    /// Refresh interval of the clock label.
    pub tick_ms: u64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self { tick_ms: 1000 }
    }
}

impl ClockConfig {
    /// Refresh interval as a [`Duration`].
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Local store keys used by the content apps.
pub struct StorageKeys {
    /// Key holding the notepad text.
    pub notepad_key: String,
    /// Key holding the serialized sketch document.
    pub sketchpad_key: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            notepad_key: "desktop:notepad".to_string(),
            sketchpad_key: "desktop:sketchpad".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Complete desktop shell configuration.
pub struct DesktopConfig {
    /// Schema version of the source document.
    pub schema_version: u32,
    /// Window placement and sizing.
    pub window: WindowConfig,
    /// Icon layout and gestures.
    pub icons: IconConfig,
    /// Viewport breakpoint.
    pub responsive: ResponsiveConfig,
    /// Typewriter reveal.
    pub reveal: RevealConfig,
    /// Boot screen timings.
    pub boot: BootConfig,
    /// Menu bar clock.
    pub clock: ClockConfig,
    /// App storage keys.
    pub storage: StorageKeys,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            schema_version: DESKTOP_CONFIG_SCHEMA_VERSION,
            window: WindowConfig::default(),
            icons: IconConfig::default(),
            responsive: ResponsiveConfig::default(),
            reveal: RevealConfig::default(),
            boot: BootConfig::default(),
            clock: ClockConfig::default(),
            storage: StorageKeys::default(),
        }
    }
}

impl DesktopConfig {
    /// Returns the configuration embedded at build time.
    ///
    /// Falls back to [`DesktopConfig::default`] (with a logged warning) if the embedded
    /// document fails validation.
    pub fn builtin() -> Self {
        match Self::from_json(DESKTOP_CONFIG_JSON) {
            Ok(config) => config,
            Err(err) => {
                leptos::logging::warn!("embedded desktop config rejected, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Decodes and validates a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when decoding or validation fails.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|e| ConfigError::Decode(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks cross-field invariants the engine relies on.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.schema_version != DESKTOP_CONFIG_SCHEMA_VERSION {
            return Err(ConfigError::SchemaVersion(self.schema_version));
        }

        let positive: [(&'static str, i64); 9] = [
            ("window.min_width", self.window.min_width.into()),
            ("window.min_height", self.window.min_height.into()),
            ("window.stagger_slots", self.window.stagger_slots.into()),
            ("icons.double_click_window_ms", clamp_ms(self.icons.double_click_window_ms)),
            ("reveal.tick_ms", clamp_ms(self.reveal.tick_ms)),
            ("boot.duration_ms", clamp_ms(self.boot.duration_ms)),
            ("boot.tick_ms", clamp_ms(self.boot.tick_ms)),
            ("clock.tick_ms", clamp_ms(self.clock.tick_ms)),
            ("responsive.narrow_breakpoint", self.responsive.narrow_breakpoint.into()),
        ];
        for (field, value) in positive {
            if value <= 0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        if self.storage.notepad_key.trim().is_empty() {
            return Err(ConfigError::EmptyStorageKey("storage.notepad_key"));
        }
        if self.storage.sketchpad_key.trim().is_empty() {
            return Err(ConfigError::EmptyStorageKey("storage.sketchpad_key"));
        }
        Ok(())
    }
}

fn clamp_ms(ms: u64) -> i64 {
    i64::try_from(ms).unwrap_or(i64::MAX)
}
