//! Time helpers shared across host contracts and adapters.

#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};

/// Returns the current unix timestamp in milliseconds.
pub fn unix_time_ms_now() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now().max(0.0) as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

/// Returns today's local date as `YYYY-MM-DD`, used to stamp exported file names.
pub fn date_stamp_now() -> String {
    date_stamp(chrono::Local::now().date_naive())
}

/// Formats a calendar date as `YYYY-MM-DD`.
pub fn date_stamp(date: chrono::NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
