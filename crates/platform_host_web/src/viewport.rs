//! Viewport geometry queries.

/// Width assumed when the host cannot report one (native targets, detached documents).
pub const FALLBACK_VIEWPORT_WIDTH: i32 = 1280;

/// Returns the current browser viewport width in CSS pixels.
pub fn viewport_width() -> i32 {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .map(|w| w.round() as i32)
            .unwrap_or(FALLBACK_VIEWPORT_WIDTH)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        FALLBACK_VIEWPORT_WIDTH
    }
}
