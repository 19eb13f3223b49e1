//! Bad Widgets - simulation core for a gallery of deliberately frustrating UI
//!
//! Core modules:
//! - `sim`: Deterministic simulation (evasive cursor, bouncing target, goose pen)
//! - `schedule`: Fixed-timestep driver
//! - `settings`: Persisted preferences (the only persistence in the gallery)
//!
//! The crate is headless. Rendering, routing and form plumbing live in the
//! embedding shell; hit-testing and synthetic event dispatch are injected
//! through `sim::redirect::HitTest`.

pub mod schedule;
pub mod settings;
pub mod sim;

pub use schedule::FixedTimestep;
pub use settings::Settings;

/// Widget tick-rate constants
pub mod consts {
    /// Evasive cursor tick rate (Hz)
    pub const CURSOR_TICK_HZ: f32 = 60.0;
    /// Evasive cursor timestep (seconds)
    pub const CURSOR_DT: f32 = 1.0 / CURSOR_TICK_HZ;
    /// Bouncing target timestep (8 ms single-shot timer, rescheduled each tick)
    pub const TARGET_DT: f32 = 0.008;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
}

/// One-time web build initialization: panic messages and log output go to
/// the browser console.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn wasm_init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Wrap a hue angle into [0, 360)
#[inline]
pub fn wrap_hue(mut deg: f32) -> f32 {
    while deg >= 360.0 {
        deg -= 360.0;
    }
    while deg < 0.0 {
        deg += 360.0;
    }
    deg
}
