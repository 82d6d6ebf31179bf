//! Browser console logging.
//!
//! Messages go to the devtools console on wasm32 and are dropped elsewhere,
//! so the same code runs under native unit tests.

const PREFIX: &str = "[tales]";

pub fn debug(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::debug_1(&format!("{} {}", PREFIX, message).into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = (PREFIX, message);
}

pub fn warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&format!("{} {}", PREFIX, message).into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = (PREFIX, message);
}

pub fn error(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&format!("{} {}", PREFIX, message).into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = (PREFIX, message);
}
