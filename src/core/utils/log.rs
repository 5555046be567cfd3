//! Console logging
//!
//! On wasm32 the messages go to the browser console through `web_sys`.
//! On native targets (unit tests, benches) JS imports are unavailable, so the
//! macros only type-check their arguments and emit nothing.

/// Log an informational message to the browser console.
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            ::web_sys::console::log_1(&::std::format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            if false {
                let _ = ::std::format!($($arg)*);
            }
        }
    }};
}

/// Log a warning to the browser console.
macro_rules! console_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            ::web_sys::console::warn_1(&::std::format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            if false {
                let _ = ::std::format!($($arg)*);
            }
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn macros_are_noops_off_wasm() {
        let id = "camera";
        console_log!("reset {} bodies", 6);
        console_warn!("duplicate body id '{}'", id);
    }
}
