//! Console logging
//!
//! On wasm32 messages go to the browser console through `web_sys`.
//! Native builds (tests, tools) cannot call wasm-bindgen imports, so the
//! same macros fall back to stderr.

/// Write one line at "log" level.
pub fn log_line(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::log_1(&message.into());
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        eprintln!("{}", message);
    }
}

/// Write one line at "warn" level.
pub fn warn_line(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::warn_1(&message.into());
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        eprintln!("warning: {}", message);
    }
}

/// `console_log!("spawned {} balls", n)`
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {
        $crate::core::utils::log_line(&format!($($arg)*))
    };
}

/// `console_warn!("rejected settings: {}", err)`
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        $crate::core::utils::warn_line(&format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn macros_format_without_panicking() {
        console_log!("balls: {}", 3);
        console_warn!("bad value {:?}", "x");
    }
}
