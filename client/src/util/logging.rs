//! Browser console logging.
//!
//! The `drag-preview` crate logs through `tracing`, which forwards to the `log`
//! facade when no subscriber is installed. Installing `console_log` here
//! routes both to the browser console. Server builds keep whatever logger the
//! host process installed.

/// Install the panic hook and console logger. Safe to call more than once.
pub fn init() {
    #[cfg(feature = "hydrate")]
    {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Debug) {
            leptos::logging::warn!("console logger already installed: {e}");
        }
    }
}
