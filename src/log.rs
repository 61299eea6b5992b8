//! Logging for the plotter.
//!
//! With the `tracing` feature the macros below are `tracing`'s own and
//! [`init`] installs a stderr subscriber filtered by `RUST_LOG`. Without it
//! every macro expands to nothing and [`init`] does nothing.

#[cfg(feature = "tracing")]
pub use tracing::{debug, info, warn};

// Swallows the event, field syntax included, when logging is compiled out.
#[cfg(not(feature = "tracing"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __gridplot_discard_event {
    ($($event:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{
    __gridplot_discard_event as debug, __gridplot_discard_event as info,
    __gridplot_discard_event as warn,
};

/// Install the stderr subscriber. Stdout is reserved for the rendered grid.
#[cfg(feature = "tracing")]
pub fn init() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(not(feature = "tracing"))]
pub fn init() {}
