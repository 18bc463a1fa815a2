//! Fatal invariant violations.
//!
//! [`tsnh!`](crate::tsnh) ("this should never happen") is for states the
//! program cannot reach unless an invariant is broken. It logs and aborts
//! without unwinding; recoverable failures use [`crate::Result`] instead.

use std::fmt;
use std::panic::Location;
use tracing::error;

/// Log `message` with the caller's location, then abort the process
#[cold]
#[track_caller]
pub fn this_should_never_happen(message: fmt::Arguments<'_>) -> ! {
    let location = Location::caller();
    error!(%location, "This should never happen: {}", message);
    std::process::abort()
}

/// Abort the process after logging a `format!`-style message.
///
/// ```no_run
/// # let state = 3;
/// if state > 2 {
///     utilkit_core::tsnh!("unexpected state {}", state);
/// }
/// ```
#[macro_export]
macro_rules! tsnh {
    ($($arg:tt)*) => {
        $crate::fatal::this_should_never_happen(::std::format_args!($($arg)*))
    };
}
