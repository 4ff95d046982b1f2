//! Ember runtime model
//!
//! What evaluated expressions produce:
//! - [`Value`]: primitives inline, objects by handle
//! - [`Object`]: heap strings and arrays
//! - [`Type`]: runtime type descriptors, comparable with source typenames
//! - [`ObjectHeap`]: the registry that owns every object until shutdown

mod heap;
mod object;
mod types;
mod value;

use std::sync::Once;

pub use heap::ObjectHeap;
pub use object::{ArrayObject, Object, ObjectTag, StringObject};
pub use types::Type;
pub use value::{ObjectId, Value};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=ember_eval=debug` or `RUST_LOG=ember_eval=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
