//! Browser console logging

use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tracing_web::MakeWebConsoleWriter;

/// Debug builds log at `DEBUG`, release builds at `INFO`
pub const fn default_level() -> Level {
    if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

/// Route `tracing` events to the browser console.
///
/// The wasm target has no system clock for the fmt layer, so timestamps are
/// left to the console.
pub fn init_logging(level: Level) {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new().with_pretty_level());

    let result = tracing_subscriber::registry()
        .with(LevelFilter::from_level(level))
        .with(fmt_layer)
        .try_init();

    if let Err(err) = result {
        gloo::console::warn!(format!("Logging already initialized: {err}"));
    }
}
