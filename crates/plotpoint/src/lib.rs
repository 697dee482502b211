// File: crates/plotpoint/src/lib.rs
// Summary: Shared front-end plumbing for the `plotpoint` CLI and window viewer.

pub mod config;

pub use config::{ChartArgs, Config, OutputFormat, PaletteFile};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install a stderr subscriber filtered by `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "plotpoint=info,plotpoint_core=info,plotpoint_render_skia=info".into()),
        )
        .try_init();
}
