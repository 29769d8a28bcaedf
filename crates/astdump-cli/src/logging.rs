use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` does not say otherwise.
pub fn default_level(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the stderr subscriber. Stdout carries dumps only.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::builder()
        .with_default_directive(default_level(verbosity).into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
