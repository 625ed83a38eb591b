use tracing::Level;

/// Installs a compact fmt subscriber. `verbosity` 0 = warn, 1 = info,
/// 2 = debug, 3+ = trace. Calling it twice is harmless.
pub fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let format = tracing_subscriber::fmt::format().compact();
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .event_format(format)
        .with_writer(std::io::stderr)
        .try_init();
}
