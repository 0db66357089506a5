use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing with optional file output.
///
/// Logging is disabled by default so it cannot corrupt the TUI display.
/// Set `DATEPICK_LOG` to a file path to enable it; `RUST_LOG` controls
/// the filter and defaults to `info`.
pub fn init_tracing() {
    let Ok(log_path) = std::env::var("DATEPICK_LOG") else {
        return;
    };

    // Suffix with timestamp and pid so concurrent instances never share
    // a file.
    let unique_path = format!("{}.{}.{}", log_path, unix_seconds(), std::process::id());
    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(file).with_ansi(false))
        .init();
}

fn unix_seconds() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
