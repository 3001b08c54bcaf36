// ============================================================================
// vidshrink-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: env_logger initialisation for the CLI
//
// All diagnostics go through the `log` facade to stderr, leaving stdout for
// the summary. RUST_LOG overrides the level chosen here:
// - default: info
// - --verbose: debug (adds the full converter command lines)

use std::io::Write;

use log::LevelFilter;
use owo_colors::OwoColorize;

/// Initialize the logger with `info` or, when `verbose`, `debug` level.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let colored = console::colors_enabled_stderr();

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(move |buf, record| {
            let timestamp = buf.timestamp();
            writeln!(
                buf,
                "{} {} {}",
                timestamp,
                level_label(record.level(), colored),
                record.args()
            )
        })
        .init();

    log::debug!("Logger initialized with level: {}", level);
}

fn level_label(level: log::Level, colored: bool) -> String {
    let label = match level {
        log::Level::Error => "ERROR",
        log::Level::Warn => "WARN ",
        log::Level::Info => "INFO ",
        log::Level::Debug => "DEBUG",
        log::Level::Trace => "TRACE",
    };
    if !colored {
        return label.to_string();
    }
    match level {
        log::Level::Error => label.bright_red().to_string(),
        log::Level::Warn => label.yellow().to_string(),
        log::Level::Info => label.green().to_string(),
        log::Level::Debug => label.blue().to_string(),
        log::Level::Trace => label.magenta().to_string(),
    }
}

/// Returns the current local time formatted for run start/finish lines.
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_level_labels_are_aligned() {
        for level in [
            log::Level::Error,
            log::Level::Warn,
            log::Level::Info,
            log::Level::Debug,
            log::Level::Trace,
        ] {
            assert_eq!(level_label(level, false).len(), 5);
        }
    }
}
