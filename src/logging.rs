//! Logger setup shared by the demo binaries.

use log::LevelFilter;

/// Environment variable selecting the log level.
pub const LOG_ENV_VAR: &str = "SB7_LOG";

/// Parses a level name, falling back to `info` for anything unrecognised.
pub fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Installs a stdout logger at the level named by [`LOG_ENV_VAR`].
pub fn init() -> Result<(), String> {
    let level = parse_level(std::env::var(LOG_ENV_VAR).ok().as_deref());

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()
        .map_err(|e| e.to_string())
}
