// File: ./src/logging.rs
//! Terminal logger shared by both binaries. Diagnostics go to stderr so
//! `-p` output on stdout stays clean.

use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Overrides the level chosen from the command line (`error` .. `trace`).
pub const LOG_ENV: &str = "STAKECAL_LOG";

pub fn level_for(verbose: bool, env_value: Option<&str>) -> LevelFilter {
    if let Some(level) = env_value.and_then(|v| v.trim().parse::<LevelFilter>().ok()) {
        return level;
    }
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

pub fn init(verbose: bool) {
    let env_value = std::env::var(LOG_ENV).ok();
    let level = level_for(verbose, env_value.as_deref());
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .build();
    // A second init (tests, embedding) keeps the first logger.
    let _ = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto);
}
