use log::LevelFilter;

/// `0` (or anything above `3`) is off, then `Info`, `Debug`, `Trace`.
pub fn level_for_verbosity(v: u8) -> LevelFilter {
    match v {
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        3 => LevelFilter::Trace,
        _ => LevelFilter::Off,
    }
}

/// Logs to stderr without location, target or thread columns.
pub fn init_simple_logger(l: LevelFilter) -> Result<(), log::SetLoggerError> {
    use simplelog::{Color, ColorChoice, ConfigBuilder, Level, TermLogger, TerminalMode};

    let config = ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .set_level_color(Level::Trace, Some(Color::Green))
        .build();

    TermLogger::init(l, config, TerminalMode::Stderr, ColorChoice::Auto)
}
