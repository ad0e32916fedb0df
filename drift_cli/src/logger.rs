use anyhow::{Context, Result};
use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, SharedLogger, TermLogger, TerminalMode, WriteLogger,
};
use std::fs::File;
use std::path::Path;

/// Terminal logger, plus a full trace log when `file` is given
pub fn log_init(file: Option<&Path>) -> Result<()> {
    #[cfg(debug_assertions)]
    let log_level = LevelFilter::Debug;

    #[cfg(not(debug_assertions))]
    let log_level = LevelFilter::Info;

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        log_level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];

    if let Some(path) = file {
        let file = File::create(path)
            .with_context(|| format!("cannot create log file {}", path.display()))?;
        loggers.push(WriteLogger::new(LevelFilter::Trace, Config::default(), file));
    }

    CombinedLogger::init(loggers).context("logger already initialised")?;
    Ok(())
}
