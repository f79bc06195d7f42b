// Fog Grid Kernel - Free and Open Source Software Statement
//
// This project, foggrid, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/logging.rs
// Version: 1.0.0
//
// This file sets up log4rs for the host harness. A YAML configuration file is
// used when given; otherwise a console appender is installed at the requested
// level.
//
// Tree Location:
// - src/logging.rs (log4rs initialisation)
// - Depends on: log, log4rs, anyhow

use anyhow::Context;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::path::Path;

const CONSOLE_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {h({l:<5})} {t} - {m}{n}";

/// Initialise logging from `config_file` if present, else console at `level`
pub fn init(config_file: Option<&Path>, level: LevelFilter) -> anyhow::Result<()> {
    match config_file {
        Some(path) => log4rs::init_file(path, Default::default())
            .with_context(|| format!("Could not load log4rs configuration {:?}", path)),
        None => {
            log4rs::init_config(console_config(level)?).context("Could not set up logging")?;
            Ok(())
        }
    }
}

/// Console-only configuration writing to stderr, so --json output on stdout stays clean
pub fn console_config(level: LevelFilter) -> anyhow::Result<Config> {
    let console = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(CONSOLE_PATTERN)))
        .build();

    Config::builder()
        .appender(Appender::builder().build("console", Box::new(console)))
        .build(Root::builder().appender("console").build(level))
        .context("Invalid log4rs console configuration")
}
