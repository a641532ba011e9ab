//! Log module, reference https://docs.rs/log4rs
//!
//! Adapted from a persistent-file appender (right for a long-running
//! game process) to a stderr console appender: a one-shot CLI run has
//! nothing that would ever read a log file back.

use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

/// Initializes the log system at the given level, writing to stderr.
///
/// `-v` (repeated) raises the level: 0 => Warn, 1 => Info, 2 => Debug,
/// 3+ => Trace.
pub fn init_log(level: LevelFilter) {
    let console = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{l} {t} {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(level)))
                .build("stderr", Box::new(console)),
        )
        .build(Root::builder().appender("stderr").build(level))
        .expect("log4rs config is well-formed");
    let _handle = log4rs::init_config(config).expect("log4rs init only runs once");
}

/// Maps a `-v` occurrence count to a log level.
pub fn level_from_verbosity(count: u8) -> LevelFilter {
    match count {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
