#![cfg(feature = "std")]

use std::env;
use std::sync::OnceLock;
use std::time::{Duration, Instant};
use log::{self, LevelFilter, Metadata, Record};

struct SimpleLogger;

static STARTED: OnceLock<Instant> = OnceLock::new();

/// One log line: seconds since logging started, level, module, message.
fn format_line(elapsed: Duration, record: &Record) -> String {
    format!(
        "{:>9.3}s {:<5} {} - {}",
        elapsed.as_secs_f64(),
        record.level(),
        record.target(),
        record.args()
    )
}

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let elapsed = STARTED.get_or_init(Instant::now).elapsed();
            eprintln!("{}", format_line(elapsed, record));
        }
    }

    fn flush(&self) {}
}

static LOGGER: SimpleLogger = SimpleLogger;

/// Initialize logging with a level taken from the `BATTLESHIP_LOG` environment variable.
/// Defaults to `info` if the variable is not set or invalid. Lines go to stderr,
/// stamped with the time since this call, so stdout stays free for reports.
pub fn init_logging() {
    STARTED.get_or_init(Instant::now);
    let level = env::var("BATTLESHIP_LOG")
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
