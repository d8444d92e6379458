use anyhow::{anyhow, Context, Result};
use std::collections::HashMap;
use std::sync::{LazyLock, Mutex};
use std::time::Instant;
use tracing_subscriber::fmt::time::OffsetTime;

pub static LAST_LOG: LazyLock<Mutex<HashMap<String, Instant>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// Returns true if the call site `loc` has not logged within the last `millis` milliseconds,
/// and records the current time for it.
pub fn should_log(loc: String, millis: u128) -> bool {
    let Ok(mut last_log) = LAST_LOG.lock() else {
        return true;
    };
    if last_log
        .get(&loc)
        .map_or(true, |then| then.elapsed().as_millis() >= millis)
    {
        last_log.insert(loc, Instant::now());
        true
    } else {
        false
    }
}

#[macro_export]
macro_rules! info_every_seconds {
    ($seconds:expr, $($args:expr),+) => {
        let loc = $crate::util::assert::current_location!();
        if $crate::util::log::should_log(loc, u128::from($seconds as u64) * 1000) {
            $crate::core::prelude::info!($($args),+);
        }
    }
}
#[macro_export]
macro_rules! warn_every_seconds {
    ($seconds:expr, $($args:expr),+) => {
        let loc = $crate::util::assert::current_location!();
        if $crate::util::log::should_log(loc, u128::from($seconds as u64) * 1000) {
            $crate::core::prelude::warn!($($args),+);
        }
    }
}

/// Installs the global `tracing` subscriber, writing to `run.log` in the working directory.
pub fn setup_log() -> Result<()> {
    let logfile = std::fs::OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open("run.log")
        .context("could not open run.log")?;
    let timer = OffsetTime::new(
        time::UtcOffset::UTC,
        time::macros::format_description!("[hour]:[minute]:[second].[subsecond digits:6]"),
    );
    tracing_subscriber::fmt()
        .event_format(
            tracing_subscriber::fmt::format()
                .with_target(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(timer),
        )
        .with_writer(Mutex::new(logfile))
        .try_init()
        .map_err(|e| anyhow!("could not install tracing subscriber: {e}"))?;
    Ok(())
}
