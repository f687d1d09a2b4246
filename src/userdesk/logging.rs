//! Subscriber setup for binaries. The library only emits `tracing` events.
//!
//! `USERDESK_LOG` takes an `EnvFilter` directive (`debug`, `userdesk=trace`, ...).
//! `USERDESK_LOG_FORMAT=json` switches to one JSON object per line. Output goes
//! to stderr so command output on stdout stays clean.

use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_ENV: &str = "USERDESK_LOG";
pub const LOG_FORMAT_ENV: &str = "USERDESK_LOG_FORMAT";

pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));
    let json = env::var(LOG_FORMAT_ENV)
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    // try_init: a second call (tests, embedding) keeps the first subscriber.
    if json {
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init();
    } else {
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init();
    }
}
