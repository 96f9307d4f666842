use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt::{self, format::FmtSpan}};

/// Installs the global subscriber at `info`, or whatever `RUST_LOG` asks for.
pub fn init() {
    // A subscriber installed earlier (e.g. by a test harness) wins.
    let _ = try_init("info");
}

pub fn try_init(default_directive: &str) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))?;

    // Stage spans are only worth printing when debugging a decode.
    let directives = env_filter.to_string();
    let span_events = if ["debug", "trace"].iter().any(|level| directives.contains(level)) {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_timer(fmt::time::uptime())
        .with_span_events(span_events);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;
    Ok(())
}
