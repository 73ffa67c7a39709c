use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LogFormat;

pub const DEFAULT_LOG_FILTER: &str = "info";
/// Audit lines are the invocation's stdout record and stay on whatever `RUST_LOG` says.
pub const AUDIT_DIRECTIVE: &str = "audit=info";

/// Install the stdout subscriber. `RUST_LOG` overrides the default filter.
///
/// A second call is a no-op, so tests and warm starts can call it freely.
pub fn init_tracing(format: LogFormat) {
    let env_filter = build_env_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref());
    let registry = tracing_subscriber::registry().with(env_filter);

    let _ = match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false))
            .try_init(),
        LogFormat::Text => registry.with(fmt::layer().with_ansi(false)).try_init(),
    };
}

fn build_env_filter(raw: Option<&str>) -> EnvFilter {
    let filter = raw
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER));

    match AUDIT_DIRECTIVE.parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}
