/// Sink for the human-readable outcome lines of each invocation.
pub trait AuditLog {
    fn record(&self, message: &str);
}

/// Emits audit lines as `info` events on the `audit` target, which the
/// subscriber installed by `telemetry::init_tracing` writes to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAuditLog;

impl AuditLog for TracingAuditLog {
    fn record(&self, message: &str) {
        tracing::info!(target: "audit", "{message}");
    }
}
