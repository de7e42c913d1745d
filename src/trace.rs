//! Request observation events and sinks.
//!
//! Every HTTP attempt the gateway makes is reported to a [`TraceSink`] so
//! hosts can route request logs through their own collector. The default
//! sink forwards to `tracing`; tests install a recording sink instead of
//! scraping global logger output.

use http::{Method, StatusCode};

/// Number of body characters preserved in a trace or error message.
const BODY_EXCERPT_CHARS: usize = 160;

/// A single HTTP attempt observed by the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTrace {
    /// HTTP method of the attempt.
    pub method: Method,
    /// Full request URL.
    pub url: String,
    /// Response status, or `None` when no response arrived.
    pub status: Option<StatusCode>,
    /// Truncated response body, when one was read.
    pub body_excerpt: Option<String>,
}

impl RequestTrace {
    /// True when the attempt never completed or Stash answered with a
    /// non-success status.
    ///
    /// Sinks route on this to pick a severity for the attempt.
    #[must_use]
    pub fn failed(&self) -> bool {
        self.status.is_none_or(|status| !status.is_success())
    }
}

/// A sink that can record request traces.
pub trait TraceSink: Send + Sync {
    /// Records one request trace.
    fn record(&self, trace: RequestTrace);
}

/// Trace sink that drops all traces.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTraceSink;

impl TraceSink for NoopTraceSink {
    fn record(&self, _trace: RequestTrace) {}
}

/// Default sink forwarding traces to the `tracing` subscriber.
///
/// Successful requests log at info level; non-success statuses and attempts
/// that died before a response arrived log at warn level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingTraceSink;

impl TraceSink for TracingTraceSink {
    fn record(&self, trace: RequestTrace) {
        let Some(status) = trace.status else {
            tracing::warn!(
                method = %trace.method,
                url = %trace.url,
                "stash request failed before a response arrived"
            );
            return;
        };

        if trace.failed() {
            tracing::warn!(
                method = %trace.method,
                url = %trace.url,
                status = status.as_u16(),
                body = trace.body_excerpt.as_deref().unwrap_or(""),
                "stash request failed"
            );
        } else {
            tracing::info!(
                method = %trace.method,
                url = %trace.url,
                status = status.as_u16(),
                body = trace.body_excerpt.as_deref().unwrap_or(""),
                "stash request completed"
            );
        }
    }
}

/// Truncates a response body for inclusion in traces and error messages.
pub(crate) fn body_excerpt(body: &str) -> String {
    let mut output = String::new();
    let mut chars = body.chars();

    for _ in 0..BODY_EXCERPT_CHARS {
        let Some(character) = chars.next() else {
            return output;
        };
        output.push(character);
    }

    if chars.next().is_some() {
        output.push_str("...");
    }

    output
}

/// Trace sink that retains every trace for later inspection.
#[cfg(any(test, feature = "test-support"))]
#[derive(Debug, Default)]
pub struct RecordingTraceSink {
    traces: std::sync::Mutex<Vec<RequestTrace>>,
}

#[cfg(any(test, feature = "test-support"))]
impl RecordingTraceSink {
    /// Removes and returns every trace recorded so far.
    #[must_use]
    pub fn take(&self) -> Vec<RequestTrace> {
        self.traces
            .lock()
            .map(|mut traces| traces.drain(..).collect())
            .unwrap_or_default()
    }
}

#[cfg(any(test, feature = "test-support"))]
impl TraceSink for RecordingTraceSink {
    fn record(&self, trace: RequestTrace) {
        if let Ok(mut traces) = self.traces.lock() {
            traces.push(trace);
        }
    }
}
