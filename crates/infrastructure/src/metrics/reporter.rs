use keywatch_application::ports::ErrorReporter;
use keywatch_domain::ProbeError;
use tracing::error;

/// Error channel for the standalone binary: failed passes surface in the
/// log stream.
pub struct TracingErrorReporter;

impl TracingErrorReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TracingErrorReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, error: &ProbeError) {
        error!(error = %error, "Collection pass failed");
    }
}
