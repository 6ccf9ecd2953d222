use keywatch_domain::ProbeError;

/// Failure channel of the host pipeline, distinct from measurement
/// emission. Called exactly once per failed collection pass.
pub trait ErrorReporter: Send + Sync {
    fn report(&self, error: &ProbeError);
}
