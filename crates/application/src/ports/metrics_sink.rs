/// Destination for measurements. The host metrics pipeline sits behind
/// this trait; the core calls it once per decoded key record.
pub trait MetricsSink: Send + Sync {
    fn record(&self, measurement: &str, fields: &[(&str, f64)], tags: &[(&str, &str)]);
}
