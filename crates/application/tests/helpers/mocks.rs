#![allow(dead_code)]

use async_trait::async_trait;
use keywatch_application::ports::{
    ErrorReporter, KeyProbeResult, KeyProber, MetricsSink, SystemResolverSource,
};
use keywatch_application::services::RandomSource;
use keywatch_domain::{KeyRecordObservation, ProbeError};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub struct MockResolverSource {
    resolvers: Vec<String>,
    should_fail: bool,
    call_count: Arc<AtomicU64>,
}

impl MockResolverSource {
    pub fn with_resolvers(resolvers: Vec<&str>) -> Self {
        Self {
            resolvers: resolvers.into_iter().map(String::from).collect(),
            should_fail: false,
            call_count: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn failing() -> Self {
        Self {
            resolvers: Vec::new(),
            should_fail: true,
            call_count: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn empty() -> Self {
        Self::with_resolvers(vec![])
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl SystemResolverSource for MockResolverSource {
    async fn read_resolvers(&self) -> Result<Vec<String>, ProbeError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        if self.should_fail {
            return Err(ProbeError::ConfigSourceUnavailable(
                "mock source unavailable".to_string(),
            ));
        }
        Ok(self.resolvers.clone())
    }
}

pub struct MockKeyProber {
    results: Mutex<VecDeque<Result<KeyProbeResult, ProbeError>>>,
    calls: Mutex<Vec<(String, String)>>,
}

impl MockKeyProber {
    pub fn new() -> Self {
        Self {
            results: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn push_ok(self, observations: Vec<KeyRecordObservation>, query_time_ms: f64) -> Self {
        self.results.lock().unwrap().push_back(Ok(KeyProbeResult {
            observations,
            query_time_ms,
        }));
        self
    }

    pub fn push_err(self, error: ProbeError) -> Self {
        self.results.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl KeyProber for MockKeyProber {
    async fn probe(
        &self,
        domain: &str,
        server: &str,
        _timeout: Duration,
    ) -> Result<KeyProbeResult, ProbeError> {
        self.calls
            .lock()
            .unwrap()
            .push((domain.to_string(), server.to_string()));
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("MockKeyProber ran out of queued results"))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedPoint {
    pub measurement: String,
    pub fields: Vec<(String, f64)>,
    pub tags: Vec<(String, String)>,
}

impl RecordedPoint {
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn field(&self, key: &str) -> Option<f64> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| *v)
    }
}

#[derive(Default)]
pub struct RecordingSink {
    points: Mutex<Vec<RecordedPoint>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> Vec<RecordedPoint> {
        self.points.lock().unwrap().clone()
    }
}

impl MetricsSink for RecordingSink {
    fn record(&self, measurement: &str, fields: &[(&str, f64)], tags: &[(&str, &str)]) {
        self.points.lock().unwrap().push(RecordedPoint {
            measurement: measurement.to_string(),
            fields: fields.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
            tags: tags
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        });
    }
}

#[derive(Default)]
pub struct CountingReporter {
    errors: Mutex<Vec<ProbeError>>,
}

impl CountingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reported(&self) -> Vec<ProbeError> {
        self.errors.lock().unwrap().clone()
    }

    pub fn report_count(&self) -> usize {
        self.errors.lock().unwrap().len()
    }
}

impl ErrorReporter for CountingReporter {
    fn report(&self, error: &ProbeError) {
        self.errors.lock().unwrap().push(error.clone());
    }
}

pub struct FixedRandom(pub usize);

impl RandomSource for FixedRandom {
    fn next_index(&self, bound: usize) -> usize {
        self.0 % bound
    }
}
