#![allow(dead_code)]

use async_trait::async_trait;
use keywatch_application::ports::{CollectOutcome, KeyCollector};
use keywatch_domain::ProbeError;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

pub struct MockKeyCollector {
    call_count: AtomicU64,
    should_fail: AtomicBool,
}

impl MockKeyCollector {
    pub fn new() -> Self {
        Self {
            call_count: AtomicU64::new(0),
            should_fail: AtomicBool::new(false),
        }
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::Relaxed);
    }
}

#[async_trait]
impl KeyCollector for MockKeyCollector {
    async fn collect_once(&self) -> Result<CollectOutcome, ProbeError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        if self.should_fail.load(Ordering::Relaxed) {
            return Err(ProbeError::EmptyResolverSet);
        }
        Ok(CollectOutcome {
            domains_queried: 1,
            records_emitted: 2,
        })
    }
}
