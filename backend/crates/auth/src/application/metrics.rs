//! Login Metrics
//!
//! Counters exposed on `/metrics`.

use prometheus::{IntCounter, Registry};

pub const LOGIN_FAILURES_TOTAL: &str = "app_login_failures_total";
pub const LOGIN_SUCCESS_TOTAL: &str = "app_login_success_total";

#[derive(Clone)]
pub struct LoginMetrics {
    failures: IntCounter,
    success: IntCounter,
}

impl LoginMetrics {
    /// Create the counters and register them with `registry`
    pub fn register(registry: &Registry) -> prometheus::Result<Self> {
        let failures = IntCounter::new(LOGIN_FAILURES_TOTAL, "Total number of failed logins")?;
        let success = IntCounter::new(LOGIN_SUCCESS_TOTAL, "Total number of successful logins")?;

        registry.register(Box::new(failures.clone()))?;
        registry.register(Box::new(success.clone()))?;

        Ok(Self { failures, success })
    }

    pub fn record_failure(&self) {
        self.failures.inc();
    }

    pub fn record_success(&self) {
        self.success.inc();
    }

    pub fn failures(&self) -> u64 {
        self.failures.get()
    }

    pub fn successes(&self) -> u64 {
        self.success.get()
    }
}
