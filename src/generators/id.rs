use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::models::InvoiceId;

/// Hands out time-derived invoice ids (Unix milliseconds).
///
/// Two requests in the same millisecond, or a clock that steps backwards,
/// would otherwise collide; in that case the previous id plus one is used, so
/// ids are strictly increasing for the lifetime of the process.
#[derive(Debug, Default)]
pub struct InvoiceIdGenerator {
    last: AtomicI64,
}

impl InvoiceIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> InvoiceId {
        InvoiceId::new(self.next_value(now_millis()).to_string())
    }

    fn next_value(&self, now: i64) -> i64 {
        let mut last = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(last + 1);
            match self
                .last
                .compare_exchange_weak(last, candidate, Ordering::AcqRel, Ordering::Relaxed)
            {
                Ok(_) => return candidate,
                Err(actual) => last = actual,
            }
        }
    }
}

pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
