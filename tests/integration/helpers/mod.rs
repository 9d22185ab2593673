// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use seedrs::domain::remote::{CreatedRecord, EntityKind, RemoteDriver, RemoteError};
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, Once};

/// In-memory driver that records every creation call in order and hands
/// out sequential ids, so ordering and call-count properties can be
/// asserted without a network.
pub struct RecordingDriver {
    calls: Mutex<Vec<(EntityKind, Value)>>,
    next_id: AtomicU64,
    fail_from: Option<usize>,
}

impl RecordingDriver {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1000001),
            fail_from: None,
        }
    }

    /// Succeed for the first `n` calls, fail every call after that.
    pub fn failing_from(n: usize) -> Self {
        Self {
            fail_from: Some(n),
            ..Self::new()
        }
    }

    /// All recorded calls, in submission order.
    pub fn calls(&self) -> Vec<(EntityKind, Value)> {
        self.calls.lock().unwrap().clone()
    }

    /// The "Name" attribute of every recorded call, in submission order.
    pub fn submitted_names(&self) -> Vec<String> {
        self.calls()
            .iter()
            .map(|(_, attributes)| attributes["Name"].as_str().unwrap().to_string())
            .collect()
    }
}

#[async_trait]
impl RemoteDriver for RecordingDriver {
    async fn create(
        &self,
        kind: EntityKind,
        attributes: Value,
    ) -> Result<CreatedRecord, RemoteError> {
        let mut calls = self.calls.lock().unwrap();
        if let Some(fail_from) = self.fail_from {
            if calls.len() >= fail_from {
                return Err(RemoteError::Http {
                    status: 500,
                    body: "boom".to_string(),
                });
            }
        }
        calls.push((kind, attributes));
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        Ok(CreatedRecord {
            id: id.to_string(),
            assigned: serde_json::Map::new(),
        })
    }
}

static TRACING: Once = Once::new();

pub fn init_tracing() {
    TRACING.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}
