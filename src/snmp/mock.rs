use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use super::{RawValue, SnmpTransport};
use crate::error::Result;

/// Один вызов транспорта, записанный моком
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub target: String,
    pub community: String,
    pub oid: String,
    pub timeout_micros: u64,
}

/// Транспорт для тестов: отвечает из словарей и запоминает каждый вызов.
/// OID, которых нет в словаре, ведут себя как неудачный запрос.
#[derive(Default)]
pub struct MockTransport {
    scalars: HashMap<String, RawValue>,
    tables: HashMap<String, Vec<Option<RawValue>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scalar(mut self, oid: &str, value: impl Into<RawValue>) -> Self {
        self.scalars.insert(oid.to_string(), value.into());
        self
    }

    pub fn with_table(mut self, oid: &str, rows: Vec<RawValue>) -> Self {
        self.tables
            .insert(oid.to_string(), rows.into_iter().map(Some).collect());
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn oids_called(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.oid).collect()
    }

    fn record(&self, target: &str, community: &str, oid: &str, timeout_micros: u64) {
        self.calls.lock().unwrap().push(RecordedCall {
            target: target.to_string(),
            community: community.to_string(),
            oid: oid.to_string(),
            timeout_micros,
        });
    }
}

#[async_trait]
impl SnmpTransport for MockTransport {
    async fn get(
        &self,
        target: &str,
        community: &str,
        oid: &str,
        timeout_micros: u64,
    ) -> Result<Option<RawValue>> {
        self.record(target, community, oid, timeout_micros);
        Ok(self.scalars.get(oid).cloned())
    }

    async fn walk(
        &self,
        target: &str,
        community: &str,
        oid: &str,
        timeout_micros: u64,
    ) -> Result<Option<Vec<Option<RawValue>>>> {
        self.record(target, community, oid, timeout_micros);
        Ok(self.tables.get(oid).cloned())
    }
}
