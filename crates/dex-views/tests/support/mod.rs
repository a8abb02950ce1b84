//! In-memory data store that records every call.

#![allow(dead_code)]

use std::collections::{HashSet, VecDeque};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use dex_client::GatewayError;
use dex_core::{AuditLogEntry, BaseStats, Entry, EntryName, NewEntry};
use dex_lock::MemoryLockStore;
use dex_views::{CatalogGateway, Session};

pub type FakeSession = Session<FakeGateway, MemoryLockStore>;

pub fn session(gateway: FakeGateway) -> FakeSession {
    Session::new(gateway, MemoryLockStore::new())
}

pub fn stats(value: u16) -> BaseStats {
    BaseStats {
        hp: value,
        attack: value,
        defense: value,
        sp_attack: value,
        sp_defense: value,
        speed: value,
    }
}

pub fn entry(english: &str, french: &str) -> Entry {
    Entry {
        record_id: None,
        id: None,
        name: EntryName {
            english: english.into(),
            french: french.into(),
        },
        types: vec!["Normal".into()],
        base: stats(50),
        image: None,
        integrity_hash: None,
    }
}

pub fn audit(event: &str) -> AuditLogEntry {
    AuditLogEntry {
        event: Some(event.into()),
        status_code: Some(200),
        action: None,
        timestamp: None,
        extra: Default::default(),
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Default)]
pub struct FakeGateway {
    entries: Mutex<Vec<Entry>>,
    audit: Mutex<Vec<AuditLogEntry>>,
    calls: Mutex<Vec<String>>,
    failing: Mutex<HashSet<&'static str>>,
    list_all_delays: Mutex<VecDeque<Duration>>,
    echo_updates: bool,
    ignore_audit_limit: bool,
}

impl FakeGateway {
    pub fn with_entries(entries: Vec<Entry>) -> Self {
        Self {
            entries: Mutex::new(entries),
            echo_updates: true,
            ..Self::default()
        }
    }

    /// Answer updates with an empty body instead of the updated entry.
    pub fn silent_updates(mut self) -> Self {
        self.echo_updates = false;
        self
    }

    /// Return the whole audit trail regardless of the requested limit.
    pub fn ignore_audit_limit(mut self) -> Self {
        self.ignore_audit_limit = true;
        self
    }

    pub fn with_audit(self, records: Vec<AuditLogEntry>) -> Self {
        *lock(&self.audit) = records;
        self
    }

    /// Make every call to `operation` fail with a 500.
    pub fn fail(&self, operation: &'static str) {
        lock(&self.failing).insert(operation);
    }

    /// Delay successive `list_all` responses by these durations.
    pub fn delay_list_all(&self, delays: impl IntoIterator<Item = Duration>) {
        lock(&self.list_all_delays).extend(delays);
    }

    pub fn calls(&self) -> Vec<String> {
        lock(&self.calls).clone()
    }

    pub fn count(&self, operation: &str) -> usize {
        lock(&self.calls)
            .iter()
            .filter(|call| call.split(' ').next() == Some(operation))
            .count()
    }

    pub fn entries(&self) -> Vec<Entry> {
        lock(&self.entries).clone()
    }

    pub fn push_audit(&self, record: AuditLogEntry) {
        lock(&self.audit).insert(0, record);
    }

    fn record(&self, operation: &'static str, detail: &str) -> Result<(), GatewayError> {
        let call = if detail.is_empty() {
            operation.to_string()
        } else {
            format!("{operation} {detail}")
        };
        lock(&self.calls).push(call);
        if lock(&self.failing).contains(operation) {
            return Err(GatewayError::Request {
                status: 500,
                message: format!("{operation} failed"),
            });
        }
        Ok(())
    }

    fn find(&self, name: &str) -> Option<Entry> {
        lock(&self.entries)
            .iter()
            .find(|entry| entry.name.english.eq_ignore_ascii_case(name))
            .cloned()
    }
}

impl CatalogGateway for FakeGateway {
    async fn list_page(&self, page: u32) -> Result<Vec<Entry>, GatewayError> {
        self.record("list_page", &page.to_string())?;
        let start = page as usize * 10;
        Ok(self.entries().into_iter().skip(start).take(10).collect())
    }

    async fn list_all(&self) -> Result<Vec<Entry>, GatewayError> {
        self.record("list_all", "")?;
        let delay = lock(&self.list_all_delays).pop_front();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        Ok(self.entries())
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Entry>, GatewayError> {
        self.record("get_by_name", name)?;
        Ok(self.find(name))
    }

    async fn audit_logs(
        &self,
        name: &str,
        limit: u32,
    ) -> Result<Vec<AuditLogEntry>, GatewayError> {
        self.record("audit_logs", &format!("{name} {limit}"))?;
        let take = if self.ignore_audit_limit {
            usize::MAX
        } else {
            limit as usize
        };
        Ok(lock(&self.audit).iter().take(take).cloned().collect())
    }

    async fn create(&self, entry: &NewEntry) -> Result<Option<Entry>, GatewayError> {
        self.record("create", &entry.name.english)?;
        let created = Entry {
            record_id: None,
            id: None,
            name: entry.name.clone(),
            types: entry.types.clone(),
            base: entry.base,
            image: Some(entry.image.clone()),
            integrity_hash: entry.integrity_hash.clone(),
        };
        lock(&self.entries).push(created.clone());
        Ok(Some(created))
    }

    async fn update_stats(
        &self,
        name: &str,
        stats: &BaseStats,
    ) -> Result<Option<Entry>, GatewayError> {
        self.record("update_stats", name)?;
        let mut entries = lock(&self.entries);
        let Some(entry) = entries
            .iter_mut()
            .find(|entry| entry.name.english.eq_ignore_ascii_case(name))
        else {
            return Err(GatewayError::Request {
                status: 404,
                message: "HTTP 404".into(),
            });
        };
        entry.base = *stats;
        let updated = entry.clone();
        drop(entries);
        self.push_audit(audit("update"));
        Ok(self.echo_updates.then_some(updated))
    }

    async fn delete(&self, name: &str) -> Result<(), GatewayError> {
        self.record("delete", name)?;
        lock(&self.entries).retain(|entry| !entry.name.english.eq_ignore_ascii_case(name));
        Ok(())
    }

    async fn purge(&self) -> Result<(), GatewayError> {
        self.record("purge", "")?;
        lock(&self.entries).clear();
        Ok(())
    }
}
