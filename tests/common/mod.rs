//! Scripted in-memory store shared by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use staffdesk::domain::{Criteria, Employee, EmployeeRow, EmployeeStatus, Result};
use staffdesk::store::{EmployeeStore, RequestContext};
use staffdesk::{ConsoleError, Locale};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// One recorded store call, with the locale it was sent under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Search(Criteria),
    Detail(String),
    Create(Employee),
    Update(Employee),
    Delete(Vec<String>),
}

#[derive(Default)]
struct Script {
    searches: VecDeque<Result<Vec<EmployeeRow>>>,
    details: VecDeque<Result<Employee>>,
    writes: VecDeque<Result<()>>,
    calls: Vec<(Call, Locale)>,
}

/// Store answering from queued responses.
///
/// Empty queues answer with an empty row set, a `NotFound`, or success. Every
/// call first waits for the configured latency.
#[derive(Clone, Default)]
pub struct ScriptedStore {
    script: Arc<Mutex<Script>>,
    latency: Duration,
}

impl ScriptedStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self {
            latency,
            ..Self::default()
        }
    }

    pub fn shared(&self) -> Arc<dyn EmployeeStore> {
        Arc::new(self.clone())
    }

    pub fn push_search(&self, result: Result<Vec<EmployeeRow>>) {
        self.script.lock().unwrap().searches.push_back(result);
    }

    pub fn push_detail(&self, result: Result<Employee>) {
        self.script.lock().unwrap().details.push_back(result);
    }

    pub fn push_write(&self, result: Result<()>) {
        self.script.lock().unwrap().writes.push_back(result);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.script
            .lock()
            .unwrap()
            .calls
            .iter()
            .map(|(call, _)| call.clone())
            .collect()
    }

    pub fn locales(&self) -> Vec<Locale> {
        self.script
            .lock()
            .unwrap()
            .calls
            .iter()
            .map(|(_, locale)| *locale)
            .collect()
    }

    async fn record(&self, ctx: &RequestContext, call: Call) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        self.script.lock().unwrap().calls.push((call, ctx.locale));
    }
}

#[async_trait]
impl EmployeeStore for ScriptedStore {
    async fn search(&self, ctx: &RequestContext, criteria: &Criteria) -> Result<Vec<EmployeeRow>> {
        self.record(ctx, Call::Search(criteria.clone())).await;
        self.script
            .lock()
            .unwrap()
            .searches
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn fetch_detail(&self, ctx: &RequestContext, id: &str) -> Result<Employee> {
        self.record(ctx, Call::Detail(id.to_string())).await;
        self.script
            .lock()
            .unwrap()
            .details
            .pop_front()
            .unwrap_or_else(|| Err(ConsoleError::NotFound(id.to_string())))
    }

    async fn create(&self, ctx: &RequestContext, record: &Employee) -> Result<()> {
        self.record(ctx, Call::Create(record.clone())).await;
        self.script.lock().unwrap().writes.pop_front().unwrap_or(Ok(()))
    }

    async fn update(&self, ctx: &RequestContext, record: &Employee) -> Result<()> {
        self.record(ctx, Call::Update(record.clone())).await;
        self.script.lock().unwrap().writes.pop_front().unwrap_or(Ok(()))
    }

    async fn delete_batch(&self, ctx: &RequestContext, ids: &[String]) -> Result<()> {
        self.record(ctx, Call::Delete(ids.to_vec())).await;
        self.script.lock().unwrap().writes.pop_front().unwrap_or(Ok(()))
    }
}

pub fn row(id: &str, department_id: &str) -> EmployeeRow {
    EmployeeRow {
        id: id.to_string(),
        name: format!("Employee {id}"),
        start_date: NaiveDate::from_ymd_opt(2023, 4, 1),
        status: Some(EmployeeStatus::Active),
        department_id: department_id.to_string(),
    }
}

pub fn rows(ids: &[&str]) -> Vec<EmployeeRow> {
    ids.iter().map(|id| row(id, "D001")).collect()
}

pub fn record(id: &str) -> Employee {
    Employee {
        id: id.to_string(),
        name: format!("Employee {id}"),
        department_id: "D002".to_string(),
        phone: "0912345678".to_string(),
        status: Some(EmployeeStatus::Active),
        modified_by: Some("admin".to_string()),
        modified_at: Some("2024-01-02 10:00:00".to_string()),
        ..Employee::default()
    }
}

pub fn store_error(message: &str) -> ConsoleError {
    ConsoleError::Store {
        status: 500,
        message: Some(message.to_string()),
    }
}
