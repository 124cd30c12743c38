//! HTTP client for the remote employee store.

use super::backend::{EmployeeStore, RequestContext};
use super::models::{DataEnvelope, DeleteKey, ErrorBody};
use crate::domain::{ConsoleError, Criteria, Employee, EmployeeRow, Result};
use async_trait::async_trait;
use reqwest::header::ACCEPT_LANGUAGE;
use reqwest::{Client, RequestBuilder, Response};
use std::time::Duration;

const SEARCH: &str = "search";
const DETAIL: &str = "detail";
const CREATE: &str = "create";
const UPDATE: &str = "update";
const DELETE_BATCH: &str = "deleteBatch";

/// JSON-over-HTTP implementation of [`EmployeeStore`].
///
/// Endpoints are resolved relative to the configured base URL
/// (`{base}/search`, `{base}/detail`, ...). Every request carries the session
/// locale as `Accept-Language`.
#[derive(Debug, Clone)]
pub struct HttpStore {
    client: Client,
    base_url: String,
}

impl HttpStore {
    /// Creates a store client for `base_url` with a request timeout in seconds.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the underlying HTTP client cannot be built
    /// (for example when the TLS backend fails to initialize).
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.base_url.trim_end_matches('/'))
    }

    async fn send(&self, ctx: &RequestContext, request: RequestBuilder) -> Result<Response> {
        let response = request
            .header(ACCEPT_LANGUAGE, ctx.locale.tag())
            .send()
            .await?;
        Self::check_status(response).await
    }

    /// Converts non-2xx responses into [`ConsoleError::Store`].
    ///
    /// The body is parsed as `{ "message" }` when possible; anything else
    /// (empty body, HTML error page) leaves the message absent.
    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.message);

        tracing::debug!(status = status.as_u16(), message = ?message, "store returned an error status");

        Err(ConsoleError::Store {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl EmployeeStore for HttpStore {
    async fn search(&self, ctx: &RequestContext, criteria: &Criteria) -> Result<Vec<EmployeeRow>> {
        let query = criteria.query_pairs();
        tracing::debug!(params = ?query, "searching store");

        let request = self.client.get(self.url(SEARCH)).query(&query);
        let envelope: DataEnvelope<Vec<EmployeeRow>> = self.send(ctx, request).await?.json().await?;
        let rows = envelope.datas.unwrap_or_default();

        tracing::debug!(row_count = rows.len(), "search completed");
        Ok(rows)
    }

    async fn fetch_detail(&self, ctx: &RequestContext, id: &str) -> Result<Employee> {
        let request = self.client.get(self.url(DETAIL)).query(&[("employeeId", id)]);
        let envelope: DataEnvelope<Employee> = self.send(ctx, request).await?.json().await?;

        envelope.datas.ok_or_else(|| {
            tracing::debug!(employee_id = %id, "detail response carried no record");
            ConsoleError::NotFound(id.to_string())
        })
    }

    async fn create(&self, ctx: &RequestContext, record: &Employee) -> Result<()> {
        let request = self.client.post(self.url(CREATE)).json(record);
        self.send(ctx, request).await?;
        tracing::debug!(employee_id = %record.id, "employee created");
        Ok(())
    }

    async fn update(&self, ctx: &RequestContext, record: &Employee) -> Result<()> {
        let request = self.client.put(self.url(UPDATE)).json(record);
        self.send(ctx, request).await?;
        tracing::debug!(employee_id = %record.id, "employee updated");
        Ok(())
    }

    async fn delete_batch(&self, ctx: &RequestContext, ids: &[String]) -> Result<()> {
        let body: Vec<DeleteKey> = ids.iter().map(DeleteKey::new).collect();
        let request = self.client.delete(self.url(DELETE_BATCH)).json(&body);
        self.send(ctx, request).await?;
        tracing::debug!(count = ids.len(), "employees deleted");
        Ok(())
    }
}
