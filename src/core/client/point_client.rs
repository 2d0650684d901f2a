use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use thiserror::Error;

use crate::core::persistence::point::point_entity::Point;
use crate::domain::point::dto::page_request::PageRequest;
use crate::domain::point::dto::point_page::PointPage;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Point API returned {status}")]
    Status {
        status: StatusCode,
        /// Value of the `X-<app>-error` header, e.g. `error.idexists`.
        error_key: Option<String>,
    },

    #[error("Point has no id")]
    MissingId,
}

/// Entity service the view controllers talk to.
#[async_trait]
pub trait PointApi: Send + Sync {
    async fn find(&self, id: i64) -> Result<Point>;

    async fn retrieve(&self, page: &PageRequest) -> Result<PointPage>;

    async fn search(&self, query: &str, page: &PageRequest) -> Result<PointPage>;

    async fn create(&self, point: &Point) -> Result<Point>;

    async fn update(&self, point: &Point) -> Result<Point>;

    async fn partial_update(&self, point: &Point) -> Result<Point>;

    async fn delete(&self, id: i64) -> Result<()>;
}

/// `reqwest` implementation against the `/api/points` resource.
#[derive(Clone)]
pub struct RestPointClient {
    client: Client,
    base_url: String,
    app_name: String,
}

impl RestPointClient {
    pub fn new(client: Client, base_url: &str, app_name: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            app_name: app_name.to_string(),
        }
    }

    fn points_url(&self) -> String {
        format!("{}/api/points", self.base_url)
    }

    fn point_url(&self, id: i64) -> String {
        format!("{}/api/points/{}", self.base_url, id)
    }

    fn check(&self, resp: Response) -> Result<Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let error_key = resp
            .headers()
            .get(format!("x-{}-error", self.app_name.to_ascii_lowercase()))
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        Err(ClientError::Status { status, error_key }.into())
    }

    async fn read_page(&self, resp: Response) -> Result<PointPage> {
        let resp = self.check(resp)?;
        let total_count = resp
            .headers()
            .get("x-total-count")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok());

        let items: Vec<Point> = resp.json().await?;
        let total_count = total_count.unwrap_or(items.len() as u64);
        Ok(PointPage { items, total_count })
    }
}

#[async_trait]
impl PointApi for RestPointClient {
    async fn find(&self, id: i64) -> Result<Point> {
        let resp = self.client.get(self.point_url(id)).send().await?;
        Ok(self.check(resp)?.json().await?)
    }

    async fn retrieve(&self, page: &PageRequest) -> Result<PointPage> {
        let resp = self
            .client
            .get(self.points_url())
            .query(&page.to_query())
            .send()
            .await?;
        self.read_page(resp).await
    }

    async fn search(&self, query: &str, page: &PageRequest) -> Result<PointPage> {
        let mut params = page.to_query();
        params.push(("query".to_string(), query.to_string()));

        let resp = self
            .client
            .get(format!("{}/api/_search/points", self.base_url))
            .query(&params)
            .send()
            .await?;
        self.read_page(resp).await
    }

    async fn create(&self, point: &Point) -> Result<Point> {
        let resp = self.client.post(self.points_url()).json(point).send().await?;
        Ok(self.check(resp)?.json().await?)
    }

    async fn update(&self, point: &Point) -> Result<Point> {
        let id = point.id.ok_or(ClientError::MissingId)?;
        let resp = self.client.put(self.point_url(id)).json(point).send().await?;
        Ok(self.check(resp)?.json().await?)
    }

    async fn partial_update(&self, point: &Point) -> Result<Point> {
        let id = point.id.ok_or(ClientError::MissingId)?;
        let body = serde_json::to_vec(point)?;
        let resp = self
            .client
            .patch(self.point_url(id))
            .header(http::header::CONTENT_TYPE, "application/merge-patch+json")
            .body(body)
            .send()
            .await?;
        Ok(self.check(resp)?.json().await?)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let resp = self.client.delete(self.point_url(id)).send().await?;
        self.check(resp)?;
        Ok(())
    }
}
