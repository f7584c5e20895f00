pub mod types;

use async_trait::async_trait;
use reqwest::Client;

use crate::api::{Error, Result};
use crate::pagination::{Cursor, JobSource, Page};
use types::{ApiResponse, Job};

pub const DEFAULT_BASE_URL: &str = "https://api.superjob.ru";
const APP_ID_HEADER: &str = "X-Api-App-Id";

/// superjob.ru vacancy search. Every page says whether more results follow.
#[derive(Debug, Clone)]
pub struct SuperJob {
    pub base_url: String,
    /// Sent as `X-Api-App-Id`. Without it the API rejects the request.
    pub token: Option<String>,
    pub town: u32,
    pub catalogue: u32,
    pub per_page: u32,
}

impl Default for SuperJob {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            token: None,
            // Moscow
            town: 4,
            // Development, programming
            catalogue: 48,
            per_page: 100,
        }
    }
}

#[async_trait]
impl JobSource for SuperJob {
    type Vacancy = Job;

    fn name(&self) -> &str {
        "SuperJob"
    }

    fn currency(&self) -> &str {
        "rub"
    }

    async fn fetch_page(&self, client: &Client, keyword: &str, page: u32) -> Result<Page<Job>> {
        let url = format!("{}/2.0/vacancies/", self.base_url.trim_end_matches('/'));
        let mut request = client.get(&url).query(&[
            ("keyword", keyword.to_owned()),
            ("town", self.town.to_string()),
            ("catalogues", self.catalogue.to_string()),
            ("count", self.per_page.to_string()),
            ("page", page.to_string()),
        ]);
        if let Some(token) = &self.token {
            request = request.header(APP_ID_HEADER, token);
        }
        let resp = request.send().await?;
        let status = resp.status();
        if !status.is_success() {
            log::error!(
                "Request not successful, status code: {}, body: {}",
                status,
                resp.text().await.unwrap_or("empty".to_owned())
            );
            return Err(Error::RequestNotOk { url, status });
        }
        let search: ApiResponse = resp.json().await?;
        Ok(Page {
            vacancies: search.objects,
            found: search.total,
            cursor: Cursor::More(search.more),
        })
    }
}
