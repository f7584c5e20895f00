pub mod types;

use async_trait::async_trait;
use reqwest::Client;

use crate::api::{Error, Result};
use crate::pagination::{Cursor, JobSource, Page};
use types::{ApiResponse, Job};

pub const DEFAULT_BASE_URL: &str = "https://api.hh.ru";
pub const DEFAULT_TEXT_PREFIX: &str = "программист";

/// hh.ru vacancy search. Results are paged by page index, the first response
/// reports the total number of pages.
#[derive(Debug, Clone)]
pub struct HeadHunter {
    pub base_url: String,
    /// Prepended to the language keyword in the search text.
    pub text_prefix: String,
    pub per_page: u32,
    /// Region filter, all regions when unset.
    pub area: Option<u32>,
}

impl Default for HeadHunter {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            text_prefix: DEFAULT_TEXT_PREFIX.to_owned(),
            per_page: 100,
            area: None,
        }
    }
}

impl HeadHunter {
    fn search_text(&self, keyword: &str) -> String {
        if self.text_prefix.is_empty() {
            keyword.to_owned()
        } else {
            format!("{} {}", self.text_prefix, keyword)
        }
    }

    fn query(&self, keyword: &str, page: u32) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("text", self.search_text(keyword)),
            ("per_page", self.per_page.to_string()),
            ("page", page.to_string()),
        ];
        if let Some(area) = self.area {
            query.push(("area", area.to_string()));
        }
        query
    }
}

#[async_trait]
impl JobSource for HeadHunter {
    type Vacancy = Job;

    fn name(&self) -> &str {
        "HeadHunter"
    }

    fn currency(&self) -> &str {
        "RUR"
    }

    async fn fetch_page(&self, client: &Client, keyword: &str, page: u32) -> Result<Page<Job>> {
        let url = format!("{}/vacancies", self.base_url.trim_end_matches('/'));
        let resp = client
            .get(&url)
            .query(&self.query(keyword, page))
            .header("Accept", "application/json")
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let error_body = resp.text().await;
            log::error!(
                "failed to retrieve vacancies for page: {}, keyword: {}, error resp body: {:?}",
                page,
                keyword,
                error_body,
            );
            return Err(Error::RequestNotOk { url, status });
        }
        let search: ApiResponse = resp.json().await?;
        Ok(Page {
            vacancies: search.items,
            found: search.found,
            cursor: Cursor::Pages(search.pages),
        })
    }
}
