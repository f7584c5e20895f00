use async_trait::async_trait;
use futures::Stream;
use reqwest::Client;

use crate::api::Result;
use crate::salary::Vacancy;

/// How a job board tells whether another page follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    /// Total number of pages for the search.
    Pages(u32),
    /// Explicit "more results" flag on every page.
    More(bool),
}

impl Cursor {
    pub fn has_next(&self, page: u32) -> bool {
        match *self {
            Cursor::Pages(total) => page.saturating_add(1) < total,
            Cursor::More(more) => more,
        }
    }
}

/// One page of search results.
#[derive(Debug)]
pub struct Page<V> {
    pub vacancies: Vec<V>,
    /// Total number of matching vacancies reported by the board.
    pub found: u64,
    pub cursor: Cursor,
}

#[async_trait]
pub trait JobSource: Sync {
    type Vacancy: Vacancy + Send;

    /// Human readable board name, used for logging.
    fn name(&self) -> &str;

    /// Currency marker the board uses for local salaries.
    fn currency(&self) -> &str;

    async fn fetch_page(
        &self,
        client: &Client,
        keyword: &str,
        page: u32,
    ) -> Result<Page<Self::Vacancy>>;
}

/// Walk the search results for `keyword` one page at a time until the
/// board reports no further pages. The first failed request ends the stream
/// with its error.
pub fn paginate<'a, S>(
    source: &'a S,
    client: &'a Client,
    keyword: &'a str,
) -> impl Stream<Item = Result<Page<S::Vacancy>>> + 'a
where
    S: JobSource + ?Sized,
{
    async_stream::try_stream! {
        let mut page = 0;
        loop {
            log::debug!(
                "requesting vacancies from {}, page: {}, keyword: {}",
                source.name(),
                page,
                keyword
            );
            let results = source.fetch_page(client, keyword, page).await?;
            let has_next = results.cursor.has_next(page);
            yield results;
            if !has_next {
                break;
            }
            page += 1;
        }
    }
}
