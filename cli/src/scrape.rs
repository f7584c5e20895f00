use reqwest::Client;
use vacancy_scraper::{collect_stats, Result};

use crate::config::{Cli, Target};
use crate::report::salary_table;

/// Collect the statistics of one job board and render them as a table.
pub async fn scrape(site: Target, args: &Cli, client: &Client) -> Result<String> {
    let languages = args.languages();
    log::info!("collecting {:?} statistics for {} languages", site, languages.len());
    let stats = match site {
        Target::HeadHunter => collect_stats(&args.head_hunter(), client, &languages).await?,
        Target::SuperJob => {
            if args.superjob_token.is_none() {
                log::warn!("SUPERJOB_TOKEN not set, superjob.ru will likely reject the requests");
            }
            collect_stats(&args.super_job(), client, &languages).await?
        }
    };
    Ok(salary_table(&stats, site.title()))
}
