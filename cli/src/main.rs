mod config;
mod report;
mod scrape;

use clap::Parser;
use dotenv::dotenv;
use reqwest::Client;

use crate::config::Cli;
use crate::scrape::scrape;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[tokio::main]
async fn main() -> Result<(), vacancy_scraper::Error> {
    dotenv().ok();
    env_logger::init();
    let args = Cli::parse();
    // hh.ru rejects requests without a User-Agent
    let client = Client::builder().user_agent(USER_AGENT).build()?;
    for site in args.sites() {
        let table = scrape(site, &args, &client).await?;
        println!("{}", table);
    }
    Ok(())
}
