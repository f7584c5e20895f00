use clap::{Parser, ValueEnum};
use vacancy_scraper::{hh, hh::HeadHunter, superjob, superjob::SuperJob};

pub const DEFAULT_LANGUAGES: [&str; 11] = [
    "JavaScript",
    "Java",
    "Python",
    "Ruby",
    "PHP",
    "C++",
    "C#",
    "1С",
    "Kotlin",
    "Swift",
    "Go",
];

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    #[value(name = "hh")]
    HeadHunter,
    #[value(name = "superjob")]
    SuperJob,
}

impl Target {
    pub fn title(&self) -> &'static str {
        match self {
            Target::HeadHunter => "HeadHunter salary statistics",
            Target::SuperJob => "SuperJob salary statistics",
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// List of job-providers to collect statistics from, all of them when omitted
    #[arg(long, value_enum)]
    pub site: Vec<Target>,

    /// Programming languages to search for, the built-in list when omitted
    #[arg(long = "language")]
    pub languages: Vec<String>,

    /// Vacancies requested per page
    #[arg(long, env = "PER_PAGE", default_value_t = 100)]
    pub per_page: u32,

    #[arg(long, env = "HH_API_URL", default_value = hh::DEFAULT_BASE_URL)]
    pub hh_url: String,

    /// Words put in front of the language in the hh.ru search text
    #[arg(long, env = "HH_TEXT_PREFIX", default_value = hh::DEFAULT_TEXT_PREFIX)]
    pub hh_text_prefix: String,

    /// hh.ru region id
    #[arg(long, env = "HH_AREA")]
    pub hh_area: Option<u32>,

    #[arg(long, env = "SUPERJOB_API_URL", default_value = superjob::DEFAULT_BASE_URL)]
    pub superjob_url: String,

    /// superjob.ru application secret key
    #[arg(long, env = "SUPERJOB_TOKEN", hide_env_values = true)]
    pub superjob_token: Option<String>,

    /// superjob.ru town id
    #[arg(long, env = "SUPERJOB_TOWN", default_value_t = 4)]
    pub superjob_town: u32,

    /// superjob.ru catalogue id
    #[arg(long, env = "SUPERJOB_CATALOGUE", default_value_t = 48)]
    pub superjob_catalogue: u32,
}

impl Cli {
    pub fn sites(&self) -> Vec<Target> {
        if self.site.is_empty() {
            vec![Target::HeadHunter, Target::SuperJob]
        } else {
            self.site.clone()
        }
    }

    pub fn languages(&self) -> Vec<String> {
        if self.languages.is_empty() {
            DEFAULT_LANGUAGES.into_iter().map(String::from).collect()
        } else {
            self.languages.clone()
        }
    }

    pub fn head_hunter(&self) -> HeadHunter {
        HeadHunter {
            base_url: self.hh_url.clone(),
            text_prefix: self.hh_text_prefix.clone(),
            per_page: self.per_page,
            area: self.hh_area,
        }
    }

    pub fn super_job(&self) -> SuperJob {
        SuperJob {
            base_url: self.superjob_url.clone(),
            token: self.superjob_token.clone(),
            town: self.superjob_town,
            catalogue: self.superjob_catalogue,
            per_page: self.per_page,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Cli::try_parse_from(["salary-stats"]).expect("Failed to parse args");
        assert_eq!(args.sites(), [Target::HeadHunter, Target::SuperJob]);
        assert_eq!(args.languages().len(), DEFAULT_LANGUAGES.len());
        assert_eq!(args.languages()[0], "JavaScript");
    }

    #[test]
    fn test_explicit_sites_and_languages() {
        let args = Cli::try_parse_from([
            "salary-stats",
            "--site",
            "superjob",
            "--language",
            "Rust",
            "--language",
            "Go",
            "--superjob-town",
            "1",
            "--per-page",
            "20",
        ])
        .expect("Failed to parse args");
        assert_eq!(args.sites(), [Target::SuperJob]);
        assert_eq!(args.languages(), ["Rust", "Go"]);
        let sj = args.super_job();
        assert_eq!(sj.town, 1);
        assert_eq!(sj.per_page, 20);
        assert_eq!(args.head_hunter().per_page, 20);
    }

    #[test]
    fn test_unknown_site() {
        assert!(Cli::try_parse_from(["salary-stats", "--site", "xing"]).is_err());
    }
}
