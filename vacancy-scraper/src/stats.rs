use futures::StreamExt;
use reqwest::Client;

use crate::api::Result;
use crate::pagination::{paginate, JobSource};
use crate::salary::predict_local_salary;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LanguageStat {
    pub vacancies_found: u64,
    pub vacancies_processed: u64,
    pub average_salary: u64,
}

/// Statistics per language, in the order the languages were requested.
pub type LanguageStats = Vec<(String, LanguageStat)>;

/// Running sum and count of salary estimates for one language.
#[derive(Debug, Clone, Copy, Default)]
pub struct SalaryAggregate {
    total: f64,
    processed: u64,
}

impl SalaryAggregate {
    /// Vacancies without an estimate are skipped.
    pub fn record(&mut self, salary: Option<f64>) {
        if let Some(salary) = salary {
            self.total += salary;
            self.processed += 1;
        }
    }

    pub fn processed(&self) -> u64 {
        self.processed
    }

    /// Truncated mean, 0 when nothing was processed.
    pub fn average(&self) -> u64 {
        if self.processed == 0 {
            return 0;
        }
        (self.total / self.processed as f64) as u64
    }

    pub fn into_stat(self, vacancies_found: u64) -> LanguageStat {
        LanguageStat {
            vacancies_found,
            vacancies_processed: self.processed,
            average_salary: self.average(),
        }
    }
}

impl Extend<Option<f64>> for SalaryAggregate {
    fn extend<I: IntoIterator<Item = Option<f64>>>(&mut self, salaries: I) {
        salaries.into_iter().for_each(|salary| self.record(salary));
    }
}

/// Page through every vacancy matching `language` and aggregate the
/// salaries paid in the board's local currency.
pub async fn language_stat<S>(source: &S, client: &Client, language: &str) -> Result<LanguageStat>
where
    S: JobSource + ?Sized,
{
    let pages = paginate(source, client, language);
    futures::pin_mut!(pages);
    let mut aggregate = SalaryAggregate::default();
    let mut found = 0;
    while let Some(page) = pages.next().await {
        let page = page?;
        found = page.found;
        aggregate.extend(
            page.vacancies
                .iter()
                .map(|vacancy| predict_local_salary(vacancy, source.currency())),
        );
    }
    let stat = aggregate.into_stat(found);
    log::info!(
        "{} {}: found {}, processed {}, average salary {}",
        source.name(),
        language,
        stat.vacancies_found,
        stat.vacancies_processed,
        stat.average_salary
    );
    Ok(stat)
}

/// Collect statistics for each language, one after another.
pub async fn collect_stats<S, L>(source: &S, client: &Client, languages: L) -> Result<LanguageStats>
where
    S: JobSource + ?Sized,
    L: IntoIterator,
    L::Item: AsRef<str>,
{
    let mut stats = Vec::new();
    for language in languages {
        let language = language.as_ref();
        let stat = language_stat(source, client, language).await?;
        stats.push((language.to_owned(), stat));
    }
    Ok(stats)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_empty_aggregate() {
        let aggregate = SalaryAggregate::default();
        assert_eq!(aggregate.into_stat(12), LanguageStat {
            vacancies_found: 12,
            vacancies_processed: 0,
            average_salary: 0,
        });
    }

    #[test]
    fn test_missing_estimates_are_skipped() {
        let mut aggregate = SalaryAggregate::default();
        aggregate.extend([None, Some(100.0), None, Some(201.0)]);
        assert_eq!(aggregate.processed(), 2);
        // 150.5 truncates
        assert_eq!(aggregate.average(), 150);
    }

    #[test]
    fn test_order_does_not_matter() {
        let salaries = [Some(120_000.0), None, Some(95_500.5), Some(210_000.0), Some(80_000.0)];
        let mut forward = SalaryAggregate::default();
        forward.extend(salaries);
        let mut backward = SalaryAggregate::default();
        backward.extend(salaries.into_iter().rev());
        assert_eq!(forward.processed(), backward.processed());
        assert_eq!(forward.average(), backward.average());
    }

    #[test]
    fn test_pages_accumulate() {
        let mut aggregate = SalaryAggregate::default();
        aggregate.extend([Some(200.0), Some(240.0)]);
        aggregate.extend([None]);
        aggregate.extend([Some(100.0)]);
        assert_eq!(aggregate.into_stat(5), LanguageStat {
            vacancies_found: 5,
            vacancies_processed: 3,
            average_salary: 180,
        });
    }
}
