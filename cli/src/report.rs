use comfy_table::{presets::ASCII_FULL, Table};
use vacancy_scraper::LanguageStat;

const HEADER: [&str; 4] = [
    "Programming language",
    "Vacancies found",
    "Vacancies processed",
    "Average salary",
];

fn salary_rows(stats: &[(String, LanguageStat)]) -> Table {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL).set_header(HEADER);
    for (language, stat) in stats {
        table.add_row(vec![
            language.clone(),
            stat.vacancies_found.to_string(),
            stat.vacancies_processed.to_string(),
            stat.average_salary.to_string(),
        ]);
    }
    table
}

/// Render the statistics of one job board as a titled text table.
pub fn salary_table(stats: &[(String, LanguageStat)], title: &str) -> String {
    format!("{}\n{}", title, salary_rows(stats))
}
