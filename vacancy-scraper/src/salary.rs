/// Salary fields of a vacancy as reported by a job board.
/// Bounds that are missing, null or not positive carry no information.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalaryRange {
    pub from: Option<f64>,
    pub to: Option<f64>,
    pub currency: Option<String>,
}

/// Implemented by every provider-specific vacancy type.
pub trait Vacancy {
    /// `None` when the vacancy has no salary block at all.
    fn salary(&self) -> Option<SalaryRange>;
}

fn positive(bound: Option<f64>) -> Option<f64> {
    bound.filter(|value| *value > 0.0)
}

/// Point estimate from salary bounds.
///
/// With both bounds the estimate is `from + to / 2`, which is not the
/// arithmetic mean of the range. A single upper bound is discounted by 20%,
/// a single lower bound is raised by 20%.
pub fn predict_salary(from: Option<f64>, to: Option<f64>) -> Option<f64> {
    match (positive(from), positive(to)) {
        (Some(from), Some(to)) => Some(from + to / 2.0),
        (None, Some(to)) => Some(to * 0.8),
        (Some(from), None) => Some(from * 1.2),
        (None, None) => None,
    }
}

/// Estimate a vacancy salary, only for vacancies paid in `currency`.
pub fn predict_local_salary<V: Vacancy + ?Sized>(vacancy: &V, currency: &str) -> Option<f64> {
    let salary = vacancy.salary()?;
    if salary.currency.as_deref() != Some(currency) {
        return None;
    }
    predict_salary(salary.from, salary.to)
}
