use serde::Deserialize;

use crate::salary::{SalaryRange, Vacancy};

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Salary {
    pub from: Option<f64>,
    pub to: Option<f64>,
    pub currency: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Job {
    #[serde(default)]
    pub salary: Option<Salary>,
}

impl Vacancy for Job {
    fn salary(&self) -> Option<SalaryRange> {
        self.salary.as_ref().map(|salary| SalaryRange {
            from: salary.from,
            to: salary.to,
            currency: salary.currency.clone(),
        })
    }
}

#[derive(Deserialize, Debug)]
pub(crate) struct ApiResponse {
    pub items: Vec<Job>,
    pub found: u64,
    pub pages: u32,
}
