use serde::Deserialize;

use crate::salary::{SalaryRange, Vacancy};

/// SuperJob reports unknown salary bounds as `0`.
#[derive(Deserialize, Debug, Clone)]
pub struct Job {
    #[serde(default)]
    pub payment_from: Option<f64>,
    #[serde(default)]
    pub payment_to: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
}

impl Vacancy for Job {
    fn salary(&self) -> Option<SalaryRange> {
        Some(SalaryRange {
            from: self.payment_from,
            to: self.payment_to,
            currency: self.currency.clone(),
        })
    }
}

#[derive(Deserialize, Debug)]
pub(crate) struct ApiResponse {
    pub objects: Vec<Job>,
    pub total: u64,
    pub more: bool,
}
