pub mod api;
pub mod hh;
pub mod pagination;
pub mod salary;
pub mod stats;
pub mod superjob;

pub use api::{Error, Result};
pub use pagination::{paginate, Cursor, JobSource, Page};
pub use stats::{collect_stats, language_stat, LanguageStat, LanguageStats};
