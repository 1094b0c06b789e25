use chrono::{DateTime, Local, NaiveDate};
use rust_decimal::Decimal;

use super::Category;

/// A single recorded expense. Never mutated after creation; removed only by
/// explicit deletion. `id` is unique across the ledger's lifetime and
/// `created_at` is the creation instant used by the Newest/Oldest orderings
/// (`date` is the user-entered calendar date, which may differ).
#[derive(Debug, Clone)]
pub struct Transaction {
    pub id: u64,
    pub description: String,
    pub amount: Decimal,
    pub category: Category,
    pub date: NaiveDate,
    pub created_at: DateTime<Local>,
}
