use rust_decimal::Decimal;

use crate::models::Category;

use super::Tracker;

/// Fixed divisor for the per-day average. An approximation of a month, not
/// a calendar computation.
const DAYS_PER_MONTH: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

const HUNDRED: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Derived aggregates. Each is a pure function of the current ledger and
/// budget state, recomputed on every read; the data volumes here never
/// warrant caching or incremental maintenance.
impl Tracker {
    /// Sum of every recorded amount, regardless of the active filter.
    pub fn total_spent(&self) -> Decimal {
        self.transactions.iter().map(|t| t.amount).sum()
    }

    /// May be negative when spending exceeds the budget; not clamped.
    pub fn remaining(&self) -> Decimal {
        self.overall_budget - self.total_spent()
    }

    /// Share of the overall budget spent, one decimal place. Zero when no
    /// budget has been set, so the display never divides by zero.
    pub fn spent_percentage(&self) -> Decimal {
        if self.overall_budget > Decimal::ZERO {
            (self.total_spent() / self.overall_budget * HUNDRED).round_dp(1)
        } else {
            Decimal::ZERO
        }
    }

    /// Average spend per day over a fixed 30-day month, two decimal places.
    /// Zero while the ledger is empty.
    pub fn avg_per_day(&self) -> Decimal {
        if self.transactions.is_empty() {
            Decimal::ZERO
        } else {
            (self.total_spent() / DAYS_PER_MONTH).round_dp(2)
        }
    }

    pub fn category_spent(&self, category: Category) -> Decimal {
        self.transactions
            .iter()
            .filter(|t| t.category == category)
            .map(|t| t.amount)
            .sum()
    }

    /// Share of one category's sub-budget spent. Zero when that category has
    /// no budget. Unrounded; the sidebar renders it with 0 decimal places.
    pub fn category_percentage(&self, category: Category) -> Decimal {
        let budget = self.category_budget(category);
        if budget > Decimal::ZERO {
            self.category_spent(category) / budget * HUNDRED
        } else {
            Decimal::ZERO
        }
    }
}
